//! Cost Tracker - usage monitoring for generation calls

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use super::pricing::PricingTable;
use super::record::{CallRecord, UsageSummary};
use super::report::format_report;
use crate::result::GenerationResult;

/// Records and running totals.
///
/// Kept in one struct so an append and its totals increment happen under a
/// single write-lock scope; the totals always equal the sums over the
/// records.
#[derive(Debug, Default)]
struct TrackerState {
    calls: Vec<CallRecord>,
    total_input_tokens: u64,
    total_output_tokens: u64,
    total_cost: f64,
}

/// Cost tracker for generation calls.
///
/// Consumes normalized generation results, accumulates token counts and a
/// running cost total under a pricing table, and reports aggregate or
/// per-call statistics. Lives for the session; explicitly resettable.
#[derive(Debug)]
pub struct CostTracker {
    pricing: PricingTable,
    state: RwLock<TrackerState>,
}

impl Default for CostTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl CostTracker {
    /// Create a new tracker with the default pricing table
    #[must_use]
    pub fn new() -> Self {
        Self::with_pricing(PricingTable::default())
    }

    /// Create a new tracker with a custom pricing table
    #[must_use]
    pub fn with_pricing(pricing: PricingTable) -> Self {
        Self {
            pricing,
            state: RwLock::new(TrackerState::default()),
        }
    }

    /// Account one generation result.
    ///
    /// Failed calls are a no-op: they consume no accounted tokens. The cost
    /// is computed once from the resolved pricing entry and stored on the
    /// record, never recomputed later from raw totals.
    pub async fn add_call(&self, result: &GenerationResult) {
        let GenerationResult::Completed(completion) = result else {
            debug!("skipping failed call for model {}", result.model());
            return;
        };

        let pricing = self.pricing.resolve(&completion.model);
        let cost = pricing.calculate_cost(
            completion.usage.input_tokens,
            completion.usage.output_tokens,
        );

        let record = CallRecord {
            model: completion.model.clone(),
            input_tokens: completion.usage.input_tokens,
            output_tokens: completion.usage.output_tokens,
            cost,
            timestamp: Utc::now(),
        };

        let mut state = self.state.write().await;
        state.total_input_tokens += u64::from(record.input_tokens);
        state.total_output_tokens += u64::from(record.output_tokens);
        state.total_cost += record.cost;
        state.calls.push(record);
    }

    /// Human-readable cost report.
    ///
    /// Shows every call when `detailed`, otherwise the five most recent.
    /// Read-only.
    pub async fn report(&self, detailed: bool) -> String {
        let state = self.state.read().await;
        format_report(
            &state.calls,
            state.total_input_tokens,
            state.total_output_tokens,
            state.total_cost,
            detailed,
        )
    }

    /// Clear records and totals back to the zero state. Idempotent.
    pub async fn reset(&self) {
        let mut state = self.state.write().await;
        *state = TrackerState::default();
    }

    /// Structured totals snapshot
    pub async fn get_summary(&self) -> UsageSummary {
        let state = self.state.read().await;
        let total_calls = state.calls.len() as u64;
        let average_cost_per_call = if total_calls == 0 {
            0.0
        } else {
            state.total_cost / total_calls as f64
        };

        UsageSummary {
            total_calls,
            total_input_tokens: state.total_input_tokens,
            total_output_tokens: state.total_output_tokens,
            total_cost: state.total_cost,
            average_cost_per_call,
        }
    }

    /// Snapshot of recorded calls, oldest first
    pub async fn records(&self) -> Vec<CallRecord> {
        self.state.read().await.calls.clone()
    }
}
