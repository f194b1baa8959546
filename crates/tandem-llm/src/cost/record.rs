//! Call records and summary types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One accounted generation call.
///
/// Appended once, never mutated, removed only by an explicit reset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallRecord {
    /// Model identifier
    pub model: String,
    /// Input tokens
    pub input_tokens: u32,
    /// Output tokens
    pub output_tokens: u32,
    /// Cost computed at accounting time (USD); never recomputed
    pub cost: f64,
    /// When the call was recorded
    pub timestamp: DateTime<Utc>,
}

/// Aggregate usage summary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UsageSummary {
    /// Number of accounted calls
    pub total_calls: u64,
    /// Total input tokens
    pub total_input_tokens: u64,
    /// Total output tokens
    pub total_output_tokens: u64,
    /// Total cost (USD)
    pub total_cost: f64,
    /// Mean cost per call; 0 when no calls are recorded
    pub average_cost_per_call: f64,
}
