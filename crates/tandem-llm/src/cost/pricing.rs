//! Model pricing - per-million-token cost information
//!
//! Resolution is total: every model identifier resolves to exactly one
//! pricing entry. An unknown paid-looking identifier must not silently
//! cost nothing, and a local identifier must not be billed.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Model whose entry serves as the fallback for unrecognized identifiers
pub const FALLBACK_MODEL: &str = "claude-sonnet-4-5-20250929";

/// Name fragments marking a model as local (free) family.
/// Matched case-insensitively as substrings.
pub const LOCAL_MODEL_MARKERS: &[&str] = &["ollama", "llama", "mistral", "qwen"];

/// Claude Sonnet 4.5 input cost per 1M tokens
pub const CLAUDE_SONNET45_INPUT_COST: f64 = 3.0;
/// Claude Sonnet 4.5 output cost per 1M tokens
pub const CLAUDE_SONNET45_OUTPUT_COST: f64 = 15.0;
/// Claude Opus 4.5 input cost per 1M tokens
pub const CLAUDE_OPUS45_INPUT_COST: f64 = 15.0;
/// Claude Opus 4.5 output cost per 1M tokens
pub const CLAUDE_OPUS45_OUTPUT_COST: f64 = 75.0;
/// Claude Haiku 4.5 input cost per 1M tokens
pub const CLAUDE_HAIKU45_INPUT_COST: f64 = 1.0;
/// Claude Haiku 4.5 output cost per 1M tokens
pub const CLAUDE_HAIKU45_OUTPUT_COST: f64 = 5.0;

/// Pricing for one model (per 1M tokens, USD)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelPricing {
    /// Model identifier
    pub model: String,
    /// Cost per 1M input tokens (USD)
    pub input_cost_per_million: f64,
    /// Cost per 1M output tokens (USD)
    pub output_cost_per_million: f64,
}

impl ModelPricing {
    /// Create a pricing entry
    #[must_use]
    pub fn new(model: impl Into<String>, input: f64, output: f64) -> Self {
        Self {
            model: model.into(),
            input_cost_per_million: input,
            output_cost_per_million: output,
        }
    }

    /// Zero-cost entry for local-family models
    #[must_use]
    pub fn free(model: impl Into<String>) -> Self {
        Self::new(model, 0.0, 0.0)
    }

    /// Calculate cost for given token counts
    #[must_use]
    pub fn calculate_cost(&self, input_tokens: u32, output_tokens: u32) -> f64 {
        let input_cost = (input_tokens as f64 / 1_000_000.0) * self.input_cost_per_million;
        let output_cost = (output_tokens as f64 / 1_000_000.0) * self.output_cost_per_million;
        input_cost + output_cost
    }
}

/// Pricing table keyed by model identifier.
///
/// Lookup order: exact match, then local-family marker match (zero cost),
/// then the designated paid fallback entry.
#[derive(Debug, Clone)]
pub struct PricingTable {
    models: HashMap<String, ModelPricing>,
    local_markers: Vec<String>,
    fallback: ModelPricing,
}

impl Default for PricingTable {
    fn default() -> Self {
        default_pricing_table()
    }
}

impl PricingTable {
    /// Build a table from explicit entries
    #[must_use]
    pub fn new(entries: Vec<ModelPricing>, fallback: ModelPricing) -> Self {
        let models = entries
            .into_iter()
            .map(|entry| (entry.model.clone(), entry))
            .collect();

        Self {
            models,
            local_markers: LOCAL_MODEL_MARKERS.iter().map(|s| (*s).to_string()).collect(),
            fallback,
        }
    }

    /// Replace the local-family markers
    #[must_use]
    pub fn with_local_markers(mut self, markers: Vec<String>) -> Self {
        self.local_markers = markers;
        self
    }

    /// Insert or replace an entry
    pub fn insert(&mut self, pricing: ModelPricing) {
        self.models.insert(pricing.model.clone(), pricing);
    }

    /// Resolve pricing for a model identifier. Never fails.
    #[must_use]
    pub fn resolve(&self, model: &str) -> ModelPricing {
        if let Some(pricing) = self.models.get(model) {
            return pricing.clone();
        }

        let lower = model.to_lowercase();
        if self
            .local_markers
            .iter()
            .any(|marker| lower.contains(marker.as_str()))
        {
            return ModelPricing::free(model);
        }

        self.fallback.clone()
    }
}

/// Default pricing table: the Claude 4.5 family plus free local models
#[must_use]
pub fn default_pricing_table() -> PricingTable {
    let entries = vec![
        ModelPricing::new(
            "claude-sonnet-4-5-20250929",
            CLAUDE_SONNET45_INPUT_COST,
            CLAUDE_SONNET45_OUTPUT_COST,
        ),
        ModelPricing::new(
            "claude-opus-4-5-20251101",
            CLAUDE_OPUS45_INPUT_COST,
            CLAUDE_OPUS45_OUTPUT_COST,
        ),
        ModelPricing::new(
            "claude-haiku-4-5-20251001",
            CLAUDE_HAIKU45_INPUT_COST,
            CLAUDE_HAIKU45_OUTPUT_COST,
        ),
    ];

    let fallback = ModelPricing::new(
        FALLBACK_MODEL,
        CLAUDE_SONNET45_INPUT_COST,
        CLAUDE_SONNET45_OUTPUT_COST,
    );

    PricingTable::new(entries, fallback)
}
