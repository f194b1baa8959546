//! Cost tracking - usage and cost accounting for generation calls
//!
//! # Module Structure
//!
//! - `pricing`: pricing table with total three-tier resolution
//! - `record`: call records and summary types
//! - `tracker`: CostTracker implementation
//! - `report`: text report formatting

mod pricing;
mod record;
mod report;
mod tracker;

#[cfg(test)]
mod tests;

// Re-export public types
pub use pricing::{default_pricing_table, ModelPricing, PricingTable, LOCAL_MODEL_MARKERS};
pub use record::{CallRecord, UsageSummary};
pub use report::short_model_label;
pub use tracker::CostTracker;
