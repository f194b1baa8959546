//! Tests for cost module

use super::*;
use crate::error::GenerationError;
use crate::result::{Completion, GenerationResult, TokenUsage};

fn completed(model: &str, input_tokens: u32, output_tokens: u32) -> GenerationResult {
    GenerationResult::Completed(Completion {
        content: "ok".to_string(),
        model: model.to_string(),
        usage: TokenUsage {
            input_tokens,
            output_tokens,
        },
        stop_reason: "end_turn".to_string(),
    })
}

fn failed(model: &str) -> GenerationResult {
    GenerationResult::Failed(crate::result::GenerationFailure {
        model: model.to_string(),
        error: GenerationError::Network("connection refused".to_string()),
    })
}

#[test]
fn test_model_pricing_calculation() {
    let pricing = ModelPricing::new("test-model", 10.0, 20.0);

    // 1M tokens each
    let cost = pricing.calculate_cost(1_000_000, 1_000_000);
    assert!((cost - 30.0).abs() < 0.001);

    // 1K tokens each
    let cost = pricing.calculate_cost(1_000, 1_000);
    assert!((cost - 0.03).abs() < 0.001);

    // Zero tokens cost nothing
    assert_eq!(pricing.calculate_cost(0, 0), 0.0);
}

#[test]
fn test_default_table_has_claude_models() {
    let table = default_pricing_table();

    let sonnet = table.resolve("claude-sonnet-4-5-20250929");
    assert_eq!(sonnet.input_cost_per_million, 3.0);
    assert_eq!(sonnet.output_cost_per_million, 15.0);

    let opus = table.resolve("claude-opus-4-5-20251101");
    assert_eq!(opus.input_cost_per_million, 15.0);
    assert_eq!(opus.output_cost_per_million, 75.0);

    let haiku = table.resolve("claude-haiku-4-5-20251001");
    assert_eq!(haiku.input_cost_per_million, 1.0);
    assert_eq!(haiku.output_cost_per_million, 5.0);
}

#[test]
fn test_pricing_resolution_is_total() {
    let table = PricingTable::default();

    // Local-family markers resolve to zero cost, case-insensitively
    for model in ["ollama-llama3", "Mistral-7B-Instruct", "qwen2.5:7b", "llama3.2:3b"] {
        let pricing = table.resolve(model);
        assert_eq!(pricing.input_cost_per_million, 0.0, "{} should be free", model);
        assert_eq!(pricing.output_cost_per_million, 0.0, "{} should be free", model);
    }

    // Unknown paid-looking identifiers fall back to the designated entry
    for model in ["gpt-4o", "unknown-model", ""] {
        let pricing = table.resolve(model);
        assert_eq!(pricing.input_cost_per_million, 3.0);
        assert_eq!(pricing.output_cost_per_million, 15.0);
    }
}

#[test]
fn test_exact_match_wins_over_markers() {
    let mut table = PricingTable::default();
    // A hosted llama variant with an explicit price must not resolve free
    table.insert(ModelPricing::new("llama-3.3-70b-versatile", 0.59, 0.79));

    let pricing = table.resolve("llama-3.3-70b-versatile");
    assert_eq!(pricing.input_cost_per_million, 0.59);
}

#[test]
fn test_custom_local_markers() {
    let table = PricingTable::default().with_local_markers(vec!["gemma".to_string()]);

    assert_eq!(table.resolve("gemma2:9b").input_cost_per_million, 0.0);
    // Former marker no longer matches; falls back to the paid entry
    assert_eq!(table.resolve("ollama-llama3").input_cost_per_million, 3.0);
}

#[test]
fn test_short_model_label() {
    assert_eq!(short_model_label("claude-sonnet-4-5-20250929"), "sonnet");
    assert_eq!(short_model_label("ollama-llama3"), "llama3");
    assert_eq!(short_model_label("averylongmodelnamewithnodashes"), "averylongmodeln");
}

#[tokio::test]
async fn test_local_model_costs_nothing() {
    let tracker = CostTracker::new();

    tracker.add_call(&completed("ollama-llama3", 100, 50)).await;

    let summary = tracker.get_summary().await;
    assert_eq!(summary.total_calls, 1);
    assert_eq!(summary.total_input_tokens, 100);
    assert_eq!(summary.total_output_tokens, 50);
    assert_eq!(summary.total_cost, 0.0);
}

#[tokio::test]
async fn test_sonnet_million_tokens_costs_eighteen() {
    let tracker = CostTracker::new();

    tracker
        .add_call(&completed("claude-sonnet-4-5-20250929", 1_000_000, 1_000_000))
        .await;

    let summary = tracker.get_summary().await;
    assert!((summary.total_cost - 18.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_failed_calls_are_not_accounted() {
    let tracker = CostTracker::new();

    tracker.add_call(&failed("llama3.2:3b")).await;
    tracker.add_call(&completed("ollama-llama3", 100, 50)).await;
    tracker.add_call(&failed("claude-sonnet-4-5-20250929")).await;

    let summary = tracker.get_summary().await;
    assert_eq!(summary.total_calls, 1);
    assert_eq!(summary.total_input_tokens, 100);
    assert_eq!(summary.total_output_tokens, 50);
    assert_eq!(tracker.records().await.len(), 1);
}

#[tokio::test]
async fn test_totals_equal_record_sums_after_every_add() {
    let tracker = CostTracker::new();

    let results = [
        completed("claude-sonnet-4-5-20250929", 1_000, 500),
        completed("ollama-llama3", 2_000, 1_500),
        failed("claude-haiku-4-5-20251001"),
        completed("claude-haiku-4-5-20251001", 3_000, 2_500),
        completed("unknown-model", 400, 300),
    ];

    for result in &results {
        tracker.add_call(result).await;

        let summary = tracker.get_summary().await;
        let records = tracker.records().await;

        let input_sum: u64 = records.iter().map(|r| u64::from(r.input_tokens)).sum();
        let output_sum: u64 = records.iter().map(|r| u64::from(r.output_tokens)).sum();
        let cost_sum: f64 = records.iter().map(|r| r.cost).sum();

        assert_eq!(summary.total_input_tokens, input_sum);
        assert_eq!(summary.total_output_tokens, output_sum);
        assert!((summary.total_cost - cost_sum).abs() < 1e-9);
        assert_eq!(summary.total_calls, records.len() as u64);
    }
}

#[tokio::test]
async fn test_reset_is_idempotent() {
    let tracker = CostTracker::new();

    tracker
        .add_call(&completed("claude-sonnet-4-5-20250929", 1_000, 500))
        .await;
    assert_eq!(tracker.get_summary().await.total_calls, 1);

    tracker.reset().await;
    assert_eq!(tracker.get_summary().await, UsageSummary::default());
    assert!(tracker.records().await.is_empty());

    tracker.reset().await;
    assert_eq!(tracker.get_summary().await, UsageSummary::default());
}

#[tokio::test]
async fn test_average_cost_per_call() {
    let tracker = CostTracker::new();

    // Empty tracker must not divide by zero
    assert_eq!(tracker.get_summary().await.average_cost_per_call, 0.0);

    tracker
        .add_call(&completed("claude-sonnet-4-5-20250929", 1_000_000, 1_000_000))
        .await;
    tracker.add_call(&completed("ollama-llama3", 100, 50)).await;

    let summary = tracker.get_summary().await;
    assert!((summary.average_cost_per_call - summary.total_cost / 2.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_report_shows_recent_five() {
    let tracker = CostTracker::new();

    for i in 1..=7u32 {
        tracker.add_call(&completed("ollama-llama3", i * 10, i)).await;
    }

    let recent = tracker.report(false).await;
    assert!(recent.contains("Total calls: 7"));
    // Only calls 3..=7 are shown, in recency order
    assert!(!recent.contains("10in"));
    assert!(!recent.contains("20in"));
    assert!(recent.contains("30in"));
    assert!(recent.contains("70in"));
    assert!(recent.find("30in").unwrap() < recent.find("70in").unwrap());
    assert!(recent.contains("  5. "));
    assert!(!recent.contains("  6. "));

    let detailed = tracker.report(true).await;
    assert!(detailed.contains("10in"));
    assert!(detailed.contains("70in"));
    assert!(detailed.contains("  7. "));
}

#[tokio::test]
async fn test_report_is_read_only() {
    let tracker = CostTracker::new();
    tracker.add_call(&completed("ollama-llama3", 100, 50)).await;

    let before = tracker.get_summary().await;
    let _ = tracker.report(true).await;
    let _ = tracker.report(false).await;
    let after = tracker.get_summary().await;

    assert_eq!(before, after);
}

#[tokio::test]
async fn test_report_contains_summary_lines() {
    let tracker = CostTracker::new();
    tracker
        .add_call(&completed("claude-sonnet-4-5-20250929", 1_000, 500))
        .await;

    let report = tracker.report(false).await;
    assert!(report.contains("API COST REPORT"));
    assert!(report.contains("Total input tokens: 1000"));
    assert!(report.contains("Total output tokens: 500"));
    assert!(report.contains("sonnet"));
    assert!(report.contains("1000in/500out"));
}
