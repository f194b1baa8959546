//! Cost report formatting

use super::record::CallRecord;

/// How many records a non-detailed report shows
pub(crate) const RECENT_CALLS_SHOWN: usize = 5;

const RULE: &str = "============================================================";

/// Shorten a model identifier for one-line display.
///
/// Uses the second `-`-separated segment when present
/// (`claude-sonnet-4-5-20250929` becomes `sonnet`), otherwise a prefix of
/// the identifier.
#[must_use]
pub fn short_model_label(model: &str) -> String {
    match model.split('-').nth(1) {
        Some(segment) => segment.to_string(),
        None => model.chars().take(15).collect(),
    }
}

/// Format the cost report as text
pub(crate) fn format_report(
    calls: &[CallRecord],
    total_input_tokens: u64,
    total_output_tokens: u64,
    total_cost: f64,
    detailed: bool,
) -> String {
    let mut output = String::new();

    output.push_str(RULE);
    output.push('\n');
    output.push_str("API COST REPORT\n");
    output.push_str(RULE);
    output.push('\n');
    output.push_str(&format!("Total calls: {}\n", calls.len()));
    output.push_str(&format!("Total input tokens: {}\n", total_input_tokens));
    output.push_str(&format!("Total output tokens: {}\n", total_output_tokens));
    output.push_str(&format!("Total cost: ${:.4}\n", total_cost));

    if !calls.is_empty() {
        output.push('\n');
        output.push_str(if detailed { "All calls:\n" } else { "Recent calls:\n" });

        let shown = if detailed {
            calls
        } else {
            &calls[calls.len().saturating_sub(RECENT_CALLS_SHOWN)..]
        };

        for (i, call) in shown.iter().enumerate() {
            output.push_str(&format!(
                "  {}. [{}] {} - {}in/{}out - ${:.4}\n",
                i + 1,
                call.timestamp.format("%H:%M:%S"),
                short_model_label(&call.model),
                call.input_tokens,
                call.output_tokens,
                call.cost
            ));
        }
    }

    output.push_str(RULE);
    output.push('\n');
    output
}
