//! Output formatting for the run result.
//!
//! Text output keeps the exact console lines of the original script:
//! one `Fixed query for <tool|resource>: <name>` line per change and a
//! final status line. JSON output is one object describing the whole run.

use crate::config::OutputFormat;
use crate::error::{FixError, FixResult};
use crate::rewriter::RunSummary;

pub const SUCCESS_MESSAGE: &str = "SQL queries fixed successfully!";

/// Render `summary` in the requested format.
pub fn render(summary: &RunSummary, format: OutputFormat) -> FixResult<String> {
    match format {
        OutputFormat::Text => Ok(format_as_text(summary)),
        OutputFormat::Json => format_as_json(summary),
    }
}

pub fn format_as_text(summary: &RunSummary) -> String {
    let mut output = String::new();

    if summary.dry_run {
        for report in &summary.reports {
            output.push_str(&format!(
                "Would fix query for {}: {}\n",
                report.collection, report.name
            ));
            output.push_str(&format!("    - {}\n", report.old_query));
            output.push_str(&format!("    + {}\n", report.new_query));
        }
        output.push_str(&format!(
            "Dry run: {} {} would be fixed.",
            summary.changed(),
            if summary.changed() == 1 { "query" } else { "queries" }
        ));
        return output;
    }

    for report in &summary.reports {
        output.push_str(&report.to_string());
        output.push('\n');
    }
    output.push_str(SUCCESS_MESSAGE);
    output
}

pub fn format_as_json(summary: &RunSummary) -> FixResult<String> {
    serde_json::to_string_pretty(summary).map_err(FixError::serialize)
}
