use serde_json::Value;

use crate::results::{Finding, ScanResults};

/// Rule property that holds the offending source text; never rendered.
const STATEMENT_KEY: &str = "statement";

/// Render merged results as an indented plain-text report.
///
/// One block per finding, in mapping-key order then array order, with a blank
/// line between blocks. Entries that do not match the finding shape
/// contribute nothing. Unlike the original npm module, which deleted
/// `rule.statement` from the caller's objects while rendering, the input is
/// borrowed immutably and `statement` is simply skipped.
pub fn render_console(results: &ScanResults) -> String {
    results
        .finding_groups()
        .flatten()
        .filter_map(|entry| serde_json::from_value::<Finding>(entry.clone()).ok())
        .map(|finding| render_finding(&finding))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_finding(finding: &Finding) -> String {
    let mut block = format!("{}:{}\n", finding.filename, finding.line);
    for (name, value) in &finding.rule {
        if name == STATEMENT_KEY {
            continue;
        }
        block.push_str(&format!("\t{}: {}\n", name, display_value(value)));
    }
    block
}

// Strings render bare, the way the scanner's own console output coerces
// them; everything else renders as compact JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
