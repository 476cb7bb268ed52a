//! JSON output for scripts.

use crate::processing::Report;

pub fn render_json(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
