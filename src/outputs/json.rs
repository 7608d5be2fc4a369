//! JSON rendering of a [`ScrapeReport`] for programmatic consumers.

use crate::error::Result;
use crate::models::ScrapeReport;

/// Pretty-printed JSON with `titles` and an ordered `counts` array.
pub fn report_to_json(report: &ScrapeReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
