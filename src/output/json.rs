//! JSON serialization for comparison reports.

use serde::Serialize;

/// Serialize a report to a compact JSON string.
///
/// Works for any report type in [`crate::result`].
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for the
/// crate's report types).
pub fn to_json<T: Serialize>(report: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(report)
}

/// Serialize a report to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for the
/// crate's report types).
pub fn to_json_pretty<T: Serialize>(report: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
