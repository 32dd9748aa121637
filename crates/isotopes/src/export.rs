//! Renders aggregated [`Elements`] as a JSON object keyed by element symbol

// Local Crate Imports
use crate::Elements;

/// Compact JSON, with no whitespace between tokens
///
/// # Errors
///
/// Only fails if `serde_json` can't represent an atomic weight, which never happens for the finite values produced by
/// aggregation.
pub fn to_json(elements: &Elements) -> serde_json::Result<String> {
    serde_json::to_string(elements)
}

/// Pretty-printed JSON, indented by two spaces
///
/// # Errors
///
/// See [`to_json()`].
pub fn to_json_pretty(elements: &Elements) -> serde_json::Result<String> {
    serde_json::to_string_pretty(elements)
}
