//! Terminal output utilities.

use crate::models::CidrBlock;
use colored::Colorize;
use std::collections::BTreeMap;

/// Render a boolean result, green for `true` and red for `false`.
///
/// Color is only applied when `color` is set, so piped output stays plain.
pub fn format_bool(value: bool, color: bool) -> String {
    let text = value.to_string();
    match (color, value) {
        (false, _) => text,
        (true, true) => text.green().to_string(),
        (true, false) => text.red().to_string(),
    }
}

/// Render a sanitized map as pretty-printed JSON with sorted keys.
pub fn format_map(map: &BTreeMap<String, String>) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(map)
}

/// One line per overlapping pair: `a <-> b`.
pub fn format_overlaps(pairs: &[(CidrBlock, CidrBlock)]) -> String {
    pairs
        .iter()
        .map(|(a, b)| format!("{a} <-> {b}"))
        .collect::<Vec<_>>()
        .join("\n")
}
