//! Row data model for the table.
//!
//! Rows are opaque JSON-style records: the table never interprets a row
//! beyond looking up fields by column key. Shape is entirely caller-defined.

use serde_json::Value;

/// A single table row: a mapping of field name to JSON value.
pub type Row = serde_json::Map<String, Value>;

/// Returns the display identity of a row.
///
/// Uses the `id` field if present, then `_id`, otherwise the positional
/// index within the supplied row list.
#[must_use]
pub fn display_id(row: &Row, index: usize) -> String {
    row.get("id")
        .or_else(|| row.get("_id"))
        .map_or_else(|| index.to_string(), cell_value_text)
}

/// Default text rendering for a cell value when the column has no render
/// function.
///
/// Null and missing fields render as an empty string; strings render
/// verbatim (unquoted); everything else uses its compact JSON form.
#[must_use]
pub fn cell_text(value: Option<&Value>) -> String {
    value.map_or_else(String::new, cell_value_text)
}

fn cell_value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
