//! Serde helpers for Splunk's loosely typed result rows.
//!
//! Responsibilities:
//! - Turn result rows into flat `field -> string` records.
//!
//! Explicitly does NOT handle:
//! - Typing field values (numbers, timestamps) for callers.
//!
//! Invariants / assumptions:
//! - Splunk emits single values as strings, but numbers and booleans show up
//!   depending on the command that produced the field; they keep their JSON text.
//! - Multi-value fields arrive as arrays and are joined with `\n`, the same
//!   rendering Splunk uses in CSV output.
//! - `null` means the field is absent for that row and is dropped.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::models::ResultRecord;

fn value_to_field(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(value_to_field)
                .collect::<Vec<_>>()
                .join("\n"),
        ),
        Value::Object(_) => Some(value.to_string()),
    }
}

/// Flatten one JSON row into a [`ResultRecord`].
pub fn record_from_row(row: Map<String, Value>) -> ResultRecord {
    row.into_iter()
        .filter_map(|(field, value)| value_to_field(value).map(|v| (field, v)))
        .collect()
}

/// Deserialize an array of JSON rows into records, preserving row order.
///
/// A `null` in place of the array is treated as no rows.
pub fn records_from_rows<'de, D>(deserializer: D) -> Result<Vec<ResultRecord>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let rows = Option::<Vec<Map<String, Value>>>::deserialize(deserializer)?;
    Ok(rows
        .unwrap_or_default()
        .into_iter()
        .map(record_from_row)
        .collect())
}
