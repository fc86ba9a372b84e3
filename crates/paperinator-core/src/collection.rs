use serde_json::Value;

use crate::LoadError;
use crate::paper::Paper;

/// Parse file content into an ordered collection of papers.
///
/// The whole text is parsed at once; there is no partial recovery.
pub fn parse_collection(text: &str) -> Result<Vec<Paper>, LoadError> {
    let value: Value = serde_json::from_str(text)?;
    normalize(value)
}

/// Normalize a parsed JSON value: an array is used as-is, a single object is
/// wrapped into a one-element collection, anything else is rejected.
pub fn normalize(value: Value) -> Result<Vec<Paper>, LoadError> {
    match value {
        Value::Array(items) => items.into_iter().map(paper_from_value).collect(),
        Value::Object(_) => Ok(vec![paper_from_value(value)?]),
        other => Err(LoadError::Shape {
            found: json_kind(&other),
        }),
    }
}

fn paper_from_value(value: Value) -> Result<Paper, LoadError> {
    if !value.is_object() {
        return Err(LoadError::Shape {
            found: json_kind(&value),
        });
    }
    Ok(serde_json::from_value(value)?)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
