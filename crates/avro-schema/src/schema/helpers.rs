//! Helper functions for reading schema attributes
//!
//! Each helper extracts one attribute from a schema object and reports a
//! `SchemaParseError` naming the attribute when it has the wrong shape.

use crate::error::{SchemaParseError, SchemaResult};
use serde_json::{Map, Value};

/// Longest fragment quoted in an error message
const FRAGMENT_LIMIT: usize = 120;

/// Compact rendering of a schema fragment for error messages
pub(crate) fn fragment(value: &Value) -> String {
    let rendered = value.to_string();
    if rendered.len() <= FRAGMENT_LIMIT {
        return rendered;
    }
    let mut end = FRAGMENT_LIMIT;
    while !rendered.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &rendered[..end])
}

fn object_fragment(object: &Map<String, Value>) -> String {
    fragment(&Value::Object(object.clone()))
}

/// Get a required attribute
pub(super) fn get_required<'a>(
    object: &'a Map<String, Value>,
    key: &'static str,
) -> SchemaResult<&'a Value> {
    object
        .get(key)
        .ok_or_else(|| SchemaParseError::MissingAttribute {
            attribute: key,
            fragment: object_fragment(object),
        })
}

/// Get an optional string attribute
pub(super) fn get_string<'a>(
    object: &'a Map<String, Value>,
    key: &'static str,
) -> SchemaResult<Option<&'a str>> {
    match object.get(key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(other) => Err(SchemaParseError::InvalidAttribute {
            attribute: key,
            message: format!("must be a string, got {}", fragment(other)),
        }),
    }
}

/// Get a required string attribute
pub(super) fn get_required_string<'a>(
    object: &'a Map<String, Value>,
    key: &'static str,
) -> SchemaResult<&'a str> {
    get_string(object, key)?.ok_or_else(|| SchemaParseError::MissingAttribute {
        attribute: key,
        fragment: object_fragment(object),
    })
}

/// Get a required array attribute
pub(super) fn get_required_array<'a>(
    object: &'a Map<String, Value>,
    key: &'static str,
) -> SchemaResult<&'a Vec<Value>> {
    match get_required(object, key)? {
        Value::Array(items) => Ok(items),
        other => Err(SchemaParseError::InvalidAttribute {
            attribute: key,
            message: format!("must be an array, got {}", fragment(other)),
        }),
    }
}

/// Get a required array of strings
pub(super) fn get_required_string_array(
    object: &Map<String, Value>,
    key: &'static str,
) -> SchemaResult<Vec<String>> {
    get_required_array(object, key)?
        .iter()
        .map(|item| match item {
            Value::String(s) => Ok(s.clone()),
            other => Err(SchemaParseError::InvalidAttribute {
                attribute: key,
                message: format!("items must be strings, got {}", fragment(other)),
            }),
        })
        .collect()
}

/// Get a required non-negative integer attribute
pub(super) fn get_required_usize(
    object: &Map<String, Value>,
    key: &'static str,
) -> SchemaResult<usize> {
    let value = get_required(object, key)?;
    value
        .as_u64()
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| SchemaParseError::InvalidAttribute {
            attribute: key,
            message: format!("must be a non-negative integer, got {}", fragment(value)),
        })
}
