//! Runtime values checked against schemas
//!
//! A `Datum` is the in-memory shape an encoder consumes or a decoder
//! produces. Records are represented as maps from field name to value.

use std::collections::BTreeMap;

/// A runtime value
#[derive(Debug, Clone, PartialEq)]
pub enum Datum {
    Null,
    Boolean(bool),
    /// Any integer; whether it fits `int` or `long` is a validation question
    Int(i64),
    Float(f64),
    Bytes(Vec<u8>),
    String(String),
    Array(Vec<Datum>),
    /// Map or record value
    Map(BTreeMap<String, Datum>),
}

impl Datum {
    /// Human-readable name of this value's shape, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Datum::Null => "null",
            Datum::Boolean(_) => "boolean",
            Datum::Int(_) => "integer",
            Datum::Float(_) => "float",
            Datum::Bytes(_) => "bytes",
            Datum::String(_) => "string",
            Datum::Array(_) => "array",
            Datum::Map(_) => "map",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Datum::Null)
    }

    /// Look up a key of a map value
    pub fn get(&self, key: &str) -> Option<&Datum> {
        match self {
            Datum::Map(entries) => entries.get(key),
            _ => None,
        }
    }

    /// Build a map value from key/value pairs
    pub fn map<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Datum)>,
    {
        Datum::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl From<bool> for Datum {
    fn from(value: bool) -> Self {
        Datum::Boolean(value)
    }
}

impl From<i32> for Datum {
    fn from(value: i32) -> Self {
        Datum::Int(value.into())
    }
}

impl From<i64> for Datum {
    fn from(value: i64) -> Self {
        Datum::Int(value)
    }
}

impl From<f32> for Datum {
    fn from(value: f32) -> Self {
        Datum::Float(value.into())
    }
}

impl From<f64> for Datum {
    fn from(value: f64) -> Self {
        Datum::Float(value)
    }
}

impl From<&str> for Datum {
    fn from(value: &str) -> Self {
        Datum::String(value.to_string())
    }
}

impl From<String> for Datum {
    fn from(value: String) -> Self {
        Datum::String(value)
    }
}

impl From<Vec<u8>> for Datum {
    fn from(value: Vec<u8>) -> Self {
        Datum::Bytes(value)
    }
}

impl From<&[u8]> for Datum {
    fn from(value: &[u8]) -> Self {
        Datum::Bytes(value.to_vec())
    }
}

impl From<Vec<Datum>> for Datum {
    fn from(value: Vec<Datum>) -> Self {
        Datum::Array(value)
    }
}

impl<T: Into<Datum>> From<Option<T>> for Datum {
    fn from(value: Option<T>) -> Self {
        value.map_or(Datum::Null, Into::into)
    }
}

/// JSON conversion used for field defaults and for datums read from JSON.
///
/// Integers that fit `i64` become `Int`; every other number becomes `Float`.
/// JSON has no byte strings, so strings stand in for `bytes` and `fixed`.
impl From<&serde_json::Value> for Datum {
    fn from(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Datum::Null,
            serde_json::Value::Bool(b) => Datum::Boolean(*b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Datum::Int(i),
                None => Datum::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Datum::String(s.clone()),
            serde_json::Value::Array(items) => {
                Datum::Array(items.iter().map(Datum::from).collect())
            }
            serde_json::Value::Object(entries) => Datum::Map(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), Datum::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<serde_json::Value> for Datum {
    fn from(value: serde_json::Value) -> Self {
        Datum::from(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_scalars() {
        assert_eq!(Datum::from(json!(null)), Datum::Null);
        assert_eq!(Datum::from(json!(true)), Datum::Boolean(true));
        assert_eq!(Datum::from(json!(5)), Datum::Int(5));
        assert_eq!(Datum::from(json!(5.5)), Datum::Float(5.5));
        assert_eq!(Datum::from(json!("x")), Datum::String("x".to_string()));
    }

    #[test]
    fn test_from_json_unsigned_overflow_is_float() {
        let datum = Datum::from(json!(u64::MAX));
        assert!(matches!(datum, Datum::Float(_)));
    }

    #[test]
    fn test_from_json_nested() {
        let datum = Datum::from(json!({"a": [1, 2], "b": {"c": null}}));
        assert_eq!(
            datum.get("a"),
            Some(&Datum::Array(vec![Datum::Int(1), Datum::Int(2)]))
        );
        assert_eq!(datum.get("b").and_then(|b| b.get("c")), Some(&Datum::Null));
        assert_eq!(datum.get("missing"), None);
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Datum::from(None::<i32>), Datum::Null);
        assert_eq!(Datum::from(Some(3)), Datum::Int(3));
    }
}
