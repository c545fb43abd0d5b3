//! Name resolution for named schema objects

use serde_json::{Map, Value};

use crate::error::SchemaResult;
use crate::name::Name;
use crate::schema::helpers::{get_required_string, get_string};

/// Resolve the `name` and `namespace` attributes of a record, enum or fixed
/// object against the enclosing default namespace
pub(in crate::schema) fn parse_name(
    object: &Map<String, Value>,
    default_namespace: Option<&str>,
) -> SchemaResult<Name> {
    let name = get_required_string(object, "name")?;
    let namespace = get_string(object, "namespace")?;
    Name::new(name, namespace, default_namespace)
}

/// The optional `doc` attribute
pub(in crate::schema) fn parse_doc(object: &Map<String, Value>) -> SchemaResult<Option<String>> {
    Ok(get_string(object, "doc")?.map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SchemaParseError;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("Expected object"),
        }
    }

    #[test]
    fn test_parse_name_inherits_default_namespace() {
        let obj = object(json!({"name": "C"}));
        assert_eq!(parse_name(&obj, Some("a.b")).unwrap().fullname(), "a.b.C");

        let obj = object(json!({"name": "C", "namespace": "x"}));
        assert_eq!(parse_name(&obj, Some("a.b")).unwrap().fullname(), "x.C");
    }

    #[test]
    fn test_parse_name_requires_string_name() {
        assert!(matches!(
            parse_name(&object(json!({"type": "fixed"})), None),
            Err(SchemaParseError::MissingAttribute { attribute: "name", .. })
        ));
        assert!(matches!(
            parse_name(&object(json!({"name": 3})), None),
            Err(SchemaParseError::InvalidAttribute { attribute: "name", .. })
        ));
        assert!(matches!(
            parse_name(&object(json!({"name": "C", "namespace": ["a"]})), None),
            Err(SchemaParseError::InvalidAttribute { attribute: "namespace", .. })
        ));
    }

    #[test]
    fn test_parse_doc() {
        assert_eq!(
            parse_doc(&object(json!({"doc": "hello"}))).unwrap(),
            Some("hello".to_string())
        );
        assert_eq!(parse_doc(&object(json!({}))).unwrap(), None);
    }
}
