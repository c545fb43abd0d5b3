//! Record schema parser
//!
//! Handles `record` and `error` objects and the field lists they share with
//! protocol request schemas:
//!
//! ```json
//! {
//!   "type": "record",
//!   "name": "Node",
//!   "namespace": "org.example",
//!   "fields": [
//!     {"name": "label", "type": "string"},
//!     {"name": "children", "type": {"type": "array", "items": "Node"}, "default": []}
//!   ]
//! }
//! ```
//!
//! The record's name is registered before its fields are parsed so fields
//! can refer to the record itself. Field types inherit the record's
//! namespace as their default namespace.

use serde_json::{Map, Value};

use crate::error::{SchemaParseError, SchemaResult};
use crate::schema::Schema;
use crate::schema::helpers::{fragment, get_required, get_required_string, get_string};
use crate::schema::parser::SchemaParser;
use crate::schema::parsers::named::{parse_doc, parse_name};
use crate::schema::types::{Field, FieldOrder, RecordKind, RecordSchema};

/// Parse a record or error schema
pub(in crate::schema) fn parse_record_schema(
    object: &Map<String, Value>,
    kind: RecordKind,
    default_namespace: Option<&str>,
    parser: &mut SchemaParser,
) -> SchemaResult<Schema> {
    let name = parse_name(object, default_namespace)?;
    let doc = parse_doc(object)?;
    parser.schemata().declare(&name, kind.tag())?;

    let fields = parse_fields(get_required(object, "fields")?, name.namespace(), parser)?;

    let schema = Schema::Record(RecordSchema::new(name, doc, fields, kind)?);
    parser.schemata().define(schema.clone());
    Ok(schema)
}

/// Parse a JSON array of field declarations
pub(in crate::schema) fn parse_fields(
    value: &Value,
    default_namespace: Option<&str>,
    parser: &mut SchemaParser,
) -> SchemaResult<Vec<Field>> {
    let items = value
        .as_array()
        .ok_or_else(|| SchemaParseError::InvalidAttribute {
            attribute: "fields",
            message: format!("must be an array, got {}", fragment(value)),
        })?;

    items
        .iter()
        .map(|item| parse_field(item, default_namespace, parser))
        .collect()
}

fn parse_field(
    value: &Value,
    default_namespace: Option<&str>,
    parser: &mut SchemaParser,
) -> SchemaResult<Field> {
    let object = value
        .as_object()
        .ok_or_else(|| SchemaParseError::InvalidAttribute {
            attribute: "fields",
            message: format!("each field must be an object, got {}", fragment(value)),
        })?;

    let name = get_required_string(object, "name")?;
    let schema = parser.parse_sub_schema(get_required(object, "type")?, default_namespace)?;
    let mut field = Field::new(name, schema)?;

    // Defaults are kept verbatim; conformance is checked on demand
    if let Some(default) = object.get("default") {
        field = field.with_default(default.clone());
    }
    if let Some(order) = get_string(object, "order")? {
        let order = order
            .parse::<FieldOrder>()
            .map_err(|()| SchemaParseError::InvalidAttribute {
                attribute: "order",
                message: format!(
                    "must be one of ascending, descending, ignore; got '{}'",
                    order
                ),
            })?;
        field = field.with_order(order);
    }
    if let Some(doc) = get_string(object, "doc")? {
        field = field.with_doc(doc);
    }
    Ok(field)
}
