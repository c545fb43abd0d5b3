//! Array and map schema parsers
//!
//! ```json
//! {"type": "array", "items": "string"}
//! {"type": "map", "values": "long"}
//! ```
//!
//! Both are unnamed: the element schema is parsed with the enclosing
//! default namespace.

use serde_json::{Map, Value};

use crate::error::SchemaResult;
use crate::schema::Schema;
use crate::schema::helpers::get_required;
use crate::schema::parser::SchemaParser;
use crate::schema::types::{ArraySchema, MapSchema};

/// Parse an array schema; `items` is required
pub(in crate::schema) fn parse_array_schema(
    object: &Map<String, Value>,
    default_namespace: Option<&str>,
    parser: &mut SchemaParser,
) -> SchemaResult<Schema> {
    let items = parser.parse_sub_schema(get_required(object, "items")?, default_namespace)?;
    Ok(Schema::Array(ArraySchema::new(items)))
}

/// Parse a map schema; `values` is required
pub(in crate::schema) fn parse_map_schema(
    object: &Map<String, Value>,
    default_namespace: Option<&str>,
    parser: &mut SchemaParser,
) -> SchemaResult<Schema> {
    let values = parser.parse_sub_schema(get_required(object, "values")?, default_namespace)?;
    Ok(Schema::Map(MapSchema::new(values)))
}
