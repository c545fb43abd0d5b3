//! Union schema parser
//!
//! A union is written as a bare JSON array of branch schemas:
//!
//! ```json
//! ["null", "string", {"type": "record", "name": "Point", "fields": []}]
//! ```

use serde_json::Value;

use crate::error::SchemaResult;
use crate::schema::Schema;
use crate::schema::parser::SchemaParser;
use crate::schema::types::UnionSchema;

/// Parse each branch in order, sharing the registry and default namespace
pub(in crate::schema) fn parse_union_schema(
    branches: &[Value],
    default_namespace: Option<&str>,
    parser: &mut SchemaParser,
) -> SchemaResult<Schema> {
    let schemas = branches
        .iter()
        .map(|branch| parser.parse_sub_schema(branch, default_namespace))
        .collect::<SchemaResult<Vec<_>>>()?;

    Ok(Schema::Union(UnionSchema::new(schemas)?))
}
