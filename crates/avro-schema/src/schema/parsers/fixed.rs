//! Fixed schema parser
//!
//! ```json
//! {"type": "fixed", "name": "md5", "size": 16}
//! ```

use serde_json::{Map, Value};

use crate::error::SchemaResult;
use crate::schema::Schema;
use crate::schema::helpers::get_required_usize;
use crate::schema::parser::SchemaParser;
use crate::schema::parsers::named::{parse_doc, parse_name};
use crate::schema::tag::TypeTag;
use crate::schema::types::FixedSchema;

/// Parse a fixed schema; `size` must be a non-negative integer
pub(in crate::schema) fn parse_fixed_schema(
    object: &Map<String, Value>,
    default_namespace: Option<&str>,
    parser: &mut SchemaParser,
) -> SchemaResult<Schema> {
    let name = parse_name(object, default_namespace)?;
    let doc = parse_doc(object)?;
    parser.schemata().declare(&name, TypeTag::Fixed)?;

    let size = get_required_usize(object, "size")?;

    let schema = Schema::Fixed(FixedSchema::new(name, doc, size));
    parser.schemata().define(schema.clone());
    Ok(schema)
}
