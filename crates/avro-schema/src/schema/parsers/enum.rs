//! Enum schema parser
//!
//! ```json
//! {"type": "enum", "name": "Suit", "symbols": ["SPADES", "HEARTS", "DIAMONDS", "CLUBS"]}
//! ```

use serde_json::{Map, Value};

use crate::error::SchemaResult;
use crate::schema::Schema;
use crate::schema::helpers::get_required_string_array;
use crate::schema::parser::SchemaParser;
use crate::schema::parsers::named::{parse_doc, parse_name};
use crate::schema::tag::TypeTag;
use crate::schema::types::EnumSchema;

/// Parse an enum schema; symbols must be distinct identifiers
pub(in crate::schema) fn parse_enum_schema(
    object: &Map<String, Value>,
    default_namespace: Option<&str>,
    parser: &mut SchemaParser,
) -> SchemaResult<Schema> {
    let name = parse_name(object, default_namespace)?;
    let doc = parse_doc(object)?;
    parser.schemata().declare(&name, TypeTag::Enum)?;

    let symbols = get_required_string_array(object, "symbols")?;

    let schema = Schema::Enum(EnumSchema::new(name, doc, symbols)?);
    parser.schemata().define(schema.clone());
    Ok(schema)
}
