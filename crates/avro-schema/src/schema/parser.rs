//! Schema parser entry points
//!
//! `parse` decodes schema text and walks the decoded JSON recursively. One
//! `NamedSchemata` registry and the current default namespace are threaded
//! through every recursive call:
//!
//! - a string is a primitive type or a reference to a registered name
//! - an array is a union
//! - an object is dispatched on its `type` attribute

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{SchemaParseError, SchemaResult};

use super::helpers::fragment;
use super::parsers::{
    parse_array_schema, parse_enum_schema, parse_fields, parse_fixed_schema, parse_map_schema,
    parse_record_schema, parse_union_schema,
};
use super::registry::NamedSchemata;
use super::tag::TypeTag;
use super::types::{RecordKind, RefSchema, RequestSchema};
use super::{ParsedSchema, PrimitiveType, Schema};

/// Default limit on schema nesting
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Parser settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ParseOptions {
    /// Deepest schema nesting accepted before the parse is abandoned
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Parse schema text with default options and a fresh registry
pub fn parse(json: &str) -> SchemaResult<ParsedSchema> {
    parse_with_options(json, &ParseOptions::default())
}

/// Parse schema text with a fresh registry
pub fn parse_with_options(json: &str, options: &ParseOptions) -> SchemaResult<ParsedSchema> {
    let mut schemata = NamedSchemata::new();
    let schema = parse_with_schemata(json, &mut schemata, options)?;
    tracing::debug!(
        type_tag = %schema.type_tag(),
        named_types = schemata.len(),
        "Parsed schema"
    );
    Ok(ParsedSchema::new(schema, schemata))
}

/// Parse schema text against a caller-supplied registry.
///
/// Names registered by earlier parses can be referenced, and the names this
/// schema defines are added to the registry. The registry is left untouched
/// if the parse fails.
pub fn parse_with_schemata(
    json: &str,
    schemata: &mut NamedSchemata,
    options: &ParseOptions,
) -> SchemaResult<Schema> {
    let value: Value = serde_json::from_str(json)?;
    let mut scratch = schemata.clone();
    let schema = SchemaParser::new(&mut scratch, options).parse(&value, None)?;
    *schemata = scratch;
    Ok(schema)
}

/// Parse an already decoded schema value.
///
/// Like `parse_with_schemata`, the registry only changes if the parse
/// succeeds.
pub fn parse_value(
    value: &Value,
    default_namespace: Option<&str>,
    schemata: &mut NamedSchemata,
) -> SchemaResult<Schema> {
    let mut scratch = schemata.clone();
    let schema =
        SchemaParser::new(&mut scratch, &ParseOptions::default()).parse(value, default_namespace)?;
    *schemata = scratch;
    Ok(schema)
}

/// Parse a protocol message parameter list into a request schema.
///
/// `params` is an array of field declarations, exactly like a record's
/// `fields` attribute. The registry only changes if the parse succeeds.
pub fn parse_request(
    params: &Value,
    default_namespace: Option<&str>,
    schemata: &mut NamedSchemata,
) -> SchemaResult<Schema> {
    let options = ParseOptions::default();
    let mut scratch = schemata.clone();
    let mut parser = SchemaParser::new(&mut scratch, &options);
    let fields = parse_fields(params, default_namespace, &mut parser)?;
    let request = RequestSchema::new(fields)?;
    *schemata = scratch;
    Ok(Schema::Request(request))
}

/// Recursive descent state for one parse
pub(in crate::schema) struct SchemaParser<'a> {
    schemata: &'a mut NamedSchemata,
    options: &'a ParseOptions,
    depth: usize,
}

impl<'a> SchemaParser<'a> {
    pub(in crate::schema) fn new(schemata: &'a mut NamedSchemata, options: &'a ParseOptions) -> Self {
        Self {
            schemata,
            options,
            depth: 0,
        }
    }

    pub(in crate::schema) fn schemata(&mut self) -> &mut NamedSchemata {
        self.schemata
    }

    /// Parse one schema value
    pub(in crate::schema) fn parse(
        &mut self,
        value: &Value,
        default_namespace: Option<&str>,
    ) -> SchemaResult<Schema> {
        if self.depth >= self.options.max_depth {
            return Err(SchemaParseError::NestingTooDeep {
                max_depth: self.options.max_depth,
            });
        }
        self.depth += 1;
        let result = self.dispatch(value, default_namespace);
        self.depth -= 1;
        result
    }

    /// Parse a schema nested inside another one.
    ///
    /// Failures are wrapped once with the offending fragment; errors that
    /// are already wrapped pass through unchanged.
    pub(in crate::schema) fn parse_sub_schema(
        &mut self,
        value: &Value,
        default_namespace: Option<&str>,
    ) -> SchemaResult<Schema> {
        self.parse(value, default_namespace).map_err(|err| match err {
            err @ (SchemaParseError::InvalidSubSchema { .. }
            | SchemaParseError::NestingTooDeep { .. }) => err,
            other => SchemaParseError::InvalidSubSchema {
                fragment: fragment(value),
                source: Box::new(other),
            },
        })
    }

    fn dispatch(&mut self, value: &Value, default_namespace: Option<&str>) -> SchemaResult<Schema> {
        match value {
            Value::String(name) => self.parse_type_name(name, default_namespace),
            Value::Array(branches) => parse_union_schema(branches, default_namespace, self),
            Value::Object(object) => self.parse_object(object, default_namespace),
            other => Err(SchemaParseError::UnknownSchema(fragment(other))),
        }
    }

    /// A bare string: a primitive type or a reference to a named type
    fn parse_type_name(&self, name: &str, default_namespace: Option<&str>) -> SchemaResult<Schema> {
        if let Ok(primitive) = name.parse::<PrimitiveType>() {
            return Ok(Schema::Primitive(primitive));
        }
        self.reference(name, default_namespace)
            .ok_or_else(|| SchemaParseError::UnknownSchema(format!("\"{}\"", name)))
    }

    fn reference(&self, name: &str, default_namespace: Option<&str>) -> Option<Schema> {
        let fullname = self.schemata.resolve_reference(name, default_namespace)?;
        let tag = self.schemata.tag_of(fullname)?;
        Some(Schema::Ref(RefSchema::new(fullname, tag)))
    }

    fn parse_object(
        &mut self,
        object: &Map<String, Value>,
        default_namespace: Option<&str>,
    ) -> SchemaResult<Schema> {
        let type_name = match object.get("type") {
            Some(Value::String(s)) => s.as_str(),
            // {"type": {...}} and {"type": [...]} wrap a nested schema
            Some(nested @ (Value::Object(_) | Value::Array(_))) => {
                return self.parse(nested, default_namespace);
            }
            Some(other) => return Err(SchemaParseError::UndefinedType(fragment(other))),
            None => {
                return Err(SchemaParseError::UndefinedType(fragment(&Value::Object(
                    object.clone(),
                ))));
            }
        };

        match type_name.parse::<TypeTag>() {
            Ok(TypeTag::Primitive(primitive)) => Ok(Schema::Primitive(primitive)),
            Ok(TypeTag::Record) => {
                parse_record_schema(object, RecordKind::Record, default_namespace, self)
            }
            Ok(TypeTag::Error) => {
                parse_record_schema(object, RecordKind::Error, default_namespace, self)
            }
            Ok(TypeTag::Enum) => parse_enum_schema(object, default_namespace, self),
            Ok(TypeTag::Array) => parse_array_schema(object, default_namespace, self),
            Ok(TypeTag::Map) => parse_map_schema(object, default_namespace, self),
            Ok(TypeTag::Fixed) => parse_fixed_schema(object, default_namespace, self),
            // Unions are written as bare arrays
            Ok(TypeTag::Union) => Err(SchemaParseError::UnknownComplexType(
                type_name.to_string(),
            )),
            Ok(tag @ (TypeTag::ErrorUnion | TypeTag::Request)) => {
                Err(SchemaParseError::UnknownValidType(tag.to_string()))
            }
            // {"type": "SomeName"} refers to a registered named type
            Err(()) => self
                .reference(type_name, default_namespace)
                .ok_or_else(|| SchemaParseError::UndefinedType(type_name.to_string())),
        }
    }
}
