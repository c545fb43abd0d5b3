//! Schema graph
//!
//! `Schema` is a closed sum type with one variant per schema shape. Named
//! types are defined inline at the point where they first appear and are
//! referred to everywhere else through `Schema::Ref`, resolved against the
//! `NamedSchemata` registry built during the same parse.

mod helpers;
mod parser;
mod parsers;
mod registry;
mod render;
mod tag;
mod types;

use std::fmt;
use std::str::FromStr;

use crate::datum::Datum;
use crate::error::{SchemaParseError, ValidationResult};
use crate::name::Name;
use crate::validator;

pub use parser::{
    parse, parse_request, parse_value, parse_with_options, parse_with_schemata, ParseOptions,
    DEFAULT_MAX_DEPTH,
};
pub use registry::NamedSchemata;
pub use tag::{PrimitiveType, TypeTag};
pub use types::{
    ArraySchema, EnumSchema, Field, FieldOrder, FixedSchema, MapSchema, RecordKind, RecordSchema,
    RefSchema, RequestSchema, UnionSchema,
};

/// A parsed schema node
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    Primitive(PrimitiveType),
    /// Record or error
    Record(RecordSchema),
    Enum(EnumSchema),
    Array(ArraySchema),
    Map(MapSchema),
    Union(UnionSchema),
    Fixed(FixedSchema),
    /// Protocol message parameters
    Request(RequestSchema),
    /// Named type defined elsewhere in the graph
    Ref(RefSchema),
}

impl Schema {
    /// The `type` tag of this schema. For references, the tag of the
    /// referenced type.
    pub fn type_tag(&self) -> TypeTag {
        match self {
            Schema::Primitive(p) => TypeTag::Primitive(*p),
            Schema::Record(r) => r.kind().tag(),
            Schema::Enum(_) => TypeTag::Enum,
            Schema::Array(_) => TypeTag::Array,
            Schema::Map(_) => TypeTag::Map,
            Schema::Union(_) => TypeTag::Union,
            Schema::Fixed(_) => TypeTag::Fixed,
            Schema::Request(_) => TypeTag::Request,
            Schema::Ref(r) => r.tag(),
        }
    }

    /// The resolved name of a named type defined by this node
    pub fn name(&self) -> Option<&Name> {
        match self {
            Schema::Record(r) => Some(r.name()),
            Schema::Enum(e) => Some(e.name()),
            Schema::Fixed(f) => Some(f.name()),
            _ => None,
        }
    }

    /// Fully-qualified name of a named type or of a reference
    pub fn fullname(&self) -> Option<&str> {
        match self {
            Schema::Ref(r) => Some(r.fullname()),
            other => other.name().map(Name::fullname),
        }
    }

    pub fn doc(&self) -> Option<&str> {
        match self {
            Schema::Record(r) => r.doc(),
            Schema::Enum(e) => e.doc(),
            Schema::Fixed(f) => f.doc(),
            _ => None,
        }
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, Schema::Primitive(_))
    }

    /// Element schema of an array
    pub fn items(&self) -> Option<&Schema> {
        match self {
            Schema::Array(a) => Some(a.items()),
            _ => None,
        }
    }

    /// Value schema of a map
    pub fn values(&self) -> Option<&Schema> {
        match self {
            Schema::Map(m) => Some(m.values()),
            _ => None,
        }
    }

    /// Branches of a union
    pub fn branches(&self) -> Option<&[Schema]> {
        match self {
            Schema::Union(u) => Some(u.branches()),
            _ => None,
        }
    }

    /// Symbols of an enum
    pub fn symbols(&self) -> Option<&[String]> {
        match self {
            Schema::Enum(e) => Some(e.symbols()),
            _ => None,
        }
    }

    /// Fields of a record, error or request
    pub fn fields(&self) -> Option<&[Field]> {
        match self {
            Schema::Record(r) => Some(r.fields()),
            Schema::Request(r) => Some(r.fields()),
            _ => None,
        }
    }

    /// Byte size of a fixed type
    pub fn size(&self) -> Option<usize> {
        match self {
            Schema::Fixed(f) => Some(f.size()),
            _ => None,
        }
    }

    /// Whether `datum` conforms to this schema
    pub fn is_valid_datum(&self, datum: &Datum, schemata: &NamedSchemata) -> bool {
        validator::is_valid_datum(self, datum, schemata)
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

/// A schema together with the registry that resolves its references
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedSchema {
    schema: Schema,
    schemata: NamedSchemata,
}

impl ParsedSchema {
    pub fn new(schema: Schema, schemata: NamedSchemata) -> Self {
        Self { schema, schemata }
    }

    /// The root schema
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Every named type defined while parsing
    pub fn schemata(&self) -> &NamedSchemata {
        &self.schemata
    }

    pub fn into_parts(self) -> (Schema, NamedSchemata) {
        (self.schema, self.schemata)
    }

    /// Follow a reference to its definition; other schemas are returned
    /// unchanged
    pub fn resolve<'a>(&'a self, schema: &'a Schema) -> Option<&'a Schema> {
        match schema {
            Schema::Ref(r) => self.schemata.get(r.fullname()),
            other => Some(other),
        }
    }

    /// Look up a named type by fully-qualified name
    pub fn named(&self, fullname: &str) -> Option<&Schema> {
        self.schemata.get(fullname)
    }

    /// Whether `datum` conforms to the root schema
    pub fn is_valid_datum(&self, datum: &Datum) -> bool {
        validator::is_valid_datum(&self.schema, datum, &self.schemata)
    }

    /// Validate `datum`, reporting where the first mismatch occurred
    pub fn validate(&self, datum: &Datum) -> ValidationResult<()> {
        validator::validate(datum, &self.schema, &self.schemata)
    }

    pub fn to_json(&self) -> serde_json::Value {
        self.schema.to_json()
    }
}

impl FromStr for ParsedSchema {
    type Err = SchemaParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl fmt::Display for ParsedSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.schema, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_on_wrong_shape_are_none() {
        let schema = Schema::Primitive(PrimitiveType::Int);
        assert!(schema.is_primitive());
        assert_eq!(schema.items(), None);
        assert_eq!(schema.values(), None);
        assert_eq!(schema.branches(), None);
        assert_eq!(schema.symbols(), None);
        assert_eq!(schema.fields(), None);
        assert_eq!(schema.size(), None);
        assert_eq!(schema.fullname(), None);
        assert_eq!(schema.doc(), None);
    }

    #[test]
    fn test_ref_reports_target_tag_and_name() {
        let schema = Schema::Ref(RefSchema::new("a.Node", TypeTag::Record));
        assert_eq!(schema.type_tag(), TypeTag::Record);
        assert_eq!(schema.fullname(), Some("a.Node"));
        assert_eq!(schema.name(), None);
    }

    #[test]
    fn test_resolve_follows_references() {
        let parsed: ParsedSchema = r#"{
            "type": "record",
            "name": "Node",
            "fields": [{"name": "next", "type": ["null", "Node"]}]
        }"#
        .parse()
        .unwrap();

        let next = &parsed.schema().fields().unwrap()[0];
        let target = &next.schema().branches().unwrap()[1];
        assert!(matches!(target, Schema::Ref(_)));
        assert_eq!(parsed.resolve(target), Some(parsed.schema()));
        assert_eq!(parsed.named("Node"), Some(parsed.schema()));
    }

    #[test]
    fn test_parsed_schema_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ParsedSchema>();
    }
}
