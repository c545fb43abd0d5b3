//! # avro-schema
//!
//! Avro schema parsing and datum validation.
//!
//! JSON schema text is parsed into a typed `Schema` graph. Named types
//! (records, errors, enums, fixed) are registered in a `NamedSchemata`
//! registry by fully-qualified name, which is how recursive and mutually
//! recursive schemas are represented without reference cycles. A parsed
//! schema can check whether a runtime `Datum` conforms to it.
//!
//! ## Example
//!
//! ```rust
//! use avro_schema::{parse, Datum};
//!
//! let schema = parse(r#"{
//!     "type": "record",
//!     "name": "Node",
//!     "fields": [
//!         {"name": "label", "type": "string"},
//!         {"name": "children", "type": {"type": "array", "items": "Node"}, "default": []}
//!     ]
//! }"#).unwrap();
//!
//! let leaf = Datum::map([("label", Datum::from("leaf"))]);
//! assert!(schema.is_valid_datum(&leaf));
//! ```

pub mod datum;
pub mod error;
pub mod name;
pub mod schema;
pub mod validator;

pub use datum::Datum;
pub use error::{
    InstancePath, PathSegment, SchemaParseError, SchemaPath, SchemaResult, ValidationError,
    ValidationErrorKind, ValidationResult,
};
pub use name::Name;
pub use schema::{
    parse, parse_request, parse_value, parse_with_options, parse_with_schemata, NamedSchemata,
    ParseOptions, ParsedSchema, PrimitiveType, Schema, TypeTag, DEFAULT_MAX_DEPTH,
};
pub use validator::{is_valid_datum, resolve_union_branch, validate};
