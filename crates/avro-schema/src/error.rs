// Error types for schema parsing and datum validation

use std::fmt;
use thiserror::Error;

/// Errors that can occur while parsing a schema document.
///
/// This is the only error type that crosses the parsing boundary: JSON
/// decoding failures, unknown type tags, naming violations and malformed
/// attributes are all reported through it.
#[derive(Debug, Error)]
pub enum SchemaParseError {
    /// The schema text is not valid JSON
    #[error("Schema is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Object whose `type` is missing or not a known tag
    #[error("Undefined type: {0}")]
    UndefinedType(String),

    /// A recognized tag that cannot appear as a standalone schema
    #[error("Unknown valid type: {0}")]
    UnknownValidType(String),

    /// A complex tag without a parser (the object form of `union`)
    #[error("Unknown complex type: {0}")]
    UnknownComplexType(String),

    /// A bare string that is neither a primitive nor a registered name
    #[error("{0} is not a schema we know about.")]
    UnknownSchema(String),

    /// A named type registered twice in the same parse
    #[error("Duplicate named type: {0}")]
    DuplicateName(String),

    /// A name or namespace that breaks the identifier grammar
    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// A required attribute is absent
    #[error("Missing required attribute '{attribute}' in {fragment}")]
    MissingAttribute {
        attribute: &'static str,
        fragment: String,
    },

    /// An attribute is present but has the wrong shape
    #[error("Invalid attribute '{attribute}': {message}")]
    InvalidAttribute {
        attribute: &'static str,
        message: String,
    },

    /// Two fields of one record share a name
    #[error("Duplicate field '{field}' in {record}")]
    DuplicateField { record: String, field: String },

    /// Two symbols of one enum are equal
    #[error("Duplicate symbol '{symbol}' in enum {name}")]
    DuplicateSymbol { name: String, symbol: String },

    /// Union branches break the union rules
    #[error("Invalid union: {0}")]
    InvalidUnion(String),

    /// Recursion limit reached while descending into nested schemas
    #[error("Schema nesting exceeds the maximum depth of {max_depth}")]
    NestingTooDeep { max_depth: usize },

    /// A nested schema failed to parse
    #[error("Sub-schema is not a valid Avro schema. Bad schema: {fragment}: {source}")]
    InvalidSubSchema {
        fragment: String,
        #[source]
        source: Box<SchemaParseError>,
    },
}

impl SchemaParseError {
    /// The innermost error, looking through sub-schema wrappers
    pub fn root_cause(&self) -> &SchemaParseError {
        match self {
            SchemaParseError::InvalidSubSchema { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Result type for schema parsing operations
pub type SchemaResult<T> = Result<T, SchemaParseError>;

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Structured validation error kinds
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ValidationErrorKind {
    /// Datum has the wrong shape for the schema
    TypeMismatch { expected: String, got: String },

    /// Integer outside the range of `int` or `long`
    IntegerOutOfRange {
        value: i64,
        minimum: i64,
        maximum: i64,
    },

    /// Record field absent and no default declared
    MissingField { field: String },

    /// Record field absent and its declared default does not conform
    InvalidDefault { field: String },

    /// String is not one of the enum's symbols
    InvalidSymbol { value: String, symbols: Vec<String> },

    /// Byte length differs from the fixed size
    FixedSizeMismatch { expected: usize, got: usize },

    /// Datum matched no union branch
    NoMatchingBranch { branches: Vec<String> },

    /// Reference to a name that is not defined
    UnresolvedReference { name: String },
}

impl ValidationErrorKind {
    /// Short stable code for this error kind
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationErrorKind::TypeMismatch { .. } => "avro-type-mismatch",
            ValidationErrorKind::IntegerOutOfRange { .. } => "avro-integer-range",
            ValidationErrorKind::MissingField { .. } => "avro-missing-field",
            ValidationErrorKind::InvalidDefault { .. } => "avro-invalid-default",
            ValidationErrorKind::InvalidSymbol { .. } => "avro-invalid-symbol",
            ValidationErrorKind::FixedSizeMismatch { .. } => "avro-fixed-size",
            ValidationErrorKind::NoMatchingBranch { .. } => "avro-union-branch",
            ValidationErrorKind::UnresolvedReference { .. } => "avro-unresolved-reference",
        }
    }

    /// Format a human-readable message from this error kind
    pub fn message(&self) -> String {
        match self {
            ValidationErrorKind::TypeMismatch { expected, got } => {
                format!("Expected {}, got {}", expected, got)
            }
            ValidationErrorKind::IntegerOutOfRange {
                value,
                minimum,
                maximum,
            } => format!(
                "Integer {} is outside the range [{}, {}]",
                value, minimum, maximum
            ),
            ValidationErrorKind::MissingField { field } => {
                format!("Missing field '{}' which has no default", field)
            }
            ValidationErrorKind::InvalidDefault { field } => {
                format!("Default value of field '{}' does not match its type", field)
            }
            ValidationErrorKind::InvalidSymbol { value, symbols } => {
                format!(
                    "Value must be one of: {}, got '{}'",
                    symbols.join(", "),
                    value
                )
            }
            ValidationErrorKind::FixedSizeMismatch { expected, got } => {
                format!("Expected exactly {} bytes, got {}", expected, got)
            }
            ValidationErrorKind::NoMatchingBranch { branches } => {
                format!("Value matches none of the union branches [{}]", branches.join(", "))
            }
            ValidationErrorKind::UnresolvedReference { name } => {
                format!("Unresolved named type: {}", name)
            }
        }
    }
}

/// Validation error with the datum and schema paths where it occurred
#[derive(Debug, Clone, PartialEq, Error)]
pub struct ValidationError {
    /// The structured error kind
    pub kind: ValidationErrorKind,
    /// Datum path where the error occurred (e.g., ["children", [0], "label"])
    pub instance_path: InstancePath,
    /// Schema path that failed (e.g., ["record:Node", "field:children", "array"])
    pub schema_path: SchemaPath,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Validation error at {}: {}",
            self.instance_path,
            self.kind.message()
        )
    }
}

impl ValidationError {
    /// Create a new validation error with a structured kind
    pub fn new(kind: ValidationErrorKind, instance_path: InstancePath) -> Self {
        Self {
            kind,
            instance_path,
            schema_path: SchemaPath::new(),
        }
    }

    /// Get the human-readable message for this error
    pub fn message(&self) -> String {
        self.kind.message()
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        self.kind.error_code()
    }

    /// Set the schema path for this error
    pub fn with_schema_path(mut self, schema_path: SchemaPath) -> Self {
        self.schema_path = schema_path;
        self
    }
}

/// Instance path (e.g., ["children", [0], "label"])
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstancePath {
    segments: Vec<PathSegment>,
}

impl InstancePath {
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Push a segment onto the path
    pub fn push(&mut self, segment: PathSegment) {
        self.segments.push(segment);
    }

    /// Pop the last segment from the path
    pub fn pop(&mut self) -> Option<PathSegment> {
        self.segments.pop()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }
}

impl fmt::Display for InstancePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            write!(f, "(root)")
        } else {
            for (i, segment) in self.segments.iter().enumerate() {
                if i > 0 {
                    write!(f, ".")?;
                }
                write!(f, "{}", segment)?;
            }
            Ok(())
        }
    }
}

/// Schema path (e.g., ["record:Node", "field:children", "array"])
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaPath {
    segments: Vec<String>,
}

impl SchemaPath {
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    pub fn push(&mut self, segment: impl Into<String>) {
        self.segments.push(segment.into());
    }

    pub fn pop(&mut self) -> Option<String> {
        self.segments.pop()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }
}

impl fmt::Display for SchemaPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            write!(f, "(root)")
        } else {
            write!(f, "{}", self.segments.join(" > "))
        }
    }
}

/// A segment in an instance path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Map key or record field name
    Key(String),
    /// Array index
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => write!(f, "{}", key),
            PathSegment::Index(index) => write!(f, "[{}]", index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_path_display() {
        let mut path = InstancePath::new();
        assert_eq!(path.to_string(), "(root)");

        path.push(PathSegment::Key("children".to_string()));
        assert_eq!(path.to_string(), "children");

        path.push(PathSegment::Index(0));
        assert_eq!(path.to_string(), "children.[0]");

        path.push(PathSegment::Key("label".to_string()));
        assert_eq!(path.to_string(), "children.[0].label");

        path.pop();
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn test_schema_path_display() {
        let mut path = SchemaPath::new();
        assert_eq!(path.to_string(), "(root)");

        path.push("record:Node");
        path.push("field:children");
        assert_eq!(path.to_string(), "record:Node > field:children");
    }

    #[test]
    fn test_validation_error_creation() {
        let mut path = InstancePath::new();
        path.push(PathSegment::Key("count".to_string()));

        let error = ValidationError::new(
            ValidationErrorKind::TypeMismatch {
                expected: "int".to_string(),
                got: "string".to_string(),
            },
            path,
        );
        assert_eq!(error.message(), "Expected int, got string");
        assert_eq!(error.error_code(), "avro-type-mismatch");
        assert_eq!(
            error.to_string(),
            "Validation error at count: Expected int, got string"
        );
    }

    #[test]
    fn test_root_cause_unwraps_sub_schema_errors() {
        let error = SchemaParseError::InvalidSubSchema {
            fragment: "{\"type\":\"record\"}".to_string(),
            source: Box::new(SchemaParseError::DuplicateName("X".to_string())),
        };
        assert!(matches!(
            error.root_cause(),
            SchemaParseError::DuplicateName(name) if name == "X"
        ));
        assert!(error.to_string().contains("Duplicate named type: X"));
    }
}
