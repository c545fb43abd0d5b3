// Datum validation engine

use crate::datum::Datum;
use crate::error::{
    InstancePath, PathSegment, SchemaPath, ValidationError, ValidationErrorKind, ValidationResult,
};
use crate::schema::{
    EnumSchema, Field, FixedSchema, NamedSchemata, PrimitiveType, Schema, UnionSchema,
};

pub const INT_MIN_VALUE: i64 = i32::MIN as i64;
pub const INT_MAX_VALUE: i64 = i32::MAX as i64;

/// Lower bound of the supported `long` range (-2^62)
pub const LONG_MIN_VALUE: i64 = -4_611_686_018_427_387_904;
/// Upper bound of the supported `long` range (2^62 - 1)
pub const LONG_MAX_VALUE: i64 = 4_611_686_018_427_387_903;

/// Validates a datum against a schema, reporting the first mismatch
pub fn validate(datum: &Datum, schema: &Schema, schemata: &NamedSchemata) -> ValidationResult<()> {
    let mut context = ValidationContext::new(schemata);
    let result = validate_generic(datum, schema, &mut context);
    if let Err(error) = &result {
        tracing::debug!(
            code = error.error_code(),
            path = %error.instance_path,
            "datum rejected"
        );
    }
    result
}

/// Whether `datum` conforms to `schema`
pub fn is_valid_datum(schema: &Schema, datum: &Datum, schemata: &NamedSchemata) -> bool {
    validate_generic(datum, schema, &mut ValidationContext::new(schemata)).is_ok()
}

/// Index of the first union branch that accepts `datum`
pub fn resolve_union_branch(
    union: &UnionSchema,
    datum: &Datum,
    schemata: &NamedSchemata,
) -> Option<usize> {
    let mut context = ValidationContext::new(schemata);
    first_matching_branch(datum, union, &mut context)
}

impl Field {
    /// Whether the declared default conforms to the field type.
    ///
    /// Fields without a default are trivially valid.
    pub fn default_is_valid(&self, schemata: &NamedSchemata) -> bool {
        self.default_value()
            .is_none_or(|default| is_valid_datum(self.schema(), &Datum::from(default), schemata))
    }
}

/// Validation context tracks state during validation
pub struct ValidationContext<'a> {
    /// Registry used to resolve named references
    schemata: &'a NamedSchemata,
    /// Current instance path (e.g., ["children", [0], "label"])
    instance_path: InstancePath,
    /// Current schema path (e.g., ["record:Node", "field:children"])
    schema_path: SchemaPath,
    /// (owner, field) pairs whose default is currently being validated
    substituted_defaults: Vec<(String, String)>,
}

impl<'a> ValidationContext<'a> {
    pub fn new(schemata: &'a NamedSchemata) -> Self {
        Self {
            schemata,
            instance_path: InstancePath::new(),
            schema_path: SchemaPath::new(),
            substituted_defaults: Vec::new(),
        }
    }

    /// Build an error at the current position
    pub fn error(&self, kind: ValidationErrorKind) -> ValidationError {
        ValidationError::new(kind, self.instance_path.clone())
            .with_schema_path(self.schema_path.clone())
    }

    /// Execute a function with a new instance path segment
    pub fn with_instance_path<F, R>(&mut self, segment: PathSegment, f: F) -> R
    where
        F: FnOnce(&mut Self) -> R,
    {
        self.instance_path.push(segment);
        let result = f(self);
        self.instance_path.pop();
        result
    }

    /// Execute a function with a new schema path segment
    pub fn with_schema_path<F, R>(&mut self, segment: impl Into<String>, f: F) -> R
    where
        F: FnOnce(&mut Self) -> R,
    {
        self.schema_path.push(segment);
        let result = f(self);
        self.schema_path.pop();
        result
    }

    /// Execute a function while the default of `owner.field` stands in for
    /// a missing value.
    ///
    /// A default that leads back to its own field would be substituted
    /// forever, so re-entering the same pair is an invalid default.
    fn with_substituted_default<F>(
        &mut self,
        owner: &str,
        field: &str,
        f: F,
    ) -> ValidationResult<()>
    where
        F: FnOnce(&mut Self) -> ValidationResult<()>,
    {
        let active = self
            .substituted_defaults
            .iter()
            .any(|(o, name)| o == owner && name == field);
        if active {
            return Err(self.error(ValidationErrorKind::InvalidDefault {
                field: field.to_string(),
            }));
        }
        self.substituted_defaults
            .push((owner.to_string(), field.to_string()));
        let result = f(self);
        self.substituted_defaults.pop();
        result
    }
}

/// Main validation dispatcher
fn validate_generic(
    datum: &Datum,
    schema: &Schema,
    context: &mut ValidationContext,
) -> ValidationResult<()> {
    match schema {
        Schema::Primitive(p) => {
            context.with_schema_path(p.as_str(), |ctx| validate_primitive(datum, *p, ctx))
        }
        Schema::Record(s) => {
            let segment = format!("{}:{}", s.kind().tag(), s.fullname());
            context.with_schema_path(segment, |ctx| {
                validate_fields(datum, s.fullname(), s.fields(), ctx)
            })
        }
        Schema::Request(s) => {
            context.with_schema_path("request", |ctx| {
                validate_fields(datum, "request", s.fields(), ctx)
            })
        }
        Schema::Enum(s) => {
            let segment = format!("enum:{}", s.fullname());
            context.with_schema_path(segment, |ctx| validate_enum(datum, s, ctx))
        }
        Schema::Fixed(s) => {
            let segment = format!("fixed:{}", s.fullname());
            context.with_schema_path(segment, |ctx| validate_fixed(datum, s, ctx))
        }
        Schema::Array(s) => context.with_schema_path("array", |ctx| match datum {
            Datum::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    ctx.with_instance_path(PathSegment::Index(index), |ctx| {
                        validate_generic(item, s.items(), ctx)
                    })?;
                }
                Ok(())
            }
            other => Err(type_mismatch("array", other, ctx)),
        }),
        Schema::Map(s) => context.with_schema_path("map", |ctx| match datum {
            Datum::Map(entries) => {
                for (key, value) in entries {
                    ctx.with_instance_path(PathSegment::Key(key.clone()), |ctx| {
                        validate_generic(value, s.values(), ctx)
                    })?;
                }
                Ok(())
            }
            other => Err(type_mismatch("map", other, ctx)),
        }),
        Schema::Union(s) => context.with_schema_path("union", |ctx| validate_union(datum, s, ctx)),
        Schema::Ref(s) => {
            // Resolve the reference
            let schemata = context.schemata;
            match schemata.get(s.fullname()) {
                Some(resolved) => validate_generic(datum, resolved, context),
                None => Err(context.error(ValidationErrorKind::UnresolvedReference {
                    name: s.fullname().to_string(),
                })),
            }
        }
    }
}

fn type_mismatch(expected: &str, datum: &Datum, context: &ValidationContext) -> ValidationError {
    context.error(ValidationErrorKind::TypeMismatch {
        expected: expected.to_string(),
        got: datum.type_name().to_string(),
    })
}

fn validate_primitive(
    datum: &Datum,
    primitive: PrimitiveType,
    context: &mut ValidationContext,
) -> ValidationResult<()> {
    let accepted = match (primitive, datum) {
        (PrimitiveType::Null, Datum::Null) => true,
        (PrimitiveType::Boolean, Datum::Boolean(_)) => true,
        (PrimitiveType::String | PrimitiveType::Bytes, Datum::String(_) | Datum::Bytes(_)) => true,
        (PrimitiveType::Float | PrimitiveType::Double, Datum::Float(_) | Datum::Int(_)) => true,
        (PrimitiveType::Int, Datum::Int(value)) => {
            return check_range(*value, INT_MIN_VALUE, INT_MAX_VALUE, context);
        }
        (PrimitiveType::Long, Datum::Int(value)) => {
            return check_range(*value, LONG_MIN_VALUE, LONG_MAX_VALUE, context);
        }
        _ => false,
    };

    if accepted {
        Ok(())
    } else {
        Err(type_mismatch(primitive.as_str(), datum, context))
    }
}

fn check_range(
    value: i64,
    minimum: i64,
    maximum: i64,
    context: &ValidationContext,
) -> ValidationResult<()> {
    if (minimum..=maximum).contains(&value) {
        Ok(())
    } else {
        Err(context.error(ValidationErrorKind::IntegerOutOfRange {
            value,
            minimum,
            maximum,
        }))
    }
}

fn validate_enum(
    datum: &Datum,
    schema: &EnumSchema,
    context: &mut ValidationContext,
) -> ValidationResult<()> {
    let Datum::String(value) = datum else {
        return Err(type_mismatch("enum symbol", datum, context));
    };

    if schema.symbol_index(value).is_some() {
        Ok(())
    } else {
        Err(context.error(ValidationErrorKind::InvalidSymbol {
            value: value.clone(),
            symbols: schema.symbols().to_vec(),
        }))
    }
}

fn validate_fixed(
    datum: &Datum,
    schema: &FixedSchema,
    context: &mut ValidationContext,
) -> ValidationResult<()> {
    let len = match datum {
        Datum::Bytes(bytes) => bytes.len(),
        Datum::String(s) => s.len(),
        other => return Err(type_mismatch("bytes", other, context)),
    };

    if len == schema.size() {
        Ok(())
    } else {
        Err(context.error(ValidationErrorKind::FixedSizeMismatch {
            expected: schema.size(),
            got: len,
        }))
    }
}

fn first_matching_branch(
    datum: &Datum,
    schema: &UnionSchema,
    context: &mut ValidationContext,
) -> Option<usize> {
    schema.branches().iter().position(|branch| {
        context.with_schema_path(branch_label(branch), |ctx| {
            validate_generic(datum, branch, ctx).is_ok()
        })
    })
}

fn validate_union(
    datum: &Datum,
    schema: &UnionSchema,
    context: &mut ValidationContext,
) -> ValidationResult<()> {
    match first_matching_branch(datum, schema, context) {
        Some(index) => {
            tracing::trace!(branch = index, "union branch matched");
            Ok(())
        }
        None => Err(context.error(ValidationErrorKind::NoMatchingBranch {
            branches: schema.branches().iter().map(branch_label).collect(),
        })),
    }
}

/// Fully-qualified name for named branches, type tag otherwise
fn branch_label(branch: &Schema) -> String {
    branch
        .fullname()
        .map_or_else(|| branch.type_tag().to_string(), str::to_string)
}

fn validate_fields(
    datum: &Datum,
    owner: &str,
    fields: &[Field],
    context: &mut ValidationContext,
) -> ValidationResult<()> {
    let Datum::Map(entries) = datum else {
        return Err(type_mismatch("record", datum, context));
    };

    for field in fields {
        context.with_schema_path(format!("field:{}", field.name()), |ctx| {
            ctx.with_instance_path(PathSegment::Key(field.name().to_string()), |ctx| {
                match (entries.get(field.name()), field.default_value()) {
                    (Some(value), _) => validate_generic(value, field.schema(), ctx),
                    (None, Some(default)) => ctx
                        .with_substituted_default(owner, field.name(), |ctx| {
                            validate_generic(&Datum::from(default), field.schema(), ctx)
                        })
                        .map_err(|_| {
                            ctx.error(ValidationErrorKind::InvalidDefault {
                                field: field.name().to_string(),
                            })
                        }),
                    (None, None) => Err(ctx.error(ValidationErrorKind::MissingField {
                        field: field.name().to_string(),
                    })),
                }
            })
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{parse, ParsedSchema};
    use pretty_assertions::assert_eq;

    fn schema(json: &str) -> ParsedSchema {
        parse(json).unwrap()
    }

    fn error_of(parsed: &ParsedSchema, datum: Datum) -> ValidationError {
        match parsed.validate(&datum) {
            Err(error) => error,
            Ok(()) => panic!("Expected {:?} to be rejected", datum),
        }
    }

    #[test]
    fn test_null_and_boolean() {
        let null = schema(r#""null""#);
        assert!(null.is_valid_datum(&Datum::Null));
        assert!(!null.is_valid_datum(&Datum::Boolean(false)));

        let boolean = schema(r#""boolean""#);
        assert!(boolean.is_valid_datum(&Datum::Boolean(true)));
        assert!(!boolean.is_valid_datum(&Datum::Int(1)));
        assert!(!boolean.is_valid_datum(&Datum::Null));
    }

    #[test]
    fn test_int_range() {
        let int = schema(r#""int""#);
        assert!(int.is_valid_datum(&Datum::Int(INT_MAX_VALUE)));
        assert!(int.is_valid_datum(&Datum::Int(INT_MIN_VALUE)));
        assert!(!int.is_valid_datum(&Datum::Int(INT_MAX_VALUE + 1)));
        assert!(!int.is_valid_datum(&Datum::Int(INT_MIN_VALUE - 1)));
        assert!(!int.is_valid_datum(&Datum::Float(1.0)));

        let error = error_of(&int, Datum::Int(1 << 40));
        assert_eq!(error.error_code(), "avro-integer-range");
    }

    #[test]
    fn test_long_range() {
        let long = schema(r#"{"type": "long"}"#);
        assert!(long.is_valid_datum(&Datum::Int(LONG_MAX_VALUE)));
        assert!(long.is_valid_datum(&Datum::Int(LONG_MIN_VALUE)));
        assert!(!long.is_valid_datum(&Datum::Int(LONG_MAX_VALUE + 1)));
        assert!(!long.is_valid_datum(&Datum::Int(LONG_MIN_VALUE - 1)));
        assert!(!long.is_valid_datum(&Datum::Int(i64::MAX)));
        assert!(!long.is_valid_datum(&Datum::String("1".to_string())));
    }

    #[test]
    fn test_floating_point_accepts_integers() {
        for tag in ["float", "double"] {
            let parsed = schema(&format!("\"{}\"", tag));
            assert!(parsed.is_valid_datum(&Datum::Float(1.5)));
            assert!(parsed.is_valid_datum(&Datum::Int(2)));
            assert!(!parsed.is_valid_datum(&Datum::String("1.5".to_string())));
        }
    }

    #[test]
    fn test_string_and_bytes_accept_either_representation() {
        for tag in ["string", "bytes"] {
            let parsed = schema(&format!("\"{}\"", tag));
            assert!(parsed.is_valid_datum(&Datum::from("abc")));
            assert!(parsed.is_valid_datum(&Datum::from(vec![0u8, 1, 2])));
            assert!(!parsed.is_valid_datum(&Datum::Int(0)));
        }
    }

    #[test]
    fn test_array_reports_element_path() {
        let parsed = schema(r#"{"type": "array", "items": "int"}"#);
        assert!(parsed.is_valid_datum(&Datum::Array(vec![])));
        assert!(parsed.is_valid_datum(&Datum::from(vec![Datum::Int(1), Datum::Int(2)])));

        let error = error_of(&parsed, Datum::from(vec![Datum::Int(1), Datum::from("x")]));
        assert_eq!(error.instance_path.to_string(), "[1]");
        assert_eq!(error.schema_path.to_string(), "array > int");
        assert_eq!(
            error.kind,
            ValidationErrorKind::TypeMismatch {
                expected: "int".to_string(),
                got: "string".to_string(),
            }
        );
    }

    #[test]
    fn test_map_values() {
        let parsed = schema(r#"{"type": "map", "values": "boolean"}"#);
        assert!(parsed.is_valid_datum(&Datum::map([("a", Datum::Boolean(true))])));
        assert!(!parsed.is_valid_datum(&Datum::Array(vec![])));

        let error = error_of(&parsed, Datum::map([("flag", Datum::Null)]));
        assert_eq!(error.instance_path.to_string(), "flag");
    }

    #[test]
    fn test_union_first_match() {
        let parsed = schema(r#"["int", "string"]"#);
        assert!(parsed.is_valid_datum(&Datum::Int(5)));
        assert!(parsed.is_valid_datum(&Datum::from("x")));
        assert!(!parsed.is_valid_datum(&Datum::Float(5.5)));

        let error = error_of(&parsed, Datum::Float(5.5));
        assert_eq!(
            error.kind,
            ValidationErrorKind::NoMatchingBranch {
                branches: vec!["int".to_string(), "string".to_string()],
            }
        );
    }

    #[test]
    fn test_resolve_union_branch_prefers_declaration_order() {
        let parsed = schema(r#"["long", "double"]"#);
        let Schema::Union(union) = parsed.schema() else {
            panic!("Expected union");
        };
        let schemata = parsed.schemata();
        assert_eq!(resolve_union_branch(union, &Datum::Int(1), schemata), Some(0));
        assert_eq!(resolve_union_branch(union, &Datum::Float(1.0), schemata), Some(1));
        assert_eq!(resolve_union_branch(union, &Datum::Null, schemata), None);
    }

    #[test]
    fn test_enum_symbols() {
        let parsed = schema(r#"{"type": "enum", "name": "AB", "symbols": ["A", "B"]}"#);
        assert!(parsed.is_valid_datum(&Datum::from("A")));
        assert!(!parsed.is_valid_datum(&Datum::from("C")));
        assert!(!parsed.is_valid_datum(&Datum::from("a")));
        assert!(!parsed.is_valid_datum(&Datum::Int(0)));

        let error = error_of(&parsed, Datum::from("C"));
        assert_eq!(error.error_code(), "avro-invalid-symbol");
        assert_eq!(error.schema_path.to_string(), "enum:AB");
    }

    #[test]
    fn test_fixed_size() {
        let parsed = schema(r#"{"type": "fixed", "name": "Three", "size": 3}"#);
        assert!(parsed.is_valid_datum(&Datum::from(vec![1u8, 2, 3])));
        assert!(parsed.is_valid_datum(&Datum::from("abc")));
        assert!(!parsed.is_valid_datum(&Datum::from(vec![1u8, 2])));
        assert!(!parsed.is_valid_datum(&Datum::from(vec![1u8, 2, 3, 4])));

        let error = error_of(&parsed, Datum::from(vec![1u8, 2]));
        assert_eq!(
            error.kind,
            ValidationErrorKind::FixedSizeMismatch {
                expected: 3,
                got: 2
            }
        );
    }

    #[test]
    fn test_record_fields_with_and_without_defaults() {
        let parsed = schema(
            r#"{
                "type": "record",
                "name": "Account",
                "fields": [
                    {"name": "id", "type": "long"},
                    {"name": "verified", "type": "boolean", "default": false}
                ]
            }"#,
        );

        let both = Datum::map([("id", Datum::Int(7)), ("verified", Datum::Boolean(true))]);
        let only_id = Datum::map([("id", Datum::Int(7))]);
        let only_verified = Datum::map([("verified", Datum::Boolean(true))]);
        let neither = Datum::map::<&str, _>([]);

        assert!(parsed.is_valid_datum(&both));
        assert!(parsed.is_valid_datum(&only_id));
        assert!(!parsed.is_valid_datum(&only_verified));
        assert!(!parsed.is_valid_datum(&neither));

        let error = error_of(&parsed, only_verified);
        assert_eq!(
            error.kind,
            ValidationErrorKind::MissingField {
                field: "id".to_string()
            }
        );
        assert_eq!(error.instance_path.to_string(), "id");
    }

    #[test]
    fn test_record_checks_every_field() {
        let parsed = schema(
            r#"{
                "type": "record",
                "name": "Pair",
                "fields": [
                    {"name": "left", "type": "int"},
                    {"name": "right", "type": "int"}
                ]
            }"#,
        );
        let bad_right = Datum::map([("left", Datum::Int(1)), ("right", Datum::from("x"))]);
        let error = error_of(&parsed, bad_right);
        assert_eq!(error.instance_path.to_string(), "right");
        assert_eq!(error.schema_path.to_string(), "record:Pair > field:right > int");
    }

    #[test]
    fn test_invalid_default_is_reported_when_substituted() {
        let parsed = schema(
            r#"{
                "type": "record",
                "name": "R",
                "fields": [{"name": "n", "type": "int", "default": "zero"}]
            }"#,
        );
        let field = &parsed.schema().fields().unwrap()[0];
        assert!(!field.default_is_valid(parsed.schemata()));

        // An explicit value hides the bad default
        assert!(parsed.is_valid_datum(&Datum::map([("n", Datum::Int(0))])));

        let error = error_of(&parsed, Datum::map::<&str, _>([]));
        assert_eq!(
            error.kind,
            ValidationErrorKind::InvalidDefault {
                field: "n".to_string()
            }
        );
    }

    #[test]
    fn test_default_leading_back_to_its_own_field_terminates() {
        let parsed = schema(
            r#"{"type": "record", "name": "N", "fields": [{"name": "next", "type": "N", "default": {}}]}"#,
        );
        assert!(!parsed.is_valid_datum(&Datum::map::<&str, _>([])));

        let error = error_of(&parsed, Datum::map::<&str, _>([]));
        assert_eq!(
            error.kind,
            ValidationErrorKind::InvalidDefault {
                field: "next".to_string()
            }
        );

        let field = &parsed.schema().fields().unwrap()[0];
        assert!(!field.default_is_valid(parsed.schemata()));

        // Explicit nesting still bottoms out in the same default
        let chain = Datum::map([("next", Datum::map([("next", Datum::map::<&str, _>([]))]))]);
        assert!(!parsed.is_valid_datum(&chain));
    }

    #[test]
    fn test_self_referential_default_through_union_is_valid() {
        let parsed = schema(
            r#"{
                "type": "record",
                "name": "List",
                "fields": [
                    {"name": "value", "type": "int", "default": 0},
                    {"name": "next", "type": ["null", "List"], "default": null}
                ]
            }"#,
        );
        assert!(parsed.is_valid_datum(&Datum::map::<&str, _>([])));
        assert!(parsed.is_valid_datum(&Datum::map([(
            "next",
            Datum::map([("value", Datum::Int(2))])
        )])));
        let fields = parsed.schema().fields().unwrap();
        assert!(fields.iter().all(|f| f.default_is_valid(parsed.schemata())));
    }

    #[test]
    fn test_null_default_is_substituted() {
        let parsed = schema(
            r#"{
                "type": "record",
                "name": "R",
                "fields": [{"name": "next", "type": ["null", "int"], "default": null}]
            }"#,
        );
        assert!(parsed.is_valid_datum(&Datum::map::<&str, _>([])));
        assert!(parsed.schema().fields().unwrap()[0].default_is_valid(parsed.schemata()));
    }

    #[test]
    fn test_record_rejects_non_map() {
        let parsed = schema(r#"{"type": "record", "name": "Empty", "fields": []}"#);
        assert!(parsed.is_valid_datum(&Datum::map::<&str, _>([])));
        assert!(!parsed.is_valid_datum(&Datum::Null));
        assert!(!parsed.is_valid_datum(&Datum::Array(vec![])));
    }

    #[test]
    fn test_self_referential_tree() {
        let parsed = schema(
            r#"{
                "type": "record",
                "name": "Node",
                "fields": [
                    {"name": "label", "type": "string"},
                    {"name": "children", "type": {"type": "array", "items": "Node"}}
                ]
            }"#,
        );
        let leaf = |label: &str| {
            Datum::map([("label", Datum::from(label)), ("children", Datum::Array(vec![]))])
        };
        let tree = Datum::map([
            ("label", Datum::from("root")),
            ("children", Datum::Array(vec![leaf("a"), leaf("b")])),
        ]);
        assert!(parsed.is_valid_datum(&tree));

        let broken = Datum::map([
            ("label", Datum::from("root")),
            (
                "children",
                Datum::Array(vec![Datum::map([("label", Datum::Int(1))])]),
            ),
        ]);
        let error = error_of(&parsed, broken);
        assert_eq!(error.instance_path.to_string(), "children.[0].label");
        assert_eq!(
            error.schema_path.to_string(),
            "record:Node > field:children > array > record:Node > field:label > string"
        );
    }

    #[test]
    fn test_unresolved_reference() {
        let parsed = schema(r#""int""#);
        let dangling = Schema::Ref(crate::schema::RefSchema::new(
            "missing.Type",
            crate::schema::TypeTag::Record,
        ));
        let error = validate(&Datum::Null, &dangling, parsed.schemata()).unwrap_err();
        assert_eq!(
            error.kind,
            ValidationErrorKind::UnresolvedReference {
                name: "missing.Type".to_string()
            }
        );
        assert!(!is_valid_datum(&dangling, &Datum::Null, parsed.schemata()));
    }

    #[test]
    fn test_error_and_request_validate_like_records() {
        let error_schema = schema(
            r#"{"type": "error", "name": "Failure", "fields": [{"name": "message", "type": "string"}]}"#,
        );
        assert!(error_schema.is_valid_datum(&Datum::map([("message", Datum::from("boom"))])));
        assert!(!error_schema.is_valid_datum(&Datum::map::<&str, _>([])));

        let mut schemata = NamedSchemata::new();
        let request = crate::schema::parse_request(
            &serde_json::json!([{"name": "x", "type": "int"}]),
            None,
            &mut schemata,
        )
        .unwrap();
        assert!(is_valid_datum(&request, &Datum::map([("x", Datum::Int(1))]), &schemata));
        assert!(!is_valid_datum(&request, &Datum::map([("x", Datum::Null)]), &schemata));
    }

    #[test]
    fn test_root_instance_path() {
        let parsed = schema(r#""string""#);
        let error = error_of(&parsed, Datum::Null);
        assert!(error.instance_path.is_empty());
        assert_eq!(
            error.to_string(),
            "Validation error at (root): Expected string, got null"
        );
    }
}
