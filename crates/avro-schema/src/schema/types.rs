//! Schema type definitions
//!
//! One struct per schema shape. Each struct carries exactly the attributes of
//! its shape; invariants (unique field names, unique symbols, union rules)
//! are checked by the constructors, so a value of these types is always
//! well formed.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::error::{SchemaParseError, SchemaResult};
use crate::name::{is_valid_identifier, Name};

use super::tag::TypeTag;
use super::Schema;

/// Which record flavour a `RecordSchema` is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Record,
    /// Protocol error payload; validates exactly like a record
    Error,
}

impl RecordKind {
    pub fn tag(&self) -> TypeTag {
        match self {
            RecordKind::Record => TypeTag::Record,
            RecordKind::Error => TypeTag::Error,
        }
    }
}

/// Sort order directive of a record field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldOrder {
    Ascending,
    Descending,
    Ignore,
}

impl FieldOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldOrder::Ascending => "ascending",
            FieldOrder::Descending => "descending",
            FieldOrder::Ignore => "ignore",
        }
    }
}

impl fmt::Display for FieldOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldOrder {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ascending" => Ok(FieldOrder::Ascending),
            "descending" => Ok(FieldOrder::Descending),
            "ignore" => Ok(FieldOrder::Ignore),
            _ => Err(()),
        }
    }
}

/// One member of a record or request
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    name: String,
    schema: Schema,
    default: Option<serde_json::Value>,
    order: Option<FieldOrder>,
    doc: Option<String>,
}

impl Field {
    pub fn new(name: impl Into<String>, schema: Schema) -> SchemaResult<Self> {
        let name = name.into();
        if !is_valid_identifier(&name) {
            return Err(SchemaParseError::InvalidName {
                reason: "field names must be identifiers".to_string(),
                name,
            });
        }
        Ok(Self {
            name,
            schema,
            default: None,
            order: None,
            doc: None,
        })
    }

    /// Declare a default value.
    ///
    /// The value is not checked against the field type here.
    pub fn with_default(mut self, default: serde_json::Value) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_order(mut self, order: FieldOrder) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared type of this field
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    pub fn default_value(&self) -> Option<&serde_json::Value> {
        self.default.as_ref()
    }

    pub fn order(&self) -> Option<FieldOrder> {
        self.order
    }

    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }
}

fn check_unique_fields(owner: &str, fields: &[Field]) -> SchemaResult<()> {
    let mut seen = HashSet::new();
    for field in fields {
        if !seen.insert(field.name()) {
            return Err(SchemaParseError::DuplicateField {
                record: owner.to_string(),
                field: field.name().to_string(),
            });
        }
    }
    Ok(())
}

/// Record (or error) schema
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSchema {
    name: Name,
    doc: Option<String>,
    fields: Vec<Field>,
    kind: RecordKind,
}

impl RecordSchema {
    pub fn new(
        name: Name,
        doc: Option<String>,
        fields: Vec<Field>,
        kind: RecordKind,
    ) -> SchemaResult<Self> {
        check_unique_fields(name.fullname(), &fields)?;
        Ok(Self {
            name,
            doc,
            fields,
            kind,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn fullname(&self) -> &str {
        self.name.fullname()
    }

    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name() == name)
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }
}

/// Protocol message parameter list: a record without a name
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSchema {
    fields: Vec<Field>,
}

impl RequestSchema {
    pub fn new(fields: Vec<Field>) -> SchemaResult<Self> {
        check_unique_fields("request", &fields)?;
        Ok(Self { fields })
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
}

/// Enum schema
#[derive(Debug, Clone, PartialEq)]
pub struct EnumSchema {
    name: Name,
    doc: Option<String>,
    symbols: Vec<String>,
}

impl EnumSchema {
    pub fn new(name: Name, doc: Option<String>, symbols: Vec<String>) -> SchemaResult<Self> {
        let mut seen = HashSet::new();
        for symbol in &symbols {
            if !is_valid_identifier(symbol) {
                return Err(SchemaParseError::InvalidAttribute {
                    attribute: "symbols",
                    message: format!("'{}' is not a valid enum symbol", symbol),
                });
            }
            if !seen.insert(symbol.as_str()) {
                return Err(SchemaParseError::DuplicateSymbol {
                    name: name.fullname().to_string(),
                    symbol: symbol.clone(),
                });
            }
        }
        Ok(Self { name, doc, symbols })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn fullname(&self) -> &str {
        self.name.fullname()
    }

    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Position of `symbol` in declaration order
    pub fn symbol_index(&self, symbol: &str) -> Option<usize> {
        self.symbols.iter().position(|s| s == symbol)
    }
}

/// Array schema
#[derive(Debug, Clone, PartialEq)]
pub struct ArraySchema {
    items: Box<Schema>,
}

impl ArraySchema {
    pub fn new(items: Schema) -> Self {
        Self {
            items: Box::new(items),
        }
    }

    pub fn items(&self) -> &Schema {
        &self.items
    }
}

/// Map schema; keys are always strings
#[derive(Debug, Clone, PartialEq)]
pub struct MapSchema {
    values: Box<Schema>,
}

impl MapSchema {
    pub fn new(values: Schema) -> Self {
        Self {
            values: Box::new(values),
        }
    }

    pub fn values(&self) -> &Schema {
        &self.values
    }
}

/// Uniqueness key of a union branch. Named types are keyed by fullname in
/// their own space, so a type named `map` does not clash with a map branch.
#[derive(Debug, PartialEq, Eq, Hash)]
enum BranchKey {
    Named(String),
    Unnamed(TypeTag),
}

impl fmt::Display for BranchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BranchKey::Named(fullname) => f.write_str(fullname),
            BranchKey::Unnamed(tag) => write!(f, "{}", tag),
        }
    }
}

/// Union schema
#[derive(Debug, Clone, PartialEq)]
pub struct UnionSchema {
    branches: Vec<Schema>,
}

impl UnionSchema {
    /// Build a union, enforcing the branch rules:
    /// - no branch is itself a union
    /// - unnamed branch types appear at most once
    /// - named branch types appear at most once per fully-qualified name
    pub fn new(branches: Vec<Schema>) -> SchemaResult<Self> {
        let mut seen: HashSet<BranchKey> = HashSet::new();
        for branch in &branches {
            if matches!(branch, Schema::Union(_)) {
                return Err(SchemaParseError::InvalidUnion(
                    "unions may not immediately contain other unions".to_string(),
                ));
            }
            let key = match branch.fullname() {
                Some(fullname) => BranchKey::Named(fullname.to_string()),
                None => BranchKey::Unnamed(branch.type_tag()),
            };
            if seen.contains(&key) {
                return Err(SchemaParseError::InvalidUnion(format!(
                    "duplicate branch type {}",
                    key
                )));
            }
            seen.insert(key);
        }
        Ok(Self { branches })
    }

    pub fn branches(&self) -> &[Schema] {
        &self.branches
    }

    pub fn len(&self) -> usize {
        self.branches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }
}

/// Fixed-size byte sequence schema
#[derive(Debug, Clone, PartialEq)]
pub struct FixedSchema {
    name: Name,
    doc: Option<String>,
    size: usize,
}

impl FixedSchema {
    pub fn new(name: Name, doc: Option<String>, size: usize) -> Self {
        Self { name, doc, size }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn fullname(&self) -> &str {
        self.name.fullname()
    }

    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

/// Reference by fully-qualified name to a named type in `NamedSchemata`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RefSchema {
    fullname: String,
    tag: TypeTag,
}

impl RefSchema {
    pub fn new(fullname: impl Into<String>, tag: TypeTag) -> Self {
        Self {
            fullname: fullname.into(),
            tag,
        }
    }

    pub fn fullname(&self) -> &str {
        &self.fullname
    }

    /// Tag of the referenced named type
    pub fn tag(&self) -> TypeTag {
        self.tag
    }
}
