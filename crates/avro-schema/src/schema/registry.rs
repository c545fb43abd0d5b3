//! Named type registry
//!
//! Every record, enum and fixed type met during a parse is registered here
//! under its fully-qualified name. A name is *declared* before the body of
//! its type is parsed, so the body (or any type nested in it) can refer back
//! to it; once the body is complete the name is *defined* with the finished
//! schema. References in the schema graph are plain names looked up here,
//! which is how cyclic types are represented without cyclic ownership.

use std::collections::HashMap;

use crate::error::{SchemaParseError, SchemaResult};
use crate::name::Name;

use super::tag::TypeTag;
use super::Schema;

#[derive(Debug, Clone, PartialEq)]
enum Entry {
    /// Registered, body still being parsed
    Declared(TypeTag),
    Defined(Schema),
}

/// Registry of named types keyed by fully-qualified name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NamedSchemata {
    entries: HashMap<String, Entry>,
}

impl NamedSchemata {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Claim a fully-qualified name for a named type whose body is about to
    /// be parsed. Fails if the name is already taken.
    pub fn declare(&mut self, name: &Name, tag: TypeTag) -> SchemaResult<()> {
        if self.entries.contains_key(name.fullname()) {
            return Err(SchemaParseError::DuplicateName(name.fullname().to_string()));
        }
        tracing::debug!(name = %name, tag = %tag, "Registered named schema");
        self.entries
            .insert(name.fullname().to_string(), Entry::Declared(tag));
        Ok(())
    }

    /// Store the finished definition of a previously declared name
    pub(crate) fn define(&mut self, schema: Schema) {
        if let Some(fullname) = schema.fullname() {
            self.entries
                .insert(fullname.to_string(), Entry::Defined(schema));
        }
    }

    /// Register a complete named schema in one step.
    ///
    /// Used by callers that assemble schemas programmatically and want them
    /// to be referenceable from schemas parsed later.
    pub fn register(&mut self, schema: Schema) -> SchemaResult<()> {
        let Some(name) = schema.name().cloned() else {
            return Err(SchemaParseError::InvalidAttribute {
                attribute: "name",
                message: format!("only named types can be registered, got {}", schema.type_tag()),
            });
        };
        self.declare(&name, schema.type_tag())?;
        self.define(schema);
        Ok(())
    }

    pub fn contains(&self, fullname: &str) -> bool {
        self.entries.contains_key(fullname)
    }

    /// The finished definition for `fullname`, if defined
    pub fn get(&self, fullname: &str) -> Option<&Schema> {
        match self.entries.get(fullname) {
            Some(Entry::Defined(schema)) => Some(schema),
            _ => None,
        }
    }

    /// Tag of the named type registered as `fullname`
    pub fn tag_of(&self, fullname: &str) -> Option<TypeTag> {
        self.entries.get(fullname).map(|entry| match entry {
            Entry::Declared(tag) => *tag,
            Entry::Defined(schema) => schema.type_tag(),
        })
    }

    /// Resolve a type reference written at a position whose default
    /// namespace is `default_namespace`.
    ///
    /// The reference is first qualified with the default namespace; if that
    /// name is unknown the reference is tried verbatim.
    pub fn resolve_reference(
        &self,
        reference: &str,
        default_namespace: Option<&str>,
    ) -> Option<&str> {
        let qualified = Name::qualify(reference, default_namespace);
        if let Some((key, _)) = self.entries.get_key_value(qualified.as_str()) {
            return Some(key.as_str());
        }
        self.entries
            .get_key_value(reference)
            .map(|(key, _)| key.as_str())
    }

    /// Fully-qualified names of every registered type, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
