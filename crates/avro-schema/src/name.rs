//! Fully-qualified names for named types
//!
//! Records, enums and fixed types carry a name that may be qualified by a
//! namespace. The namespace is resolved once, when the `Name` is built:
//!
//! 1. A simple name containing `.` is already qualified and is used verbatim.
//! 2. Otherwise an explicit namespace is prepended.
//! 3. Otherwise the default namespace inherited from the enclosing named
//!    type is prepended.
//!
//! An empty namespace string counts as absent.

use crate::error::{SchemaParseError, SchemaResult};
use crate::schema::PrimitiveType;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Separator between namespace components
pub const NAMESPACE_SEPARATOR: char = '.';

static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern is valid"));

/// Whether `s` is a single well-formed identifier
pub fn is_valid_identifier(s: &str) -> bool {
    IDENTIFIER.is_match(s)
}

/// Resolved name of a named type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name {
    name: String,
    namespace: Option<String>,
    fullname: String,
}

impl Name {
    /// Resolve a name against an explicit and a default namespace.
    ///
    /// Every dot-separated component of the result must be a valid
    /// identifier, and the result may not shadow a primitive type name.
    pub fn new(
        name: &str,
        namespace: Option<&str>,
        default_namespace: Option<&str>,
    ) -> SchemaResult<Self> {
        if name.is_empty() {
            return Err(SchemaParseError::InvalidName {
                name: name.to_string(),
                reason: "name must be a non-empty string".to_string(),
            });
        }

        let resolved = Self::resolve(name, namespace, default_namespace);
        resolved.check_grammar()?;

        if resolved.namespace.is_none() && resolved.name.parse::<PrimitiveType>().is_ok() {
            return Err(SchemaParseError::InvalidName {
                name: resolved.fullname,
                reason: "primitive type names cannot be redefined".to_string(),
            });
        }

        Ok(resolved)
    }

    fn resolve(name: &str, namespace: Option<&str>, default_namespace: Option<&str>) -> Self {
        if let Some((ns, simple)) = name.rsplit_once(NAMESPACE_SEPARATOR) {
            return Self {
                name: simple.to_string(),
                namespace: Some(ns.to_string()),
                fullname: name.to_string(),
            };
        }

        let namespace = namespace
            .filter(|ns| !ns.is_empty())
            .or(default_namespace.filter(|ns| !ns.is_empty()));

        match namespace {
            Some(ns) => Self {
                name: name.to_string(),
                namespace: Some(ns.to_string()),
                fullname: format!("{}{}{}", ns, NAMESPACE_SEPARATOR, name),
            },
            None => Self {
                name: name.to_string(),
                namespace: None,
                fullname: name.to_string(),
            },
        }
    }

    fn check_grammar(&self) -> SchemaResult<()> {
        for component in self.fullname.split(NAMESPACE_SEPARATOR) {
            if !is_valid_identifier(component) {
                return Err(SchemaParseError::InvalidName {
                    name: self.fullname.clone(),
                    reason: format!("'{}' is not a valid identifier", component),
                });
            }
        }
        Ok(())
    }

    /// Fully-qualified name a reference at this position would resolve to.
    ///
    /// Performs no grammar checks; used to look up already registered names.
    pub fn qualify(name: &str, default_namespace: Option<&str>) -> String {
        Self::resolve(name, None, default_namespace).fullname
    }

    /// The simple (unqualified) name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// The fully-qualified name, unique within one parse
    pub fn fullname(&self) -> &str {
        &self.fullname
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fullname)
    }
}
