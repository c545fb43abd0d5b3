//! Type tags
//!
//! `TypeTag` is the closed set of values the `type` attribute may take.
//! `PrimitiveType` is the subset that needs no attributes.

use std::fmt;
use std::str::FromStr;

/// The eight primitive types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Null,
    Boolean,
    Int,
    Long,
    Float,
    Double,
    Bytes,
    String,
}

impl PrimitiveType {
    pub const ALL: [PrimitiveType; 8] = [
        PrimitiveType::Null,
        PrimitiveType::Boolean,
        PrimitiveType::Int,
        PrimitiveType::Long,
        PrimitiveType::Float,
        PrimitiveType::Double,
        PrimitiveType::Bytes,
        PrimitiveType::String,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveType::Null => "null",
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
            PrimitiveType::Bytes => "bytes",
            PrimitiveType::String => "string",
        }
    }

    pub fn tag(&self) -> TypeTag {
        TypeTag::Primitive(*self)
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrimitiveType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PrimitiveType::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or(())
    }
}

/// Every valid value of the `type` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Primitive(PrimitiveType),
    Record,
    Enum,
    Array,
    Map,
    Union,
    Fixed,
    /// Record flavour used for protocol error payloads
    Error,
    /// Union of protocol errors; recognized but never parsed standalone
    ErrorUnion,
    /// Protocol message parameter list
    Request,
}

impl TypeTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::Primitive(p) => p.as_str(),
            TypeTag::Record => "record",
            TypeTag::Enum => "enum",
            TypeTag::Array => "array",
            TypeTag::Map => "map",
            TypeTag::Union => "union",
            TypeTag::Fixed => "fixed",
            TypeTag::Error => "error",
            TypeTag::ErrorUnion => "error_union",
            TypeTag::Request => "request",
        }
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeTag::Primitive(_))
    }

    /// record, enum, array, map, union, fixed
    pub fn is_complex(&self) -> bool {
        matches!(
            self,
            TypeTag::Record
                | TypeTag::Enum
                | TypeTag::Array
                | TypeTag::Map
                | TypeTag::Union
                | TypeTag::Fixed
        )
    }

    /// Types that carry a name and are registered for reference.
    ///
    /// `error` is a record flavour, so it is named too.
    pub fn is_named(&self) -> bool {
        matches!(
            self,
            TypeTag::Record | TypeTag::Enum | TypeTag::Fixed | TypeTag::Error
        )
    }

    pub fn is_unnamed(&self) -> bool {
        matches!(self, TypeTag::Array | TypeTag::Map | TypeTag::Union)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeTag {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(p) = s.parse::<PrimitiveType>() {
            return Ok(TypeTag::Primitive(p));
        }
        match s {
            "record" => Ok(TypeTag::Record),
            "enum" => Ok(TypeTag::Enum),
            "array" => Ok(TypeTag::Array),
            "map" => Ok(TypeTag::Map),
            "union" => Ok(TypeTag::Union),
            "fixed" => Ok(TypeTag::Fixed),
            "error" => Ok(TypeTag::Error),
            "error_union" => Ok(TypeTag::ErrorUnion),
            "request" => Ok(TypeTag::Request),
            _ => Err(()),
        }
    }
}
