//! Schema parser modules
//!
//! One module per schema shape:
//! - named: name/namespace resolution shared by record, enum and fixed
//! - record: records, errors and field lists
//! - enum: enumerations
//! - fixed: fixed-size byte sequences
//! - collections: arrays and maps
//! - union: unions (bare JSON arrays)

pub(super) mod collections;
pub(super) mod r#enum;
pub(super) mod fixed;
pub(super) mod named;
pub(super) mod record;
pub(super) mod union;

// Re-export parser functions for use within the schema module
pub(super) use collections::{parse_array_schema, parse_map_schema};
pub(super) use r#enum::parse_enum_schema;
pub(super) use fixed::parse_fixed_schema;
pub(super) use record::{parse_fields, parse_record_schema};
pub(super) use union::parse_union_schema;
