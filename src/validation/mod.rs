//! Optional-field UUID rules and the explicit schema validator built on them.
//!
//! Both predicates here treat an absent value as valid: a DTO field that is
//! missing, `null` or `""` simply was not sent. Mandatory identifiers go
//! through [`crate::guard::require_valid_parameter`] instead, which rejects
//! absence.

mod schema;

pub use schema::{FieldKind, FieldRule, InputSchema, SchemaSet};

use serde_json::Value;

use crate::utils::uuid::is_uuid_v4;

fn is_absent(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

/// Rule for a single optional UUID field.
///
/// Absent values pass. Present values must be strings matching the UUID v4
/// pattern; numbers, booleans, arrays and objects are rejected.
pub fn is_valid_single(value: Option<&Value>) -> bool {
    if is_absent(value) {
        return true;
    }
    matches!(value, Some(Value::String(s)) if is_uuid_v4(s))
}

/// Rule for an optional array of UUIDs.
///
/// Only whole-array absence passes. A present array must contain nothing
/// but UUID v4 strings; a `null` or `""` element is rejected. Non-array
/// values are rejected without coercion.
pub fn is_valid_array(values: Option<&Value>) -> bool {
    if is_absent(values) {
        return true;
    }
    match values {
        Some(Value::Array(items)) => items
            .iter()
            .all(|item| matches!(item, Value::String(s) if is_uuid_v4(s))),
        _ => false,
    }
}
