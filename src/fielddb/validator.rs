//! Schema validation for candidate objects (construction options, filters, updates).
//!
//! All checks are pure and stop at the first violation.

use crate::error::{FieldError, Result};
use crate::schema::{type_name, Schema};
use serde_json::{Map, Value};

/// Uppercases the first character only.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Rejects keys absent from the schema, then values whose type differs from the declared one.
pub fn validate(schema: &Schema, candidate: &Map<String, Value>, model_name: &str) -> Result<()> {
    for key in candidate.keys() {
        if !schema.contains(key) {
            return Err(FieldError::SchemaViolation(format!(
                "Property \"{}\" does not exist on type {}",
                key,
                capitalize(model_name)
            )));
        }
    }

    for (key, descriptor) in schema.iter() {
        if let Some(value) = candidate.get(key) {
            if !descriptor.field_type.matches(value) {
                return Err(FieldError::SchemaViolation(format!(
                    "Property \"{}\" should be \"{}\" type but got \"{}\"",
                    key,
                    descriptor.field_type,
                    type_name(value)
                )));
            }
        }
    }

    Ok(())
}

/// Construction-only check: every required schema key must be present.
pub fn check_required(
    schema: &Schema,
    candidate: &Map<String, Value>,
    model_name: &str,
) -> Result<()> {
    for (key, descriptor) in schema.iter() {
        if descriptor.required && !candidate.contains_key(key) {
            return Err(FieldError::SchemaViolation(format!(
                "Property \"{}\" is required on type {}",
                key,
                capitalize(model_name)
            )));
        }
    }
    Ok(())
}

/// Borrows the object behind a candidate value, rejecting anything else.
pub fn as_object<'a>(value: &'a Value, model_name: &str) -> Result<&'a Map<String, Value>> {
    value.as_object().ok_or_else(|| {
        FieldError::SchemaViolation(format!(
            "Expected an object for type {} but got \"{}\"",
            capitalize(model_name),
            type_name(value)
        ))
    })
}
