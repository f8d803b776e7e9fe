//! # Schemas
//!
//! A [`Schema`] maps field names to [`FieldDescriptor`]s. Field types are a closed
//! set of tags ([`FieldType`]) checked against the runtime type of JSON values, so
//! a schema is plain data and can be declared in code or loaded from JSON:
//!
//! ```json
//! {
//!   "name": { "type": "string", "required": true },
//!   "age":  { "type": "number", "default": 0 }
//! }
//! ```
//!
//! Declaration order is preserved. It decides the order in which required and
//! type checks run, and therefore which violation is reported first.

use crate::entity::is_reserved;
use crate::error::{FieldError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Number,
    Boolean,
    Object,
    Array,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
            FieldType::Object => "object",
            FieldType::Array => "array",
        }
    }

    /// Tag of a JSON value, or `None` for `null`.
    pub fn of(value: &Value) -> Option<FieldType> {
        match value {
            Value::Null => None,
            Value::Bool(_) => Some(FieldType::Boolean),
            Value::Number(_) => Some(FieldType::Number),
            Value::String(_) => Some(FieldType::String),
            Value::Array(_) => Some(FieldType::Array),
            Value::Object(_) => Some(FieldType::Object),
        }
    }

    pub fn matches(&self, value: &Value) -> bool {
        FieldType::of(value) == Some(*self)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "string" => Ok(FieldType::String),
            "number" => Ok(FieldType::Number),
            "boolean" => Ok(FieldType::Boolean),
            "object" => Ok(FieldType::Object),
            "array" => Ok(FieldType::Array),
            other => Err(FieldError::SchemaViolation(format!(
                "Unknown field type \"{}\"",
                other
            ))),
        }
    }
}

/// Runtime type name of a JSON value as used in validation messages.
pub fn type_name(value: &Value) -> &'static str {
    FieldType::of(value).map_or("null", |t| t.as_str())
}

fn is_false(b: &bool) -> bool {
    !*b
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    #[serde(rename = "type")]
    pub field_type: FieldType,

    #[serde(default, skip_serializing_if = "is_false")]
    pub required: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl FieldDescriptor {
    pub fn new(field_type: FieldType) -> Self {
        Self {
            field_type,
            required: false,
            default: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    fields: Vec<(String, FieldDescriptor)>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field, replacing the descriptor if the name is already declared.
    pub fn field(mut self, name: impl Into<String>, descriptor: FieldDescriptor) -> Self {
        self.insert(name, descriptor);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, descriptor: FieldDescriptor) {
        let name = name.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = descriptor,
            None => self.fields.push((name, descriptor)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, descriptor)| descriptor)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldDescriptor)> {
        self.fields.iter().map(|(n, d)| (n.as_str(), d))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// First declared field that collides with an entity bookkeeping member.
    pub fn reserved_field(&self) -> Option<&str> {
        self.fields
            .iter()
            .map(|(n, _)| n.as_str())
            .find(|n| is_reserved(n))
    }

    /// Parses a JSON object of field descriptors.
    ///
    /// Rejects unknown type tags and defaults that do not match their declared type.
    pub fn from_json(text: &str) -> Result<Self> {
        let raw: Map<String, Value> = serde_json::from_str(text)?;
        let mut schema = Schema::new();

        for (name, value) in raw {
            if is_reserved(&name) {
                return Err(FieldError::SchemaViolation(format!(
                    "Property \"{}\" is reserved",
                    name
                )));
            }
            let descriptor: FieldDescriptor = serde_json::from_value(value)?;
            if let Some(default) = &descriptor.default {
                if !descriptor.field_type.matches(default) {
                    return Err(FieldError::SchemaViolation(format!(
                        "Default for property \"{}\" should be \"{}\" type but got \"{}\"",
                        name,
                        descriptor.field_type,
                        type_name(default)
                    )));
                }
            }
            schema.insert(name, descriptor);
        }

        Ok(schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn type_tags_follow_json_values() {
        assert_eq!(FieldType::of(&json!("a")), Some(FieldType::String));
        assert_eq!(FieldType::of(&json!(1.5)), Some(FieldType::Number));
        assert_eq!(FieldType::of(&json!(true)), Some(FieldType::Boolean));
        assert_eq!(FieldType::of(&json!({})), Some(FieldType::Object));
        assert_eq!(FieldType::of(&json!([])), Some(FieldType::Array));
        assert_eq!(FieldType::of(&Value::Null), None);
        assert_eq!(type_name(&Value::Null), "null");
    }

    #[test]
    fn arrays_are_not_objects() {
        assert!(!FieldType::Object.matches(&json!([1, 2])));
        assert!(FieldType::Array.matches(&json!([1, 2])));
    }

    #[test]
    fn parses_type_names() {
        assert_eq!("boolean".parse::<FieldType>().unwrap(), FieldType::Boolean);
        assert!("date".parse::<FieldType>().is_err());
    }

    #[test]
    fn insert_replaces_existing_field() {
        let schema = Schema::new()
            .field("age", FieldDescriptor::new(FieldType::String))
            .field("age", FieldDescriptor::new(FieldType::Number).with_default(0));

        assert_eq!(schema.len(), 1);
        assert_eq!(schema.get("age").unwrap().field_type, FieldType::Number);
    }

    #[test]
    fn from_json_keeps_declaration_order() {
        let schema = Schema::from_json(
            r#"{
                "name": {"type": "string", "required": true},
                "age": {"type": "number", "default": 0},
                "active": {"type": "boolean"}
            }"#,
        )
        .unwrap();

        let names: Vec<&str> = schema.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["name", "age", "active"]);
        assert!(schema.get("name").unwrap().required);
        assert_eq!(schema.get("age").unwrap().default, Some(json!(0)));
        assert!(!schema.get("active").unwrap().required);
    }

    #[test]
    fn from_json_rejects_unknown_type() {
        let err = Schema::from_json(r#"{"when": {"type": "date"}}"#).unwrap_err();
        assert!(matches!(err, FieldError::Serialization(_)));
    }

    #[test]
    fn from_json_rejects_mistyped_default() {
        let err = Schema::from_json(r#"{"age": {"type": "number", "default": "zero"}}"#)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Default for property \"age\" should be \"number\" type but got \"string\""
        );
    }

    #[test]
    fn reserved_field_detection() {
        let schema = Schema::new()
            .field("name", FieldDescriptor::new(FieldType::String))
            .field("_id", FieldDescriptor::new(FieldType::String));
        assert_eq!(schema.reserved_field(), Some("_id"));
        assert_eq!(Schema::new().reserved_field(), None);
    }

    #[test]
    fn from_json_rejects_reserved_names() {
        let err = Schema::from_json(r#"{"_creationDate": {"type": "number"}}"#).unwrap_err();
        assert_eq!(err.to_string(), "Property \"_creationDate\" is reserved");
    }
}
