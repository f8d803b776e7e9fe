//! # Models
//!
//! A [`Model`] binds a name to a [`Schema`] and derives the remote collection the
//! model lives in. It is the entity builder: options go in, a validated
//! [`Entity`] (or a schema violation) comes out. It never touches the network;
//! remote operations live on [`Collection`](crate::collection::Collection).

use crate::entity::Entity;
use crate::error::{FieldError, Result};
use crate::ident::{IdProvider, UuidIds};
use crate::schema::Schema;
use crate::validator;
use chrono::Utc;
use serde_json::{Map, Value};

/// Lowercases the model name and appends `es` when it ends in `s`, `s` otherwise.
pub fn collection_name(model_name: &str) -> String {
    let suffix = if model_name.ends_with('s') { "es" } else { "s" };
    format!("{}{}", model_name.to_lowercase(), suffix)
}

#[derive(Debug, Clone)]
pub struct Model {
    name: String,
    collection: String,
    schema: Schema,
}

impl Model {
    pub fn new(name: impl Into<String>, schema: Schema) -> Self {
        let name = name.into();
        let collection = collection_name(&name);
        Self {
            name,
            collection,
            schema,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn collection_name(&self) -> &str {
        &self.collection
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Builds a new entity with a random id.
    pub fn build(&self, options: &Value) -> Result<Entity> {
        self.build_with(options, &UuidIds)
    }

    /// Builds a new entity, drawing its id from `ids`.
    ///
    /// Required fields are checked first, then unknown keys and types. Every
    /// schema field is then taken from `options`, else the declared default,
    /// else `null`.
    pub fn build_with(&self, options: &Value, ids: &dyn IdProvider) -> Result<Entity> {
        if let Some(reserved) = self.schema.reserved_field() {
            return Err(FieldError::SchemaViolation(format!(
                "Property \"{}\" is reserved on type {}",
                reserved,
                validator::capitalize(&self.name)
            )));
        }
        let options = validator::as_object(options, &self.name)?;
        validator::check_required(&self.schema, options, &self.name)?;
        validator::validate(&self.schema, options, &self.name)?;

        let mut fields = Map::with_capacity(self.schema.len());
        for (key, descriptor) in self.schema.iter() {
            let value = options
                .get(key)
                .or(descriptor.default.as_ref())
                .cloned()
                .unwrap_or(Value::Null);
            fields.insert(key.to_string(), value);
        }

        Ok(Entity::new(
            ids.next_id(),
            Utc::now().timestamp_millis(),
            fields,
        ))
    }

    /// Checks a filter or update object: unknown keys and types, no required check.
    ///
    /// Returns the object on success; `null` counts as no filter.
    pub fn check_filter<'a>(&self, filter: &'a Value) -> Result<Option<&'a Map<String, Value>>> {
        if filter.is_null() {
            return Ok(None);
        }
        let filter = validator::as_object(filter, &self.name)?;
        validator::validate(&self.schema, filter, &self.name)?;
        Ok(Some(filter))
    }
}
