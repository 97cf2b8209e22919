//! Materialized entity instances

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;

use super::Value;
use crate::domain::ports::ObjectFieldAccess;

/// An instance of a declared entity type
///
/// A field missing from the map has never been assigned. That is different
/// from a field holding [`Value::Null`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entity {
    #[serde(skip)]
    entity_type: String,
    #[serde(flatten)]
    fields: IndexMap<String, Value>,
}

impl Entity {
    /// Bare instance with no field assigned
    pub fn new(entity_type: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            fields: IndexMap::new(),
        }
    }

    /// Builder form of [`ObjectFieldAccess::set`]
    pub fn with(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.set(field, value.into());
        self
    }

    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }

    /// Assigned fields in assignment order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Deep copy that shares nothing with `self`
    pub fn isolated_copy(&self) -> Self {
        self.clone()
    }

    pub fn int(&self, field: &str) -> Option<i64> {
        self.get(field).and_then(Value::as_i64)
    }

    pub fn text(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    pub fn datetime(&self, field: &str) -> Option<&DateTime<Utc>> {
        self.get(field).and_then(Value::as_datetime)
    }

    pub fn related(&self, field: &str) -> Option<&Entity> {
        self.get(field).and_then(Value::as_entity)
    }

    pub fn related_many(&self, field: &str) -> Option<&[Entity]> {
        self.get(field).and_then(Value::as_collection)
    }
}

impl ObjectFieldAccess for Entity {
    fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    fn set(&mut self, field: &str, value: Value) {
        self.fields.insert(field.to_string(), value);
    }
}
