//! Field values

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::Entity;

/// A value held by an entity field
///
/// Equality is strict: `Int(1)` and `Float(1.0)` are different values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    DateTime(DateTime<Utc>),
    Entity(Box<Entity>),
    Collection(Vec<Entity>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_datetime(&self) -> Option<&DateTime<Utc>> {
        match self {
            Value::DateTime(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_entity(&self) -> Option<&Entity> {
        match self {
            Value::Entity(entity) => Some(entity),
            _ => None,
        }
    }

    pub fn as_collection(&self) -> Option<&[Entity]> {
        match self {
            Value::Collection(entities) => Some(entities),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(value) => write!(f, "{}", value),
            Value::Int(value) => write!(f, "{}", value),
            Value::Float(value) => write!(f, "{}", value),
            Value::Text(value) => write!(f, "\"{}\"", value),
            Value::DateTime(value) => write!(f, "{}", value.to_rfc3339()),
            Value::Entity(entity) => write!(f, "{}", entity.entity_type()),
            Value::Collection(entities) => write!(f, "collection({})", entities.len()),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::DateTime(value)
    }
}

impl From<Entity> for Value {
    fn from(entity: Entity) -> Self {
        Value::Entity(Box::new(entity))
    }
}

impl From<Vec<Entity>> for Value {
    fn from(entities: Vec<Entity>) -> Self {
        Value::Collection(entities)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn equality_is_strict_across_numeric_kinds() {
        assert_ne!(Value::Int(1), Value::Float(1.0));
        assert_eq!(Value::Null, Value::Null);
        assert_eq!(Value::from(Some("a")), Value::Text("a".to_string()));
        assert_eq!(Value::from(None::<i64>), Value::Null);
    }

    #[test]
    fn datetimes_compare_by_value() {
        let a = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let b = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        assert_eq!(Value::from(a), Value::from(b));
    }
}
