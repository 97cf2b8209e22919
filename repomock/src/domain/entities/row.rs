//! Row descriptions
//!
//! Tree-shaped input from which entities are materialized. A nested row
//! describes a to-one association, a list of rows a to-many association.

use indexmap::IndexMap;

use super::Value;
use crate::error::MockError;

/// One field of a row description
#[derive(Debug, Clone, PartialEq)]
pub enum RowValue {
    Value(Value),
    Row(Row),
    Rows(Vec<Row>),
}

impl RowValue {
    /// Composite values are only legal for declared associations
    pub fn is_composite(&self) -> bool {
        !matches!(self, RowValue::Value(_))
    }
}

/// Ordered `field -> value` description of one entity
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    fields: IndexMap<String, RowValue>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.fields
            .insert(field.to_string(), RowValue::Value(value.into()));
        self
    }

    pub fn nested(mut self, field: &str, row: Row) -> Self {
        self.fields.insert(field.to_string(), RowValue::Row(row));
        self
    }

    pub fn rows(mut self, field: &str, rows: Vec<Row>) -> Self {
        self.fields.insert(field.to_string(), RowValue::Rows(rows));
        self
    }

    pub fn get(&self, field: &str) -> Option<&RowValue> {
        self.fields.get(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RowValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Build a row from a JSON object
    ///
    /// Objects become nested rows and arrays of objects become row lists.
    /// Integral numbers map to [`Value::Int`], other numbers to [`Value::Float`].
    /// Integers outside the `i64` range are rejected.
    pub fn from_json(json: &serde_json::Value) -> Result<Self, MockError> {
        let object = json
            .as_object()
            .ok_or_else(|| invalid("<row>", "expected a JSON object"))?;

        let mut row = Row::new();
        for (field, value) in object {
            let value = row_value_from_json(field, value)?;
            row.fields.insert(field.clone(), value);
        }
        Ok(row)
    }
}

/// Build the row list passed to a store load from a JSON array of objects
pub fn rows_from_json(json: &serde_json::Value) -> Result<Vec<Row>, MockError> {
    json.as_array()
        .ok_or_else(|| invalid("<rows>", "expected a JSON array of objects"))?
        .iter()
        .map(Row::from_json)
        .collect()
}

fn row_value_from_json(field: &str, json: &serde_json::Value) -> Result<RowValue, MockError> {
    use serde_json::Value as Json;

    let value = match json {
        Json::Null => RowValue::Value(Value::Null),
        Json::Bool(value) => RowValue::Value(Value::Bool(*value)),
        Json::Number(number) => match (number.as_i64(), number.as_f64()) {
            (Some(int), _) => RowValue::Value(Value::Int(int)),
            (None, _) if number.is_u64() => {
                return Err(invalid(field, "integer does not fit in i64"))
            }
            (None, Some(float)) => RowValue::Value(Value::Float(float)),
            (None, None) => return Err(invalid(field, "number is not representable")),
        },
        Json::String(text) => RowValue::Value(Value::Text(text.clone())),
        Json::Object(_) => RowValue::Row(Row::from_json(json)?),
        Json::Array(items) => {
            let rows = items
                .iter()
                .map(|item| {
                    if item.is_object() {
                        Row::from_json(item)
                    } else {
                        Err(invalid(field, "list items must be objects"))
                    }
                })
                .collect::<Result<Vec<_>, _>>()?;
            RowValue::Rows(rows)
        }
    };
    Ok(value)
}

fn invalid(field: &str, reason: &str) -> MockError {
    MockError::InvalidRowDescription {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
