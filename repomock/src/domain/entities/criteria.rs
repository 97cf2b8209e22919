//! Query criteria

use indexmap::IndexMap;

use super::Value;

/// Filter for one field
#[derive(Debug, Clone, PartialEq)]
pub enum Criterion {
    Equals(Value),
    /// Matches when any listed value matches
    AnyOf(Vec<Value>),
}

/// Field filters combined with AND
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Criteria {
    fields: IndexMap<String, Criterion>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn equals(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.fields
            .insert(field.to_string(), Criterion::Equals(value.into()));
        self
    }

    pub fn any_of<V: Into<Value>>(mut self, field: &str, values: impl IntoIterator<Item = V>) -> Self {
        let values = values.into_iter().map(Into::into).collect();
        self.fields.insert(field.to_string(), Criterion::AnyOf(values));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Criterion)> {
        self.fields.iter().map(|(name, criterion)| (name.as_str(), criterion))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
