//! Criteria matcher
//!
//! Counts how many criteria fields a candidate satisfies. A candidate
//! qualifies only when every field contributes, so criteria combine with
//! AND while the values of an `AnyOf` criterion combine with OR.

use crate::domain::entities::{Criteria, Criterion, Entity, Value};
use crate::domain::ports::{MappingMetadata, ObjectFieldAccess};
use crate::error::MockError;

pub struct CriteriaMatcher<'m, M: MappingMetadata + ?Sized> {
    metadata: &'m M,
}

impl<'m, M: MappingMetadata + ?Sized> CriteriaMatcher<'m, M> {
    pub fn new(metadata: &'m M) -> Self {
        Self { metadata }
    }

    /// Number of criteria fields `candidate` satisfies
    ///
    /// A field the candidate never assigned contributes nothing and is not
    /// an error, so such a candidate cannot qualify on that field.
    pub fn match_count(&self, criteria: &Criteria, candidate: &Entity) -> Result<usize, MockError> {
        let mut count = 0;
        for (field, criterion) in criteria.iter() {
            if !self.metadata.declares_field(candidate.entity_type(), field) {
                return Err(MockError::UnknownField {
                    entity_type: candidate.entity_type().to_string(),
                    field: field.to_string(),
                });
            }

            let Some(actual) = candidate.get(field) else {
                continue;
            };

            let matched = match criterion {
                Criterion::Equals(expected) => self.value_matches(expected, actual),
                Criterion::AnyOf(options) => options
                    .iter()
                    .any(|expected| self.value_matches(expected, actual)),
            };
            if matched {
                count += 1;
            }
        }
        Ok(count)
    }

    pub fn matches(&self, criteria: &Criteria, candidate: &Entity) -> Result<bool, MockError> {
        Ok(self.match_count(criteria, candidate)? == criteria.len())
    }

    fn value_matches(&self, expected: &Value, actual: &Value) -> bool {
        match (expected, actual) {
            (Value::DateTime(expected), Value::DateTime(actual)) => expected == actual,
            (Value::DateTime(_), _) => false,
            (Value::Entity(expected), Value::Entity(actual)) => self.same_identity(expected, actual),
            (Value::Entity(_), _) => false,
            // collections expose no identifier
            (Value::Collection(_), _) => false,
            (expected, actual) => expected == actual,
        }
    }

    fn same_identity(&self, expected: &Entity, actual: &Entity) -> bool {
        if expected.entity_type() != actual.entity_type() {
            return false;
        }
        let Some(id_field) = self.metadata.identifier_field(expected.entity_type()) else {
            return false;
        };
        matches!(
            (expected.get(id_field), actual.get(id_field)),
            (Some(left), Some(right)) if left == right
        )
    }
}
