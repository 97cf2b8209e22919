//! Relationship resolver
//!
//! Decides how a row field is materialized. Only the mapping metadata is
//! consulted; a composite value on a field without an association is an
//! error rather than a guess.

use crate::domain::entities::RowValue;
use crate::domain::ports::{Cardinality, MappingMetadata};
use crate::error::MockError;

/// How a field value is materialized
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Scalar,
    ToOne(String),
    ToMany(String),
}

pub struct RelationshipResolver<'m, M: MappingMetadata + ?Sized> {
    metadata: &'m M,
}

impl<'m, M: MappingMetadata + ?Sized> RelationshipResolver<'m, M> {
    pub fn new(metadata: &'m M) -> Self {
        Self { metadata }
    }

    pub fn resolve(
        &self,
        entity_type: &str,
        field: &str,
        value: &RowValue,
    ) -> Result<Resolution, MockError> {
        if !value.is_composite() {
            return Ok(Resolution::Scalar);
        }

        let association = self.metadata.association(entity_type, field).ok_or_else(|| {
            MockError::UnsupportedMapping {
                entity_type: entity_type.to_string(),
                field: field.to_string(),
            }
        })?;

        let element_type = association
            .element_type
            .ok_or_else(|| MockError::MissingTargetType {
                entity_type: entity_type.to_string(),
                field: field.to_string(),
            })?;

        Ok(match association.cardinality {
            Cardinality::One => Resolution::ToOne(element_type),
            Cardinality::Many => Resolution::ToMany(element_type),
        })
    }
}
