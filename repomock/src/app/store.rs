//! Fake store
//!
//! Identifier-keyed table behind one repository double. The store owns the
//! canonical entities: reads hand out isolated copies and writes store
//! isolated copies, so callers and the table never alias.

use std::rc::Rc;

use indexmap::IndexMap;

use crate::domain::entities::{Criteria, Entity, Row, Value};
use crate::domain::ports::{MappingMetadata, ObjectFieldAccess};
use crate::error::MockError;

use super::materializer::Materializer;
use super::matcher::CriteriaMatcher;

pub struct FakeStore<M: MappingMetadata> {
    metadata: Rc<M>,
    entity_type: String,
    id_field: String,
    /// Iterated in key-insertion order, not sorted by key
    items: IndexMap<i64, Entity>,
    /// `None` once `i64::MAX` has been used
    next_id: Option<i64>,
}

impl<M: MappingMetadata> FakeStore<M> {
    pub fn new(metadata: Rc<M>, entity_type: impl Into<String>, id_field: impl Into<String>) -> Self {
        Self {
            metadata,
            entity_type: entity_type.into(),
            id_field: id_field.into(),
            items: IndexMap::new(),
            next_id: Some(1),
        }
    }

    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }

    /// Identifier the next insert will receive unless the table holds a larger one
    pub fn next_id(&self) -> Option<i64> {
        self.next_id
    }

    /// Replace the table with entities materialized from `rows`
    ///
    /// Every row must carry its identifier. On failure the previous table
    /// is kept, but callers should treat the store as unusable.
    pub fn reload(&mut self, rows: &[Row]) -> Result<(), MockError> {
        let materializer = Materializer::new(self.metadata.as_ref());

        let mut items = IndexMap::with_capacity(rows.len());
        for row in rows {
            let entity = materializer.materialize_one(&self.entity_type, row)?;
            let id = self
                .identifier_of(&entity)?
                .ok_or_else(|| MockError::MissingIdentifier {
                    entity_type: self.entity_type.clone(),
                    field: self.id_field.clone(),
                })?;
            items.insert(id, entity);
        }

        self.next_id = match items.keys().max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        };
        self.items = items;

        tracing::debug!(
            entity_type = %self.entity_type,
            rows = self.items.len(),
            next_id = ?self.next_id,
            "store loaded"
        );
        Ok(())
    }

    /// Canonical entities, for inspection only
    pub fn contents(&self) -> &IndexMap<i64, Entity> {
        &self.items
    }

    pub fn find_by_id(&self, id: i64) -> Option<Entity> {
        self.items.get(&id).map(Entity::isolated_copy)
    }

    /// First entity in table order satisfying every criterion
    pub fn find_one_matching(&self, criteria: &Criteria) -> Result<Option<Entity>, MockError> {
        let matcher = CriteriaMatcher::new(self.metadata.as_ref());
        for entity in self.items.values() {
            if matcher.matches(criteria, entity)? {
                return Ok(Some(entity.isolated_copy()));
            }
        }
        Ok(None)
    }

    /// Every entity satisfying every criterion, in table order
    pub fn find_all_matching(&self, criteria: &Criteria) -> Result<Vec<Entity>, MockError> {
        let matcher = CriteriaMatcher::new(self.metadata.as_ref());
        let mut found = Vec::new();
        for entity in self.items.values() {
            if matcher.matches(criteria, entity)? {
                found.push(entity.isolated_copy());
            }
        }
        Ok(found)
    }

    pub fn count_matching(&self, criteria: &Criteria) -> Result<usize, MockError> {
        let matcher = CriteriaMatcher::new(self.metadata.as_ref());
        let mut count = 0;
        for entity in self.items.values() {
            if matcher.matches(criteria, entity)? {
                count += 1;
            }
        }
        Ok(count)
    }

    /// Insert or fully replace `entity`
    ///
    /// An entity without identifier gets the next free one, written back
    /// onto `entity`. An entity with an identifier must already be stored.
    pub fn put(&mut self, entity: &mut Entity) -> Result<i64, MockError> {
        let id = match self.identifier_of(entity)? {
            Some(id) => {
                if !self.items.contains_key(&id) {
                    return Err(MockError::NotFound {
                        id,
                        operation: "save",
                    });
                }
                tracing::trace!(entity_type = %self.entity_type, id, "replacing entity");
                id
            }
            None => {
                let after_max = match self.items.keys().max() {
                    Some(max) => max.checked_add(1),
                    None => Some(0),
                };
                let (Some(next_id), Some(after_max)) = (self.next_id, after_max) else {
                    return Err(MockError::IdentifiersExhausted {
                        entity_type: self.entity_type.clone(),
                    });
                };
                let id = next_id.max(after_max);
                entity.set(&self.id_field, Value::Int(id));
                self.next_id = id.checked_add(1);
                tracing::trace!(entity_type = %self.entity_type, id, "assigned identifier");
                id
            }
        };

        self.items.insert(id, entity.isolated_copy());
        Ok(id)
    }

    /// Remove the stored entity with `entity`'s identifier
    pub fn delete(&mut self, entity: &Entity) -> Result<(), MockError> {
        let id = self
            .identifier_of(entity)?
            .ok_or_else(|| MockError::MissingIdentifier {
                entity_type: self.entity_type.clone(),
                field: self.id_field.clone(),
            })?;

        if self.items.shift_remove(&id).is_none() {
            return Err(MockError::NotFound {
                id,
                operation: "remove",
            });
        }
        tracing::trace!(entity_type = %self.entity_type, id, "removed entity");
        Ok(())
    }

    /// `None` for an unassigned or null identifier
    fn identifier_of(&self, entity: &Entity) -> Result<Option<i64>, MockError> {
        match entity.get(&self.id_field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Int(id)) if *id > 0 => Ok(Some(*id)),
            Some(other) => Err(MockError::InvalidIdentifier {
                entity_type: self.entity_type.clone(),
                value: other.to_string(),
            }),
        }
    }
}
