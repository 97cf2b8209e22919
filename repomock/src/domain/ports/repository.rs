//! Repository port traits
//!
//! `EntityRepository` is what code under test depends on. `StoreControl`
//! is the extra surface a test uses to seed and inspect a double.

use std::cell::Ref;

use indexmap::IndexMap;

use crate::domain::entities::{Criteria, Entity, Row};
use crate::error::MockError;

/// Query and mutation surface of an entity repository
pub trait EntityRepository {
    /// Find an entity by identifier
    fn find(&self, id: i64) -> Result<Option<Entity>, MockError>;

    /// First entity matching every criterion
    fn find_one_by(&self, criteria: &Criteria) -> Result<Option<Entity>, MockError>;

    /// All entities matching every criterion
    fn find_by(&self, criteria: &Criteria) -> Result<Vec<Entity>, MockError>;

    fn find_all(&self) -> Result<Vec<Entity>, MockError>;

    /// Number of entities matching every criterion
    fn count(&self, criteria: &Criteria) -> Result<usize, MockError>;

    /// Insert or replace; a new entity receives its identifier in place
    fn save(&self, entity: &mut Entity) -> Result<(), MockError>;

    fn remove(&self, entity: &Entity) -> Result<(), MockError>;
}

/// Test-control surface of a repository double
pub trait StoreControl {
    /// Replace the whole table with entities materialized from `rows`
    fn load_store(&self, rows: Vec<Row>) -> Result<(), MockError>;

    /// Read-only view of the canonical stored entities keyed by identifier
    fn store_content(&self) -> Ref<'_, IndexMap<i64, Entity>>;
}
