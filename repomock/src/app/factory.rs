//! Repository double factory
//!
//! Builds stand-ins for entity repositories. Each double owns one
//! [`FakeStore`] and binds the repository operations to it: the query
//! operations always, `save` and `remove` only when the repository type
//! declares them.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use indexmap::IndexMap;

use crate::config::Config;
use crate::domain::entities::{Criteria, Entity, Row};
use crate::domain::ports::{EntityRepository, MappingMetadata, StoreControl};
use crate::error::MockError;

use super::store::FakeStore;

/// Repository operation a double can bind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Find,
    FindOneBy,
    FindBy,
    FindAll,
    Count,
    Save,
    Remove,
}

impl Operation {
    const ALWAYS_BOUND: [Operation; 5] = [
        Operation::Find,
        Operation::FindOneBy,
        Operation::FindBy,
        Operation::FindAll,
        Operation::Count,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::Find => "find",
            Operation::FindOneBy => "findOneBy",
            Operation::FindBy => "findBy",
            Operation::FindAll => "findAll",
            Operation::Count => "count",
            Operation::Save => "save",
            Operation::Remove => "remove",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Creates repository doubles backed by shared mapping metadata
pub struct DoubleFactory<M: MappingMetadata> {
    metadata: Rc<M>,
    config: Config,
}

impl<M: MappingMetadata> DoubleFactory<M> {
    pub fn new(metadata: M) -> Self {
        Self::with_config(metadata, Config::default())
    }

    pub fn with_config(metadata: M, config: Config) -> Self {
        Self {
            metadata: Rc::new(metadata),
            config,
        }
    }

    pub fn metadata(&self) -> &M {
        &self.metadata
    }

    /// Create a double for `repository`
    ///
    /// Without an explicit `entity_type`, the type is taken from the first
    /// parameter of the repository's `save` operation.
    pub fn create_double(
        &self,
        repository: &str,
        entity_type: Option<&str>,
    ) -> Result<RepositoryDouble<M>, MockError> {
        let repository_type = self
            .metadata
            .repository(repository)
            .filter(|repository_type| repository_type.is_entity_repository())
            .ok_or_else(|| MockError::InvalidRepositoryType(repository.to_string()))?;

        let entity_type = match entity_type.filter(|name| !name.is_empty()) {
            Some(name) => name.to_string(),
            None => repository_type
                .operations
                .get(Operation::Save.name())
                .and_then(|save| save.parameter_type.clone())
                .ok_or_else(|| MockError::EntityTypeUndetermined(repository.to_string()))?,
        };

        if !self.metadata.declares_type(&entity_type) {
            return Err(MockError::UnknownEntityType(entity_type));
        }

        let id_field = self
            .metadata
            .identifier_field(&entity_type)
            .unwrap_or(self.config.default_id_field.as_str())
            .to_string();

        let mut bound = Operation::ALWAYS_BOUND.to_vec();
        for optional in [Operation::Save, Operation::Remove] {
            if repository_type.declares(optional.name()) {
                bound.push(optional);
            }
        }

        tracing::debug!(
            repository,
            entity_type = %entity_type,
            operations = ?bound,
            "created repository double"
        );

        Ok(RepositoryDouble {
            repository: repository.to_string(),
            store: RefCell::new(FakeStore::new(Rc::clone(&self.metadata), entity_type, id_field)),
            bound,
        })
    }
}

/// Stand-in for an entity repository
///
/// Single-threaded: the store sits in a `RefCell` and every operation
/// finishes before it returns.
pub struct RepositoryDouble<M: MappingMetadata> {
    repository: String,
    store: RefCell<FakeStore<M>>,
    bound: Vec<Operation>,
}

impl<M: MappingMetadata> RepositoryDouble<M> {
    pub fn repository(&self) -> &str {
        &self.repository
    }

    pub fn entity_type(&self) -> String {
        self.store.borrow().entity_type().to_string()
    }

    /// Operations bound on this double
    pub fn operations(&self) -> &[Operation] {
        &self.bound
    }

    pub fn supports(&self, operation: Operation) -> bool {
        self.bound.contains(&operation)
    }

    /// JSON object of the stored entities keyed by identifier
    pub fn dump(&self) -> Result<serde_json::Value, MockError> {
        let store = self.store.borrow();
        serde_json::to_value(store.contents())
            .map_err(|e| MockError::Serialization(e.to_string()))
    }

    fn guard(&self, operation: Operation) -> Result<(), MockError> {
        if self.supports(operation) {
            Ok(())
        } else {
            Err(MockError::OperationNotMocked {
                repository: self.repository.clone(),
                operation: operation.name(),
            })
        }
    }
}

impl<M: MappingMetadata> EntityRepository for RepositoryDouble<M> {
    fn find(&self, id: i64) -> Result<Option<Entity>, MockError> {
        self.guard(Operation::Find)?;
        Ok(self.store.borrow().find_by_id(id))
    }

    fn find_one_by(&self, criteria: &Criteria) -> Result<Option<Entity>, MockError> {
        self.guard(Operation::FindOneBy)?;
        self.store.borrow().find_one_matching(criteria)
    }

    fn find_by(&self, criteria: &Criteria) -> Result<Vec<Entity>, MockError> {
        self.guard(Operation::FindBy)?;
        self.store.borrow().find_all_matching(criteria)
    }

    fn find_all(&self) -> Result<Vec<Entity>, MockError> {
        self.guard(Operation::FindAll)?;
        self.store.borrow().find_all_matching(&Criteria::new())
    }

    fn count(&self, criteria: &Criteria) -> Result<usize, MockError> {
        self.guard(Operation::Count)?;
        self.store.borrow().count_matching(criteria)
    }

    fn save(&self, entity: &mut Entity) -> Result<(), MockError> {
        self.guard(Operation::Save)?;
        self.store.borrow_mut().put(entity).map(|_| ())
    }

    fn remove(&self, entity: &Entity) -> Result<(), MockError> {
        self.guard(Operation::Remove)?;
        self.store.borrow_mut().delete(entity)
    }
}

impl<M: MappingMetadata> StoreControl for RepositoryDouble<M> {
    fn load_store(&self, rows: Vec<Row>) -> Result<(), MockError> {
        self.store.borrow_mut().reload(&rows)
    }

    fn store_content(&self) -> Ref<'_, IndexMap<i64, Entity>> {
        Ref::map(self.store.borrow(), FakeStore::contents)
    }
}
