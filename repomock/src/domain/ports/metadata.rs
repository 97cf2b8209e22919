//! Mapping metadata port
//!
//! Answers what the persistence mapping declares about entity and repository
//! types. The engine never infers structure from the shape of row data.

use indexmap::IndexMap;

/// Association cardinality
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    One,
    Many,
}

/// Declared association of one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociationMeta {
    pub cardinality: Cardinality,
    /// Declared static type for to-one, explicit target entity for to-many
    pub element_type: Option<String>,
}

/// Base type a repository type derives from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryBase {
    ServiceEntityRepository,
    EntityRepository,
}

/// Public operation declared by a repository type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOperation {
    /// Declared type of the first parameter, `None` when untyped
    pub parameter_type: Option<String>,
}

/// Introspected shape of a repository type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryType {
    pub name: String,
    pub base: Option<RepositoryBase>,
    pub operations: IndexMap<String, RepositoryOperation>,
}

impl RepositoryType {
    pub fn new(name: impl Into<String>, base: Option<RepositoryBase>) -> Self {
        Self {
            name: name.into(),
            base,
            operations: IndexMap::new(),
        }
    }

    pub fn with_operation(mut self, name: &str, parameter_type: Option<&str>) -> Self {
        self.operations.insert(
            name.to_string(),
            RepositoryOperation {
                parameter_type: parameter_type.map(str::to_string),
            },
        );
        self
    }

    pub fn declares(&self, operation: &str) -> bool {
        self.operations.contains_key(operation)
    }

    /// Whether the type derives from an entity repository base
    pub fn is_entity_repository(&self) -> bool {
        self.base.is_some()
    }
}

/// Source of persistence-mapping metadata
pub trait MappingMetadata {
    fn declares_type(&self, entity_type: &str) -> bool;

    fn declares_field(&self, entity_type: &str, field: &str) -> bool;

    /// Association declared on `field`, `None` for plain columns
    fn association(&self, entity_type: &str, field: &str) -> Option<AssociationMeta>;

    /// Identifier field of `entity_type`, `None` when it declares no accessor
    fn identifier_field(&self, entity_type: &str) -> Option<&str>;

    fn repository(&self, name: &str) -> Option<&RepositoryType>;
}
