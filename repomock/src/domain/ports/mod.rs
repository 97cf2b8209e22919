//! Domain ports (traits)
//!
//! Port traits define the collaborators the engine consumes and the surface
//! a repository double exposes to code under test.

pub mod field_access;
pub mod metadata;
pub mod repository;

pub use field_access::ObjectFieldAccess;
pub use metadata::{
    AssociationMeta, Cardinality, MappingMetadata, RepositoryBase, RepositoryOperation,
    RepositoryType,
};
pub use repository::{EntityRepository, StoreControl};
