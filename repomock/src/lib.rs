//! In-memory repository doubles
//!
//! Materializes entity graphs from nested row descriptions, keeps them in an
//! identifier-keyed fake table and answers `find`/`findOneBy`/`findBy`/
//! `save`/`remove` the way a persistence layer would, so services can be
//! tested without a database.
//!
//! - `domain`: values, entities, rows, criteria and the port traits
//! - `adapters`: in-memory mapping metadata
//! - `app`: resolver, materializer, matcher, fake store and double factory

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;

#[cfg(test)]
mod test_utils;

pub use adapters::{EntityType, Schema};
pub use app::{DoubleFactory, FakeStore, Operation, RepositoryDouble};
pub use config::Config;
pub use domain::entities::{rows_from_json, Criteria, Criterion, Entity, Row, RowValue, Value};
pub use domain::ports::{
    EntityRepository, MappingMetadata, ObjectFieldAccess, RepositoryBase, RepositoryType,
    StoreControl,
};
pub use error::MockError;
