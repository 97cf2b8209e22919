//! Application layer
//!
//! The fake persistence engine: association resolution, object-graph
//! materialization, criteria matching, the identifier-keyed store and the
//! factory that wires them into repository doubles.

pub mod factory;
pub mod materializer;
pub mod matcher;
pub mod resolver;
pub mod store;

pub use factory::{DoubleFactory, Operation, RepositoryDouble};
pub use materializer::Materializer;
pub use matcher::CriteriaMatcher;
pub use resolver::{RelationshipResolver, Resolution};
pub use store::FakeStore;
