//! Adapters
//!
//! Concrete implementations of the domain ports.

pub mod schema;

pub use schema::{Association, AssociationKind, EntityType, FieldDef, Schema};
