//! Error types for repository doubles
//!
//! Every variant is a contract violation raised at the point it happens.
//! Nothing here is transient, so callers never retry.

use thiserror::Error;

/// Errors raised while building a double, loading rows or running operations
#[derive(Debug, Error, PartialEq)]
pub enum MockError {
    #[error("Repository type \"{0}\" is unknown or is not an entity repository")]
    InvalidRepositoryType(String),

    #[error("Can't detect entity type for repository \"{0}\", specify it explicitly")]
    EntityTypeUndetermined(String),

    #[error("Unknown entity type: {0}")]
    UnknownEntityType(String),

    #[error("Automatic mocking of mapping type used for field \"{field}\" of {entity_type} is not implemented")]
    UnsupportedMapping { entity_type: String, field: String },

    #[error("Target entity is not defined for field \"{field}\" of {entity_type}")]
    MissingTargetType { entity_type: String, field: String },

    #[error("Field \"{field}\" is not declared on {entity_type}")]
    UnknownField { entity_type: String, field: String },

    #[error("{operation}: entity with id {id} not found")]
    NotFound { id: i64, operation: &'static str },

    #[error("{entity_type} has no value for identifier field \"{field}\"")]
    MissingIdentifier { entity_type: String, field: String },

    #[error("{entity_type} has invalid identifier: {value}")]
    InvalidIdentifier { entity_type: String, value: String },

    #[error("{entity_type} has no identifier left to assign")]
    IdentifiersExhausted { entity_type: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid row description for field \"{field}\": {reason}")]
    InvalidRowDescription { field: String, reason: String },

    #[error("Operation \"{operation}\" is not mocked on {repository}")]
    OperationNotMocked {
        repository: String,
        operation: &'static str,
    },
}
