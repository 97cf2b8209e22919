//! Domain layer
//!
//! - `entities`: values, materialized entities, row descriptions and criteria
//! - `ports`: traits for the collaborators the engine depends on

pub mod entities;
pub mod ports;
