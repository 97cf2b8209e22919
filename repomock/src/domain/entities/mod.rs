//! Domain entities
//!
//! Dynamic object model used by the fake repositories. Entities are plain
//! field maps tagged with their declared type; all structure comes from the
//! mapping metadata, never from the data itself.

pub mod criteria;
pub mod entity;
pub mod row;
pub mod value;

pub use criteria::{Criteria, Criterion};
pub use entity::Entity;
pub use row::{rows_from_json, Row, RowValue};
pub use value::Value;
