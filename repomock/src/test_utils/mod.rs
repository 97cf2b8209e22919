//! Test utilities
//!
//! Sample mapping metadata and a small service under test. The schema
//! covers every association kind, including the misconfigured ones the
//! error paths need.

pub mod fixtures;
pub mod sut;

pub use fixtures::*;
pub use sut::*;
