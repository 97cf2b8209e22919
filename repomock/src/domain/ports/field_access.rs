//! Field access capability

use crate::domain::entities::Value;

/// Direct field access that bypasses construction and accessors
pub trait ObjectFieldAccess {
    /// `None` when the field has never been assigned
    fn get(&self, field: &str) -> Option<&Value>;

    fn set(&mut self, field: &str, value: Value);

    fn is_set(&self, field: &str) -> bool {
        self.get(field).is_some()
    }
}
