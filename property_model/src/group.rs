//! Property group model

use serde::{Deserialize, Serialize};

use crate::id;

/// Namespace owned by one feature; scopes all fields and values created for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyGroup {
    pub id: String,
    /// Unique, stable key features use to look up their group.
    pub name: String,
}

impl PropertyGroup {
    /// Build a group with a freshly generated id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: id::new_id(),
            name: name.into(),
        }
    }
}
