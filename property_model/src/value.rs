//! Property value model and search options

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::PropertyValidationError;
use crate::{id, time};

/// An instance of a field's data bound to one target entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyValue {
    #[serde(default)]
    pub id: String,
    pub group_id: String,
    /// Must reference a field in the same group.
    pub field_id: String,
    /// The entity the value is attached to, e.g. a user.
    pub target_id: String,
    pub target_type: String,
    /// Opaque payload; its shape is interpreted by the owning feature.
    #[serde(default)]
    pub value: Value,
    #[serde(default)]
    pub create_at: i64,
    #[serde(default)]
    pub update_at: i64,
    /// `0` means active; any other value is the soft-deletion stamp.
    #[serde(default)]
    pub delete_at: i64,
}

impl PropertyValue {
    /// Build a value with server-assigned attributes left unset.
    pub fn new(
        group_id: impl Into<String>,
        field_id: impl Into<String>,
        target_id: impl Into<String>,
        target_type: impl Into<String>,
        value: Value,
    ) -> Self {
        Self {
            id: String::new(),
            group_id: group_id.into(),
            field_id: field_id.into(),
            target_id: target_id.into(),
            target_type: target_type.into(),
            value,
            create_at: 0,
            update_at: 0,
            delete_at: 0,
        }
    }

    /// Assign id and timestamps ahead of the first save.
    pub fn pre_save(&mut self) {
        if self.id.is_empty() {
            self.id = id::new_id();
        }
        if self.create_at == 0 {
            self.create_at = time::now_millis();
        }
        self.update_at = self.create_at;
    }

    /// Validate the value, reporting the first invalid attribute.
    pub fn validate(&self) -> Result<(), PropertyValidationError> {
        if !id::is_valid_id(&self.id) {
            return Err(PropertyValidationError::InvalidId(self.id.clone()));
        }
        if !id::is_valid_id(&self.group_id) {
            return Err(PropertyValidationError::InvalidGroupId(
                self.group_id.clone(),
            ));
        }
        if !id::is_valid_id(&self.field_id) {
            return Err(PropertyValidationError::InvalidFieldId(
                self.field_id.clone(),
            ));
        }
        if self.target_id.is_empty() {
            return Err(PropertyValidationError::EmptyTargetId);
        }
        if self.target_type.is_empty() {
            return Err(PropertyValidationError::EmptyTargetType);
        }
        if self.create_at == 0 {
            return Err(PropertyValidationError::MissingCreateAt);
        }
        if self.update_at == 0 {
            return Err(PropertyValidationError::MissingUpdateAt);
        }
        Ok(())
    }

    /// True while the value has not been soft deleted.
    pub fn is_active(&self) -> bool {
        self.delete_at == 0
    }
}

/// Scoping filters for value search. Empty string filters are ignored.
#[derive(Debug, Clone, Default)]
pub struct PropertyValueSearchOpts {
    pub group_id: String,
    pub field_id: String,
    pub target_id: String,
    pub target_type: String,
    pub include_deleted: bool,
    pub page: usize,
    /// `0` disables pagination.
    pub per_page: usize,
}
