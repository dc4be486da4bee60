//! Property field model, patch and search options

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::PropertyValidationError;
use crate::{id, time};

/// Closed set of field types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyFieldType {
    Text,
    Select,
    Multiselect,
    Date,
    Person,
    Multiperson,
}

impl PropertyFieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyFieldType::Text => "text",
            PropertyFieldType::Select => "select",
            PropertyFieldType::Multiselect => "multiselect",
            PropertyFieldType::Date => "date",
            PropertyFieldType::Person => "person",
            PropertyFieldType::Multiperson => "multiperson",
        }
    }
}

impl fmt::Display for PropertyFieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyFieldType {
    type Err = PropertyValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(PropertyFieldType::Text),
            "select" => Ok(PropertyFieldType::Select),
            "multiselect" => Ok(PropertyFieldType::Multiselect),
            "date" => Ok(PropertyFieldType::Date),
            "person" => Ok(PropertyFieldType::Person),
            "multiperson" => Ok(PropertyFieldType::Multiperson),
            other => Err(PropertyValidationError::UnknownFieldType(other.to_string())),
        }
    }
}

/// A named, typed attribute definition within a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyField {
    #[serde(default)]
    pub id: String,
    pub group_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: PropertyFieldType,
    /// Open mapping of display/visibility hints and other feature metadata.
    #[serde(default)]
    pub attrs: Map<String, Value>,
    /// Optional linkage to a specific owning entity, distinct from the
    /// targets of the values the field will carry.
    #[serde(default)]
    pub target_id: String,
    #[serde(default)]
    pub target_type: String,
    #[serde(default)]
    pub create_at: i64,
    #[serde(default)]
    pub update_at: i64,
    /// `0` means active; any other value is the soft-deletion stamp.
    #[serde(default)]
    pub delete_at: i64,
}

impl PropertyField {
    /// Build a field with server-assigned attributes left unset.
    pub fn new(
        group_id: impl Into<String>,
        name: impl Into<String>,
        field_type: PropertyFieldType,
    ) -> Self {
        Self {
            id: String::new(),
            group_id: group_id.into(),
            name: name.into(),
            field_type,
            attrs: Map::new(),
            target_id: String::new(),
            target_type: String::new(),
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

    /// Validate the field, reporting the first invalid attribute.
    pub fn validate(&self) -> Result<(), PropertyValidationError> {
        if !id::is_valid_id(&self.id) {
            return Err(PropertyValidationError::InvalidId(self.id.clone()));
        }
        if !id::is_valid_id(&self.group_id) {
            return Err(PropertyValidationError::InvalidGroupId(
                self.group_id.clone(),
            ));
        }
        if self.name.is_empty() {
            return Err(PropertyValidationError::EmptyName);
        }
        if self.create_at == 0 {
            return Err(PropertyValidationError::MissingCreateAt);
        }
        if self.update_at == 0 {
            return Err(PropertyValidationError::MissingUpdateAt);
        }
        Ok(())
    }

    /// True while the field has not been soft deleted.
    pub fn is_active(&self) -> bool {
        self.delete_at == 0
    }

    /// Apply the present attributes of a patch; absent ones are untouched.
    pub fn apply_patch(&mut self, patch: PropertyFieldPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(field_type) = patch.field_type {
            self.field_type = field_type;
        }
        if let Some(attrs) = patch.attrs {
            self.attrs = attrs;
        }
        if let Some(target_id) = patch.target_id {
            self.target_id = target_id;
        }
        if let Some(target_type) = patch.target_type {
            self.target_type = target_type;
        }
    }
}

/// Partial update of a field definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyFieldPatch {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub field_type: Option<PropertyFieldType>,
    pub attrs: Option<Map<String, Value>>,
    pub target_id: Option<String>,
    pub target_type: Option<String>,
}

impl PropertyFieldPatch {
    /// Drop the target linkage attributes from the patch.
    pub fn clear_target(&mut self) {
        self.target_id = None;
        self.target_type = None;
    }
}

/// Scoping filters for field search. Empty string filters are ignored.
#[derive(Debug, Clone, Default)]
pub struct PropertyFieldSearchOpts {
    pub group_id: String,
    pub target_type: String,
    pub target_id: String,
    pub include_deleted: bool,
    pub page: usize,
    /// `0` disables pagination.
    pub per_page: usize,
}
