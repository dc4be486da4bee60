//! Model validation errors

use thiserror::Error;

/// Errors reporting the first invalid attribute of a model.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PropertyValidationError {
    #[error("id {0:?} is not a valid identifier")]
    InvalidId(String),

    #[error("group id {0:?} is not a valid identifier")]
    InvalidGroupId(String),

    #[error("field id {0:?} is not a valid identifier")]
    InvalidFieldId(String),

    #[error("name cannot be empty")]
    EmptyName,

    #[error("target id cannot be empty")]
    EmptyTargetId,

    #[error("target type cannot be empty")]
    EmptyTargetType,

    #[error("create_at must be set")]
    MissingCreateAt,

    #[error("update_at must be set")]
    MissingUpdateAt,

    #[error("unknown field type {0:?}")]
    UnknownFieldType(String),

    #[error("group {0} does not exist")]
    UnknownGroup(String),

    #[error("field {0} does not exist")]
    UnknownField(String),

    #[error("field {field_id} does not belong to group {group_id}")]
    FieldGroupMismatch { field_id: String, group_id: String },
}
