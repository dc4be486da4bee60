//! Property system models
//!
//! This crate defines the data models for the property system:
//!
//! - **group**: property groups, one namespace per feature
//! - **field**: property field definitions, patches and search options
//! - **value**: property values bound to (group, field, target)
//! - **id**: opaque identifier generation and validation
//! - **time**: millisecond timestamps used for lifecycle stamps

pub mod error;
pub mod field;
pub mod group;
pub mod id;
pub mod time;
pub mod value;

// Re-export commonly used types for convenience
pub use error::PropertyValidationError;
pub use field::{PropertyField, PropertyFieldPatch, PropertyFieldSearchOpts, PropertyFieldType};
pub use group::PropertyGroup;
pub use value::{PropertyValue, PropertyValueSearchOpts};
