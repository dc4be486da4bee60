//! Domain models - re-exports the property model crate as the single source of truth

pub use property_model::{
    PropertyField, PropertyFieldPatch, PropertyFieldSearchOpts, PropertyFieldType, PropertyGroup,
    PropertyValidationError, PropertyValue, PropertyValueSearchOpts,
};
