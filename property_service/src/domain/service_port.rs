//! Service port - defines the interface for the generic property service

use crate::domain::error::Result;
use crate::domain::models::{
    PropertyField, PropertyFieldPatch, PropertyFieldSearchOpts, PropertyGroup, PropertyValue,
    PropertyValueSearchOpts,
};

/// The service level interface for property operations.
/// Composes the group registry, field store and value store into one
/// consistent API used by any feature.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait PropertyService: Send + Sync + 'static {
    /// Return the group registered under `name`, creating it on first use.
    fn register_property_group(
        &self,
        name: &str,
    ) -> impl std::future::Future<Output = Result<PropertyGroup>> + Send;

    // Property Field Operations
    fn create_property_field(
        &self,
        field: PropertyField,
    ) -> impl std::future::Future<Output = Result<PropertyField>> + Send;

    fn get_property_field(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<PropertyField>> + Send;

    fn patch_property_field(
        &self,
        id: &str,
        patch: PropertyFieldPatch,
    ) -> impl std::future::Future<Output = Result<PropertyField>> + Send;

    /// Soft-delete the field and cascade to every value referencing it.
    fn delete_property_field(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;

    fn search_property_fields(
        &self,
        opts: PropertyFieldSearchOpts,
    ) -> impl std::future::Future<Output = Result<Vec<PropertyField>>> + Send;

    fn count_active_property_fields(
        &self,
        group_id: &str,
    ) -> impl std::future::Future<Output = Result<i64>> + Send;

    // Property Value Operations
    fn create_property_value(
        &self,
        value: PropertyValue,
    ) -> impl std::future::Future<Output = Result<PropertyValue>> + Send;

    fn delete_property_value(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;

    fn search_property_values(
        &self,
        opts: PropertyValueSearchOpts,
    ) -> impl std::future::Future<Output = Result<Vec<PropertyValue>>> + Send;
}
