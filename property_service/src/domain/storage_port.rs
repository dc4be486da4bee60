//! Storage port - defines the interface for property persistence operations

use crate::domain::models::{
    PropertyField, PropertyFieldSearchOpts, PropertyGroup, PropertyValue, PropertyValueSearchOpts,
};

/// Storage port for all property-related persistence operations.
///
/// Contract notes for implementations:
/// - `register_property_group` must resolve concurrent first registrations
///   of the same name to a single stored group; at most one group per name
///   is ever visible to other operations.
/// - `delete_property_field` must stamp the field and sweep its values as
///   one durable unit of work, or stamp the field first and sweep
///   idempotently so a retry can finish an interrupted cascade.
pub trait PropertyStorage: Send + Sync + 'static {
    /// Error type for storage operations
    type Error: Send + Sync + std::error::Error;

    // Group Operations
    fn register_property_group(
        &self,
        name: &str,
    ) -> impl std::future::Future<Output = Result<PropertyGroup, Self::Error>> + Send;

    fn get_property_group(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<Option<PropertyGroup>, Self::Error>> + Send;

    // Property Field Operations
    fn create_property_field(
        &self,
        field: PropertyField,
    ) -> impl std::future::Future<Output = Result<PropertyField, Self::Error>> + Send;

    /// Fetch by id regardless of group and deletion state.
    fn get_property_field(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<Option<PropertyField>, Self::Error>> + Send;

    /// Replace the stored field; returns `None` when the id is absent.
    fn update_property_field(
        &self,
        field: PropertyField,
    ) -> impl std::future::Future<Output = Result<Option<PropertyField>, Self::Error>> + Send;

    /// Soft-delete the field and every non-deleted value referencing it.
    /// Returns `false` when the id is absent. Safe to call again on an
    /// already-deleted field; the value sweep is re-run.
    fn delete_property_field(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<bool, Self::Error>> + Send;

    fn search_property_fields(
        &self,
        opts: PropertyFieldSearchOpts,
    ) -> impl std::future::Future<Output = Result<Vec<PropertyField>, Self::Error>> + Send;

    /// Count non-deleted fields in a group (quota enforcement).
    fn count_active_property_fields(
        &self,
        group_id: &str,
    ) -> impl std::future::Future<Output = Result<i64, Self::Error>> + Send;

    // Property Value Operations
    fn create_property_value(
        &self,
        value: PropertyValue,
    ) -> impl std::future::Future<Output = Result<PropertyValue, Self::Error>> + Send;

    /// Soft-delete a single value. Returns `false` when the id is absent.
    fn delete_property_value(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<bool, Self::Error>> + Send;

    fn search_property_values(
        &self,
        opts: PropertyValueSearchOpts,
    ) -> impl std::future::Future<Output = Result<Vec<PropertyValue>, Self::Error>> + Send;
}
