//! Domain services - concrete implementation of the service port

mod fields;
mod groups;
mod values;

use crate::domain::error::Result;
use crate::domain::models::{
    PropertyField, PropertyFieldPatch, PropertyFieldSearchOpts, PropertyGroup, PropertyValue,
    PropertyValueSearchOpts,
};
use crate::domain::ports::{PropertyService, PropertyStorage};

/// Concrete implementation of PropertyService backed by a storage port
#[derive(Debug, Clone)]
pub struct PropertyServiceImpl<S> {
    storage: S,
}

impl<S> PropertyServiceImpl<S>
where
    S: PropertyStorage,
{
    /// Create a new property service implementation
    pub fn new(storage: S) -> Self {
        Self { storage }
    }
}

impl<S> PropertyService for PropertyServiceImpl<S>
where
    S: PropertyStorage,
    anyhow::Error: From<S::Error>,
{
    async fn register_property_group(&self, name: &str) -> Result<PropertyGroup> {
        groups::register_property_group(self, name).await
    }

    // ===== Property Field Operations =====

    async fn create_property_field(&self, field: PropertyField) -> Result<PropertyField> {
        fields::create_property_field(self, field).await
    }

    async fn get_property_field(&self, id: &str) -> Result<PropertyField> {
        fields::get_property_field(self, id).await
    }

    async fn patch_property_field(
        &self,
        id: &str,
        patch: PropertyFieldPatch,
    ) -> Result<PropertyField> {
        fields::patch_property_field(self, id, patch).await
    }

    async fn delete_property_field(&self, id: &str) -> Result<()> {
        fields::delete_property_field(self, id).await
    }

    async fn search_property_fields(
        &self,
        opts: PropertyFieldSearchOpts,
    ) -> Result<Vec<PropertyField>> {
        fields::search_property_fields(self, opts).await
    }

    async fn count_active_property_fields(&self, group_id: &str) -> Result<i64> {
        fields::count_active_property_fields(self, group_id).await
    }

    // ===== Property Value Operations =====

    async fn create_property_value(&self, value: PropertyValue) -> Result<PropertyValue> {
        values::create_property_value(self, value).await
    }

    async fn delete_property_value(&self, id: &str) -> Result<()> {
        values::delete_property_value(self, id).await
    }

    async fn search_property_values(
        &self,
        opts: PropertyValueSearchOpts,
    ) -> Result<Vec<PropertyValue>> {
        values::search_property_values(self, opts).await
    }
}
