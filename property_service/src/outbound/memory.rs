//! In-memory implementation of the storage port
//!
//! Reference store used by tests and embedded deployments. A single writer
//! lock serializes all mutations, which makes group registration and the
//! field-delete cascade atomic: no reader can observe a deleted field whose
//! values have not been swept.

use std::collections::HashMap;
use std::sync::Arc;

use property_model::time;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::domain::models::{
    PropertyField, PropertyFieldSearchOpts, PropertyGroup, PropertyValue, PropertyValueSearchOpts,
};
use crate::domain::ports::PropertyStorage;

/// Error type for in-memory storage operations
#[derive(Debug, Error)]
pub enum MemoryStorageError {
    /// An entity with the same id already exists
    #[error("duplicate id: {0}")]
    DuplicateId(String),
}

#[derive(Debug, Default)]
struct StoreState {
    groups: HashMap<String, PropertyGroup>,
    group_ids_by_name: HashMap<String, String>,
    fields: HashMap<String, PropertyField>,
    values: HashMap<String, PropertyValue>,
}

/// In-memory property storage. Cloning yields a handle to the same store.
#[derive(Debug, Clone, Default)]
pub struct MemoryPropertyStorage {
    state: Arc<RwLock<StoreState>>,
}

impl MemoryPropertyStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

fn sorted_by_creation<T, K>(mut items: Vec<T>, key: K) -> Vec<T>
where
    K: Fn(&T) -> (i64, String),
{
    items.sort_by_key(|item| key(item));
    items
}

fn paginate<T>(items: Vec<T>, page: usize, per_page: usize) -> Vec<T> {
    if per_page == 0 {
        return items;
    }
    items
        .into_iter()
        .skip(page.saturating_mul(per_page))
        .take(per_page)
        .collect()
}

impl PropertyStorage for MemoryPropertyStorage {
    type Error = MemoryStorageError;

    #[tracing::instrument(skip(self))]
    async fn register_property_group(
        &self,
        name: &str,
    ) -> Result<PropertyGroup, MemoryStorageError> {
        let mut state = self.state.write().await;

        // Duplicate registrations resolve to the already-stored group
        if let Some(group) = state
            .group_ids_by_name
            .get(name)
            .and_then(|id| state.groups.get(id))
        {
            return Ok(group.clone());
        }

        let group = PropertyGroup::new(name);
        state
            .group_ids_by_name
            .insert(name.to_string(), group.id.clone());
        state.groups.insert(group.id.clone(), group.clone());
        Ok(group)
    }

    async fn get_property_group(&self, id: &str) -> Result<Option<PropertyGroup>, MemoryStorageError> {
        let state = self.state.read().await;
        Ok(state.groups.get(id).cloned())
    }

    async fn create_property_field(
        &self,
        field: PropertyField,
    ) -> Result<PropertyField, MemoryStorageError> {
        let mut state = self.state.write().await;
        if state.fields.contains_key(&field.id) {
            return Err(MemoryStorageError::DuplicateId(field.id));
        }
        state.fields.insert(field.id.clone(), field.clone());
        Ok(field)
    }

    async fn get_property_field(&self, id: &str) -> Result<Option<PropertyField>, MemoryStorageError> {
        let state = self.state.read().await;
        Ok(state.fields.get(id).cloned())
    }

    async fn update_property_field(
        &self,
        field: PropertyField,
    ) -> Result<Option<PropertyField>, MemoryStorageError> {
        let mut state = self.state.write().await;
        match state.fields.get_mut(&field.id) {
            Some(stored) => {
                *stored = field.clone();
                Ok(Some(field))
            }
            None => Ok(None),
        }
    }

    #[tracing::instrument(skip(self))]
    async fn delete_property_field(&self, id: &str) -> Result<bool, MemoryStorageError> {
        let mut state = self.state.write().await;

        let delete_at = match state.fields.get_mut(id) {
            Some(field) => {
                if field.delete_at == 0 {
                    field.delete_at = time::now_millis();
                }
                field.delete_at
            }
            None => return Ok(false),
        };

        // Cascade: sweep every value still referencing the field. Re-running
        // the sweep on an already-deleted field is a no-op for stamped values.
        let mut swept = 0usize;
        for value in state
            .values
            .values_mut()
            .filter(|value| value.field_id == id && value.delete_at == 0)
        {
            value.delete_at = delete_at;
            swept += 1;
        }

        tracing::debug!(field_id = id, swept, "cascaded field delete to values");
        Ok(true)
    }

    async fn search_property_fields(
        &self,
        opts: PropertyFieldSearchOpts,
    ) -> Result<Vec<PropertyField>, MemoryStorageError> {
        let state = self.state.read().await;
        let matches: Vec<PropertyField> = state
            .fields
            .values()
            .filter(|field| opts.group_id.is_empty() || field.group_id == opts.group_id)
            .filter(|field| opts.target_type.is_empty() || field.target_type == opts.target_type)
            .filter(|field| opts.target_id.is_empty() || field.target_id == opts.target_id)
            .filter(|field| opts.include_deleted || field.is_active())
            .cloned()
            .collect();

        let sorted = sorted_by_creation(matches, |field| (field.create_at, field.id.clone()));
        Ok(paginate(sorted, opts.page, opts.per_page))
    }

    async fn count_active_property_fields(
        &self,
        group_id: &str,
    ) -> Result<i64, MemoryStorageError> {
        let state = self.state.read().await;
        let count = state
            .fields
            .values()
            .filter(|field| field.group_id == group_id && field.is_active())
            .count();
        Ok(count as i64)
    }

    async fn create_property_value(
        &self,
        value: PropertyValue,
    ) -> Result<PropertyValue, MemoryStorageError> {
        let mut state = self.state.write().await;
        if state.values.contains_key(&value.id) {
            return Err(MemoryStorageError::DuplicateId(value.id));
        }
        state.values.insert(value.id.clone(), value.clone());
        Ok(value)
    }

    async fn delete_property_value(&self, id: &str) -> Result<bool, MemoryStorageError> {
        let mut state = self.state.write().await;
        match state.values.get_mut(id) {
            Some(value) => {
                if value.delete_at == 0 {
                    value.delete_at = time::now_millis();
                }
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn search_property_values(
        &self,
        opts: PropertyValueSearchOpts,
    ) -> Result<Vec<PropertyValue>, MemoryStorageError> {
        let state = self.state.read().await;
        let matches: Vec<PropertyValue> = state
            .values
            .values()
            .filter(|value| opts.group_id.is_empty() || value.group_id == opts.group_id)
            .filter(|value| opts.field_id.is_empty() || value.field_id == opts.field_id)
            .filter(|value| opts.target_id.is_empty() || value.target_id == opts.target_id)
            .filter(|value| opts.target_type.is_empty() || value.target_type == opts.target_type)
            .filter(|value| opts.include_deleted || value.is_active())
            .cloned()
            .collect();

        let sorted = sorted_by_creation(matches, |value| (value.create_at, value.id.clone()));
        Ok(paginate(sorted, opts.page, opts.per_page))
    }
}
