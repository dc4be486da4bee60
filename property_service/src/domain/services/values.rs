//! Property value store operations

use super::PropertyServiceImpl;
use crate::domain::error::{PropertyError, Result};
use crate::domain::models::{PropertyValidationError, PropertyValue, PropertyValueSearchOpts};
use crate::domain::ports::PropertyStorage;

pub(super) async fn create_property_value<S>(
    service: &PropertyServiceImpl<S>,
    mut value: PropertyValue,
) -> Result<PropertyValue>
where
    S: PropertyStorage,
    anyhow::Error: From<S::Error>,
{
    value.pre_save();
    value.validate()?;

    // Referential check: the field must exist and share the value's group
    let field = service
        .storage
        .get_property_field(&value.field_id)
        .await
        .map_err(|e| PropertyError::Internal(e.into()))?
        .ok_or_else(|| PropertyValidationError::UnknownField(value.field_id.clone()))?;
    if field.group_id != value.group_id {
        return Err(PropertyValidationError::FieldGroupMismatch {
            field_id: value.field_id.clone(),
            group_id: value.group_id.clone(),
        }
        .into());
    }

    let created = service
        .storage
        .create_property_value(value)
        .await
        .map_err(|e| PropertyError::Internal(e.into()))?;

    tracing::debug!(
        value_id = %created.id,
        field_id = %created.field_id,
        target_id = %created.target_id,
        "created property value"
    );
    Ok(created)
}

pub(super) async fn delete_property_value<S>(service: &PropertyServiceImpl<S>, id: &str) -> Result<()>
where
    S: PropertyStorage,
    anyhow::Error: From<S::Error>,
{
    let deleted = service
        .storage
        .delete_property_value(id)
        .await
        .map_err(|e| PropertyError::Internal(e.into()))?;

    if !deleted {
        return Err(PropertyError::NotFound(format!("property value {id}")));
    }
    Ok(())
}

pub(super) async fn search_property_values<S>(
    service: &PropertyServiceImpl<S>,
    opts: PropertyValueSearchOpts,
) -> Result<Vec<PropertyValue>>
where
    S: PropertyStorage,
    anyhow::Error: From<S::Error>,
{
    service
        .storage
        .search_property_values(opts)
        .await
        .map_err(|e| PropertyError::Internal(e.into()))
}
