//! Property field store operations

use property_model::time;

use super::PropertyServiceImpl;
use crate::domain::error::{PropertyError, Result};
use crate::domain::models::{
    PropertyField, PropertyFieldPatch, PropertyFieldSearchOpts, PropertyValidationError,
};
use crate::domain::ports::PropertyStorage;

pub(super) async fn create_property_field<S>(
    service: &PropertyServiceImpl<S>,
    mut field: PropertyField,
) -> Result<PropertyField>
where
    S: PropertyStorage,
    anyhow::Error: From<S::Error>,
{
    field.pre_save();
    field.validate()?;

    // The group must exist before a field can reference it
    let group = service
        .storage
        .get_property_group(&field.group_id)
        .await
        .map_err(|e| PropertyError::Internal(e.into()))?;
    if group.is_none() {
        return Err(PropertyValidationError::UnknownGroup(field.group_id.clone()).into());
    }

    let created = service
        .storage
        .create_property_field(field)
        .await
        .map_err(|e| PropertyError::Internal(e.into()))?;

    tracing::debug!(field_id = %created.id, group_id = %created.group_id, "created property field");
    Ok(created)
}

pub(super) async fn get_property_field<S>(
    service: &PropertyServiceImpl<S>,
    id: &str,
) -> Result<PropertyField>
where
    S: PropertyStorage,
    anyhow::Error: From<S::Error>,
{
    service
        .storage
        .get_property_field(id)
        .await
        .map_err(|e| PropertyError::Internal(e.into()))?
        .ok_or_else(|| PropertyError::NotFound(format!("property field {id}")))
}

pub(super) async fn patch_property_field<S>(
    service: &PropertyServiceImpl<S>,
    id: &str,
    patch: PropertyFieldPatch,
) -> Result<PropertyField>
where
    S: PropertyStorage,
    anyhow::Error: From<S::Error>,
{
    let mut field = get_property_field(service, id).await?;

    let previous_update_at = field.update_at;
    field.apply_patch(patch);
    // update_at must advance even when the patch lands within the same millisecond
    field.update_at = time::now_millis().max(previous_update_at + 1);

    // A patch must not leave an invalid field behind
    field.validate()?;

    service
        .storage
        .update_property_field(field)
        .await
        .map_err(|e| PropertyError::Internal(e.into()))?
        .ok_or_else(|| PropertyError::NotFound(format!("property field {id}")))
}

pub(super) async fn delete_property_field<S>(service: &PropertyServiceImpl<S>, id: &str) -> Result<()>
where
    S: PropertyStorage,
    anyhow::Error: From<S::Error>,
{
    let deleted = service
        .storage
        .delete_property_field(id)
        .await
        .map_err(|e| PropertyError::Internal(e.into()))?;

    if !deleted {
        return Err(PropertyError::NotFound(format!("property field {id}")));
    }

    tracing::debug!(field_id = id, "deleted property field and cascaded to its values");
    Ok(())
}

pub(super) async fn search_property_fields<S>(
    service: &PropertyServiceImpl<S>,
    opts: PropertyFieldSearchOpts,
) -> Result<Vec<PropertyField>>
where
    S: PropertyStorage,
    anyhow::Error: From<S::Error>,
{
    service
        .storage
        .search_property_fields(opts)
        .await
        .map_err(|e| PropertyError::Internal(e.into()))
}

pub(super) async fn count_active_property_fields<S>(
    service: &PropertyServiceImpl<S>,
    group_id: &str,
) -> Result<i64>
where
    S: PropertyStorage,
    anyhow::Error: From<S::Error>,
{
    service
        .storage
        .count_active_property_fields(group_id)
        .await
        .map_err(|e| PropertyError::Internal(e.into()))
}
