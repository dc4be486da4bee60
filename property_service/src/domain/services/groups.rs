//! Property group registry operations

use super::PropertyServiceImpl;
use crate::domain::error::{PropertyError, Result};
use crate::domain::models::PropertyGroup;
use crate::domain::ports::PropertyStorage;

pub(super) async fn register_property_group<S>(
    service: &PropertyServiceImpl<S>,
    name: &str,
) -> Result<PropertyGroup>
where
    S: PropertyStorage,
    anyhow::Error: From<S::Error>,
{
    let group = service
        .storage
        .register_property_group(name)
        .await
        .map_err(|e| PropertyError::Internal(e.into()))?;

    tracing::debug!(group_id = %group.id, name, "registered property group");
    Ok(group)
}
