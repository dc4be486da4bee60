//! Custom profile attributes manager

use property_model::{PropertyField, PropertyFieldPatch, PropertyFieldSearchOpts};
use property_service::domain::ports::PropertyService;

use crate::config::CpaConfig;
use crate::error::CpaError;
use crate::GROUP_NAME;

/// Feature-scoped façade over the generic property service.
///
/// Holds the feature's group id as a capability fixed at construction;
/// every operation is scoped to that group and cross-group access is
/// reported as not-found.
pub struct CpaManager<S> {
    service: S,
    config: CpaConfig,
    group_id: String,
}

impl<S> CpaManager<S>
where
    S: PropertyService,
{
    /// Register (or fetch) the feature group and bind a manager to it.
    pub async fn new(service: S, config: CpaConfig) -> Result<Self, CpaError> {
        let group = service.register_property_group(GROUP_NAME).await?;
        Ok(Self {
            service,
            config,
            group_id: group.id,
        })
    }

    /// Identifier of the feature's property group.
    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    /// Create a field in the feature's group, enforcing the active-field
    /// ceiling. A caller-supplied group id is overridden; features cannot
    /// create fields in another feature's group.
    pub async fn create_field(&self, mut field: PropertyField) -> Result<PropertyField, CpaError> {
        field.group_id = self.group_id.clone();

        // Count-then-insert; concurrent creates may briefly overshoot the
        // ceiling (eventual enforcement, see the storage port contract)
        let active = self
            .service
            .count_active_property_fields(&self.group_id)
            .await?;
        let limit = i64::try_from(self.config.field_limit).unwrap_or(i64::MAX);
        if active >= limit {
            tracing::warn!(
                limit = self.config.field_limit,
                "active field limit reached, rejecting create"
            );
            return Err(CpaError::QuotaExceeded {
                limit: self.config.field_limit,
            });
        }

        Ok(self.service.create_property_field(field).await?)
    }

    /// Fetch a field from the feature's group. A field in another group is
    /// indistinguishable from an absent one.
    pub async fn get_field(&self, id: &str) -> Result<PropertyField, CpaError> {
        let field = self.service.get_property_field(id).await?;
        if field.group_id != self.group_id {
            return Err(CpaError::FieldNotFound);
        }
        Ok(field)
    }

    /// List the group's active fields.
    pub async fn list_fields(&self) -> Result<Vec<PropertyField>, CpaError> {
        let opts = PropertyFieldSearchOpts {
            group_id: self.group_id.clone(),
            ..Default::default()
        };
        Ok(self.service.search_property_fields(opts).await?)
    }

    /// Patch a field in the feature's group. The target linkage is owned by
    /// the feature; `target_id`/`target_type` are stripped from the patch
    /// whatever the caller supplied.
    pub async fn patch_field(
        &self,
        id: &str,
        mut patch: PropertyFieldPatch,
    ) -> Result<PropertyField, CpaError> {
        self.get_field(id).await?;

        patch.clear_target();
        Ok(self.service.patch_property_field(id, patch).await?)
    }

    /// Delete a field in the feature's group, cascading to its values.
    pub async fn delete_field(&self, id: &str) -> Result<(), CpaError> {
        self.get_field(id).await?;
        Ok(self.service.delete_property_field(id).await?)
    }
}
