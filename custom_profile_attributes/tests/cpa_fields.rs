//! Feature adapter tests, driven through the in-memory store

use custom_profile_attributes::{CpaConfig, CpaError, CpaManager};
use property_model::{
    PropertyField, PropertyFieldPatch, PropertyFieldType, PropertyValue, PropertyValueSearchOpts,
    id,
};
use property_service::domain::ports::PropertyService;
use property_service::domain::services::PropertyServiceImpl;
use property_service::outbound::MemoryPropertyStorage;
use serde_json::json;

/// Manager plus a second service handle onto the same store, for setting up
/// and inspecting state the adapter must not reach itself.
async fn setup(
    field_limit: usize,
) -> (
    CpaManager<PropertyServiceImpl<MemoryPropertyStorage>>,
    PropertyServiceImpl<MemoryPropertyStorage>,
) {
    let storage = MemoryPropertyStorage::new();
    let service = PropertyServiceImpl::new(storage.clone());
    let manager = CpaManager::new(
        PropertyServiceImpl::new(storage),
        CpaConfig { field_limit },
    )
    .await
    .unwrap();
    (manager, service)
}

fn text_field(group_id: &str, name: &str) -> PropertyField {
    PropertyField::new(group_id, name, PropertyFieldType::Text)
}

#[tokio::test]
async fn get_fails_for_nonexistent_field() {
    let (manager, _service) = setup(20).await;

    let err = manager.get_field(&id::new_id()).await.unwrap_err();
    assert!(matches!(err, CpaError::FieldNotFound));
    assert_eq!(err.status_code(), 404);
}

#[tokio::test]
async fn get_fails_for_field_in_another_group() {
    let (manager, service) = setup(20).await;

    let other_group = service.register_property_group("boards").await.unwrap();
    let foreign = service
        .create_property_field(text_field(&other_group.id, "Foreign"))
        .await
        .unwrap();

    let err = manager.get_field(&foreign.id).await.unwrap_err();
    assert!(matches!(err, CpaError::FieldNotFound));
}

#[tokio::test]
async fn get_returns_existing_field() {
    let (manager, _service) = setup(20).await;

    let mut field = text_field("", "Test Field");
    field
        .attrs
        .insert("visibility".to_string(), json!("hidden"));
    let created = manager.create_field(field).await.unwrap();
    assert!(!created.id.is_empty());

    let fetched = manager.get_field(&created.id).await.unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, "Test Field");
    assert_eq!(fetched.attrs.get("visibility"), Some(&json!("hidden")));
}

#[tokio::test]
async fn create_overrides_caller_supplied_group() {
    let (manager, service) = setup(20).await;

    // even a real group belonging to another feature is overridden silently
    let other_group = service.register_property_group("boards").await.unwrap();
    let created = manager
        .create_field(text_field(&other_group.id, "Sneaky"))
        .await
        .unwrap();
    assert_eq!(created.group_id, manager.group_id());

    let fetched = service.get_property_field(&created.id).await.unwrap();
    assert_ne!(fetched.create_at, 0);
    assert_eq!(fetched.create_at, fetched.update_at);
}

#[tokio::test]
async fn create_rejects_invalid_field() {
    let (manager, _service) = setup(20).await;

    let err = manager
        .create_field(text_field("", ""))
        .await
        .unwrap_err();
    assert!(matches!(err, CpaError::InvalidField(_)));
    assert_eq!(err.status_code(), 400);
}

#[tokio::test]
async fn create_enforces_field_limit() {
    let limit = 5;
    let (manager, _service) = setup(limit).await;

    for i in 0..limit {
        let created = manager
            .create_field(text_field("", &format!("Field {i}")))
            .await
            .unwrap();
        assert!(!created.id.is_empty());
    }

    let err = manager
        .create_field(text_field("", "One too many"))
        .await
        .unwrap_err();
    assert!(matches!(err, CpaError::QuotaExceeded { limit: 5 }));
    assert_eq!(err.status_code(), 422);

    // the failing call must not have persisted anything
    assert_eq!(manager.list_fields().await.unwrap().len(), limit);
}

#[tokio::test]
async fn deleting_a_field_frees_quota() {
    let (manager, _service) = setup(2).await;

    let first = manager.create_field(text_field("", "A")).await.unwrap();
    manager.create_field(text_field("", "B")).await.unwrap();
    assert!(matches!(
        manager.create_field(text_field("", "C")).await,
        Err(CpaError::QuotaExceeded { .. })
    ));

    manager.delete_field(&first.id).await.unwrap();
    manager.create_field(text_field("", "C")).await.unwrap();
}

#[tokio::test]
async fn list_is_scoped_to_the_feature_group() {
    let (manager, service) = setup(20).await;

    manager.create_field(text_field("", "Field 1")).await.unwrap();

    let other_group = service.register_property_group("boards").await.unwrap();
    service
        .create_property_field(text_field(&other_group.id, "Field 2"))
        .await
        .unwrap();

    manager.create_field(text_field("", "Field 3")).await.unwrap();

    let mut names: Vec<String> = manager
        .list_fields()
        .await
        .unwrap()
        .into_iter()
        .map(|field| field.name)
        .collect();
    names.sort();
    assert_eq!(names, vec!["Field 1", "Field 3"]);
}

#[tokio::test]
async fn patch_never_touches_target_linkage() {
    let (manager, _service) = setup(20).await;

    let mut field = text_field("", "Bio");
    field
        .attrs
        .insert("visibility".to_string(), json!("hidden"));
    let created = manager.create_field(field).await.unwrap();

    let patch = PropertyFieldPatch {
        name: Some("Patched name".to_string()),
        attrs: Some(
            [("visibility".to_string(), json!("default"))]
                .into_iter()
                .collect(),
        ),
        target_id: Some(id::new_id()),
        target_type: Some("team".to_string()),
        ..Default::default()
    };

    let patched = manager.patch_field(&created.id, patch).await.unwrap();
    assert_eq!(patched.id, created.id);
    assert_eq!(patched.name, "Patched name");
    assert_eq!(patched.attrs.get("visibility"), Some(&json!("default")));
    assert!(patched.target_id.is_empty());
    assert!(patched.target_type.is_empty());
    assert!(patched.update_at > created.update_at);
}

#[tokio::test]
async fn patch_rejects_emptying_the_name() {
    let (manager, service) = setup(20).await;

    let created = manager.create_field(text_field("", "Bio")).await.unwrap();

    let err = manager
        .patch_field(
            &created.id,
            PropertyFieldPatch {
                name: Some(String::new()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, CpaError::InvalidField(_)));
    assert_eq!(err.status_code(), 400);

    let stored = service.get_property_field(&created.id).await.unwrap();
    assert_eq!(stored.name, "Bio");
    assert_eq!(stored.update_at, created.update_at);
}

#[tokio::test]
async fn patch_enforces_group_isolation_first() {
    let (manager, service) = setup(20).await;

    let err = manager
        .patch_field(&id::new_id(), PropertyFieldPatch::default())
        .await
        .unwrap_err();
    assert!(matches!(err, CpaError::FieldNotFound));

    let other_group = service.register_property_group("boards").await.unwrap();
    let foreign = service
        .create_property_field(text_field(&other_group.id, "Foreign"))
        .await
        .unwrap();

    let err = manager
        .patch_field(
            &foreign.id,
            PropertyFieldPatch {
                name: Some("hijack".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, CpaError::FieldNotFound));

    // the foreign field is untouched
    let untouched = service.get_property_field(&foreign.id).await.unwrap();
    assert_eq!(untouched.name, "Foreign");
}

#[tokio::test]
async fn delete_enforces_group_isolation_first() {
    let (manager, service) = setup(20).await;

    let err = manager.delete_field(&id::new_id()).await.unwrap_err();
    assert!(matches!(err, CpaError::FieldNotFound));

    let other_group = service.register_property_group("boards").await.unwrap();
    let foreign = service
        .create_property_field(text_field(&other_group.id, "Foreign"))
        .await
        .unwrap();

    let err = manager.delete_field(&foreign.id).await.unwrap_err();
    assert!(matches!(err, CpaError::FieldNotFound));
    assert!(service
        .get_property_field(&foreign.id)
        .await
        .unwrap()
        .is_active());
}

#[tokio::test]
async fn delete_cascades_to_values() {
    let (manager, service) = setup(20).await;

    let field = manager.create_field(text_field("", "Bio")).await.unwrap();

    for i in 0..3 {
        let value = PropertyValue::new(
            manager.group_id(),
            &field.id,
            id::new_id(),
            "user",
            json!(format!("Value {i}")),
        );
        let created = service.create_property_value(value).await.unwrap();
        assert!(!created.id.is_empty());
    }

    let opts = PropertyValueSearchOpts {
        field_id: field.id.clone(),
        per_page: 10,
        ..Default::default()
    };
    assert_eq!(service.search_property_values(opts.clone()).await.unwrap().len(), 3);

    manager.delete_field(&field.id).await.unwrap();

    let fetched = service.get_property_field(&field.id).await.unwrap();
    assert_ne!(fetched.delete_at, 0);

    assert!(service.search_property_values(opts.clone()).await.unwrap().is_empty());

    let all = service
        .search_property_values(PropertyValueSearchOpts {
            include_deleted: true,
            ..opts
        })
        .await
        .unwrap();
    assert_eq!(all.len(), 3);
    assert!(all.iter().all(|value| value.delete_at != 0));
}

// Full lifecycle walk: create, patch, attach values, delete, verify cascade.
#[tokio::test]
async fn field_lifecycle_end_to_end() {
    let (manager, service) = setup(20).await;

    let field = manager.create_field(text_field("", "Bio")).await.unwrap();
    assert!(!field.id.is_empty());
    assert_eq!(field.create_at, field.update_at);

    for i in 0..3 {
        service
            .create_property_value(PropertyValue::new(
                manager.group_id(),
                &field.id,
                id::new_id(),
                "user",
                json!(format!("bio {i}")),
            ))
            .await
            .unwrap();
    }

    let patched = manager
        .patch_field(
            &field.id,
            PropertyFieldPatch {
                name: Some("About".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(patched.name, "About");
    assert_eq!(patched.field_type, PropertyFieldType::Text);
    assert!(patched.update_at > patched.create_at);

    manager.delete_field(&field.id).await.unwrap();
    assert_ne!(
        service.get_property_field(&field.id).await.unwrap().delete_at,
        0
    );

    let opts = PropertyValueSearchOpts {
        field_id: field.id.clone(),
        ..Default::default()
    };
    assert!(service.search_property_values(opts.clone()).await.unwrap().is_empty());
    let all = service
        .search_property_values(PropertyValueSearchOpts {
            include_deleted: true,
            ..opts
        })
        .await
        .unwrap();
    assert_eq!(all.len(), 3);
    assert!(all.iter().all(|value| value.delete_at != 0));
}
