//! Store Semantics Tests
//!
//! Replays the controller's success-path sequences against the in-memory
//! store: local state changes only after a confirmed store success, so the
//! local id set must track the store's id set exactly.

use super::memory::MemoryPinStore;
use super::pin_store::{PinFields, PinStore, StoreError};
use crate::models::Pin;
use crate::store::{pin_ids, remove_pin, replace_pin};

fn id_set(ids: &[String]) -> std::collections::HashSet<String> {
    ids.iter().cloned().collect()
}

#[tokio::test]
async fn local_ids_track_store_ids_through_mixed_sequence() {
    let store = MemoryPinStore::new();
    let mut local: Vec<Pin> = Vec::new();

    for (title, lng, lat) in [
        ("Barangay Office", 120.81, 14.84),
        ("Health Center", 120.82, 14.85),
        ("Plaza", 120.80, 14.83),
    ] {
        let pin = store.create_pin(title, lng, lat, &[], &[]).await.unwrap();
        local.push(pin);
    }
    assert_eq!(id_set(&pin_ids(&local)), id_set(&store.ids()));

    // Update the middle entry
    let target = local[1].id.clone();
    let updated = store
        .update_pin(
            &target,
            PinFields {
                title: Some("Rural Health Unit".into()),
                assignees: Some(vec!["Juan".into()]),
                target_families: None,
            },
        )
        .await
        .unwrap();
    replace_pin(&mut local, updated);
    assert_eq!(id_set(&pin_ids(&local)), id_set(&store.ids()));
    assert_eq!(local[1].title, "Rural Health Unit");

    // Delete the first entry
    let victim = local[0].id.clone();
    store.delete_pin(&victim).await.unwrap();
    remove_pin(&mut local, &victim);
    assert_eq!(id_set(&pin_ids(&local)), id_set(&store.ids()));
    assert_eq!(local.len(), 2);
}

#[tokio::test]
async fn clear_twice_is_idempotent() {
    let store = MemoryPinStore::new();
    for i in 0..3 {
        store
            .create_pin(&format!("pin {}", i), 120.8, 14.8, &[], &[])
            .await
            .unwrap();
    }

    store.delete_all_pins().await.unwrap();
    assert_eq!(store.len(), 0);

    // Second clear must succeed and leave the store empty
    store.delete_all_pins().await.unwrap();
    assert_eq!(store.len(), 0);
}

#[tokio::test]
async fn update_never_touches_coordinates() {
    let store = MemoryPinStore::new();
    let pin = store
        .create_pin("Chapel", 120.8114, 14.8433, &[], &[])
        .await
        .unwrap();

    let updated = store
        .update_pin(
            &pin.id,
            PinFields {
                title: Some("Old Chapel".into()),
                assignees: Some(vec!["Maria".into()]),
                target_families: Some(vec!["Family B".into()]),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.lng, 120.8114);
    assert_eq!(updated.lat, 14.8433);

    let stored = store.get(&pin.id).unwrap();
    assert_eq!(stored.title, "Old Chapel");
    assert_eq!(stored.lng, 120.8114);
    assert_eq!(stored.lat, 14.8433);
}

#[tokio::test]
async fn update_of_unknown_id_fails_and_leaves_local_state_alone() {
    let store = MemoryPinStore::new();
    let pin = store.create_pin("Market", 120.8, 14.8, &[], &[]).await.unwrap();
    let mut local = vec![pin];
    let before = local.clone();

    let err = store
        .update_pin(
            "abc",
            PinFields {
                title: Some("New Name".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err, StoreError::NotFound("abc".into()));

    // Failure path: the controller applies nothing
    assert_eq!(local, before);
    assert_eq!(id_set(&pin_ids(&local)), id_set(&store.ids()));
}

#[tokio::test]
async fn delete_all_empties_a_store_of_five_pins() {
    let store = MemoryPinStore::new();
    let mut local = Vec::new();
    for i in 0..5 {
        local.push(
            store
                .create_pin(&format!("site {}", i), 120.8, 14.8, &[], &[])
                .await
                .unwrap(),
        );
    }

    store.delete_all_pins().await.unwrap();
    local.clear();

    assert_eq!(store.len(), 0);
    assert!(local.is_empty());
}

#[tokio::test]
async fn list_returns_newest_first() {
    let store = MemoryPinStore::new();
    let first = store.create_pin("first", 120.8, 14.8, &[], &[]).await.unwrap();
    let second = store.create_pin("second", 120.8, 14.8, &[], &[]).await.unwrap();

    let listed = store.list_pins().await.unwrap();
    assert_eq!(listed[0].id, second.id);
    assert_eq!(listed[1].id, first.id);
}

#[tokio::test]
async fn failed_calls_surface_a_store_error() {
    let store = MemoryPinStore::new();
    store.set_offline(true);

    assert!(matches!(
        store.list_pins().await,
        Err(StoreError::Network(_))
    ));
    assert!(matches!(
        store.create_pin("x", 0.0, 0.0, &[], &[]).await,
        Err(StoreError::Network(_))
    ));
}
