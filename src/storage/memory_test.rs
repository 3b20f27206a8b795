use super::*;

fn sample_identity() -> Identity {
    Identity {
        id: "user-a1b2c3d4e".into(),
        name: "Ana".into(),
        email: "ana@test.com".into(),
        is_admin: false,
    }
}

#[tokio::test]
async fn new_storage_is_empty() {
    let storage = MemoryStorage::new();
    assert!(storage.load().await.unwrap().is_none());
    assert!(storage.raw().is_none());
}

#[tokio::test]
async fn store_then_load_round_trips() {
    let storage = MemoryStorage::new();
    let identity = sample_identity();
    storage.store(&identity).await.unwrap();
    assert_eq!(storage.load().await.unwrap(), Some(identity));
}

#[tokio::test]
async fn with_identity_seeds_the_record() {
    let identity = sample_identity();
    let storage = MemoryStorage::with_identity(&identity);
    assert_eq!(storage.load().await.unwrap(), Some(identity));
}

#[tokio::test]
async fn corrupt_raw_record_loads_as_no_session() {
    let storage = MemoryStorage::with_raw("][ definitely not json");
    assert!(storage.load().await.unwrap().is_none());
}

#[tokio::test]
async fn clear_drops_the_record() {
    let storage = MemoryStorage::with_identity(&sample_identity());
    storage.clear().await.unwrap();
    assert!(storage.raw().is_none());
    assert!(storage.load().await.unwrap().is_none());
}

#[tokio::test]
async fn failing_storage_reports_unavailable() {
    let storage = MemoryStorage::new();
    storage.set_failing(true);

    assert!(matches!(
        storage.store(&sample_identity()).await,
        Err(StorageError::Unavailable(_))
    ));
    assert!(matches!(
        storage.load().await,
        Err(StorageError::Unavailable(_))
    ));
    assert!(matches!(
        storage.clear().await,
        Err(StorageError::Unavailable(_))
    ));

    storage.set_failing(false);
    storage.store(&sample_identity()).await.unwrap();
}
