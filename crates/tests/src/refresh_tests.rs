use crate::common::Stub;
use chrono::Utc;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{
    refresh_success_message, MemoryStore, RefreshLog, StoragePort, LAST_REFRESH_KEY,
    MANUAL_REFRESH_DAYS_BACK,
};

#[tokio::test]
async fn test_manual_refresh_records_timestamp() {
    let backend = Stub::new()
        .json("POST", "refresh", json!({"success": true, "motions_found": 3}))
        .start()
        .await;
    let store = MemoryStore::default();
    let mut log = RefreshLog::restore(&store);
    assert_eq!(log.last_refresh, None);

    let before = Utc::now();
    let found = backend.client.refresh(MANUAL_REFRESH_DAYS_BACK).await.unwrap();
    log.record(&store, Utc::now()).unwrap();

    assert_eq!(found, 3);
    assert_eq!(
        refresh_success_message(found),
        "Refresh successful. Found 3 new motions."
    );

    let request = backend.last_request();
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/api/refresh");
    assert_eq!(request.body, json!({"days_back": 1}));

    let restored = RefreshLog::restore(&store);
    let at = restored.last_refresh.expect("timestamp persisted");
    assert!(at >= before - chrono::Duration::milliseconds(1));
    assert!(store.read(LAST_REFRESH_KEY).unwrap().ends_with('Z'));
}

#[tokio::test]
async fn test_failed_refresh_leaves_log_untouched() {
    let backend = Stub::new()
        .json("POST", "refresh", json!({"success": false}))
        .start()
        .await;
    let store = MemoryStore::default();
    store.write(LAST_REFRESH_KEY, "2025-03-14T09:30:00.000Z").unwrap();
    let log = RefreshLog::restore(&store);

    let err = backend.client.refresh(MANUAL_REFRESH_DAYS_BACK).await.unwrap_err();
    assert_eq!(err.friendly_message(), "An error occurred during refresh");
    assert_eq!(RefreshLog::restore(&store), log);
}
