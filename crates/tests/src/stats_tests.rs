use crate::common::Stub;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{combine, ApiErrorKind, ViewState};

#[tokio::test]
async fn test_stats_decodes_dimension_counts() {
    let backend = Stub::new()
        .json(
            "GET",
            "stats",
            json!({
                "success": true,
                "stats": {
                    "total_motions": 12,
                    "by_court": [{"court": "N.D. Cal.", "count": 7}, {"court": "S.D.N.Y.", "count": 5}],
                    "by_judge": [{"judge": "Hon. Jane Smith", "count": 4}],
                    "by_motion_type": [{"motion_type": "motion to dismiss denied", "count": 12}],
                    "recent_trend": [{"date": "2025-03-13", "count": 2}, {"date": "2025-03-14", "count": 3}]
                }
            }),
        )
        .start()
        .await;

    let stats = backend.client.stats().await.unwrap();
    assert_eq!(stats.total_motions, 12);
    assert_eq!(stats.court_count(), 2);
    assert_eq!(stats.by_court[0].label, "N.D. Cal.");
    assert_eq!(stats.by_judge[0].label, "Hon. Jane Smith");
    assert_eq!(stats.recent_trend.len(), 2);

    let request = backend.last_request();
    assert_eq!(request.method, "GET");
    assert_eq!(request.path, "/api/stats");
}

#[tokio::test]
async fn test_stats_missing_sections_default_to_empty() {
    let backend = Stub::new()
        .json("GET", "stats", json!({"success": true, "stats": {"total_motions": 0}}))
        .start()
        .await;

    let stats = backend.client.stats().await.unwrap();
    assert!(stats.by_court.is_empty());
    assert!(stats.recent_trend.is_empty());
    assert!(stats.top_judges().is_empty());
}

#[tokio::test]
async fn test_stats_application_error_uses_server_message() {
    let backend = Stub::new()
        .json("GET", "stats", json!({"success": false, "error": "Database unavailable"}))
        .start()
        .await;

    let err = backend.client.stats().await.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Application);
    assert_eq!(err.friendly_message(), "Database unavailable");
}

#[tokio::test]
async fn test_stats_application_error_falls_back() {
    let backend = Stub::new()
        .json("GET", "stats", json!({"success": false}))
        .start()
        .await;

    let err = backend.client.stats().await.unwrap_err();
    assert!(err.is_application());
    assert_eq!(err.message, "Failed to fetch statistics");
}

#[tokio::test]
async fn test_dashboard_state_is_error_when_either_fetch_fails() {
    let backend = Stub::new()
        .json("GET", "stats", json!({"success": false, "error": "stats broke"}))
        .json("GET", "motions", json!({"success": true, "motions": []}))
        .start()
        .await;

    let (stats, recent) = tokio::join!(backend.client.stats(), backend.client.recent_motions(5));
    let state = combine(Some(stats), Some(recent));
    assert_eq!(state, ViewState::Error("stats broke".to_string()));
}
