use crate::common::{unreachable_client, Stub};
use pretty_assertions::assert_eq;
use shared_types::{combine, ApiErrorKind, ViewState};

#[tokio::test]
async fn test_non_success_status_is_a_status_error() {
    let backend = Stub::new()
        .raw("GET", "stats", 500, r#"{"success": false, "error": "boom"}"#)
        .start()
        .await;

    let err = backend.client.stats().await.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Status);
    assert_eq!(err.status, Some(500));
    assert_eq!(err.message, "Request failed with status code 500");
}

#[tokio::test]
async fn test_unknown_route_is_a_status_error() {
    let backend = Stub::new().start().await;

    let err = backend.client.law_firms().await.unwrap_err();
    assert_eq!(err.status, Some(404));
}

#[tokio::test]
async fn test_non_json_body_is_a_decode_error() {
    let backend = Stub::new()
        .raw("GET", "stats", 200, "<html>maintenance</html>")
        .start()
        .await;

    let err = backend.client.stats().await.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Decode);
    assert!(err.message.starts_with("Invalid JSON response"));
}

#[tokio::test]
async fn test_refused_connection_is_a_transport_error() {
    let client = unreachable_client().await;

    let err = client.stats().await.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Transport);
    assert!(!err.friendly_message().is_empty());
}

#[tokio::test]
async fn test_transport_failure_on_stats_never_renders_charts() {
    let client = unreachable_client().await;

    let (stats, recent) = tokio::join!(client.stats(), client.recent_motions(5));
    let state = combine(Some(stats), Some(recent));
    assert!(matches!(state, ViewState::Error(ref message) if !message.is_empty()));
}
