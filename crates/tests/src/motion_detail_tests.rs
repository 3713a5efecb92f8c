use crate::common::{sample_motion, Stub};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{ApiErrorKind, ViewState};

#[tokio::test]
async fn test_detail_decodes_parties_and_attorneys() {
    let backend = Stub::new()
        .json("GET", "motions/42", json!({"success": true, "motion": sample_motion(42)}))
        .start()
        .await;

    let motion = backend.client.motion("42").await.unwrap();
    assert_eq!(motion.id, "42");
    assert_eq!(motion.parties[0].heading(), "Plaintiff: Acme Corp");
    assert_eq!(
        motion.parties[0].attorneys[0].display(),
        "Jane Roe (Roe & Partners LLP)"
    );
    assert_eq!(backend.last_request().path, "/api/motions/42");
}

#[tokio::test]
async fn test_detail_with_no_parties_keeps_other_sections() {
    let mut motion = sample_motion(42);
    motion["parties"] = json!([]);
    let backend = Stub::new()
        .json("GET", "motions/42", json!({"success": true, "motion": motion}))
        .start()
        .await;

    let motion = backend.client.motion("42").await.unwrap();
    assert!(!motion.has_parties());
    assert_eq!(motion.court, "N.D. Cal.");
    assert_eq!(motion.summary_text(), Some("The court denied the motion to dismiss."));
    assert_eq!(
        motion.order_description_text(),
        Some("ORDER denying motion to dismiss.")
    );
}

#[tokio::test]
async fn test_detail_id_is_percent_encoded() {
    let backend = Stub::new()
        .json("GET", "motions/a%2Fb", json!({"success": true, "motion": sample_motion(1)}))
        .start()
        .await;

    backend.client.motion("a/b").await.unwrap();
    assert_eq!(backend.last_request().path, "/api/motions/a%2Fb");
}

#[tokio::test]
async fn test_detail_not_found_reports_server_error() {
    let backend = Stub::new()
        .json("GET", "motions/9", json!({"success": false, "error": "Motion not found"}))
        .start()
        .await;

    let state = ViewState::from_result(Some(backend.client.motion("9").await));
    assert_eq!(state, ViewState::Error("Motion not found".to_string()));
}

#[tokio::test]
async fn test_detail_success_without_motion_uses_fallback() {
    let backend = Stub::new()
        .json("GET", "motions/9", json!({"success": true}))
        .start()
        .await;

    let err = backend.client.motion("9").await.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Application);
    assert_eq!(err.message, "Failed to fetch motion details");
}
