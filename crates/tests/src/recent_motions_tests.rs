use crate::common::{sample_motion, Stub};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::SUMMARY_PREVIEW_CHARS;

#[tokio::test]
async fn test_recent_motions_sends_limit() {
    let backend = Stub::new()
        .json(
            "GET",
            "motions",
            json!({"success": true, "motions": [sample_motion(1), sample_motion(2)]}),
        )
        .start()
        .await;

    let motions = backend.client.recent_motions(5).await.unwrap();
    assert_eq!(motions.len(), 2);
    assert_eq!(motions[0].id, "1");

    let request = backend.last_request();
    assert_eq!(request.path, "/api/motions");
    assert_eq!(request.query.get("limit").map(String::as_str), Some("5"));
}

#[tokio::test]
async fn test_recent_motion_summary_preview_is_truncated() {
    let mut motion = sample_motion(7);
    motion["summary"] = json!("x".repeat(400));
    let backend = Stub::new()
        .json("GET", "motions", json!({"success": true, "motions": [motion]}))
        .start()
        .await;

    let motions = backend.client.recent_motions(5).await.unwrap();
    let preview = motions[0].summary_preview(SUMMARY_PREVIEW_CHARS);
    assert_eq!(preview.chars().count(), SUMMARY_PREVIEW_CHARS + 3);
    assert!(preview.ends_with("..."));
}

#[tokio::test]
async fn test_recent_motions_null_fields_decode_as_empty() {
    let backend = Stub::new()
        .json(
            "GET",
            "motions",
            json!({"success": true, "motions": [{"id": "abc", "case_name": null, "parties": null}]}),
        )
        .start()
        .await;

    let motions = backend.client.recent_motions(5).await.unwrap();
    assert_eq!(motions[0].id, "abc");
    assert_eq!(motions[0].case_name, "");
    assert!(!motions[0].has_parties());
    assert_eq!(motions[0].summary_text(), None);
}
