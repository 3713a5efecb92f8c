use crate::common::{sample_motion, Stub};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{list_content, FilterField, ListContent, MotionListState};

#[tokio::test]
async fn test_filter_sends_only_non_empty_fields() {
    let backend = Stub::new()
        .json(
            "GET",
            "motions/filter",
            json!({"success": true, "motions": [sample_motion(1)], "total": 1}),
        )
        .start()
        .await;

    let mut state = MotionListState::default();
    state.edit_filter(FilterField::Court, "N.D. Cal.");
    state.edit_filter(FilterField::MotionType, "motion to dismiss denied");
    state.edit_filter(FilterField::StartDate, "2025-01-01");

    backend.client.filter_motions(&state.request().query).await.unwrap();

    let request = backend.last_request();
    assert_eq!(request.path, "/api/motions/filter");
    assert_eq!(request.query.get("limit").map(String::as_str), Some("10"));
    assert_eq!(request.query.get("offset").map(String::as_str), Some("0"));
    assert_eq!(request.query.get("court").map(String::as_str), Some("N.D. Cal."));
    assert_eq!(
        request.query.get("motion_type").map(String::as_str),
        Some("motion to dismiss denied")
    );
    assert_eq!(request.query.get("start_date").map(String::as_str), Some("2025-01-01"));
    assert!(!request.query.contains_key("judge"));
    assert!(!request.query.contains_key("end_date"));
    assert!(!request.query.contains_key("motionType"));
}

#[tokio::test]
async fn test_page_change_moves_offset_and_filter_edit_resets_it() {
    let backend = Stub::new()
        .json(
            "GET",
            "motions/filter",
            json!({"success": true, "motions": [sample_motion(1)], "total": 35}),
        )
        .start()
        .await;

    let mut state = MotionListState::default();
    let page = backend.client.filter_motions(&state.request().query).await.unwrap();
    state.apply_total(page.total);
    assert_eq!(state.pagination.total_pages, 4);

    assert!(state.change_page(3));
    backend.client.filter_motions(&state.request().query).await.unwrap();
    assert_eq!(
        backend.last_request().query.get("offset").map(String::as_str),
        Some("20")
    );

    assert!(!state.change_page(5));
    assert!(!state.change_page(0));
    assert_eq!(state.pagination.current_page, 3);

    state.edit_filter(FilterField::Judge, "Smith");
    backend.client.filter_motions(&state.request().query).await.unwrap();
    let request = backend.last_request();
    assert_eq!(request.query.get("offset").map(String::as_str), Some("0"));
    assert_eq!(request.query.get("judge").map(String::as_str), Some("Smith"));
    assert_eq!(backend.requests().len(), 3);
}

#[tokio::test]
async fn test_empty_page_renders_no_results() {
    let backend = Stub::new()
        .json("GET", "motions/filter", json!({"success": true, "motions": [], "total": 0}))
        .start()
        .await;

    let mut state = MotionListState::default();
    let result = backend.client.filter_motions(&state.request().query).await;
    if let Ok(page) = &result {
        state.apply_total(page.total);
    }

    assert_eq!(list_content(Some(&result)), ListContent::NoResults);
    assert_eq!(state.pagination.total_pages, 1);
}

#[tokio::test]
async fn test_missing_total_keeps_single_page() {
    let backend = Stub::new()
        .json("GET", "motions/filter", json!({"success": true, "motions": [sample_motion(4)]}))
        .start()
        .await;

    let page = backend
        .client
        .filter_motions(&MotionListState::default().request().query)
        .await
        .unwrap();
    assert_eq!(page.total, None);

    let mut state = MotionListState::default();
    state.apply_total(page.total);
    assert_eq!(state.pagination.total_pages, 1);
    assert!(!state.pagination.has_next());
}

#[tokio::test]
async fn test_filter_failure_renders_error_not_empty() {
    let backend = Stub::new()
        .json("GET", "motions/filter", json!({"success": false}))
        .start()
        .await;

    let result = backend
        .client
        .filter_motions(&MotionListState::default().request().query)
        .await;
    assert_eq!(
        list_content(Some(&result)),
        ListContent::Failed("Failed to fetch motions".to_string())
    );
}
