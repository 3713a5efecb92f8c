use crate::common::Stub;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::LawFirmCount;

#[tokio::test]
async fn test_law_firms_keep_server_order() {
    let backend = Stub::new()
        .json(
            "GET",
            "law-firms",
            json!({
                "success": true,
                "firms": [
                    {"law_firm": "Roe & Partners LLP", "count": 9},
                    {"law_firm": "Doe Legal", "count": 4}
                ]
            }),
        )
        .start()
        .await;

    let firms = backend.client.law_firms().await.unwrap();
    assert_eq!(
        firms,
        vec![
            LawFirmCount { law_firm: "Roe & Partners LLP".into(), count: 9 },
            LawFirmCount { law_firm: "Doe Legal".into(), count: 4 },
        ]
    );
    assert_eq!(backend.last_request().path, "/api/law-firms");
}

#[tokio::test]
async fn test_law_firms_failure_falls_back() {
    let backend = Stub::new()
        .json("GET", "law-firms", json!({"success": false, "error": ""}))
        .start()
        .await;

    let err = backend.client.law_firms().await.unwrap_err();
    assert_eq!(err.message, "Failed to fetch law firm data");
}

#[tokio::test]
async fn test_law_firms_tolerate_null_names() {
    let backend = Stub::new()
        .json(
            "GET",
            "law-firms",
            json!({
                "success": true,
                "firms": [
                    {"law_firm": null, "count": 6},
                    {"law_firm": "Doe Legal", "count": 4}
                ]
            }),
        )
        .start()
        .await;

    let firms = backend.client.law_firms().await.unwrap();
    assert_eq!(firms.len(), 2);
    assert_eq!(firms[0].law_firm, "");
    assert_eq!(firms[0].count, 6);
    assert_eq!(firms[1].law_firm, "Doe Legal");
}
