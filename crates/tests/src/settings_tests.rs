use crate::common::Stub;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{ApiSettings, RefreshSettings};

#[tokio::test]
async fn test_api_settings_post_camel_case_body() {
    let backend = Stub::new()
        .json("POST", "settings/api", json!({"success": true}))
        .start()
        .await;

    let settings = ApiSettings {
        docket_alarm_username: "clerk".into(),
        docket_alarm_password: "hunter2".into(),
        openai_api_key: "sk-test".into(),
    };
    backend.client.save_api_settings(&settings).await.unwrap();

    assert_eq!(
        backend.last_request().body,
        json!({
            "docketAlarmUsername": "clerk",
            "docketAlarmPassword": "hunter2",
            "openaiApiKey": "sk-test"
        })
    );
}

#[tokio::test]
async fn test_refresh_settings_post_full_form() {
    let backend = Stub::new()
        .json("POST", "settings/refresh", json!({"success": true}))
        .start()
        .await;

    let settings = RefreshSettings {
        auto_refresh: false,
        refresh_time: "06:30".into(),
        days_back: 7,
    };
    backend.client.save_refresh_settings(&settings).await.unwrap();

    let request = backend.last_request();
    assert_eq!(request.path, "/api/settings/refresh");
    assert_eq!(
        request.body,
        json!({"autoRefresh": false, "refreshTime": "06:30", "daysBack": 7})
    );
}

#[tokio::test]
async fn test_settings_failures_use_their_own_fallbacks() {
    let backend = Stub::new()
        .json("POST", "settings/api", json!({"success": false}))
        .json("POST", "settings/refresh", json!({"success": false, "error": "Invalid time"}))
        .start()
        .await;

    let api_err = backend
        .client
        .save_api_settings(&ApiSettings::default())
        .await
        .unwrap_err();
    assert_eq!(api_err.message, "Failed to save API settings");

    let refresh_err = backend
        .client
        .save_refresh_settings(&RefreshSettings::default())
        .await
        .unwrap_err();
    assert_eq!(refresh_err.message, "Invalid time");
}
