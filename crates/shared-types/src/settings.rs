use serde::{Deserialize, Serialize};

/// Lookback window choices offered by the refresh settings form.
pub const DAYS_BACK_OPTIONS: &[u32] = &[1, 2, 3, 7, 14, 30];

/// Lookback used by the shell's manual refresh button.
pub const MANUAL_REFRESH_DAYS_BACK: u32 = 1;

/// Credentials for the case-data source and the summary service.
/// Write-only: never read back from the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSettings {
    pub docket_alarm_username: String,
    pub docket_alarm_password: String,
    pub openai_api_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshSettings {
    pub auto_refresh: bool,
    /// "HH:MM", 24-hour.
    pub refresh_time: String,
    pub days_back: u32,
}

impl Default for RefreshSettings {
    fn default() -> Self {
        Self {
            auto_refresh: true,
            refresh_time: "01:00".to_string(),
            days_back: 1,
        }
    }
}

/// Body of `POST /refresh`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub days_back: u32,
}

pub fn days_back_label(days: u32) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{days} days")
    }
}
