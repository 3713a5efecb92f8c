use serde::Serialize;
use serde_json::Value;
use shared_types::{
    AckResponse, ApiEnvelope, ApiError, ApiSettings, ClientConfig, FilteredMotionsResponse,
    LawFirmCount, LawFirmsResponse, Motion, MotionPage, MotionQuery, MotionResponse,
    MotionsResponse, RefreshRequest, RefreshResponse, RefreshSettings, Stats, StatsResponse,
};

const STATS_FAILED: &str = "Failed to fetch statistics";
const RECENT_FAILED: &str = "Failed to fetch recent motions";
const FILTER_FAILED: &str = "Failed to fetch motions";
const DETAIL_FAILED: &str = "Failed to fetch motion details";
const LAW_FIRMS_FAILED: &str = "Failed to fetch law firm data";
const REFRESH_FAILED: &str = "An error occurred during refresh";
const API_SETTINGS_FAILED: &str = "Failed to save API settings";
const REFRESH_SETTINGS_FAILED: &str = "Failed to save refresh settings";

/// Thin JSON client for the motions backend.
///
/// One attempt per call: no retries, no timeout.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `GET {base}/{path}?{query}` and parse the body as JSON.
    #[tracing::instrument(skip(self, query), fields(base = %self.base_url))]
    pub async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value, ApiError> {
        let response = self
            .http
            .get(self.url(path))
            .query(query)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "request failed");
                ApiError::transport(e.to_string())
            })?;
        read_json(response).await
    }

    /// `POST {base}/{path}` with a JSON body.
    #[tracing::instrument(skip(self, body), fields(base = %self.base_url))]
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, ApiError> {
        let response = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "request failed");
                ApiError::transport(e.to_string())
            })?;
        read_json(response).await
    }

    pub async fn stats(&self) -> Result<Stats, ApiError> {
        let body = self.get("stats", &[]).await?;
        settle::<StatsResponse>(body, STATS_FAILED)
    }

    pub async fn recent_motions(&self, limit: u32) -> Result<Vec<Motion>, ApiError> {
        let body = self.get("motions", &[("limit", limit.to_string())]).await?;
        settle::<MotionsResponse>(body, RECENT_FAILED)
    }

    pub async fn filter_motions(&self, query: &MotionQuery) -> Result<MotionPage, ApiError> {
        let body = self.get("motions/filter", &query.to_params()).await?;
        settle::<FilteredMotionsResponse>(body, FILTER_FAILED)
    }

    pub async fn motion(&self, id: &str) -> Result<Motion, ApiError> {
        let path = format!("motions/{}", urlencoding::encode(id));
        let body = self.get(&path, &[]).await?;
        settle::<MotionResponse>(body, DETAIL_FAILED)?
            .ok_or_else(|| ApiError::from_server(None, DETAIL_FAILED))
    }

    pub async fn law_firms(&self) -> Result<Vec<LawFirmCount>, ApiError> {
        let body = self.get("law-firms", &[]).await?;
        settle::<LawFirmsResponse>(body, LAW_FIRMS_FAILED)
    }

    /// Ask the backend to pull new motions. Returns how many were found.
    pub async fn refresh(&self, days_back: u32) -> Result<u64, ApiError> {
        let body = self.post("refresh", &RefreshRequest { days_back }).await?;
        settle::<RefreshResponse>(body, REFRESH_FAILED)
    }

    pub async fn save_api_settings(&self, settings: &ApiSettings) -> Result<(), ApiError> {
        let body = self.post("settings/api", settings).await?;
        settle::<AckResponse>(body, API_SETTINGS_FAILED)
    }

    pub async fn save_refresh_settings(&self, settings: &RefreshSettings) -> Result<(), ApiError> {
        let body = self.post("settings/refresh", settings).await?;
        settle::<AckResponse>(body, REFRESH_SETTINGS_FAILED)
    }
}

async fn read_json(response: reqwest::Response) -> Result<Value, ApiError> {
    let status = response.status();
    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), "non-success status");
        return Err(ApiError::status(status.as_u16()));
    }
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::transport(e.to_string()))?;
    serde_json::from_str(&text).map_err(|e| {
        tracing::warn!(error = %e, "response was not JSON");
        ApiError::decode(format!("Invalid JSON response: {e}"))
    })
}

fn settle<E: ApiEnvelope>(body: Value, fallback: &str) -> Result<E::Payload, ApiError> {
    let envelope: E = serde_json::from_value(body)
        .map_err(|e| ApiError::decode(format!("Unexpected response shape: {e}")))?;
    let result = envelope.settle(fallback);
    if let Err(e) = &result {
        tracing::debug!(error = %e, "server reported failure");
    }
    result
}
