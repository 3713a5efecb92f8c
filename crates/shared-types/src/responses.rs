use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::motion::Motion;
use crate::stats::{LawFirmCount, Stats};

/// A backend response body: a `success` flag, an optional `error` string and
/// an endpoint-specific payload.
pub trait ApiEnvelope: DeserializeOwned {
    type Payload;

    fn into_parts(self) -> (bool, Option<String>, Self::Payload);

    /// Turn `success: false` into an application error, using `fallback`
    /// when the server sent no message.
    fn settle(self, fallback: &str) -> Result<Self::Payload, ApiError>
    where
        Self: Sized,
    {
        let (success, error, payload) = self.into_parts();
        if success {
            Ok(payload)
        } else {
            Err(ApiError::from_server(error, fallback))
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StatsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub stats: Stats,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiEnvelope for StatsResponse {
    type Payload = Stats;

    fn into_parts(self) -> (bool, Option<String>, Stats) {
        (self.success, self.error, self.stats)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MotionsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub motions: Vec<Motion>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiEnvelope for MotionsResponse {
    type Payload = Vec<Motion>;

    fn into_parts(self) -> (bool, Option<String>, Vec<Motion>) {
        (self.success, self.error, self.motions)
    }
}

/// One page of filtered motions plus the server's total match count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MotionPage {
    pub motions: Vec<Motion>,
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FilteredMotionsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub motions: Vec<Motion>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiEnvelope for FilteredMotionsResponse {
    type Payload = MotionPage;

    fn into_parts(self) -> (bool, Option<String>, MotionPage) {
        (
            self.success,
            self.error,
            MotionPage {
                motions: self.motions,
                total: self.total,
            },
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MotionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub motion: Option<Motion>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiEnvelope for MotionResponse {
    type Payload = Option<Motion>;

    fn into_parts(self) -> (bool, Option<String>, Option<Motion>) {
        (self.success, self.error, self.motion)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LawFirmsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub firms: Vec<LawFirmCount>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiEnvelope for LawFirmsResponse {
    type Payload = Vec<LawFirmCount>;

    fn into_parts(self) -> (bool, Option<String>, Vec<LawFirmCount>) {
        (self.success, self.error, self.firms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RefreshResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub motions_found: u64,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiEnvelope for RefreshResponse {
    type Payload = u64;

    fn into_parts(self) -> (bool, Option<String>, u64) {
        (self.success, self.error, self.motions_found)
    }
}

/// Body of endpoints that only acknowledge a write.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AckResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiEnvelope for AckResponse {
    type Payload = ();

    fn into_parts(self) -> (bool, Option<String>, ()) {
        (self.success, self.error, ())
    }
}
