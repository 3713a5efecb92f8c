use serde::{Deserialize, Serialize};

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Name of the environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "MOTION_API_URL";

/// `[api]` section of `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ApiSection {
    #[serde(default)]
    pub base_url: Option<String>,
}

/// Top-level config file structure matching `config.toml`.
///
/// Every field is optional so a missing or partial file falls through to
/// the next source.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiSection,
}

/// Resolved client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(api_url: impl AsRef<str>) -> Self {
        Self {
            api_url: api_url.as_ref().trim_end_matches('/').to_string(),
        }
    }

    /// Pick the first non-blank source: runtime environment, config file,
    /// compile-time environment, then the default.
    pub fn resolve(
        env: Option<String>,
        file: Option<&AppConfig>,
        compile_time: Option<&str>,
    ) -> Self {
        let from_file = file.and_then(|c| c.api.base_url.clone());
        [env, from_file, compile_time.map(str::to_string)]
            .into_iter()
            .flatten()
            .find(|url| !url.trim().is_empty())
            .map(|url| Self::new(url.trim()))
            .unwrap_or_default()
    }
}
