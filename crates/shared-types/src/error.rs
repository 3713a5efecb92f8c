use serde::{Deserialize, Serialize};
use std::fmt;

/// Which channel an API failure came through.
///
/// `Transport`, `Status` and `Decode` are raised by the HTTP layer itself.
/// `Application` is a well-formed response that carried `success: false`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiErrorKind {
    Transport,
    Status,
    Decode,
    Application,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiErrorKind::Transport => write!(f, "Transport"),
            ApiErrorKind::Status => write!(f, "Status"),
            ApiErrorKind::Decode => write!(f, "Decode"),
            ApiErrorKind::Application => write!(f, "Application"),
        }
    }
}

/// Error returned by every backend call.
///
/// `message` is the human-readable string the UI displays verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl ApiError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Transport,
            message: message.into(),
            status: None,
        }
    }

    /// Non-2xx HTTP response.
    pub fn status(code: u16) -> Self {
        Self {
            kind: ApiErrorKind::Status,
            message: format!("Request failed with status code {code}"),
            status: Some(code),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Decode,
            message: message.into(),
            status: None,
        }
    }

    pub fn application(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Application,
            message: message.into(),
            status: None,
        }
    }

    /// Build an application error from the server's `error` field, falling
    /// back to the call site's generic message when the field is absent or blank.
    pub fn from_server(error: Option<String>, fallback: &str) -> Self {
        match error {
            Some(msg) if !msg.trim().is_empty() => Self::application(msg),
            _ => Self::application(fallback),
        }
    }

    /// True when the round-trip succeeded but the server reported a failure.
    pub fn is_application(&self) -> bool {
        self.kind == ApiErrorKind::Application
    }

    /// The message to show the user. Empty messages fall back to a generic string.
    pub fn friendly_message(&self) -> String {
        if self.message.trim().is_empty() {
            "Something went wrong. Please try again.".to_string()
        } else {
            self.message.clone()
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Failure writing to a persistence port.
#[derive(Debug, Clone, PartialEq)]
pub struct StorageError(pub String);

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "storage error: {}", self.0)
    }
}

impl std::error::Error for StorageError {}
