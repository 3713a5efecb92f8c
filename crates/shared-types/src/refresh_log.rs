use std::cell::RefCell;
use std::collections::HashMap;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::StorageError;

/// Storage key holding the timestamp of the last manual refresh.
pub const LAST_REFRESH_KEY: &str = "lastRefresh";

/// Key/value persistence the shell writes through. Browser local storage on
/// the web, a file on native targets.
pub trait StoragePort {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store, used when nothing persistent is available.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl StoragePort for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// When the backend was last refreshed from this client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshLog {
    pub last_refresh: Option<DateTime<Utc>>,
}

impl RefreshLog {
    /// Load the stored timestamp. Missing or unparseable values yield an
    /// empty log.
    pub fn restore(port: &dyn StoragePort) -> Self {
        let last_refresh = port
            .read(LAST_REFRESH_KEY)
            .and_then(|raw| DateTime::parse_from_rfc3339(raw.trim()).ok())
            .map(|dt| dt.with_timezone(&Utc));
        Self { last_refresh }
    }

    /// Record a successful refresh at `now` and persist it.
    pub fn record(
        &mut self,
        port: &dyn StoragePort,
        now: DateTime<Utc>,
    ) -> Result<(), StorageError> {
        self.last_refresh = Some(now);
        port.write(
            LAST_REFRESH_KEY,
            &now.to_rfc3339_opts(SecondsFormat::Millis, true),
        )
    }
}

pub fn refresh_success_message(motions_found: u64) -> String {
    format!("Refresh successful. Found {motions_found} new motions.")
}
