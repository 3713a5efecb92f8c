use std::rc::Rc;

use shared_types::StoragePort;

/// The persistent store for this target.
pub fn default_store() -> Rc<dyn StoragePort> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(web::LocalStorage)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(native::FileStore::from_env())
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use shared_types::{StorageError, StoragePort};

    /// Browser `localStorage`.
    pub struct LocalStorage;

    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or_else(|| StorageError("no window".into()))?;
        window
            .local_storage()
            .map_err(|e| StorageError(format!("{e:?}")))?
            .ok_or_else(|| StorageError("localStorage unavailable".into()))
    }

    impl StoragePort for LocalStorage {
        fn read(&self, key: &str) -> Option<String> {
            storage().ok()?.get_item(key).ok().flatten()
        }

        fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
            storage()?
                .set_item(key, value)
                .map_err(|e| StorageError(format!("{e:?}")))
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::collections::BTreeMap;
    use std::path::PathBuf;

    use shared_types::{StorageError, StoragePort};

    pub const STATE_FILE_ENV: &str = "MOTION_STATE_FILE";
    const DEFAULT_STATE_FILE: &str = ".motion-dashboard.json";

    /// A flat JSON object on disk standing in for `localStorage`.
    pub struct FileStore {
        path: PathBuf,
    }

    impl FileStore {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        pub fn from_env() -> Self {
            let path = std::env::var(STATE_FILE_ENV)
                .ok()
                .filter(|p| !p.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_STATE_FILE.to_string());
            Self::new(path)
        }

        fn entries(&self) -> BTreeMap<String, String> {
            let Ok(contents) = std::fs::read_to_string(&self.path) else {
                return BTreeMap::new();
            };
            serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "ignoring corrupt state file"
                );
                BTreeMap::new()
            })
        }
    }

    impl StoragePort for FileStore {
        fn read(&self, key: &str) -> Option<String> {
            self.entries().remove(key)
        }

        fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
            let mut entries = self.entries();
            entries.insert(key.to_string(), value.to_string());
            let json = serde_json::to_string_pretty(&entries)
                .map_err(|e| StorageError(e.to_string()))?;
            std::fs::write(&self.path, json).map_err(|e| StorageError(e.to_string()))
        }
    }

}
