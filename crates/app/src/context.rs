use std::rc::Rc;

use client::ApiClient;
use dioxus::prelude::*;
use shared_types::{RefreshLog, StoragePort};

/// The configured backend client, shared by every screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ApiContext {
    pub client: Signal<ApiClient>,
}

impl ApiContext {
    /// Snapshot of the current client. Reading it inside a resource
    /// subscribes the resource to base URL changes.
    pub fn current(&self) -> ApiClient {
        self.client.read().clone()
    }
}

/// Last manual refresh, persisted through `store`.
#[derive(Clone)]
pub struct RefreshContext {
    pub log: Signal<RefreshLog>,
    pub store: Rc<dyn StoragePort>,
}

pub fn use_api() -> ApiContext {
    use_context::<ApiContext>()
}

pub fn use_refresh() -> RefreshContext {
    use_context::<RefreshContext>()
}
