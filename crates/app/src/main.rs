use dioxus::prelude::*;

mod chart_data;
mod context;
mod fetch_guard;
mod format_helpers;
mod routes;
mod storage;

use client::ApiClient;
use context::{ApiContext, RefreshContext};
use routes::Route;
use shared_types::RefreshLog;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // A new client (different base URL) re-runs every screen's fetches.
    use_context_provider(|| ApiContext {
        client: Signal::new(ApiClient::new(client::config::load())),
    });

    use_context_provider(|| {
        let store = storage::default_store();
        let log = RefreshLog::restore(store.as_ref());
        if let Some(at) = log.last_refresh {
            tracing::debug!(%at, "restored last refresh time");
        }
        RefreshContext {
            log: Signal::new(log),
            store,
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
