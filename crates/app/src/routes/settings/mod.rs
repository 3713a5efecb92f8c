mod api_section;
mod refresh_section;

use dioxus::prelude::*;
use shared_ui::{PageHeader, PageSubtitle, PageTitle};

use api_section::ApiSection;
use refresh_section::RefreshSection;

/// Two independent write-only forms. Nothing is loaded from the server, so
/// fields start empty (or at the schedule defaults) on every visit.
#[component]
pub fn Settings() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./settings.css") }

        div { class: "settings-page",
            PageHeader {
                PageTitle { "Settings" }
                PageSubtitle { "Data source credentials and the refresh schedule" }
            }

            div { class: "settings-sections",
                ApiSection {}
                RefreshSection {}
            }
        }
    }
}
