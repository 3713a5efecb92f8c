use dioxus::prelude::*;

use crate::components::button::{Button, ButtonVariant};

/// Full-width error strip with a Dismiss button. Dismissing only clears the
/// message; nothing is retried.
#[component]
pub fn ErrorBanner(message: String, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "error-banner", role: "alert",
            span { class: "error-banner-message", "{message}" }
            Button {
                variant: ButtonVariant::Ghost,
                onclick: move |_| on_dismiss.call(()),
                "Dismiss"
            }
        }
    }
}

/// Terminal error state of a screen. No retry control.
#[component]
pub fn ErrorPanel(message: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "error-panel", role: "alert",
            strong { "Error: " }
            "{message}"
        }
    }
}

/// Placeholder shown in place of an empty section.
#[component]
pub fn EmptyState(message: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        p { class: "empty-state", "{message}" }
    }
}
