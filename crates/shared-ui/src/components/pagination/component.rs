use dioxus::prelude::*;

use crate::components::button::{Button, ButtonVariant};

/// Previous / "Page X of Y" / Next controls.
///
/// Emits the requested page number; the owner decides whether it is in range.
#[component]
pub fn Pagination(current_page: u32, total_pages: u32, on_page_change: EventHandler<i64>) -> Element {
    let current = i64::from(current_page);
    let at_start = current_page <= 1;
    let at_end = current_page >= total_pages;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav { class: "pagination", aria_label: "Pagination",
            Button {
                variant: ButtonVariant::Outline,
                disabled: at_start,
                onclick: move |_| on_page_change.call(current - 1),
                "Previous"
            }
            span { class: "pagination-info", "Page {current_page} of {total_pages}" }
            Button {
                variant: ButtonVariant::Outline,
                disabled: at_end,
                onclick: move |_| on_page_change.call(current + 1),
                "Next"
            }
        }
    }
}
