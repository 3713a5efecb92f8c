use dioxus::prelude::*;

/// Grid of filter controls with a trailing action row.
#[component]
pub fn FilterBar(actions: Element, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "filter-bar",
            div { class: "filter-bar-fields", {children} }
            div { class: "filter-bar-actions", {actions} }
        }
    }
}
