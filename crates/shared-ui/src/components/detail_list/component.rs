use dioxus::prelude::*;

/// Vertical list of label/value rows.
#[component]
pub fn DetailList(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        dl { class: "detail-list", {children} }
    }
}

/// One label/value row. Empty values render as "N/A" so the row
/// keeps its height.
#[component]
pub fn DetailItem(label: &'static str, #[props(default)] value: String) -> Element {
    let shown = if value.is_empty() { "N/A".to_string() } else { value };

    rsx! {
        div { class: "detail-item",
            dt { class: "detail-item-label", "{label}" }
            dd { class: "detail-item-value", "{shown}" }
        }
    }
}

/// Two-column grid of detail cards.
#[component]
pub fn DetailGrid(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "detail-grid", {children} }
    }
}

/// Block of long-form text such as an order summary.
#[component]
pub fn DetailText(text: String) -> Element {
    rsx! {
        div { class: "detail-text",
            for (i, para) in text.split("\n\n").enumerate() {
                p { key: "{i}", "{para}" }
            }
        }
    }
}
