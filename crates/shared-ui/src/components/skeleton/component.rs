use dioxus::prelude::*;

/// Pulsing placeholder block shown while the first fetch is in flight.
#[component]
pub fn Skeleton(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let base = vec![Attribute::new("class", "skeleton", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
        }
    }
}

/// A stack of `count` full-width skeleton lines.
#[component]
pub fn SkeletonLines(count: usize, #[props(default = "1.25rem".to_string())] height: String) -> Element {
    rsx! {
        div { class: "skeleton-lines",
            for i in 0..count {
                Skeleton { key: "{i}", style: "height: {height}; width: 100%" }
            }
        }
    }
}
