use dioxus::prelude::*;

use super::geometry::{format_tick, ticks, Frame};

/// Titled panel that hosts one chart.
#[component]
pub fn ChartFrame(title: String, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        figure { class: "chart-frame",
            figcaption { class: "chart-title", "{title}" }
            div { class: "chart-body", {children} }
        }
    }
}

/// Horizontal grid lines with value labels on the left axis.
#[component]
pub(crate) fn ValueAxis(frame: Frame, max: f64) -> Element {
    rsx! {
        g { class: "chart-axis",
            for (i, tick) in ticks(max, 4).into_iter().enumerate() {
                g { key: "{i}",
                    line {
                        x1: "{frame.pad_left}",
                        x2: "{frame.right()}",
                        y1: "{frame.y_for(tick, max)}",
                        y2: "{frame.y_for(tick, max)}",
                        class: "chart-grid-line",
                    }
                    text {
                        x: "{frame.pad_left - 6.0}",
                        y: "{frame.y_for(tick, max) + 4.0}",
                        text_anchor: "end",
                        class: "chart-tick",
                        "{format_tick(tick)}"
                    }
                }
            }
        }
    }
}
