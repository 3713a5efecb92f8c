use dioxus::prelude::*;

use super::geometry::{pie_slices, ChartDatum};

const SIZE: f64 = 240.0;
const RADIUS: f64 = 100.0;

fn legend_value(value: f64, fraction: f64) -> String {
    format!("{value} ({:.0}%)", fraction * 100.0)
}

/// Pie chart with a legend of label, count and share.
#[component]
pub fn PieChart(data: Vec<ChartDatum>) -> Element {
    let center = SIZE / 2.0;
    let slices = pie_slices(&data, center, center, RADIUS);

    rsx! {
        div { class: "pie-chart",
            svg {
                class: "chart-svg pie",
                xmlns: "http://www.w3.org/2000/svg",
                view_box: "0 0 {SIZE} {SIZE}",
                role: "img",
                for (i, slice) in slices.iter().enumerate() {
                    path {
                        key: "{i}",
                        d: "{slice.path}",
                        fill: "{slice.color}",
                        stroke: "var(--surface)",
                        stroke_width: "1",
                    }
                }
            }
            ul { class: "chart-legend",
                for (i, slice) in slices.iter().enumerate() {
                    li { key: "{i}",
                        span { class: "chart-swatch", style: "background: {slice.color}" }
                        span { class: "chart-legend-label", "{slice.label}" }
                        span { class: "chart-legend-value", "{legend_value(slice.value, slice.fraction)}" }
                    }
                }
            }
        }
    }
}
