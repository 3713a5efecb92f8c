use dioxus::prelude::*;

use super::chart_frame::ValueAxis;
use super::geometry::{bar_layout, max_value, nice_max, short_label, ChartDatum, Frame, PALETTE};

/// Vertical bar chart. Long category names are shortened and slanted.
#[component]
pub fn BarChart(
    data: Vec<ChartDatum>,
    #[props(default = PALETTE[0].to_string())] color: String,
    #[props(default = 14)] label_chars: usize,
) -> Element {
    let frame = Frame::default();
    let max = nice_max(max_value(&data));
    let bars = bar_layout(&data, &frame, max);
    let label_y = frame.baseline() + 14.0;

    rsx! {
        svg {
            class: "chart-svg",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "{frame.view_box()}",
            role: "img",
            ValueAxis { frame, max }
            for (i, (bar, datum)) in bars.iter().zip(data.iter()).enumerate() {
                g { key: "{i}",
                    rect {
                        x: "{bar.x:.1}",
                        y: "{bar.y:.1}",
                        width: "{bar.width:.1}",
                        height: "{bar.height:.1}",
                        rx: "3",
                        fill: "{color}",
                        class: "chart-bar",
                    }
                    text {
                        x: "{bar.center:.1}",
                        y: "{label_y}",
                        text_anchor: "end",
                        transform: "rotate(-35 {bar.center:.1} {label_y})",
                        class: "chart-label",
                        "{short_label(&datum.label, label_chars)}"
                    }
                }
            }
        }
    }
}
