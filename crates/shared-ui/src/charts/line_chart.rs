use dioxus::prelude::*;

use super::chart_frame::ValueAxis;
use super::geometry::{
    label_stride, line_points, max_value, nice_max, points_attr, ChartDatum, Frame, PALETTE,
};

/// Line chart over an ordered series such as motions per day.
#[component]
pub fn LineChart(
    data: Vec<ChartDatum>,
    #[props(default = PALETTE[4].to_string())] color: String,
) -> Element {
    let frame = Frame::default();
    let max = nice_max(max_value(&data));
    let points = line_points(&data, &frame, max);
    let stride = label_stride(data.len(), 8);
    let label_y = frame.baseline() + 18.0;

    rsx! {
        svg {
            class: "chart-svg",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "{frame.view_box()}",
            role: "img",
            ValueAxis { frame, max }
            polyline {
                points: "{points_attr(&points)}",
                fill: "none",
                stroke: "{color}",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
            }
            for (i, ((x, y), datum)) in points.iter().zip(data.iter()).enumerate() {
                g { key: "{i}",
                    circle {
                        cx: "{x:.1}",
                        cy: "{y:.1}",
                        r: "3.5",
                        fill: "{color}",
                    }
                    if i % stride == 0 {
                        text {
                            x: "{x:.1}",
                            y: "{label_y}",
                            text_anchor: "middle",
                            class: "chart-label",
                            "{datum.label}"
                        }
                    }
                }
            }
        }
    }
}
