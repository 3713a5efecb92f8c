//! Pure layout math for the SVG charts. Everything here works in viewBox
//! units; the SVG scales to its container.

use std::f64::consts::PI;

/// Series colors, cycled by index.
pub const PALETTE: [&str; 6] = [
    "#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884d8", "#82ca9d",
];

pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// One labelled value to plot.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDatum {
    pub label: String,
    pub value: f64,
}

impl ChartDatum {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Plot area inside the SVG viewBox.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub pad_left: f64,
    pub pad_right: f64,
    pub pad_top: f64,
    pub pad_bottom: f64,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 300.0,
            pad_left: 48.0,
            pad_right: 16.0,
            pad_top: 16.0,
            pad_bottom: 64.0,
        }
    }
}

impl Frame {
    pub fn plot_width(&self) -> f64 {
        (self.width - self.pad_left - self.pad_right).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height - self.pad_top - self.pad_bottom).max(0.0)
    }

    /// y coordinate of the zero line.
    pub fn baseline(&self) -> f64 {
        self.height - self.pad_bottom
    }

    pub fn right(&self) -> f64 {
        self.width - self.pad_right
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }

    /// Map a value in `[0, max]` to a y coordinate.
    pub fn y_for(&self, value: f64, max: f64) -> f64 {
        if max <= 0.0 {
            return self.baseline();
        }
        self.baseline() - (value.max(0.0) / max).min(1.0) * self.plot_height()
    }
}

/// Round `max` up to 1, 2 or 5 times a power of ten so axis ticks land on
/// readable numbers. Non-positive input yields 1.
pub fn nice_max(max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(max.log10().floor());
    for step in [1.0, 2.0, 5.0, 10.0] {
        let candidate = step * magnitude;
        if candidate >= max {
            return candidate;
        }
    }
    10.0 * magnitude
}

/// Evenly spaced tick values from 0 to `max` inclusive.
pub fn ticks(max: f64, intervals: usize) -> Vec<f64> {
    let intervals = intervals.max(1);
    (0..=intervals)
        .map(|i| max * i as f64 / intervals as f64)
        .collect()
}

/// Compact tick label: whole numbers without a fraction.
pub fn format_tick(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        format!("{value:.1}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Horizontal center, used to place the label.
    pub center: f64,
}

/// Vertical bars, one slot per datum, scaled against `max`.
pub fn bar_layout(data: &[ChartDatum], frame: &Frame, max: f64) -> Vec<BarRect> {
    if data.is_empty() {
        return Vec::new();
    }
    let slot = frame.plot_width() / data.len() as f64;
    let width = slot * 0.7;
    data.iter()
        .enumerate()
        .map(|(i, d)| {
            let y = frame.y_for(d.value, max);
            let x = frame.pad_left + i as f64 * slot + (slot - width) / 2.0;
            BarRect {
                x,
                y,
                width,
                height: frame.baseline() - y,
                center: x + width / 2.0,
            }
        })
        .collect()
}

/// Points of a line series spread across the plot width. A single point sits
/// in the middle.
pub fn line_points(data: &[ChartDatum], frame: &Frame, max: f64) -> Vec<(f64, f64)> {
    let n = data.len();
    data.iter()
        .enumerate()
        .map(|(i, d)| {
            let x = if n == 1 {
                frame.pad_left + frame.plot_width() / 2.0
            } else {
                frame.pad_left + frame.plot_width() * i as f64 / (n - 1) as f64
            };
            (x, frame.y_for(d.value, max))
        })
        .collect()
}

/// `points` attribute for a `polyline`.
pub fn points_attr(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Show every n-th x label so at most `max_labels` are drawn.
pub fn label_stride(count: usize, max_labels: usize) -> usize {
    if max_labels == 0 || count <= max_labels {
        1
    } else {
        count.div_ceil(max_labels)
    }
}

/// Shorten a label to `max_chars` characters, marking the cut with "…".
pub fn short_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        return label.to_string();
    }
    let head: String = label.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{head}…")
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub path: String,
    pub color: &'static str,
    pub label: String,
    pub value: f64,
    pub fraction: f64,
}

/// Wedges of a pie centred on `(cx, cy)`, starting at twelve o'clock and
/// running clockwise. Non-positive values are dropped; colors follow the
/// datum's original index.
pub fn pie_slices(data: &[ChartDatum], cx: f64, cy: f64, r: f64) -> Vec<PieSlice> {
    let total: f64 = data.iter().map(|d| d.value.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut angle = -PI / 2.0;
    let mut slices = Vec::new();
    for (i, d) in data.iter().enumerate() {
        if d.value <= 0.0 {
            continue;
        }
        let fraction = d.value / total;
        let sweep = fraction * 2.0 * PI;
        let path = if fraction >= 1.0 - 1e-9 {
            // An arc with identical endpoints draws nothing; use two halves.
            format!(
                "M {:.2} {cy:.2} A {r:.2} {r:.2} 0 1 1 {:.2} {cy:.2} A {r:.2} {r:.2} 0 1 1 {:.2} {cy:.2} Z",
                cx - r,
                cx + r,
                cx - r
            )
        } else {
            let (x0, y0) = (cx + r * angle.cos(), cy + r * angle.sin());
            let end = angle + sweep;
            let (x1, y1) = (cx + r * end.cos(), cy + r * end.sin());
            let large_arc = u8::from(sweep > PI);
            format!(
                "M {cx:.2} {cy:.2} L {x0:.2} {y0:.2} A {r:.2} {r:.2} 0 {large_arc} 1 {x1:.2} {y1:.2} Z"
            )
        };
        slices.push(PieSlice {
            path,
            color: palette_color(i),
            label: d.label.clone(),
            value: d.value,
            fraction,
        });
        angle += sweep;
    }
    slices
}

/// Largest value in the series, or 0 for an empty series.
pub fn max_value(data: &[ChartDatum]) -> f64 {
    data.iter().map(|d| d.value).fold(0.0, f64::max)
}
