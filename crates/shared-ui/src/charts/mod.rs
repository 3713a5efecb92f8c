mod bar_chart;
mod chart_frame;
pub mod geometry;
mod line_chart;
mod pie_chart;

pub use bar_chart::*;
pub use chart_frame::*;
pub use geometry::{ChartDatum, PALETTE};
pub use line_chart::*;
pub use pie_chart::*;
