pub mod charts;
pub mod components;

pub use charts::*;
pub use components::*;
