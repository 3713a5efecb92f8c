pub mod config;
pub mod error;

pub mod fetch;
pub mod filter;
pub mod list_state;
pub mod motion;
pub mod pagination;
pub mod refresh_log;
pub mod responses;
pub mod settings;
pub mod stats;
pub mod view_state;

pub use config::*;
pub use error::*;

pub use fetch::*;
pub use filter::*;
pub use list_state::*;
pub use motion::*;
pub use pagination::*;
pub use refresh_log::*;
pub use responses::*;
pub use settings::*;
pub use stats::*;
pub use view_state::*;
