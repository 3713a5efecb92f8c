pub mod api;
pub mod config;

pub use api::ApiClient;
