use shared_types::ClientConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<ClientConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
#[cfg(not(target_arch = "wasm32"))]
const CONFIG_PATH: &str = "config.toml";

/// Resolve the client configuration once and cache it.
///
/// Native builds consult `MOTION_API_URL` (after loading `.env`) and
/// `config.toml`; browser builds only have the value baked in at compile time.
pub fn load() -> &'static ClientConfig {
    CONFIG.get_or_init(|| {
        let config = resolve_for_target();
        tracing::info!(api_url = %config.api_url, "api client configured");
        config
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn resolve_for_target() -> ClientConfig {
    use shared_types::{AppConfig, API_URL_ENV};

    let _ = dotenvy::dotenv();
    let env = std::env::var(API_URL_ENV).ok();
    let file = match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => match toml::from_str::<AppConfig>(&contents) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!("Failed to parse {CONFIG_PATH}: {e}; ignoring it");
                None
            }
        },
        Err(_) => None,
    };
    ClientConfig::resolve(env, file.as_ref(), option_env!("MOTION_API_URL"))
}

#[cfg(target_arch = "wasm32")]
fn resolve_for_target() -> ClientConfig {
    ClientConfig::resolve(None, None, option_env!("MOTION_API_URL"))
}
