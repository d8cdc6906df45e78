//! Configuration loading and logger setup for the binary

use passage_shared::config::{AppConfig, LoggingConfig};

/// Loads `.env` (if present) and builds the configuration from the environment
pub fn load() -> AppConfig {
    if let Err(e) = dotenvy::dotenv() {
        // A missing .env file is the normal case outside development
        if !e.not_found() {
            eprintln!("Failed to read .env file: {}", e);
        }
    }

    AppConfig::from_env()
}

/// Initialises `env_logger`
///
/// `RUST_LOG` wins when set; otherwise the level configured for the
/// environment is used.
pub fn init_logging(config: &LoggingConfig) {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(config.level.as_str()));
}
