//! Shared configuration and response types for the Passage server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - The JSON error body and its error codes

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CookieConfig, Environment, JwtConfig, LoggingConfig,
    PasswordConfig, ServerConfig,
};
pub use errors::{error_codes, ErrorResponse};
