//! Authentication service module
//!
//! Token issuance policy: lifetimes, the access/refresh pair, and which token
//! type each operation accepts.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::{AuthServiceConfig, MAX_TOKEN_LIFETIME_DAYS};
pub use service::AuthService;
