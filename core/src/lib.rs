//! # Passage Core
//!
//! Core authentication logic for the Passage backend: RSA key lifecycle,
//! RS256 token encoding, token issuance policy, and the login flows built on
//! top of them. Persistence and transport stay behind traits.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Claims, TokenType, User};
pub use domain::value_objects::{AuthResponse, IssuedTokens};
pub use errors::{AuthError, DomainError, DomainResult, KeyError, TokenError};
pub use repositories::{InMemoryUserRepository, UserRepository};
pub use services::{
    AccountService, AuthService, AuthServiceConfig, BcryptHasher, PasswordHasher, Rs256KeyManager,
    TokenCodec,
};
