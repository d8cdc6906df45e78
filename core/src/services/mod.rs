//! Business services containing domain logic and use cases.

pub mod account;
pub mod auth;
pub mod token;

// Re-export commonly used types
pub use account::{AccountService, BcryptHasher, PasswordHasher};
pub use auth::{AuthService, AuthServiceConfig};
pub use token::{Rs256KeyManager, TokenCodec};
