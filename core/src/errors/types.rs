//! Domain-specific error types for key management, tokens and authentication
//!
//! The variants are kept distinct all the way to the presentation layer so it
//! can answer an expired token differently from a forged or garbled one.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::entities::token::TokenType;

/// Signing key errors
#[derive(Error, Debug)]
pub enum KeyError {
    #[error("Key file I/O failed for {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid key format: {message}")]
    Format { message: String },

    #[error("Signing key not loaded")]
    NotLoaded,
}

/// Token errors
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token signing failed: {message}")]
    SigningFailed { message: String },

    #[error("Malformed token")]
    MalformedToken,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token type: expected {expected}, found {found}")]
    InvalidTokenType { expected: TokenType, found: TokenType },
}

/// Authentication errors raised by the login and registration flows
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Account locked")]
    AccountLocked,

    #[error("Password hashing failed: {message}")]
    PasswordHashFailed { message: String },
}
