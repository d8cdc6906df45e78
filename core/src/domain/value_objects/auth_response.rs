//! Authentication results handed back to the request handling layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Access token and its absolute expiry
///
/// This is the only part of an authentication result that may be written into
/// a response body. It never carries the refresh token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    /// JWT access token for API authentication
    pub access_token: String,

    /// Absolute expiry of the access token
    pub expires_at: DateTime<Utc>,
}

/// Full result of a successful authentication
///
/// The boundary layer returns `auth` to the caller and delivers
/// `refresh_token` through a channel scripts cannot read (an HTTP-only cookie).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedTokens {
    /// Access token returned inline
    pub auth: AuthResponse,

    /// Refresh token for out-of-band delivery
    pub refresh_token: String,

    /// Absolute expiry of the refresh token
    pub refresh_expires_at: DateTime<Utc>,
}

impl IssuedTokens {
    /// Splits the result into the inline response and the refresh token
    pub fn into_parts(self) -> (AuthResponse, String) {
        (self.auth, self.refresh_token)
    }
}
