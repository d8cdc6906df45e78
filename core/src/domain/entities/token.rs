//! Token entities for JWT-based authentication.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Access token expiration time (15 minutes)
pub const ACCESS_TOKEN_EXPIRY_MINUTES: i64 = 15;

/// Refresh token expiration time (7 days)
pub const REFRESH_TOKEN_EXPIRY_DAYS: i64 = 7;

/// Kind of credential a token represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    /// Short-lived credential authorizing API calls
    Access,
    /// Long-lived credential only good for obtaining new access tokens
    Refresh,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenType::Access => write!(f, "access"),
            TokenType::Refresh => write!(f, "refresh"),
        }
    }
}

/// Claims structure for JWT payload
///
/// Timestamps are Unix seconds. `exp` is always strictly after `iat` for
/// claims built through the constructors, and `token_type` is fixed at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Token type
    #[serde(rename = "type")]
    pub token_type: TokenType,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates claims for `subject` valid from now for `lifetime`
    ///
    /// Lifetimes shorter than one second are rounded up to one second.
    pub fn new(subject: impl Into<String>, token_type: TokenType, lifetime: Duration) -> Self {
        let now = Utc::now().timestamp();
        let lifetime = lifetime.num_seconds().max(1);

        Self {
            sub: subject.into(),
            token_type,
            iat: now,
            exp: now + lifetime,
        }
    }

    /// Creates new claims for an access token with the default lifetime
    pub fn new_access_token(subject: impl Into<String>) -> Self {
        Self::new(
            subject,
            TokenType::Access,
            Duration::minutes(ACCESS_TOKEN_EXPIRY_MINUTES),
        )
    }

    /// Creates new claims for a refresh token with the default lifetime
    pub fn new_refresh_token(subject: impl Into<String>) -> Self {
        Self::new(
            subject,
            TokenType::Refresh,
            Duration::days(REFRESH_TOKEN_EXPIRY_DAYS),
        )
    }

    /// Issue time as a UTC timestamp
    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.iat, 0).single()
    }

    /// Expiry as a UTC timestamp
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.exp, 0).single()
    }

    /// Gets the user ID from the claims
    ///
    /// # Returns
    ///
    /// `Ok(Uuid)` if the subject can be parsed as a UUID, `Err` otherwise
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}
