//! Configuration for the authentication service

use chrono::Duration;
use passage_shared::config::JwtConfig;

use crate::domain::entities::token::{ACCESS_TOKEN_EXPIRY_MINUTES, REFRESH_TOKEN_EXPIRY_DAYS};
use crate::errors::DomainError;

/// Upper bound on either token lifetime
pub const MAX_TOKEN_LIFETIME_DAYS: i64 = 365;

/// Token lifetimes enforced by the authentication service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthServiceConfig {
    /// Lifetime of access tokens
    pub access_token_lifetime: Duration,
    /// Lifetime of refresh tokens
    pub refresh_token_lifetime: Duration,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            access_token_lifetime: Duration::minutes(ACCESS_TOKEN_EXPIRY_MINUTES),
            refresh_token_lifetime: Duration::days(REFRESH_TOKEN_EXPIRY_DAYS),
        }
    }
}

impl TryFrom<&JwtConfig> for AuthServiceConfig {
    type Error = DomainError;

    fn try_from(config: &JwtConfig) -> Result<Self, Self::Error> {
        let config = Self {
            access_token_lifetime: lifetime_from_seconds("access", config.access_token_expiry)?,
            refresh_token_lifetime: lifetime_from_seconds("refresh", config.refresh_token_expiry)?,
        };
        config.validate()?;
        Ok(config)
    }
}

fn lifetime_from_seconds(kind: &str, seconds: i64) -> Result<Duration, DomainError> {
    Duration::try_seconds(seconds).ok_or_else(|| DomainError::Validation {
        message: format!("{} token lifetime of {} seconds is out of range", kind, seconds),
    })
}

impl AuthServiceConfig {
    /// Checks that both lifetimes are at least one second, that refresh
    /// tokens outlive access tokens and that neither exceeds
    /// [`MAX_TOKEN_LIFETIME_DAYS`]
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.access_token_lifetime < Duration::seconds(1) {
            return Err(DomainError::Validation {
                message: "access token lifetime must be at least one second".to_string(),
            });
        }
        if self.refresh_token_lifetime < self.access_token_lifetime {
            return Err(DomainError::Validation {
                message: "refresh token lifetime must not be shorter than the access token lifetime"
                    .to_string(),
            });
        }
        let max = Duration::days(MAX_TOKEN_LIFETIME_DAYS);
        if self.access_token_lifetime > max || self.refresh_token_lifetime > max {
            return Err(DomainError::Validation {
                message: format!("token lifetimes must not exceed {} days", MAX_TOKEN_LIFETIME_DAYS),
            });
        }
        Ok(())
    }
}
