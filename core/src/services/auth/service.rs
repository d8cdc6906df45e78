//! Token issuance, validation and refresh policy

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::domain::entities::token::{Claims, TokenType};
use crate::domain::value_objects::{AuthResponse, IssuedTokens};
use crate::errors::{DomainError, KeyError, TokenError};
use crate::services::token::{Rs256KeyManager, TokenCodec};

use super::config::AuthServiceConfig;

/// Issues and checks access/refresh token pairs
///
/// The service is stateless: every decision is derived from the presented
/// token's signature and timestamps. Nothing is recorded server-side, so a
/// refresh token stays usable until it expires, and the same refresh token
/// may be redeemed any number of times.
#[derive(Debug)]
pub struct AuthService {
    keys: Arc<Rs256KeyManager>,
    codec: TokenCodec,
    config: AuthServiceConfig,
}

impl AuthService {
    /// Creates a new authentication service
    ///
    /// The key manager is not initialised here; call
    /// [`Rs256KeyManager::ensure_keys`] before issuing tokens.
    ///
    /// # Errors
    ///
    /// * `DomainError::Validation` - The configured lifetimes are unusable
    pub fn new(keys: Arc<Rs256KeyManager>, config: AuthServiceConfig) -> Result<Self, DomainError> {
        config.validate()?;

        Ok(Self {
            keys,
            codec: TokenCodec::new(),
            config,
        })
    }

    /// Issues an access token and a refresh token for `subject`
    ///
    /// Only the access token belongs in a response body; the refresh token is
    /// returned separately for out-of-band delivery.
    ///
    /// # Errors
    ///
    /// * `DomainError::Validation` - Empty subject
    /// * `TokenError::SigningFailed` - Signing keys are not loaded
    pub fn authenticate(&self, subject: &str) -> Result<IssuedTokens, DomainError> {
        if subject.trim().is_empty() {
            return Err(DomainError::Validation {
                message: "subject must not be empty".to_string(),
            });
        }

        let (access_token, access_claims) = self.issue(subject, TokenType::Access)?;
        let (refresh_token, refresh_claims) = self.issue(subject, TokenType::Refresh)?;

        debug!(subject, "Issued access and refresh tokens");

        Ok(IssuedTokens {
            auth: AuthResponse {
                access_token,
                expires_at: expiry_of(&access_claims)?,
            },
            refresh_token,
            refresh_expires_at: expiry_of(&refresh_claims)?,
        })
    }

    /// Exchanges a refresh token for a new access token
    ///
    /// The refresh token itself is neither rotated nor consumed.
    ///
    /// # Errors
    ///
    /// * `TokenError::InvalidTokenType` - The token is not a refresh token
    /// * `TokenError::TokenExpired` / `InvalidSignature` / `MalformedToken` - From decoding
    /// * `KeyError::NotLoaded` - Verification key is not loaded
    pub fn refresh(&self, refresh_token: &str) -> Result<AuthResponse, DomainError> {
        let claims = self.validate(refresh_token).inspect_err(|e| {
            warn!(error = %e, "Rejected refresh token");
        })?;

        if claims.token_type != TokenType::Refresh {
            warn!(subject = %claims.sub, found = %claims.token_type, "Refresh attempted with wrong token type");
            return Err(TokenError::InvalidTokenType {
                expected: TokenType::Refresh,
                found: claims.token_type,
            }
            .into());
        }

        let (access_token, access_claims) = self.issue(&claims.sub, TokenType::Access)?;
        debug!(subject = %claims.sub, "Refreshed access token");

        Ok(AuthResponse {
            access_token,
            expires_at: expiry_of(&access_claims)?,
        })
    }

    /// Verifies a token and returns its claims
    ///
    /// The token type is not checked; callers that need a particular type
    /// must compare `claims.token_type` themselves.
    pub fn validate(&self, token: &str) -> Result<Claims, DomainError> {
        let key = self.keys.decoding_key().ok_or(KeyError::NotLoaded)?;
        self.codec.decode(token, key)
    }

    /// Verifies a token and requires it to be of `expected` type
    pub fn validate_as(&self, token: &str, expected: TokenType) -> Result<Claims, DomainError> {
        let claims = self.validate(token)?;
        if claims.token_type != expected {
            return Err(TokenError::InvalidTokenType {
                expected,
                found: claims.token_type,
            }
            .into());
        }
        Ok(claims)
    }

    /// PEM encoding of the verification key
    pub fn public_key_pem(&self) -> Result<&str, DomainError> {
        self.keys.public_key_pem()
    }

    fn issue(&self, subject: &str, token_type: TokenType) -> Result<(String, Claims), DomainError> {
        let lifetime = match token_type {
            TokenType::Access => self.config.access_token_lifetime,
            TokenType::Refresh => self.config.refresh_token_lifetime,
        };

        let claims = Claims::new(subject, token_type, lifetime);
        let token = self.codec.encode(&claims, self.keys.encoding_key())?;
        Ok((token, claims))
    }
}

fn expiry_of(claims: &Claims) -> Result<DateTime<Utc>, DomainError> {
    claims.expires_at().ok_or_else(|| DomainError::Internal {
        message: format!("expiry timestamp {} out of range", claims.exp),
    })
}
