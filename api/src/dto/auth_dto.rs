use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use passage_core::domain::value_objects::AuthResponse;

/// Body of the login and registration requests
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CredentialsRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1), custom(function = "validate_password_bytes"))]
    pub password: String,
}

/// bcrypt only looks at the first 72 bytes of a password
const MAX_PASSWORD_BYTES: usize = 72;

fn validate_password_bytes(password: &str) -> Result<(), ValidationError> {
    if password.len() > MAX_PASSWORD_BYTES {
        let mut error = ValidationError::new("password_too_long");
        error.message = Some(format!("must be at most {} bytes", MAX_PASSWORD_BYTES).into());
        return Err(error);
    }
    Ok(())
}

/// Access token handed back inline; the refresh token travels in a cookie
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub message: String,
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
}

impl TokenResponse {
    pub fn new(message: impl Into<String>, auth: AuthResponse) -> Self {
        Self {
            message: message.into(),
            access_token: auth.access_token,
            expires_at: auth.expires_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Identity carried by the presented access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    pub user_id: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}
