//! Authentication configuration: signing keys, token lifetimes, refresh cookie

use serde::{Deserialize, Serialize};
use std::env;

/// Default location of the PEM-encoded RSA private key
pub const DEFAULT_PRIVATE_KEY_PATH: &str = "keys/jwt_private_key.pem";

/// Default location of the PEM-encoded RSA public key
pub const DEFAULT_PUBLIC_KEY_PATH: &str = "keys/jwt_public_key.pem";

/// Lowest cost accepted by bcrypt
const BCRYPT_MIN_COST: u32 = 4;

/// Highest cost accepted by bcrypt
const BCRYPT_MAX_COST: u32 = 31;

/// JWT signing and lifetime configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Path to the PEM-encoded RSA private key (created on first start)
    pub private_key_path: String,

    /// Path to the PEM-encoded RSA public key (created on first start)
    pub public_key_path: String,

    /// Access token expiry time in seconds
    pub access_token_expiry: i64,

    /// Refresh token expiry time in seconds
    pub refresh_token_expiry: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            private_key_path: String::from(DEFAULT_PRIVATE_KEY_PATH),
            public_key_path: String::from(DEFAULT_PUBLIC_KEY_PATH),
            access_token_expiry: 900,      // 15 minutes
            refresh_token_expiry: 604800,  // 7 days
        }
    }
}

impl JwtConfig {
    /// Create a configuration pointing at the given key files
    pub fn new(private_key_path: impl Into<String>, public_key_path: impl Into<String>) -> Self {
        Self {
            private_key_path: private_key_path.into(),
            public_key_path: public_key_path.into(),
            ..Default::default()
        }
    }

    /// Set access token expiry in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry = minutes * 60;
        self
    }

    /// Set refresh token expiry in days
    pub fn with_refresh_expiry_days(mut self, days: i64) -> Self {
        self.refresh_token_expiry = days * 86400;
        self
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            private_key_path: env::var("JWT_PRIVATE_KEY_PATH")
                .unwrap_or(defaults.private_key_path),
            public_key_path: env::var("JWT_PUBLIC_KEY_PATH")
                .unwrap_or(defaults.public_key_path),
            access_token_expiry: env::var("JWT_ACCESS_TOKEN_EXPIRY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.access_token_expiry),
            refresh_token_expiry: env::var("JWT_REFRESH_TOKEN_EXPIRY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.refresh_token_expiry),
        }
    }
}

/// Refresh token cookie configuration
///
/// The refresh token never travels in a response body. It is delivered as an
/// HTTP-only, same-site strict cookie scoped to the refresh endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CookieConfig {
    /// Cookie name
    pub name: String,

    /// Path the cookie is scoped to
    pub path: String,

    /// Secure flag (HTTPS only)
    pub secure: bool,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: String::from("refresh_token"),
            path: String::from("/api/v1/auth/refresh"),
            secure: true,
        }
    }
}

impl CookieConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            name: env::var("REFRESH_COOKIE_NAME").unwrap_or(defaults.name),
            path: env::var("REFRESH_COOKIE_PATH").unwrap_or(defaults.path),
            secure: env::var("REFRESH_COOKIE_SECURE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.secure),
        }
    }
}

/// Password hashing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PasswordConfig {
    /// bcrypt work factor
    pub bcrypt_cost: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        // bcrypt::DEFAULT_COST
        Self { bcrypt_cost: 12 }
    }
}

impl PasswordConfig {
    /// Create from environment variables, clamping the cost to bcrypt's range
    pub fn from_env() -> Self {
        let cost = env::var("BCRYPT_COST")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(Self::default().bcrypt_cost);
        Self {
            bcrypt_cost: cost.clamp(BCRYPT_MIN_COST, BCRYPT_MAX_COST),
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Refresh cookie configuration
    #[serde(default)]
    pub cookie: CookieConfig,

    /// Password hashing configuration
    #[serde(default)]
    pub password: PasswordConfig,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            jwt: JwtConfig::from_env(),
            cookie: CookieConfig::from_env(),
            password: PasswordConfig::from_env(),
        }
    }
}
