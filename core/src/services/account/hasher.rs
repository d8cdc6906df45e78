//! Password hashing capability used by the login flows

use passage_shared::config::PasswordConfig;

use crate::errors::{AuthError, DomainError};

/// Turns plaintext passwords into storable secrets and checks them
pub trait PasswordHasher: Send + Sync {
    /// Hashes a plaintext password
    fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// Checks a plaintext password against a stored hash
    ///
    /// A malformed stored hash never matches.
    fn compare(&self, hashed_password: &str, plain_password: &str) -> bool;
}

/// bcrypt implementation of [`PasswordHasher`]
#[derive(Debug, Clone)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    /// Creates a hasher with the given work factor
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Creates a hasher from the password configuration
    pub fn from_config(config: &PasswordConfig) -> Self {
        Self::new(config.bcrypt_cost)
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        bcrypt::hash(password, self.cost).map_err(|e| {
            AuthError::PasswordHashFailed {
                message: e.to_string(),
            }
            .into()
        })
    }

    fn compare(&self, hashed_password: &str, plain_password: &str) -> bool {
        bcrypt::verify(plain_password, hashed_password).unwrap_or(false)
    }
}
