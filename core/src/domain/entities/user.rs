//! User entity representing a registered account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity as kept by the credential store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Normalised (trimmed, lowercase) email address
    pub email: String,

    /// bcrypt hash of the user's password
    #[serde(skip_serializing)]
    pub hashed_password: String,

    /// Whether the email address has been verified
    pub verified: bool,

    /// Consecutive failed login attempts
    pub failed_attempts: u32,

    /// Whether the account is locked
    pub locked: bool,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance with a fresh identifier
    pub fn new(email: &str, hashed_password: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email: normalize_email(email),
            hashed_password,
            verified: false,
            failed_attempts: 0,
            locked: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Locks the account
    pub fn lock(&mut self) {
        self.locked = true;
        self.updated_at = Utc::now();
    }
}

/// Canonical form used for storing and looking up email addresses
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
