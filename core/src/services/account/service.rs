//! Login and registration flows on top of the credential store

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::entities::user::{normalize_email, User};
use crate::domain::value_objects::IssuedTokens;
use crate::errors::{AuthError, DomainError};
use crate::repositories::UserRepository;
use crate::services::auth::AuthService;

use super::hasher::PasswordHasher;

/// Authenticates users by email and password and issues their tokens
pub struct AccountService<U, H>
where
    U: UserRepository,
    H: PasswordHasher,
{
    users: Arc<U>,
    hasher: Arc<H>,
    auth: Arc<AuthService>,
}

impl<U, H> AccountService<U, H>
where
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
{
    /// Creates a new account service
    pub fn new(users: Arc<U>, hasher: Arc<H>, auth: Arc<AuthService>) -> Self {
        Self { users, hasher, auth }
    }

    /// Registers a new user and signs them in
    ///
    /// # Errors
    ///
    /// * `DomainError::Validation` - Missing email/password or malformed email
    /// * `AuthError::UserAlreadyExists` - Email already registered
    /// * `TokenError::SigningFailed` - Signing keys are not loaded
    pub async fn register(&self, email: &str, password: &str) -> Result<IssuedTokens, DomainError> {
        let email = normalize_email(email);
        validate_credentials(&email, password)?;
        if !email.contains('@') {
            return Err(DomainError::Validation {
                message: "email address is invalid".to_string(),
            });
        }

        let hashed_password = self.hash_password(password).await?;
        let user = User::new(&email, hashed_password);
        let user_id = self.users.create(user).await?;

        info!(%user_id, "Registered new user");
        self.auth.authenticate(&user_id.to_string())
    }

    /// Checks a user's credentials and issues their tokens
    ///
    /// Unknown emails and wrong passwords produce the same error.
    ///
    /// # Errors
    ///
    /// * `AuthError::InvalidCredentials` - Unknown email or wrong password
    /// * `AuthError::AccountLocked` - The account is locked
    pub async fn login(&self, email: &str, password: &str) -> Result<IssuedTokens, DomainError> {
        let email = normalize_email(email);
        validate_credentials(&email, password)?;

        let user = match self.users.find_by_email(&email).await? {
            Some(user) => user,
            None => {
                warn!("Login attempt for unknown email");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        if user.locked {
            warn!(user_id = %user.id, "Login attempt on locked account");
            return Err(AuthError::AccountLocked.into());
        }

        if !self.verify_password(&user.hashed_password, password).await? {
            warn!(user_id = %user.id, "Login attempt with wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        self.auth.authenticate(&user.id.to_string())
    }

    // bcrypt is deliberately slow, keep it off the async workers
    async fn hash_password(&self, password: &str) -> Result<String, DomainError> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("password hashing task failed: {}", e),
            })?
    }

    async fn verify_password(&self, hashed: &str, password: &str) -> Result<bool, DomainError> {
        let hasher = Arc::clone(&self.hasher);
        let hashed = hashed.to_owned();
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || hasher.compare(&hashed, &password))
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("password verification task failed: {}", e),
            })
    }
}

fn validate_credentials(email: &str, password: &str) -> Result<(), DomainError> {
    if email.is_empty() || password.is_empty() {
        return Err(DomainError::Validation {
            message: "email and password are required".to_string(),
        });
    }
    Ok(())
}
