//! User repository trait: the credential store consumed by the login flows.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// Implementations own persistence and any legacy storage formats; the
/// authentication core only ever sees `User` values.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by email address
    ///
    /// Lookups are case-insensitive and ignore surrounding whitespace.
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user registered with that email
    /// * `Err(DomainError)` - Storage error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Create a new user in the repository
    ///
    /// # Returns
    /// * `Ok(Uuid)` - Identifier of the stored user
    /// * `Err(DomainError::Auth(AuthError::UserAlreadyExists))` - Email already taken
    async fn create(&self, user: User) -> Result<Uuid, DomainError>;
}
