//! In-memory implementation of UserRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::{normalize_email, User};
use crate::errors::{AuthError, DomainError};

use super::trait_::UserRepository;

/// Process-local user store keyed by user id
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    /// Whether the repository holds no users
    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let email = normalize_email(email);
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn create(&self, mut user: User) -> Result<Uuid, DomainError> {
        user.email = normalize_email(&user.email);

        // Check and insert under one write lock so concurrent registrations
        // of the same email cannot both succeed
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == user.email) || users.contains_key(&user.id) {
            return Err(AuthError::UserAlreadyExists.into());
        }

        let id = user.id;
        users.insert(id, user);
        Ok(id)
    }
}
