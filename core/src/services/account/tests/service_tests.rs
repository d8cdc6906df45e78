//! Tests for registration and login

use std::sync::Arc;

use crate::domain::entities::token::TokenType;
use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError};
use crate::repositories::{InMemoryUserRepository, UserRepository};
use crate::services::account::{AccountService, BcryptHasher, PasswordHasher};
use crate::services::auth::{AuthService, AuthServiceConfig};
use crate::services::token::Rs256KeyManager;

const SIGNING_KEY_A: &str = include_str!("../../token/tests/fixtures/signing_key_a.pem");

struct Fixture {
    users: Arc<InMemoryUserRepository>,
    hasher: Arc<BcryptHasher>,
    auth: Arc<AuthService>,
    service: AccountService<InMemoryUserRepository, BcryptHasher>,
}

fn create_fixture() -> Fixture {
    let keys = Rs256KeyManager::from_private_key_pem(SIGNING_KEY_A).unwrap();
    let auth = Arc::new(AuthService::new(Arc::new(keys), AuthServiceConfig::default()).unwrap());
    let users = Arc::new(InMemoryUserRepository::new());
    let hasher = Arc::new(BcryptHasher::new(4));
    let service = AccountService::new(Arc::clone(&users), Arc::clone(&hasher), Arc::clone(&auth));

    Fixture {
        users,
        hasher,
        auth,
        service,
    }
}

#[tokio::test]
async fn test_register_stores_hashed_user_and_signs_in() {
    let fx = create_fixture();

    let issued = fx
        .service
        .register("Alice@Example.com", "hunter2")
        .await
        .unwrap();

    let stored = fx.users.find_by_email("alice@example.com").await.unwrap().unwrap();
    assert_ne!(stored.hashed_password, "hunter2");
    assert!(fx.hasher.compare(&stored.hashed_password, "hunter2"));

    let claims = fx.auth.validate(&issued.auth.access_token).unwrap();
    assert_eq!(claims.sub, stored.id.to_string());
    assert_eq!(claims.token_type, TokenType::Access);
    assert_eq!(fx.auth.validate(&issued.refresh_token).unwrap().token_type, TokenType::Refresh);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let fx = create_fixture();
    fx.service.register("alice@example.com", "one").await.unwrap();

    let result = fx.service.register(" ALICE@example.com ", "two").await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::UserAlreadyExists))
    ));
    assert_eq!(fx.users.len().await, 1);
}

#[tokio::test]
async fn test_register_validates_input() {
    let fx = create_fixture();

    for (email, password) in [("", "pw"), ("alice@example.com", ""), ("not-an-email", "pw")] {
        let result = fx.service.register(email, password).await;
        assert!(
            matches!(result, Err(DomainError::Validation { .. })),
            "expected validation error for {:?}",
            email
        );
    }
    assert!(fx.users.is_empty().await);
}

#[tokio::test]
async fn test_login_with_correct_password() {
    let fx = create_fixture();
    fx.service.register("bob@example.com", "s3cret").await.unwrap();
    let user = fx.users.find_by_email("bob@example.com").await.unwrap().unwrap();

    let issued = fx.service.login("BOB@example.com", "s3cret").await.unwrap();

    let claims = fx.auth.validate(&issued.auth.access_token).unwrap();
    assert_eq!(claims.user_id().unwrap(), user.id);
}

#[tokio::test]
async fn test_login_wrong_password_and_unknown_email_look_the_same() {
    let fx = create_fixture();
    fx.service.register("bob@example.com", "s3cret").await.unwrap();

    let wrong_password = fx.service.login("bob@example.com", "guess").await;
    let unknown_email = fx.service.login("carol@example.com", "s3cret").await;

    assert!(matches!(
        wrong_password,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        unknown_email,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));
}

#[tokio::test]
async fn test_login_locked_account() {
    let fx = create_fixture();
    let mut user = User::new("locked@example.com", fx.hasher.hash("s3cret").unwrap());
    user.lock();
    fx.users.create(user).await.unwrap();

    let result = fx.service.login("locked@example.com", "s3cret").await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::AccountLocked))
    ));
}

#[tokio::test]
async fn test_login_requires_both_fields() {
    let fx = create_fixture();

    assert!(matches!(
        fx.service.login("", "pw").await,
        Err(DomainError::Validation { .. })
    ));
    assert!(matches!(
        fx.service.login("bob@example.com", "").await,
        Err(DomainError::Validation { .. })
    ));
}
