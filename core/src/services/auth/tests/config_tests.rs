//! Tests for token lifetime configuration

use std::sync::Arc;

use chrono::Duration;
use passage_shared::config::JwtConfig;

use crate::errors::DomainError;
use crate::services::auth::{AuthService, AuthServiceConfig, MAX_TOKEN_LIFETIME_DAYS};
use crate::services::token::Rs256KeyManager;

const SIGNING_KEY_A: &str = include_str!("../../token/tests/fixtures/signing_key_a.pem");

#[test]
fn test_default_lifetimes() {
    let config = AuthServiceConfig::default();

    assert_eq!(config.access_token_lifetime, Duration::minutes(15));
    assert_eq!(config.refresh_token_lifetime, Duration::days(7));
    assert!(config.validate().is_ok());
}

#[test]
fn test_from_jwt_config() {
    let jwt = JwtConfig::default()
        .with_access_expiry_minutes(5)
        .with_refresh_expiry_days(1);

    let config = AuthServiceConfig::try_from(&jwt).unwrap();

    assert_eq!(config.access_token_lifetime, Duration::minutes(5));
    assert_eq!(config.refresh_token_lifetime, Duration::days(1));
}

#[test]
fn test_zero_access_lifetime_is_rejected() {
    let config = AuthServiceConfig {
        access_token_lifetime: Duration::zero(),
        ..AuthServiceConfig::default()
    };

    assert!(matches!(config.validate(), Err(DomainError::Validation { .. })));
}

#[test]
fn test_refresh_shorter_than_access_is_rejected() {
    let config = AuthServiceConfig {
        access_token_lifetime: Duration::hours(1),
        refresh_token_lifetime: Duration::minutes(30),
    };

    assert!(matches!(config.validate(), Err(DomainError::Validation { .. })));
}

#[test]
fn test_unrepresentable_expiry_seconds_are_rejected() {
    let jwt = JwtConfig {
        refresh_token_expiry: i64::MAX,
        ..JwtConfig::default()
    };

    assert!(matches!(
        AuthServiceConfig::try_from(&jwt),
        Err(DomainError::Validation { .. })
    ));

    let jwt = JwtConfig {
        access_token_expiry: i64::MIN,
        ..JwtConfig::default()
    };

    assert!(matches!(
        AuthServiceConfig::try_from(&jwt),
        Err(DomainError::Validation { .. })
    ));
}

#[test]
fn test_lifetime_beyond_cap_is_rejected() {
    let config = AuthServiceConfig {
        refresh_token_lifetime: Duration::seconds(9_000_000_000_000),
        ..AuthServiceConfig::default()
    };
    assert!(matches!(config.validate(), Err(DomainError::Validation { .. })));

    let keys = Rs256KeyManager::from_private_key_pem(SIGNING_KEY_A).expect("Failed to load test key");
    assert!(matches!(
        AuthService::new(Arc::new(keys), config),
        Err(DomainError::Validation { .. })
    ));

    let config = AuthServiceConfig {
        access_token_lifetime: Duration::days(MAX_TOKEN_LIFETIME_DAYS + 1),
        refresh_token_lifetime: Duration::days(MAX_TOKEN_LIFETIME_DAYS + 1),
    };
    assert!(matches!(config.validate(), Err(DomainError::Validation { .. })));
}

#[test]
fn test_lifetime_at_cap_issues_tokens() {
    let config = AuthServiceConfig {
        access_token_lifetime: Duration::days(MAX_TOKEN_LIFETIME_DAYS),
        refresh_token_lifetime: Duration::days(MAX_TOKEN_LIFETIME_DAYS),
    };
    let keys = Rs256KeyManager::from_private_key_pem(SIGNING_KEY_A).expect("Failed to load test key");
    let service = AuthService::new(Arc::new(keys), config).unwrap();

    let issued = service.authenticate("user-123").unwrap();
    assert!(service.validate(&issued.refresh_token).is_ok());
}
