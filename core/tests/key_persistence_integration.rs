//! Integration tests for the signing keypair surviving a restart

use std::sync::Arc;

use tempfile::TempDir;

use passage_core::{AuthService, AuthServiceConfig, DomainError, Rs256KeyManager, TokenError};
use passage_shared::config::JwtConfig;

fn start(dir: &TempDir) -> AuthService {
    let config = JwtConfig::new(
        dir.path().join("keys/private.pem").to_string_lossy(),
        dir.path().join("keys/public.pem").to_string_lossy(),
    );
    let keys = Rs256KeyManager::from_config(&config);
    keys.ensure_keys().expect("Failed to prepare signing keys");

    AuthService::new(Arc::new(keys), AuthServiceConfig::try_from(&config).unwrap()).unwrap()
}

#[test]
fn test_tokens_survive_restart() {
    let dir = TempDir::new().unwrap();

    let first = start(&dir);
    let issued = first.authenticate("user-42").unwrap();
    let first_public = first.public_key_pem().unwrap().to_string();
    drop(first);

    let second = start(&dir);
    assert_eq!(second.public_key_pem().unwrap(), first_public);

    let claims = second.validate(&issued.auth.access_token).unwrap();
    assert_eq!(claims.sub, "user-42");

    let refreshed = second.refresh(&issued.refresh_token).unwrap();
    assert_eq!(second.validate(&refreshed.access_token).unwrap().sub, "user-42");
}

#[test]
fn test_separate_key_directories_do_not_trust_each_other() {
    let dir_a = TempDir::new().unwrap();
    let dir_b = TempDir::new().unwrap();

    let service_a = start(&dir_a);
    let service_b = start(&dir_b);
    let issued = service_a.authenticate("user-42").unwrap();

    assert!(matches!(
        service_b.validate(&issued.auth.access_token),
        Err(DomainError::Token(TokenError::InvalidSignature))
    ));
}
