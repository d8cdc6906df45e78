//! Shared setup for API integration tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::{cookie::Cookie, dev::ServiceResponse, web};

use passage_api::app::AppState;
use passage_core::repositories::InMemoryUserRepository;
use passage_core::services::account::{AccountService, BcryptHasher};
use passage_core::services::auth::{AuthService, AuthServiceConfig};
use passage_core::services::token::Rs256KeyManager;
use passage_shared::config::CookieConfig;

pub const SIGNING_KEY_A: &str =
    include_str!("../../../core/src/services/token/tests/fixtures/signing_key_a.pem");
pub const SIGNING_KEY_B: &str =
    include_str!("../../../core/src/services/token/tests/fixtures/signing_key_b.pem");
pub const PUBLIC_KEY_A: &str =
    include_str!("../../../core/src/services/token/tests/fixtures/public_key_a.pem");

pub type TestState = AppState<InMemoryUserRepository, BcryptHasher>;

pub fn key_manager() -> Arc<Rs256KeyManager> {
    Arc::new(Rs256KeyManager::from_private_key_pem(SIGNING_KEY_A).expect("Failed to load test key"))
}

pub fn create_state() -> web::Data<TestState> {
    let auth_service = Arc::new(AuthService::new(key_manager(), AuthServiceConfig::default()).unwrap());
    let account_service = Arc::new(AccountService::new(
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(BcryptHasher::new(4)),
        Arc::clone(&auth_service),
    ));

    web::Data::new(AppState {
        auth_service,
        account_service,
        cookie: CookieConfig::default(),
    })
}

pub fn refresh_cookie_from<B>(resp: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|c| c.name() == "refresh_token")
        .map(|c| c.into_owned())
}
