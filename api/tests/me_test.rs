//! Integration tests for the access-token protected endpoint

mod common;

use actix_web::{http::header, test};
use chrono::Utc;

use passage_api::app::create_app;
use passage_core::domain::entities::{Claims, TokenType};
use passage_core::services::token::TokenCodec;

use common::{create_state, key_manager};

#[actix_web::test]
async fn test_me_with_access_token() {
    let state = create_state();
    let issued = state.auth_service.authenticate("user-7").unwrap();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/me")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", issued.auth.access_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["user_id"], "user-7");
    assert!(body["issued_at"].as_str().is_some());
    assert!(body["expires_at"].as_str().is_some());
}

#[actix_web::test]
async fn test_me_rejects_refresh_token() {
    let state = create_state();
    let issued = state.auth_service.authenticate("user-7").unwrap();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/me")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", issued.refresh_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_token_type");
}

#[actix_web::test]
async fn test_me_without_token() {
    let app = test::init_service(create_app(create_state())).await;

    let req = test::TestRequest::get().uri("/api/v1/me").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "missing_token");
}

#[actix_web::test]
async fn test_me_with_expired_token() {
    let now = Utc::now().timestamp();
    let expired = TokenCodec::new()
        .encode(
            &Claims {
                sub: "user-7".to_string(),
                token_type: TokenType::Access,
                iat: now - 120,
                exp: now - 60,
            },
            key_manager().encoding_key(),
        )
        .unwrap();
    let app = test::init_service(create_app(create_state())).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/me")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", expired)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "token_expired");
}
