use actix_web::{http::StatusCode, test::TestRequest};
use chrono::Duration;
use marketplace_engine::Scope;

use super::helpers::*;
use crate::{config::ServerConfig, server::AppState};

async fn shop_with_key(key: &str) -> (StatusCode, String) {
    let state = seeded_state();
    let req = TestRequest::get().uri(&app_path("/shops/5001")).insert_header(("x-api-key", key));
    call(&state, req).await.unwrap()
}

#[actix_web::test]
async fn missing_api_key() {
    let _ = env_logger::try_init().ok();
    let state = seeded_state();
    let (status, body) = call(&state, TestRequest::get().uri(&app_path("/shops/5001"))).await.unwrap();
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, error_body("Missing x-api-key header. Format: keystring:shared_secret"));
}

#[actix_web::test]
async fn api_key_outcomes() {
    let _ = env_logger::try_init().ok();
    let cases = [
        ("no-colon", StatusCode::UNAUTHORIZED, "Invalid x-api-key format. Expected keystring:shared_secret"),
        ("nobody:secret", StatusCode::UNAUTHORIZED, "Invalid API key: keystring not recognized"),
        ("test-key:wrong", StatusCode::UNAUTHORIZED, "Invalid shared secret for the provided keystring"),
        (
            "banned-app:banned-secret",
            StatusCode::FORBIDDEN,
            "This API key has been revoked or the application has been banned",
        ),
        (
            "expired-app:expired-secret",
            StatusCode::UNAUTHORIZED,
            "This API key has expired. Please renew your application credentials",
        ),
    ];
    for (key, expected_status, msg) in cases {
        let (status, body) = shop_with_key(key).await;
        assert_eq!(status, expected_status, "for key {key}");
        assert_eq!(body, error_body(msg), "for key {key}");
    }
    let (status, _) = shop_with_key(API_KEY).await;
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn invalid_bearer_token() {
    let _ = env_logger::try_init().ok();
    let state = seeded_state();
    let req = with_key(TestRequest::get().uri(&app_path("/shops/5001")))
        .insert_header(("Authorization", "Bearer not-a-token"));
    let (status, body) = call(&state, req).await.unwrap();
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, error_body("Invalid or expired OAuth access token"));
}

#[actix_web::test]
async fn public_paths_need_no_credentials() {
    let _ = env_logger::try_init().ok();
    let state = seeded_state();
    let (status, body) = call(&state, TestRequest::get().uri("/ping")).await.unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"status":"ok"}"#);
    let (status, body) = call(&state, TestRequest::get().uri(&app_path("/openapi-ping"))).await.unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"application_id":"mock-app-123"}"#);
}

#[actix_web::test]
async fn missing_scope_is_named() {
    let _ = env_logger::try_init().ok();
    let state = seeded_state();
    let req = with_key(TestRequest::post().uri(&app_path("/shops/5001/listings"))).set_json(serde_json::json!({}));
    let (status, body) = call(&state, req).await.unwrap();
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        body,
        error_body("This endpoint requires OAuth2 scope: listings_w. Provide a Bearer token with this scope.")
    );

    let req = with_key(TestRequest::get().uri(&app_path("/shops/5001/receipts")));
    let (status, body) = call(&state, req).await.unwrap();
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(body.contains("transactions_r"), "was: {body}");
}

#[actix_web::test]
async fn token_without_the_scope_is_refused() {
    let _ = env_logger::try_init().ok();
    let state = seeded_state();
    let entry = state.tokens.issue(1001, vec![Scope::ListingsR], Duration::hours(1));
    let bearer = format!("Bearer {}", entry.access_token);

    let req = with_key(TestRequest::post().uri(&app_path("/shops/5001/listings")))
        .insert_header(("Authorization", bearer.clone()))
        .set_json(serde_json::json!({"title": "Nope"}));
    let (status, body) = call(&state, req).await.unwrap();
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        body,
        error_body("This endpoint requires OAuth2 scope: listings_w. Provide a Bearer token with this scope.")
    );

    let req = with_key(TestRequest::get().uri(&app_path("/shops/5001/listings"))).insert_header(("Authorization", bearer));
    let (status, body) = call_json(&state, req).await.unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 5);
}

#[actix_web::test]
async fn scope_check_precedes_path_parsing() {
    let _ = env_logger::try_init().ok();
    let state = seeded_state();
    let req = with_key(TestRequest::delete().uri(&app_path("/listings/abc")));
    let (status, body) = call(&state, req).await.unwrap();
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(body.contains("listings_d"), "was: {body}");
    let req = with_alice(TestRequest::delete().uri(&app_path("/listings/abc")));
    let (status, body) = call(&state, req).await.unwrap();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, error_body("Invalid listing_id"));
}

#[actix_web::test]
async fn current_user_needs_a_token() {
    let _ = env_logger::try_init().ok();
    let state = seeded_state();
    let (status, body) = call(&state, with_key(TestRequest::get().uri(&app_path("/users/me")))).await.unwrap();
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, error_body("This endpoint requires OAuth2. Provide a Bearer token."));
    let (status, user) = get_as_alice(&state, "/users/me").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["user_id"], 1001);
}

#[actix_web::test]
async fn token_scopes_are_reported() {
    let _ = env_logger::try_init().ok();
    let state = seeded_state();
    let (status, json) = call_json(&state, with_alice(TestRequest::post().uri(&app_path("/scopes")))).await.unwrap();
    assert_eq!(status, StatusCode::OK);
    let scopes = json["scopes"].as_array().unwrap();
    assert_eq!(scopes.len(), 20);
    assert!(scopes.contains(&serde_json::json!("listings_w")));
    let (_, json) = call_json(&state, with_key(TestRequest::post().uri(&app_path("/scopes")))).await.unwrap();
    assert_eq!(json["scopes"], serde_json::json!([]));
}

#[actix_web::test]
async fn disabled_auth_still_resolves_tokens() {
    let _ = env_logger::try_init().ok();
    let config = ServerConfig { disable_auth: true, ..Default::default() };
    let state = AppState::new(config).unwrap();
    let (status, _) = call(&state, TestRequest::get().uri(&app_path("/shops/5001"))).await.unwrap();
    assert_eq!(status, StatusCode::OK);
    let req = TestRequest::get().uri(&app_path("/users/me")).insert_header(("Authorization", "Bearer test-token-bob"));
    let (status, body) = call(&state, req).await.unwrap();
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("1002"), "was: {body}");
}

#[actix_web::test]
async fn preflight_and_decoration() {
    let _ = env_logger::try_init().ok();
    let state = seeded_state();
    let req = TestRequest::default().method(actix_web::http::Method::OPTIONS).uri(&app_path("/shops/5001"));
    let (status, headers, _) = send_request(&state, req.to_request()).await.unwrap();
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(headers.get("access-control-allow-origin").unwrap(), "*");
    assert_eq!(headers.get("access-control-allow-methods").unwrap(), "GET, POST, PUT, PATCH, DELETE, OPTIONS");
    assert_eq!(headers.get("access-control-allow-headers").unwrap(), "Content-Type, Authorization, x-api-key");

    // Rejected requests are decorated too
    let req = TestRequest::get().uri(&app_path("/shops/5001"));
    let (status, headers, _) = send_request(&state, req.to_request()).await.unwrap();
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(headers.get("x-limit-per-second").unwrap(), "10");
    assert_eq!(headers.get("x-remaining-this-second").unwrap(), "9");
    assert_eq!(headers.get("x-limit-per-day").unwrap(), "10000");
    assert_eq!(headers.get("x-remaining-today").unwrap(), "9999");
    assert_eq!(headers.get("content-type").unwrap(), "application/json");
}
