use actix_web::{http::StatusCode, test::TestRequest};
use serde_json::Value;

use super::helpers::*;
use crate::auth::TokenResponse;

const TOKEN_PATH: &str = "/v3/public/oauth/token";

fn token_request(form: &[(&str, &str)]) -> TestRequest {
    TestRequest::post().uri(TOKEN_PATH).set_form(form)
}

#[actix_web::test]
async fn authorization_code_then_refresh() {
    let _ = env_logger::try_init().ok();
    let state = seeded_state();
    let form = [
        ("grant_type", "authorization_code"),
        ("client_id", "test-key"),
        ("code", "mock_code_1002_xyz"),
        ("code_verifier", "verifier"),
    ];
    let (status, body) = call(&state, token_request(&form)).await.unwrap();
    assert_eq!(status, StatusCode::OK);
    let issued: TokenResponse = serde_json::from_str(&body).unwrap();
    assert_eq!(issued.token_type, "Bearer");
    assert_eq!(issued.expires_in, 3600);
    assert!(issued.access_token.starts_with("1002."), "was: {}", issued.access_token);
    assert!(issued.refresh_token.starts_with("refresh_1002."), "was: {}", issued.refresh_token);

    let form = [("grant_type", "refresh_token"), ("client_id", "test-key"), ("refresh_token", issued.refresh_token.as_str())];
    let (status, body) = call(&state, token_request(&form)).await.unwrap();
    assert_eq!(status, StatusCode::OK);
    let refreshed: TokenResponse = serde_json::from_str(&body).unwrap();
    assert_ne!(refreshed.access_token, issued.access_token);
    assert_ne!(refreshed.refresh_token, issued.refresh_token);

    // Both tokens identify the same user, and the old one still works
    for token in [&issued.access_token, &refreshed.access_token] {
        let req = with_key(TestRequest::get().uri(&app_path("/users/me")))
            .insert_header(("Authorization", format!("Bearer {token}")));
        let (status, user) = call_json(&state, req).await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(user["user_id"], 1002);
    }
}

#[actix_web::test]
async fn default_code_user() {
    let _ = env_logger::try_init().ok();
    let state = seeded_state();
    let form =
        [("grant_type", "authorization_code"), ("client_id", "c"), ("code", "whatever"), ("code_verifier", "v")];
    let (status, body) = call_json(&state, token_request(&form)).await.unwrap();
    assert_eq!(status, StatusCode::OK);
    assert!(body["access_token"].as_str().unwrap().starts_with("1001."));
}

#[actix_web::test]
async fn token_request_errors() {
    let _ = env_logger::try_init().ok();
    let state = seeded_state();
    let cases = [
        (
            vec![("grant_type", "authorization_code"), ("client_id", "c"), ("code", "x")],
            StatusCode::BAD_REQUEST,
            "client_id, code, and code_verifier are required",
        ),
        (
            vec![("grant_type", "refresh_token"), ("client_id", "c")],
            StatusCode::BAD_REQUEST,
            "client_id and refresh_token are required",
        ),
        (
            vec![("grant_type", "refresh_token"), ("client_id", "c"), ("refresh_token", "nope")],
            StatusCode::UNAUTHORIZED,
            "Invalid refresh token",
        ),
        (vec![("grant_type", "password")], StatusCode::BAD_REQUEST, "Unsupported grant_type: password"),
    ];
    for (form, expected_status, msg) in cases {
        let (status, body): (StatusCode, Value) = call_json(&state, token_request(&form)).await.unwrap();
        assert_eq!(status, expected_status, "for {form:?}");
        assert_eq!(body["error"], msg, "for {form:?}");
    }
}

#[actix_web::test]
async fn seeded_refresh_token() {
    let _ = env_logger::try_init().ok();
    let state = seeded_state();
    let form = [("grant_type", "refresh_token"), ("client_id", "c"), ("refresh_token", "refresh-alice")];
    let (status, body) = call_json(&state, token_request(&form)).await.unwrap();
    assert_eq!(status, StatusCode::OK);
    assert!(body["access_token"].as_str().unwrap().starts_with("1001."));
}
