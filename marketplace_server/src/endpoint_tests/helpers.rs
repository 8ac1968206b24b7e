use actix_web::{
    http::{header::HeaderMap, StatusCode},
    test,
    test::TestRequest,
};
use log::debug;
use serde_json::Value;

use crate::{
    config::ServerConfig,
    server::{create_app, AppState},
};

pub const API_KEY: &str = "test-key:test-secret";
pub const ALICE_TOKEN: &str = "test-token-alice";

pub fn app_path(path: &str) -> String {
    format!("/v3/application{path}")
}

/// A freshly seeded application state with the static fixtures.
pub fn seeded_state() -> AppState {
    AppState::new(ServerConfig::default()).expect("Static fixtures never fail")
}

pub fn with_key(req: TestRequest) -> TestRequest {
    req.insert_header(("x-api-key", API_KEY))
}

pub fn with_alice(req: TestRequest) -> TestRequest {
    with_key(req).insert_header(("Authorization", format!("Bearer {ALICE_TOKEN}")))
}

pub async fn send_request(state: &AppState, req: actix_http::Request) -> Result<(StatusCode, HeaderMap, String), String> {
    let service = test::init_service(create_app(state.clone())).await;
    debug!("Making request");
    let res = test::try_call_service(&service, req).await.map_err(|e| e.to_string())?;
    let status = res.status();
    let headers = res.headers().clone();
    let body = String::from_utf8_lossy(&test::read_body(res).await).into_owned();
    Ok((status, headers, body))
}

pub async fn call(state: &AppState, req: TestRequest) -> Result<(StatusCode, String), String> {
    let (status, _, body) = send_request(state, req.to_request()).await?;
    Ok((status, body))
}

/// Makes the request and parses the response body as JSON.
pub async fn call_json(state: &AppState, req: TestRequest) -> Result<(StatusCode, Value), String> {
    let (status, body) = call(state, req).await?;
    let json = serde_json::from_str(&body).map_err(|e| format!("Body is not JSON: {e}. Body was: {body}"))?;
    Ok((status, json))
}

pub async fn get_as_alice(state: &AppState, path: &str) -> (StatusCode, Value) {
    call_json(state, with_alice(TestRequest::get().uri(&app_path(path)))).await.unwrap()
}

pub fn error_body(msg: &str) -> String {
    serde_json::json!({ "error": msg }).to_string()
}
