use std::str::FromStr;

use cucumber::{gherkin::Step, given, then, when};
use e2e::helpers::{json_field, json_is_subset_of};
use log::debug;
use reqwest::Method;
use serde_json::Value;

use crate::cucumber::MarketWorld;

#[given("a running marketplace")]
async fn running_marketplace(world: &mut MarketWorld) {
    world.start_server().await;
    let (code, body) = world.get("/ping").await;
    assert_eq!(code.as_u16(), 200, "Ping failed: {body}");
}

#[given(expr = "the application key {string}")]
async fn application_key(world: &mut MarketWorld, key: String) {
    world.api_key = Some(key);
}

#[given(expr = "{word} is signed in")]
async fn signed_in(world: &mut MarketWorld, who: String) {
    let token = match who.as_str() {
        "Alice" => "test-token-alice",
        "Bob" => "test-token-bob",
        other => panic!("No seeded token for {other}"),
    };
    world.access_token = Some(token.to_string());
}

#[given("nobody is signed in")]
async fn signed_out(world: &mut MarketWorld) {
    world.access_token = None;
}

#[when(expr = "the app exchanges the authorization code {string}")]
async fn exchange_code(world: &mut MarketWorld, code: String) {
    let form = [
        ("grant_type", "authorization_code"),
        ("client_id", "test-key"),
        ("code", code.as_str()),
        ("code_verifier", "e2e-verifier"),
    ];
    let res = world.request(Method::POST, "/v3/public/oauth/token", |req| req.form(&form)).await;
    keep_tokens(world, &res.1);
    world.response = Some(res);
}

#[when("the app refreshes its token")]
async fn refresh_token(world: &mut MarketWorld) {
    let refresh = world.refresh_token.clone().expect("No refresh token has been issued");
    let form = [("grant_type", "refresh_token"), ("client_id", "test-key"), ("refresh_token", refresh.as_str())];
    let res = world.request(Method::POST, "/v3/public/oauth/token", |req| req.form(&form)).await;
    keep_tokens(world, &res.1);
    world.response = Some(res);
}

fn keep_tokens(world: &mut MarketWorld, body: &str) {
    if let Some(token) = json_field(body, "access_token") {
        debug!("Using issued access token {token}");
        world.access_token = Some(token);
    }
    if let Some(token) = json_field(body, "refresh_token") {
        world.refresh_token = Some(token);
    }
}

//   When Alice GETs "/v3/application/listings/7001"
#[when(expr = "{word} {word}s {string}")]
async fn send_request(world: &mut MarketWorld, _who: String, method: String, path: String, step: &Step) {
    let method = Method::from_str(&method).expect("Invalid HTTP method");
    world.response = None;
    let res = match step.docstring() {
        Some(body) => {
            let json: Value = serde_json::from_str(body).expect("Request body is not valid JSON");
            world.request(method, &path, |req| req.json(&json)).await
        },
        None => world.request(method, &path, |req| req).await,
    };
    debug!("Got Response: {} {}", res.0, res.1);
    world.response = Some(res);
}

#[then(expr = "I receive a {int} {word} response with the message {string}")]
async fn receive_response(world: &mut MarketWorld, status: u16, text: String, message: String) {
    let (res_status, res_msg) = world.response.take().expect("No response received");
    assert_eq!(res_status, status, "Expected {status} {text} response, got {res_status}");
    assert!(res_msg.contains(&message), "Expected response to contain '{message}', got '{res_msg}'");
}

#[then(expr = "I receive a {int} {word} response")]
async fn receive_response_code(world: &mut MarketWorld, status: u16, text: String) {
    let (res_status, res_msg) = world.response.clone().expect("No response received");
    assert_eq!(res_status, status, "Expected {status} {text} response, got {res_status}: {res_msg}");
}

#[then("I receive a partial JSON response:")]
async fn receive_json_response(world: &mut MarketWorld, step: &Step) {
    let (_res_status, res_msg) = world.response.clone().expect("No response received");
    let expected = step.docstring().expect("No expected response");
    assert!(json_is_subset_of(expected, res_msg.as_str()), "Expected response to contain '{expected}', got '{res_msg}'");
}

#[then(expr = "I remember the {word} as {word}")]
async fn remember_field(world: &mut MarketWorld, field: String, name: String) {
    let (_, body) = world.response.as_ref().expect("No response received");
    let value = json_field(body, &field).unwrap_or_else(|| panic!("Response has no {field}: {body}"));
    world.remembered.insert(name, value);
}

#[then(expr = "the access token belongs to user {int}")]
async fn token_owner(world: &mut MarketWorld, user_id: i64) {
    let token = world.access_token.as_deref().expect("No access token");
    assert!(token.starts_with(&format!("{user_id}.")), "Token {token} was not issued for {user_id}");
}
