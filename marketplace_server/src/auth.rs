//! Request identity.
//!
//! The API-key middleware resolves the credential headers into an [`AuthContext`] and stores it in the request
//! extensions. Handlers and the scope guard read it back from there.
use actix_web::{http::header::HeaderMap, HttpMessage, HttpRequest};
use marketplace_engine::{Scope, TokenEntry};
use serde::{Deserialize, Serialize};

use crate::errors::ServerError;

pub const API_KEY_HEADER: &str = "x-api-key";
const BEARER_PREFIX: &str = "Bearer ";

/// Who is making the request. `user_id` is only set when a valid bearer token was presented; the scope set is then
/// the token's. Application-only requests have no user and no scopes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthContext {
    pub keystring: Option<String>,
    pub user_id: Option<i64>,
    pub scopes: Vec<Scope>,
}

impl AuthContext {
    pub fn with_token(mut self, token: &TokenEntry) -> Self {
        self.user_id = Some(token.user_id);
        self.scopes = token.scopes.clone();
        self
    }

    pub fn has_scope(&self, scope: Scope) -> bool {
        self.scopes.contains(&scope)
    }

    /// Fetches the context the middleware attached to `req`, or an empty one.
    pub fn of(req: &HttpRequest) -> Self {
        req.extensions().get::<AuthContext>().cloned().unwrap_or_default()
    }
}

/// Splits an `x-api-key` value of the form `keystring:shared_secret`. Only the first colon separates the two halves,
/// and neither half may be empty.
pub fn parse_api_key(value: &str) -> Result<(&str, &str), ServerError> {
    match value.split_once(':') {
        Some((keystring, secret)) if !keystring.is_empty() && !secret.is_empty() => Ok((keystring, secret)),
        _ => Err(ServerError::Unauthorized("Invalid x-api-key format. Expected keystring:shared_secret".into())),
    }
}

/// Reads the `x-api-key` header.
pub fn api_key_header(headers: &HeaderMap) -> Result<&str, ServerError> {
    headers
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ServerError::Unauthorized("Missing x-api-key header. Format: keystring:shared_secret".into()))
}

/// The access token from an `Authorization: Bearer <token>` header, if there is one.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers.get("Authorization").and_then(|v| v.to_str().ok()).and_then(|v| v.strip_prefix(BEARER_PREFIX))
}

/// The body returned by the token endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub refresh_token: String,
}

impl TokenResponse {
    pub fn new(entry: &TokenEntry, expires_in: i64) -> Self {
        Self {
            access_token: entry.access_token.clone(),
            token_type: "Bearer".into(),
            expires_in,
            refresh_token: entry.refresh_token.clone(),
        }
    }
}
