//! The OAuth2 token endpoint.
//!
//! Two grants are supported. `authorization_code` hands out an all-scopes token for the user encoded in the code, and
//! `refresh_token` exchanges a refresh token for a brand new pair with the same user and scopes. No code or PKCE
//! verification is done; the values only have to be present.
use actix_web::{web, HttpRequest, HttpResponse};
use log::*;
use marketplace_engine::{Scope, TokenRegistry};

use crate::{
    auth::TokenResponse,
    config::ServerConfig,
    errors::ServerError,
    helpers::{form_values, query_str, QueryParams},
    route,
};

/// The user an authorization code is bound to when it does not name one.
pub const DEFAULT_OAUTH_USER: i64 = 1001;
const MOCK_CODE_PREFIX: &str = "mock_code_";

route!(issue_token => Post "/v3/public/oauth/token");
pub async fn issue_token(
    req: HttpRequest,
    body: web::Bytes,
    tokens: web::Data<TokenRegistry>,
    config: web::Data<ServerConfig>,
) -> Result<HttpResponse, ServerError> {
    let form = form_values(&req, &body)?;
    let ttl = config.token_ttl;
    let entry = match query_str(&form, "grant_type").unwrap_or_default() {
        "authorization_code" => {
            let user_id = authorization_code_user(&form)?;
            tokens.issue(user_id, Scope::all(), ttl)
        },
        "refresh_token" => {
            let refresh_token = refresh_token_param(&form)?;
            tokens
                .refresh(refresh_token, ttl)
                .ok_or_else(|| ServerError::Unauthorized("Invalid refresh token".into()))?
        },
        other => return Err(ServerError::BadRequest(format!("Unsupported grant_type: {other}"))),
    };
    info!("🔑️ Issued access token for user {}", entry.user_id);
    Ok(HttpResponse::Ok().json(TokenResponse::new(&entry, ttl.num_seconds())))
}

fn authorization_code_user(form: &QueryParams) -> Result<i64, ServerError> {
    let (Some(_client_id), Some(code), Some(_verifier)) =
        (query_str(form, "client_id"), query_str(form, "code"), query_str(form, "code_verifier"))
    else {
        return Err(ServerError::BadRequest("client_id, code, and code_verifier are required".into()));
    };
    Ok(user_from_code(code))
}

fn refresh_token_param(form: &QueryParams) -> Result<&str, ServerError> {
    match (query_str(form, "client_id"), query_str(form, "refresh_token")) {
        (Some(_), Some(token)) => Ok(token),
        _ => Err(ServerError::BadRequest("client_id and refresh_token are required".into())),
    }
}

/// Codes of the form `mock_code_{user_id}_...` name their user. Any other code belongs to the default user.
pub fn user_from_code(code: &str) -> i64 {
    code.strip_prefix(MOCK_CODE_PREFIX)
        .and_then(|rest| rest.split('_').next())
        .and_then(|id| id.parse().ok())
        .unwrap_or(DEFAULT_OAUTH_USER)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn code_names_its_user() {
        assert_eq!(user_from_code("mock_code_1002_abc"), 1002);
        assert_eq!(user_from_code("mock_code_1003"), 1003);
        assert_eq!(user_from_code("mock_code_bob_1"), DEFAULT_OAUTH_USER);
        assert_eq!(user_from_code("anything"), DEFAULT_OAUTH_USER);
    }
}
