//! Application credential middleware.
//!
//! Every request outside the public paths must carry `x-api-key: keystring:shared_secret`, which is checked against
//! the [`ApiKeyRegistry`]. An optional `Authorization: Bearer <token>` header is resolved against the
//! [`TokenRegistry`]; a token that is unknown or expired fails the request, a valid one attaches its user and scopes
//! to the request as an [`AuthContext`].
//!
//! Failures are rendered here, as JSON error responses, so that outer middleware still decorates them.
//!
//! When the API-key check is disabled, bearer tokens are still resolved so that scope-gated endpoints keep working.

use std::{
    future::{ready, Ready},
    rc::Rc,
};

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    web,
    Error,
    HttpMessage,
    ResponseError,
};
use futures::future::LocalBoxFuture;
use log::{trace, warn};
use marketplace_engine::{ApiKeyRegistry, TokenRegistry};

use crate::{
    auth::{api_key_header, bearer_token, parse_api_key, AuthContext},
    errors::ServerError,
};

const PUBLIC_PREFIXES: [&str; 3] = ["/v3/public/", "/admin/", "/oauth/"];
const PUBLIC_PATHS: [&str; 2] = ["/ping", "/v3/application/openapi-ping"];

/// Paths that are served without any credential check.
pub fn is_public_path(path: &str) -> bool {
    PUBLIC_PATHS.contains(&path) || PUBLIC_PREFIXES.iter().any(|p| path.starts_with(p))
}

pub struct ApiKeyAuthFactory {
    keys: web::Data<ApiKeyRegistry>,
    tokens: web::Data<TokenRegistry>,
    // If false, the x-api-key header is not required. Bearer tokens are still checked.
    require_api_key: bool,
}

impl ApiKeyAuthFactory {
    pub fn new(keys: web::Data<ApiKeyRegistry>, tokens: web::Data<TokenRegistry>, require_api_key: bool) -> Self {
        ApiKeyAuthFactory { keys, tokens, require_api_key }
    }
}

impl<S, B> Transform<S, ServiceRequest> for ApiKeyAuthFactory
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Error = Error;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;
    type InitError = ();
    type Response = ServiceResponse<EitherBody<B>>;
    type Transform = ApiKeyAuthService<S>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ApiKeyAuthService {
            keys: self.keys.clone(),
            tokens: self.tokens.clone(),
            require_api_key: self.require_api_key,
            service: Rc::new(service),
        }))
    }
}

pub struct ApiKeyAuthService<S> {
    keys: web::Data<ApiKeyRegistry>,
    tokens: web::Data<TokenRegistry>,
    require_api_key: bool,
    service: Rc<S>,
}

impl<S> ApiKeyAuthService<S> {
    fn authenticate(&self, req: &ServiceRequest) -> Result<AuthContext, ServerError> {
        let mut ctx = AuthContext::default();
        if self.require_api_key {
            let (keystring, secret) = parse_api_key(api_key_header(req.headers())?)?;
            self.keys.validate(keystring, secret)?;
            ctx.keystring = Some(keystring.to_string());
        }
        if let Some(token) = bearer_token(req.headers()) {
            let entry = self
                .tokens
                .get(token)
                .ok_or_else(|| ServerError::Unauthorized("Invalid or expired OAuth access token".into()))?;
            trace!("🔐️ Bearer token resolved to user {}", entry.user_id);
            ctx = ctx.with_token(&entry);
        }
        Ok(ctx)
    }
}

impl<S, B> Service<ServiceRequest> for ApiKeyAuthService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;
    type Response = ServiceResponse<EitherBody<B>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        if is_public_path(req.path()) {
            trace!("🔐️ {} is public. Skipping credential checks.", req.path());
            return Box::pin(async move { service.call(req).await.map(ServiceResponse::map_into_left_body) });
        }
        match self.authenticate(&req) {
            Ok(ctx) => {
                req.extensions_mut().insert(ctx);
                Box::pin(async move { service.call(req).await.map(ServiceResponse::map_into_left_body) })
            },
            Err(e) => {
                warn!("🔐️ Rejecting {} {}. {e}", req.method(), req.path());
                let res = req.into_response(e.error_response()).map_into_right_body();
                Box::pin(async move { Ok(res) })
            },
        }
    }
}
