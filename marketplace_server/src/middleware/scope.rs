//! OAuth2 scope guard.
//!
//! Wraps a single resource. The request is let through only if the bearer token attached by the API-key middleware
//! carries every required scope. Otherwise a 403 naming the first missing scope is returned.

use std::{
    future::{ready, Ready},
    rc::Rc,
};

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error,
    HttpMessage,
    ResponseError,
};
use futures::future::LocalBoxFuture;
use log::debug;
use marketplace_engine::Scope;

use crate::{auth::AuthContext, errors::ServerError};

pub struct ScopeGuardFactory {
    required_scopes: Vec<Scope>,
}

impl ScopeGuardFactory {
    pub fn new(required_scopes: &[Scope]) -> Self {
        ScopeGuardFactory { required_scopes: required_scopes.to_vec() }
    }
}

impl<S, B> Transform<S, ServiceRequest> for ScopeGuardFactory
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Error = Error;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;
    type InitError = ();
    type Response = ServiceResponse<EitherBody<B>>;
    type Transform = ScopeGuardService<S>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ScopeGuardService { required_scopes: self.required_scopes.clone(), service: Rc::new(service) }))
    }
}

pub struct ScopeGuardService<S> {
    required_scopes: Vec<Scope>,
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for ScopeGuardService<S>
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
        let missing = {
            let extensions = req.extensions();
            let ctx = extensions.get::<AuthContext>();
            self.required_scopes.iter().find(|s| !ctx.is_some_and(|c| c.has_scope(**s))).copied()
        };
        match missing {
            None => Box::pin(async move { service.call(req).await.map(ServiceResponse::map_into_left_body) }),
            Some(scope) => {
                debug!("🔐️ {} {} needs scope {scope}", req.method(), req.path());
                let res = req.into_response(ServerError::MissingScope(scope).error_response()).map_into_right_body();
                Box::pin(async move { Ok(res) })
            },
        }
    }
}
