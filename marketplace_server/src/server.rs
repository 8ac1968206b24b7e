use std::time::Duration;

use actix_web::{
    body::MessageBody,
    dev::{Server, Service, ServiceFactory, ServiceRequest, ServiceResponse},
    http::{header, KeepAlive, Method},
    middleware::{DefaultHeaders, Logger},
    web,
    App,
    Error,
    HttpResponse,
    HttpServer,
};
use futures::{future::ok, FutureExt};
use log::*;
use marketplace_engine::{ApiKeyRegistry, Fixtures, MarketStore, Seeder, TokenRegistry};

use crate::{
    config::ServerConfig,
    errors::ServerError,
    middleware::ApiKeyAuthFactory,
    routes::{self, endpoint_not_found},
};

const ALLOWED_METHODS: &str = "GET, POST, PUT, PATCH, DELETE, OPTIONS";
const ALLOWED_HEADERS: &str = "Content-Type, Authorization, x-api-key";

/// Everything the handlers share. Built once, before the server starts, so that every worker sees the same store and
/// the same registries.
#[derive(Clone)]
pub struct AppState {
    pub store: web::Data<MarketStore>,
    pub api_keys: web::Data<ApiKeyRegistry>,
    pub tokens: web::Data<TokenRegistry>,
    pub fixtures: web::Data<Fixtures>,
    pub config: web::Data<ServerConfig>,
}

impl AppState {
    /// Seeds a fresh store according to `config`, and registers the fixture API keys and tokens.
    pub fn new(config: ServerConfig) -> Result<Self, ServerError> {
        let fixtures = config.fixtures()?;
        let store = MarketStore::new();
        fixtures.seed(&store);
        Ok(Self {
            store: web::Data::new(store),
            api_keys: web::Data::new(ApiKeyRegistry::with_test_keys()),
            tokens: web::Data::new(TokenRegistry::with_test_tokens()),
            fixtures: web::Data::new(fixtures),
            config: web::Data::new(config),
        })
    }
}

pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let srv = create_server_instance(config)?;
    srv.await.map_err(|e| ServerError::InitializeError(e.to_string()))
}

pub fn create_server_instance(config: ServerConfig) -> Result<Server, ServerError> {
    let host = config.host.clone();
    let port = config.port;
    let state = AppState::new(config)?;
    let srv = HttpServer::new(move || create_app(state.clone()))
        .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
        .bind((host.as_str(), port))?
        .run();
    Ok(srv)
}

/// Assembles the application: shared state, every route, and the middleware stack.
///
/// Middleware runs outermost first: access logging, response decoration, CORS preflight, then credential checks.
/// Preflights are answered before the credential check, and error responses from the credential check are still
/// decorated.
pub fn create_app(
    state: AppState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Response = ServiceResponse<impl MessageBody>,
        Config = (),
        InitError = (),
        Error = Error,
    >,
> {
    let require_api_key = !state.config.disable_auth;
    App::new()
        .app_data(state.store.clone())
        .app_data(state.api_keys.clone())
        .app_data(state.tokens.clone())
        .app_data(state.fixtures.clone())
        .app_data(state.config.clone())
        .configure(routes::configure)
        .default_service(web::to(endpoint_not_found))
        .wrap(ApiKeyAuthFactory::new(state.api_keys, state.tokens, require_api_key))
        .wrap_fn(|req, srv| {
            if req.method() == Method::OPTIONS {
                trace!("Answering CORS preflight for {}", req.path());
                ok(req.into_response(HttpResponse::NoContent().finish().map_into_right_body())).boxed_local()
            } else {
                srv.call(req).boxed_local()
            }
        })
        .wrap(
            DefaultHeaders::new()
                .add(header::ContentType::json())
                .add((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
                .add((header::ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS))
                .add((header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS))
                .add(("x-limit-per-second", "10"))
                .add(("x-remaining-this-second", "9"))
                .add(("x-limit-per-day", "10000"))
                .add(("x-remaining-today", "9999")),
        )
        .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %U").log_target("mkt::access_log"))
}
