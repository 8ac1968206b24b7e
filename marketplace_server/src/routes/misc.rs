//! Health, admin and reference-data endpoints.
use actix_web::{web, HttpRequest, HttpResponse};
use log::*;
use marketplace_engine::{db_types::ShippingCarrier, Fixtures, MarketStore};
use serde_json::json;

use crate::{
    auth::AuthContext,
    errors::ServerError,
    helpers::{list_response, path_id},
    route,
};

pub const MOCK_APPLICATION_ID: &str = "mock-app-123";

route!(ping => Get "/ping");
pub async fn ping() -> HttpResponse {
    HttpResponse::Ok().json(json!({"status": "ok"}))
}

route!(admin_reset => Post "/admin/reset");
/// Empties the store and runs the configured seeder again. Issued tokens and API keys are left alone.
pub async fn admin_reset(store: web::Data<MarketStore>, fixtures: web::Data<Fixtures>) -> HttpResponse {
    fixtures.reseed(&store);
    warn!("🗃️ Store reset and reseeded");
    HttpResponse::Ok().json(json!({"status": "reset"}))
}

route!(openapi_ping => Get "/openapi-ping");
pub async fn openapi_ping() -> HttpResponse {
    HttpResponse::Ok().json(json!({"application_id": MOCK_APPLICATION_ID}))
}

route!(token_scopes => Post "/scopes");
/// The scopes of the bearer token on the request. Empty for application-only requests.
pub async fn token_scopes(req: HttpRequest) -> HttpResponse {
    let ctx = AuthContext::of(&req);
    HttpResponse::Ok().json(json!({"scopes": ctx.scopes}))
}

route!(shipping_carriers => Get "/shipping-carriers");
pub async fn shipping_carriers() -> HttpResponse {
    list_response(ShippingCarrier::catalogue())
}

//----------------------------------------------   Taxonomy  -------------------------------------------------------
// Buyer and seller taxonomies are the same tree.
route!(buyer_taxonomy_nodes => Get "/buyer-taxonomy/nodes");
pub async fn buyer_taxonomy_nodes(store: web::Data<MarketStore>) -> HttpResponse {
    list_response(store.taxonomy_nodes())
}

route!(seller_taxonomy_nodes => Get "/seller-taxonomy/nodes");
pub async fn seller_taxonomy_nodes(store: web::Data<MarketStore>) -> HttpResponse {
    list_response(store.taxonomy_nodes())
}

route!(buyer_taxonomy_properties => Get "/buyer-taxonomy/nodes/{taxonomy_id}/properties");
pub async fn buyer_taxonomy_properties(
    req: HttpRequest,
    store: web::Data<MarketStore>,
) -> Result<HttpResponse, ServerError> {
    taxonomy_properties(&req, &store)
}

route!(seller_taxonomy_properties => Get "/seller-taxonomy/nodes/{taxonomy_id}/properties");
pub async fn seller_taxonomy_properties(
    req: HttpRequest,
    store: web::Data<MarketStore>,
) -> Result<HttpResponse, ServerError> {
    taxonomy_properties(&req, &store)
}

fn taxonomy_properties(req: &HttpRequest, store: &MarketStore) -> Result<HttpResponse, ServerError> {
    let taxonomy_id = path_id(req, "taxonomy_id")?;
    let properties = store.taxonomy_properties(taxonomy_id).ok_or_else(|| ServerError::not_found("Taxonomy"))?;
    Ok(list_response(properties))
}
