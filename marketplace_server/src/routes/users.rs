use actix_web::{web, HttpRequest, HttpResponse};
use log::*;
use marketplace_engine::{MarketStore, Scope};

use crate::{
    auth::AuthContext,
    errors::ServerError,
    helpers::{list_response, path_id},
    route,
};

route!(current_user => Get "/users/me");
/// The user the bearer token was issued to. Application-only requests have no user.
pub async fn current_user(req: HttpRequest, store: web::Data<MarketStore>) -> Result<HttpResponse, ServerError> {
    let user_id = AuthContext::of(&req).user_id.ok_or(ServerError::OAuthRequired)?;
    let user = store.user(user_id).ok_or_else(|| ServerError::not_found("User"))?;
    Ok(HttpResponse::Ok().json(user))
}

route!(get_user => Get "/users/{user_id}" requires [Scope::EmailR]);
pub async fn get_user(req: HttpRequest, store: web::Data<MarketStore>) -> Result<HttpResponse, ServerError> {
    let user_id = path_id(&req, "user_id")?;
    let user = store.user(user_id).ok_or_else(|| ServerError::not_found("User"))?;
    Ok(HttpResponse::Ok().json(user))
}

route!(user_addresses => Get "/users/{user_id}/addresses" requires [Scope::AddressR]);
pub async fn user_addresses(req: HttpRequest, store: web::Data<MarketStore>) -> Result<HttpResponse, ServerError> {
    let user_id = path_id(&req, "user_id")?;
    Ok(list_response(store.user_addresses(user_id)))
}

route!(delete_user_address => Delete "/users/{user_id}/addresses/{user_address_id}" requires [Scope::AddressW]);
pub async fn delete_user_address(req: HttpRequest, store: web::Data<MarketStore>) -> Result<HttpResponse, ServerError> {
    let user_id = path_id(&req, "user_id")?;
    let address_id = path_id(&req, "user_address_id")?;
    if !store.delete_user_address(user_id, address_id) {
        return Err(ServerError::not_found("Address"));
    }
    debug!("Address {address_id} of user {user_id} deleted");
    Ok(HttpResponse::NoContent().finish())
}

route!(user_shops => Get "/users/{user_id}/shops");
pub async fn user_shops(req: HttpRequest, store: web::Data<MarketStore>) -> Result<HttpResponse, ServerError> {
    let user_id = path_id(&req, "user_id")?;
    Ok(list_response(store.shops_for_user(user_id)))
}
