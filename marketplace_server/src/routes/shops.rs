use actix_web::{web, HttpRequest, HttpResponse};
use log::*;
use marketplace_engine::{
    db_types::{ReadinessStateDefinition, ShopProductionPartner, ShopUpdate},
    MarketStore,
    Scope,
};

use crate::{
    data_objects::{HolidayPreferencesRequest, NewReturnPolicyRequest, NewSectionRequest, NewShippingProfileRequest},
    errors::ServerError,
    helpers::{json_body, list_response, page_response, pagination, path_id, query_params, query_str},
    route,
};

const DEFAULT_PROFILE_TYPE: &str = "manual";

//----------------------------------------------   Shops  ----------------------------------------------------------
route!(find_shops => Get "/shops");
/// Exact lookup by `shop_name`. The single match is returned in an envelope.
pub async fn find_shops(req: HttpRequest, store: web::Data<MarketStore>) -> Result<HttpResponse, ServerError> {
    let params = query_params(&req);
    let name = query_str(&params, "shop_name")
        .ok_or_else(|| ServerError::BadRequest("shop_name parameter is required".into()))?;
    let shop = store.shop_by_name(name).ok_or_else(|| ServerError::not_found("Shop"))?;
    Ok(list_response(vec![shop]))
}

route!(get_shop => Get "/shops/{shop_id}");
pub async fn get_shop(req: HttpRequest, store: web::Data<MarketStore>) -> Result<HttpResponse, ServerError> {
    let shop_id = path_id(&req, "shop_id")?;
    let shop = store.shop(shop_id).ok_or_else(|| ServerError::not_found("Shop"))?;
    Ok(HttpResponse::Ok().json(shop))
}

route!(update_shop => Put "/shops/{shop_id}" requires [Scope::ShopsW]);
pub async fn update_shop(
    req: HttpRequest,
    body: web::Bytes,
    store: web::Data<MarketStore>,
) -> Result<HttpResponse, ServerError> {
    let shop_id = path_id(&req, "shop_id")?;
    store.shop(shop_id).ok_or_else(|| ServerError::not_found("Shop"))?;
    let update = json_body::<ShopUpdate>(&body)?;
    let shop = store.update_shop(shop_id, update).ok_or_else(|| ServerError::not_found("Shop"))?;
    Ok(HttpResponse::Ok().json(shop))
}

route!(shop_reviews => Get "/shops/{shop_id}/reviews");
pub async fn shop_reviews(req: HttpRequest, store: web::Data<MarketStore>) -> Result<HttpResponse, ServerError> {
    let shop_id = path_id(&req, "shop_id")?;
    let (limit, offset) = pagination(&query_params(&req));
    Ok(page_response(store.shop_reviews(shop_id, limit, offset)))
}

route!(production_partners => Get "/shops/{shop_id}/production-partners" requires [Scope::ShopsR]);
/// No shop has production partners.
pub async fn production_partners(req: HttpRequest) -> Result<HttpResponse, ServerError> {
    path_id(&req, "shop_id")?;
    Ok(list_response(Vec::<ShopProductionPartner>::new()))
}

route!(readiness_state_definitions => Get "/shops/{shop_id}/readiness-state-definitions" requires [Scope::ShopsR]);
pub async fn readiness_state_definitions(req: HttpRequest) -> Result<HttpResponse, ServerError> {
    path_id(&req, "shop_id")?;
    Ok(list_response(ReadinessStateDefinition::standard_set()))
}

route!(holiday_preferences => Get "/shops/{shop_id}/holiday-preferences" requires [Scope::ShopsR]);
pub async fn holiday_preferences(req: HttpRequest, store: web::Data<MarketStore>) -> Result<HttpResponse, ServerError> {
    let shop_id = path_id(&req, "shop_id")?;
    let prefs = store.holiday_preferences(shop_id).ok_or_else(|| ServerError::not_found("Shop"))?;
    Ok(HttpResponse::Ok().json(prefs))
}

route!(update_holiday_preferences => Put "/shops/{shop_id}/holiday-preferences" requires [Scope::ShopsW]);
pub async fn update_holiday_preferences(
    req: HttpRequest,
    body: web::Bytes,
    store: web::Data<MarketStore>,
) -> Result<HttpResponse, ServerError> {
    let shop_id = path_id(&req, "shop_id")?;
    store.shop(shop_id).ok_or_else(|| ServerError::not_found("Shop"))?;
    let request = json_body::<HolidayPreferencesRequest>(&body)?;
    let prefs = store
        .update_holiday_preferences(shop_id, request.is_vacation, request.vacation_message)
        .ok_or_else(|| ServerError::not_found("Shop"))?;
    info!("Shop {shop_id} vacation mode: {}", prefs.is_vacation);
    Ok(HttpResponse::Ok().json(prefs))
}

//----------------------------------------------   Sections  -------------------------------------------------------
route!(shop_sections => Get "/shops/{shop_id}/sections");
pub async fn shop_sections(req: HttpRequest, store: web::Data<MarketStore>) -> Result<HttpResponse, ServerError> {
    let shop_id = path_id(&req, "shop_id")?;
    Ok(list_response(store.shop_sections(shop_id)))
}

route!(create_shop_section => Post "/shops/{shop_id}/sections" requires [Scope::ShopsW]);
pub async fn create_shop_section(
    req: HttpRequest,
    body: web::Bytes,
    store: web::Data<MarketStore>,
) -> Result<HttpResponse, ServerError> {
    let shop_id = path_id(&req, "shop_id")?;
    let request = json_body::<NewSectionRequest>(&body)
        .ok()
        .filter(|r| !r.title.is_empty())
        .ok_or_else(|| ServerError::BadRequest("title is required".into()))?;
    let section = store.create_shop_section(shop_id, &request.title, request.rank);
    Ok(HttpResponse::Created().json(section))
}

route!(shop_section => Get "/shops/{shop_id}/sections/{shop_section_id}");
pub async fn shop_section(req: HttpRequest, store: web::Data<MarketStore>) -> Result<HttpResponse, ServerError> {
    let shop_id = path_id(&req, "shop_id")?;
    let section_id = path_id(&req, "shop_section_id")?;
    let section = store.shop_section(shop_id, section_id).ok_or_else(|| ServerError::not_found("Section"))?;
    Ok(HttpResponse::Ok().json(section))
}

//----------------------------------------------   Return policies  ------------------------------------------------
route!(return_policies => Get "/shops/{shop_id}/return-policies");
pub async fn return_policies(req: HttpRequest, store: web::Data<MarketStore>) -> Result<HttpResponse, ServerError> {
    let shop_id = path_id(&req, "shop_id")?;
    Ok(list_response(store.return_policies(shop_id)))
}

route!(create_return_policy => Post "/shops/{shop_id}/return-policies" requires [Scope::ShopsW]);
pub async fn create_return_policy(
    req: HttpRequest,
    body: web::Bytes,
    store: web::Data<MarketStore>,
) -> Result<HttpResponse, ServerError> {
    let shop_id = path_id(&req, "shop_id")?;
    let request = json_body::<NewReturnPolicyRequest>(&body)?;
    let policy =
        store.create_return_policy(shop_id, request.accepts_returns, request.accepts_exchanges, request.return_deadline);
    Ok(HttpResponse::Created().json(policy))
}

route!(return_policy => Get "/shops/{shop_id}/return-policies/{return_policy_id}");
pub async fn return_policy(req: HttpRequest, store: web::Data<MarketStore>) -> Result<HttpResponse, ServerError> {
    let policy_id = path_id(&req, "return_policy_id")?;
    let policy = store.return_policy(policy_id).ok_or_else(|| ServerError::not_found("Return policy"))?;
    Ok(HttpResponse::Ok().json(policy))
}

//----------------------------------------------   Shipping profiles  ----------------------------------------------
route!(shipping_profiles => Get "/shops/{shop_id}/shipping-profiles" requires [Scope::ShopsR]);
pub async fn shipping_profiles(req: HttpRequest, store: web::Data<MarketStore>) -> Result<HttpResponse, ServerError> {
    let shop_id = path_id(&req, "shop_id")?;
    Ok(list_response(store.shipping_profiles(shop_id)))
}

route!(create_shipping_profile => Post "/shops/{shop_id}/shipping-profiles" requires [Scope::ShopsW]);
/// The profile is owned by the shop's user. `profile_type` defaults to `manual`.
pub async fn create_shipping_profile(
    req: HttpRequest,
    body: web::Bytes,
    store: web::Data<MarketStore>,
) -> Result<HttpResponse, ServerError> {
    let shop_id = path_id(&req, "shop_id")?;
    let shop = store.shop(shop_id).ok_or_else(|| ServerError::not_found("Shop"))?;
    let request = json_body::<NewShippingProfileRequest>(&body)?;
    if request.title.is_empty() || request.origin_country_iso.is_empty() {
        return Err(ServerError::BadRequest("title and origin_country_iso are required".into()));
    }
    let profile_type =
        if request.profile_type.is_empty() { DEFAULT_PROFILE_TYPE } else { request.profile_type.as_str() };
    let profile =
        store.create_shipping_profile(shop.user_id, &request.title, &request.origin_country_iso, profile_type);
    Ok(HttpResponse::Created().json(profile))
}

route!(shipping_profile => Get "/shops/{shop_id}/shipping-profiles/{shipping_profile_id}" requires [Scope::ShopsR]);
pub async fn shipping_profile(req: HttpRequest, store: web::Data<MarketStore>) -> Result<HttpResponse, ServerError> {
    let profile_id = path_id(&req, "shipping_profile_id")?;
    let profile = store.shipping_profile(profile_id).ok_or_else(|| ServerError::not_found("Shipping profile"))?;
    Ok(HttpResponse::Ok().json(profile))
}

route!(delete_shipping_profile => Delete "/shops/{shop_id}/shipping-profiles/{shipping_profile_id}" requires [Scope::ShopsW]);
/// Soft delete. The profile keeps showing up in lookups with `is_deleted` set.
pub async fn delete_shipping_profile(
    req: HttpRequest,
    store: web::Data<MarketStore>,
) -> Result<HttpResponse, ServerError> {
    let profile_id = path_id(&req, "shipping_profile_id")?;
    if !store.delete_shipping_profile(profile_id) {
        return Err(ServerError::not_found("Shipping profile"));
    }
    Ok(HttpResponse::NoContent().finish())
}
