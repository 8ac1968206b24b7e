//! Listing endpoints, both the marketplace-wide ones under `/listings` and the seller ones under
//! `/shops/{shop_id}/listings`.
use actix_web::{web, HttpRequest, HttpResponse};
use log::*;
use marketplace_engine::{
    db_types::{
        ListingPersonalization,
        ListingPropertyValue,
        ListingState,
        ListingTranslation,
        ListingUpdate,
        ListingVariationImage,
        NewListing,
        PersonalizationUpdate,
    },
    ListingSearch,
    MarketStore,
    Page,
    Scope,
    SortOn,
    SortOrder,
};

use crate::{
    data_objects::{CreateListingRequest, TranslationRequest, UpdateListingRequest, VariationImagesRequest},
    errors::ServerError,
    helpers::{csv_ids, json_body, list_response, page_response, pagination, path_id, path_str, query_params, query_str},
    route,
};

//----------------------------------------------   Marketplace  ----------------------------------------------------
route!(listings_batch => Get "/listings/batch");
pub async fn listings_batch(req: HttpRequest, store: web::Data<MarketStore>) -> Result<HttpResponse, ServerError> {
    let params = query_params(&req);
    let ids = query_str(&params, "listing_ids")
        .map(csv_ids)
        .ok_or_else(|| ServerError::BadRequest("listing_ids parameter is required".into()))?;
    Ok(list_response(store.listings_by_ids(&ids)))
}

route!(find_active_listings => Get "/listings/active");
/// Marketplace search. `sort_on` defaults to `created` and `sort_order` to `desc`. An unknown value for either one
/// gives id order.
pub async fn find_active_listings(req: HttpRequest, store: web::Data<MarketStore>) -> HttpResponse {
    let params = query_params(&req);
    let (limit, offset) = pagination(&params);
    let sort_on = query_str(&params, "sort_on").unwrap_or("created").parse::<SortOn>();
    let sort_order = query_str(&params, "sort_order").unwrap_or("desc").parse::<SortOrder>();
    let (sort_on, sort_order) = match (sort_on, sort_order) {
        (Ok(on), Ok(order)) => (on, order),
        _ => (SortOn::Score, SortOrder::Asc),
    };
    let search = ListingSearch {
        keywords: query_str(&params, "keywords").map(String::from),
        taxonomy_id: query_str(&params, "taxonomy_id").and_then(|s| s.parse().ok()),
        sort_on,
        sort_order,
    };
    trace!("Active listing search: {search:?}");
    page_response(store.find_active_listings(&search, limit, offset))
}

route!(get_listing => Get "/listings/{listing_id}");
pub async fn get_listing(req: HttpRequest, store: web::Data<MarketStore>) -> Result<HttpResponse, ServerError> {
    fetch_listing(&req, &store)
}

route!(delete_listing => Delete "/listings/{listing_id}" requires [Scope::ListingsD]);
pub async fn delete_listing(req: HttpRequest, store: web::Data<MarketStore>) -> Result<HttpResponse, ServerError> {
    remove_listing(&req, &store)
}

route!(listing_inventory => Get "/listings/{listing_id}/inventory");
pub async fn listing_inventory(req: HttpRequest, store: web::Data<MarketStore>) -> Result<HttpResponse, ServerError> {
    fetch_inventory(&req, &store)
}

route!(listing_reviews => Get "/listings/{listing_id}/reviews");
pub async fn listing_reviews(req: HttpRequest, store: web::Data<MarketStore>) -> Result<HttpResponse, ServerError> {
    let listing_id = path_id(&req, "listing_id")?;
    let (limit, offset) = pagination(&query_params(&req));
    Ok(page_response(store.listing_reviews(listing_id, limit, offset)))
}

route!(listing_personalization => Get "/listings/{listing_id}/personalization");
pub async fn listing_personalization(
    req: HttpRequest,
    store: web::Data<MarketStore>,
) -> Result<HttpResponse, ServerError> {
    fetch_personalization(&req, &store)
}

route!(listing_offering => Get "/listings/{listing_id}/products/{product_id}/offerings/{offering_id}");
/// Offerings are looked up across every product of the listing; the product id only has to be numeric.
pub async fn listing_offering(req: HttpRequest, store: web::Data<MarketStore>) -> Result<HttpResponse, ServerError> {
    let listing_id = path_id(&req, "listing_id")?;
    let inventory = store.listing_inventory(listing_id).ok_or_else(|| ServerError::not_found("Listing"))?;
    let offering_id = path_id(&req, "offering_id")?;
    let offering = inventory
        .products
        .into_iter()
        .flat_map(|p| p.offerings)
        .find(|o| o.offering_id == offering_id)
        .ok_or_else(|| ServerError::not_found("Offering"))?;
    Ok(HttpResponse::Ok().json(offering))
}

//----------------------------------------------   Shop listings  --------------------------------------------------
route!(shop_listings => Get "/shops/{shop_id}/listings" requires [Scope::ListingsR]);
/// All of a shop's listings, optionally filtered by `state`. An unknown state matches nothing.
pub async fn shop_listings(req: HttpRequest, store: web::Data<MarketStore>) -> Result<HttpResponse, ServerError> {
    let shop_id = path_id(&req, "shop_id")?;
    let params = query_params(&req);
    let (limit, offset) = pagination(&params);
    let page = match query_str(&params, "state") {
        None => store.shop_listings(shop_id, None, limit, offset),
        Some(state) => match state.parse::<ListingState>() {
            Ok(state) => store.shop_listings(shop_id, Some(state), limit, offset),
            Err(e) => {
                debug!("{e}. Returning an empty page.");
                Page::all(Vec::new())
            },
        },
    };
    Ok(page_response(page))
}

route!(create_listing => Post "/shops/{shop_id}/listings" requires [Scope::ListingsW]);
pub async fn create_listing(
    req: HttpRequest,
    body: web::Bytes,
    store: web::Data<MarketStore>,
) -> Result<HttpResponse, ServerError> {
    let shop_id = path_id(&req, "shop_id")?;
    store.shop(shop_id).ok_or_else(|| ServerError::not_found("Shop"))?;
    let request = json_body::<CreateListingRequest>(&body)?;
    let new_listing = NewListing::try_from(request)?;
    let listing = store.create_listing(shop_id, new_listing).ok_or_else(|| ServerError::not_found("Shop"))?;
    info!("Listing {} created in shop {shop_id}", listing.listing_id);
    Ok(HttpResponse::Created().json(listing))
}

route!(shop_active_listings => Get "/shops/{shop_id}/listings/active");
pub async fn shop_active_listings(
    req: HttpRequest,
    store: web::Data<MarketStore>,
) -> Result<HttpResponse, ServerError> {
    let shop_id = path_id(&req, "shop_id")?;
    let (limit, offset) = pagination(&query_params(&req));
    Ok(page_response(store.active_shop_listings(shop_id, limit, offset)))
}

route!(featured_listings => Get "/shops/{shop_id}/listings/featured");
pub async fn featured_listings(req: HttpRequest, store: web::Data<MarketStore>) -> Result<HttpResponse, ServerError> {
    let shop_id = path_id(&req, "shop_id")?;
    let (limit, offset) = pagination(&query_params(&req));
    Ok(page_response(store.featured_listings(shop_id, limit, offset)))
}

route!(shop_section_listings => Get "/shops/{shop_id}/shop-sections/listings");
/// Active listings in any of the `shop_section_ids`. Without that parameter, every active listing of the shop.
pub async fn shop_section_listings(
    req: HttpRequest,
    store: web::Data<MarketStore>,
) -> Result<HttpResponse, ServerError> {
    let shop_id = path_id(&req, "shop_id")?;
    let params = query_params(&req);
    let (limit, offset) = pagination(&params);
    let page = match query_str(&params, "shop_section_ids") {
        Some(ids) => store.section_listings(shop_id, &csv_ids(ids), limit, offset),
        None => store.active_shop_listings(shop_id, limit, offset),
    };
    Ok(page_response(page))
}

route!(shop_listing => Get "/shops/{shop_id}/listings/{listing_id}");
pub async fn shop_listing(req: HttpRequest, store: web::Data<MarketStore>) -> Result<HttpResponse, ServerError> {
    fetch_listing(&req, &store)
}

route!(update_listing => Put "/shops/{shop_id}/listings/{listing_id}" requires [Scope::ListingsW]);
pub async fn update_listing(
    req: HttpRequest,
    body: web::Bytes,
    store: web::Data<MarketStore>,
) -> Result<HttpResponse, ServerError> {
    modify_listing(&req, &body, &store)
}

route!(patch_listing => Patch "/shops/{shop_id}/listings/{listing_id}" requires [Scope::ListingsW]);
pub async fn patch_listing(
    req: HttpRequest,
    body: web::Bytes,
    store: web::Data<MarketStore>,
) -> Result<HttpResponse, ServerError> {
    modify_listing(&req, &body, &store)
}

route!(delete_shop_listing => Delete "/shops/{shop_id}/listings/{listing_id}" requires [Scope::ListingsD]);
pub async fn delete_shop_listing(
    req: HttpRequest,
    store: web::Data<MarketStore>,
) -> Result<HttpResponse, ServerError> {
    remove_listing(&req, &store)
}

route!(shop_listing_inventory => Get "/shops/{shop_id}/listings/{listing_id}/inventory");
pub async fn shop_listing_inventory(
    req: HttpRequest,
    store: web::Data<MarketStore>,
) -> Result<HttpResponse, ServerError> {
    fetch_inventory(&req, &store)
}

route!(listing_properties => Get "/shops/{shop_id}/listings/{listing_id}/properties");
/// Listing properties are not modelled; every listing has none.
pub async fn listing_properties(req: HttpRequest) -> Result<HttpResponse, ServerError> {
    path_id(&req, "listing_id")?;
    Ok(list_response(Vec::<ListingPropertyValue>::new()))
}

route!(shop_listing_personalization => Get "/shops/{shop_id}/listings/{listing_id}/personalization");
pub async fn shop_listing_personalization(
    req: HttpRequest,
    store: web::Data<MarketStore>,
) -> Result<HttpResponse, ServerError> {
    fetch_personalization(&req, &store)
}

route!(update_listing_personalization => Put "/shops/{shop_id}/listings/{listing_id}/personalization" requires [Scope::ListingsW]);
pub async fn update_listing_personalization(
    req: HttpRequest,
    body: web::Bytes,
    store: web::Data<MarketStore>,
) -> Result<HttpResponse, ServerError> {
    let listing_id = path_id(&req, "listing_id")?;
    store.listing(listing_id).ok_or_else(|| ServerError::not_found("Listing"))?;
    let update = json_body::<PersonalizationUpdate>(&body)?;
    let listing =
        store.update_listing_personalization(listing_id, update).ok_or_else(|| ServerError::not_found("Listing"))?;
    Ok(HttpResponse::Ok().json(ListingPersonalization::from(&listing)))
}

route!(listing_translation => Get "/shops/{shop_id}/listings/{listing_id}/translations/{language}");
/// Translations are not stored. The listing's own text is returned under the requested language.
pub async fn listing_translation(req: HttpRequest, store: web::Data<MarketStore>) -> Result<HttpResponse, ServerError> {
    let listing_id = path_id(&req, "listing_id")?;
    let listing = store.listing(listing_id).ok_or_else(|| ServerError::not_found("Listing"))?;
    Ok(HttpResponse::Ok().json(ListingTranslation {
        listing_id,
        language: path_str(&req, "language").to_string(),
        title: Some(listing.title),
        description: Some(listing.description),
        tags: listing.tags,
    }))
}

route!(update_listing_translation => Put "/shops/{shop_id}/listings/{listing_id}/translations/{language}" requires [Scope::ListingsW]);
/// Echoes the translation back, filling absent fields from the listing. Nothing is stored.
pub async fn update_listing_translation(
    req: HttpRequest,
    body: web::Bytes,
    store: web::Data<MarketStore>,
) -> Result<HttpResponse, ServerError> {
    let listing_id = path_id(&req, "listing_id")?;
    let listing = store.listing(listing_id).ok_or_else(|| ServerError::not_found("Listing"))?;
    let update = json_body::<TranslationRequest>(&body)?;
    Ok(HttpResponse::Ok().json(ListingTranslation {
        listing_id,
        language: path_str(&req, "language").to_string(),
        title: Some(update.title.unwrap_or(listing.title)),
        description: Some(update.description.unwrap_or(listing.description)),
        tags: update.tags.unwrap_or(listing.tags),
    }))
}

route!(listing_variation_images => Get "/shops/{shop_id}/listings/{listing_id}/variation-images");
pub async fn listing_variation_images(req: HttpRequest) -> Result<HttpResponse, ServerError> {
    path_id(&req, "listing_id")?;
    Ok(list_response(Vec::<ListingVariationImage>::new()))
}

route!(update_variation_images => Post "/shops/{shop_id}/listings/{listing_id}/variation-images" requires [Scope::ListingsW]);
/// Echoes the submitted variation images. Nothing is stored.
pub async fn update_variation_images(req: HttpRequest, body: web::Bytes) -> Result<HttpResponse, ServerError> {
    path_id(&req, "listing_id")?;
    let request = json_body::<VariationImagesRequest>(&body)?;
    Ok(list_response(request.variation_images))
}

//----------------------------------------------   Shared  ---------------------------------------------------------
fn fetch_listing(req: &HttpRequest, store: &MarketStore) -> Result<HttpResponse, ServerError> {
    let listing_id = path_id(req, "listing_id")?;
    let listing = store.listing_with_images(listing_id).ok_or_else(|| ServerError::not_found("Listing"))?;
    Ok(HttpResponse::Ok().json(listing))
}

fn remove_listing(req: &HttpRequest, store: &MarketStore) -> Result<HttpResponse, ServerError> {
    let listing_id = path_id(req, "listing_id")?;
    if !store.delete_listing(listing_id) {
        return Err(ServerError::not_found("Listing"));
    }
    info!("Listing {listing_id} deleted");
    Ok(HttpResponse::NoContent().finish())
}

fn modify_listing(req: &HttpRequest, body: &web::Bytes, store: &MarketStore) -> Result<HttpResponse, ServerError> {
    let listing_id = path_id(req, "listing_id")?;
    let request = json_body::<UpdateListingRequest>(body)?;
    let update = ListingUpdate::try_from(request)?;
    let listing = store.update_listing(listing_id, update).ok_or_else(|| ServerError::not_found("Listing"))?;
    Ok(HttpResponse::Ok().json(listing))
}

fn fetch_inventory(req: &HttpRequest, store: &MarketStore) -> Result<HttpResponse, ServerError> {
    let listing_id = path_id(req, "listing_id")?;
    let inventory = store.listing_inventory(listing_id).ok_or_else(|| ServerError::not_found("Listing"))?;
    Ok(HttpResponse::Ok().json(inventory))
}

fn fetch_personalization(req: &HttpRequest, store: &MarketStore) -> Result<HttpResponse, ServerError> {
    let listing_id = path_id(req, "listing_id")?;
    let listing = store.listing(listing_id).ok_or_else(|| ServerError::not_found("Listing"))?;
    Ok(HttpResponse::Ok().json(ListingPersonalization::from(&listing)))
}
