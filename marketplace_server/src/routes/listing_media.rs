//! Images, digital files and videos attached to a listing.
//!
//! Uploads accept their metadata as query parameters or a url-encoded form. File contents are never read; the mock
//! only records the metadata.
use actix_web::{web, HttpRequest, HttpResponse};
use log::*;
use marketplace_engine::{MarketStore, Scope};

use crate::{
    errors::ServerError,
    helpers::{form_values, list_response, path_id, query_or, query_str},
    route,
};

const DEFAULT_FILENAME: &str = "file.pdf";
const DEFAULT_FILETYPE: &str = "application/pdf";
const DEFAULT_FILE_SIZE: i64 = 1024;

//----------------------------------------------   Images  ---------------------------------------------------------
route!(listing_images => Get "/listings/{listing_id}/images");
pub async fn listing_images(req: HttpRequest, store: web::Data<MarketStore>) -> Result<HttpResponse, ServerError> {
    fetch_images(&req, &store)
}

route!(shop_listing_images => Get "/shops/{shop_id}/listings/{listing_id}/images");
pub async fn shop_listing_images(
    req: HttpRequest,
    store: web::Data<MarketStore>,
) -> Result<HttpResponse, ServerError> {
    fetch_images(&req, &store)
}

route!(upload_listing_image => Post "/shops/{shop_id}/listings/{listing_id}/images" requires [Scope::ListingsW]);
/// Records a new image. `alt_text` is optional; `rank` defaults to 1.
pub async fn upload_listing_image(
    req: HttpRequest,
    body: web::Bytes,
    store: web::Data<MarketStore>,
) -> Result<HttpResponse, ServerError> {
    let listing_id = path_id(&req, "listing_id")?;
    store.listing(listing_id).ok_or_else(|| ServerError::not_found("Listing"))?;
    let values = form_values(&req, &body)?;
    let alt_text = query_str(&values, "alt_text").map(String::from);
    let rank = query_or(&values, "rank", 1);
    let image = store.add_listing_image(listing_id, alt_text, rank).ok_or_else(|| ServerError::not_found("Listing"))?;
    debug!("Image {} uploaded to listing {listing_id}", image.listing_image_id);
    Ok(HttpResponse::Created().json(image))
}

route!(delete_listing_image => Delete "/shops/{shop_id}/listings/{listing_id}/images/{listing_image_id}" requires [Scope::ListingsW]);
pub async fn delete_listing_image(
    req: HttpRequest,
    store: web::Data<MarketStore>,
) -> Result<HttpResponse, ServerError> {
    let listing_id = path_id(&req, "listing_id")?;
    let image_id = path_id(&req, "listing_image_id")?;
    if !store.delete_listing_image(listing_id, image_id) {
        return Err(ServerError::not_found("Image"));
    }
    Ok(HttpResponse::NoContent().finish())
}

//----------------------------------------------   Files  ----------------------------------------------------------
route!(listing_files => Get "/shops/{shop_id}/listings/{listing_id}/files");
pub async fn listing_files(req: HttpRequest, store: web::Data<MarketStore>) -> Result<HttpResponse, ServerError> {
    let listing_id = path_id(&req, "listing_id")?;
    Ok(list_response(store.listing_files(listing_id)))
}

route!(upload_listing_file => Post "/shops/{shop_id}/listings/{listing_id}/files" requires [Scope::ListingsW]);
pub async fn upload_listing_file(
    req: HttpRequest,
    body: web::Bytes,
    store: web::Data<MarketStore>,
) -> Result<HttpResponse, ServerError> {
    let listing_id = path_id(&req, "listing_id")?;
    store.listing(listing_id).ok_or_else(|| ServerError::not_found("Listing"))?;
    let values = form_values(&req, &body)?;
    let filename = query_str(&values, "name").or_else(|| query_str(&values, "filename")).unwrap_or(DEFAULT_FILENAME);
    let filetype = query_str(&values, "filetype").unwrap_or(DEFAULT_FILETYPE);
    let file = store
        .add_listing_file(listing_id, filename, filetype, DEFAULT_FILE_SIZE)
        .ok_or_else(|| ServerError::not_found("Listing"))?;
    debug!("File {} ({filename}) uploaded to listing {listing_id}", file.listing_file_id);
    Ok(HttpResponse::Created().json(file))
}

route!(listing_file => Get "/shops/{shop_id}/listings/{listing_id}/files/{listing_file_id}");
pub async fn listing_file(req: HttpRequest, store: web::Data<MarketStore>) -> Result<HttpResponse, ServerError> {
    let listing_id = path_id(&req, "listing_id")?;
    let file_id = path_id(&req, "listing_file_id")?;
    let file = store.listing_file(listing_id, file_id).ok_or_else(|| ServerError::not_found("File"))?;
    Ok(HttpResponse::Ok().json(file))
}

route!(delete_listing_file => Delete "/shops/{shop_id}/listings/{listing_id}/files/{listing_file_id}" requires [Scope::ListingsW]);
pub async fn delete_listing_file(req: HttpRequest, store: web::Data<MarketStore>) -> Result<HttpResponse, ServerError> {
    let listing_id = path_id(&req, "listing_id")?;
    let file_id = path_id(&req, "listing_file_id")?;
    if !store.delete_listing_file(listing_id, file_id) {
        return Err(ServerError::not_found("File"));
    }
    Ok(HttpResponse::NoContent().finish())
}

//----------------------------------------------   Videos  ---------------------------------------------------------
route!(listing_videos => Get "/listings/{listing_id}/videos");
pub async fn listing_videos(req: HttpRequest, store: web::Data<MarketStore>) -> Result<HttpResponse, ServerError> {
    fetch_videos(&req, &store)
}

route!(listing_video => Get "/listings/{listing_id}/videos/{video_id}");
pub async fn listing_video(req: HttpRequest, store: web::Data<MarketStore>) -> Result<HttpResponse, ServerError> {
    fetch_video(&req, &store)
}

route!(shop_listing_videos => Get "/shops/{shop_id}/listings/{listing_id}/videos");
pub async fn shop_listing_videos(
    req: HttpRequest,
    store: web::Data<MarketStore>,
) -> Result<HttpResponse, ServerError> {
    fetch_videos(&req, &store)
}

route!(upload_listing_video => Post "/shops/{shop_id}/listings/{listing_id}/videos" requires [Scope::ListingsW]);
pub async fn upload_listing_video(
    req: HttpRequest,
    store: web::Data<MarketStore>,
) -> Result<HttpResponse, ServerError> {
    let listing_id = path_id(&req, "listing_id")?;
    let video = store.add_listing_video(listing_id).ok_or_else(|| ServerError::not_found("Listing"))?;
    debug!("Video {} uploaded to listing {listing_id}", video.video_id);
    Ok(HttpResponse::Created().json(video))
}

route!(shop_listing_video => Get "/shops/{shop_id}/listings/{listing_id}/videos/{video_id}");
pub async fn shop_listing_video(req: HttpRequest, store: web::Data<MarketStore>) -> Result<HttpResponse, ServerError> {
    fetch_video(&req, &store)
}

route!(delete_listing_video => Delete "/shops/{shop_id}/listings/{listing_id}/videos/{video_id}" requires [Scope::ListingsW]);
pub async fn delete_listing_video(
    req: HttpRequest,
    store: web::Data<MarketStore>,
) -> Result<HttpResponse, ServerError> {
    let listing_id = path_id(&req, "listing_id")?;
    store.listing(listing_id).ok_or_else(|| ServerError::not_found("Listing"))?;
    let video_id = path_id(&req, "video_id")?;
    if !store.delete_listing_video(listing_id, video_id) {
        return Err(ServerError::not_found("Video"));
    }
    Ok(HttpResponse::NoContent().finish())
}

//----------------------------------------------   Shared  ---------------------------------------------------------
fn fetch_images(req: &HttpRequest, store: &MarketStore) -> Result<HttpResponse, ServerError> {
    let listing_id = path_id(req, "listing_id")?;
    Ok(list_response(store.listing_images(listing_id)))
}

fn fetch_videos(req: &HttpRequest, store: &MarketStore) -> Result<HttpResponse, ServerError> {
    let listing_id = path_id(req, "listing_id")?;
    let listing = store.listing(listing_id).ok_or_else(|| ServerError::not_found("Listing"))?;
    Ok(list_response(listing.videos))
}

fn fetch_video(req: &HttpRequest, store: &MarketStore) -> Result<HttpResponse, ServerError> {
    let listing_id = path_id(req, "listing_id")?;
    let listing = store.listing(listing_id).ok_or_else(|| ServerError::not_found("Listing"))?;
    let video_id = path_id(req, "video_id")?;
    let video =
        listing.videos.into_iter().find(|v| v.video_id == video_id).ok_or_else(|| ServerError::not_found("Video"))?;
    Ok(HttpResponse::Ok().json(video))
}
