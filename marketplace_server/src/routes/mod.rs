//! Request handler definitions
//!
//! Every handler is declared together with its route, using the `route!` macro. The macro generates a
//! `{HandlerName}Route` service factory that binds the handler to a path and an HTTP method, and optionally wraps it
//! in a [`ScopeGuardFactory`](crate::middleware::ScopeGuardFactory) for the OAuth scopes the handler needs.
//!
//! Registration order matters. Several routes can share a path (one per method), and actix tries them in the order
//! they were registered. So for each path the method routes come first, followed by a catch-all that answers 405.
//! Paths with a literal segment (`/listings/active`) are registered before the `{id}` path they would otherwise
//! collide with (`/listings/{listing_id}`).
//!
//! Handlers hold no locks across an `.await`; every store call is synchronous and short.
use actix_web::{web, HttpResponse, Resource};

use crate::errors::ServerError;

pub mod listing_media;
pub mod listings;
pub mod misc;
pub mod oauth;
pub mod orders;
pub mod shops;
pub mod users;

/// Prefix of every resource route.
pub const APPLICATION_PREFIX: &str = "/v3/application";

// actix-web's attribute macros cannot attach middleware to a single method route, so routes are built by hand.
#[macro_export]
macro_rules! route {
    ($name:ident => $method:ident $path:literal requires [$($scopes:expr),+]) => {
        paste::paste! { pub struct [<$name:camel Route>];}
        paste::paste! {
            impl [<$name:camel Route>] {
                #[allow(clippy::new_without_default)]
                pub fn new() -> Self { Self }
            }
        }
        paste::paste! {
            impl actix_web::dev::HttpServiceFactory for [<$name:camel Route>] {
                fn register(self, config: &mut actix_web::dev::AppService) {
                    let res = actix_web::Resource::new($path)
                        .name(stringify!($name))
                        .guard(actix_web::guard::$method())
                        .to($name)
                        .wrap($crate::middleware::ScopeGuardFactory::new(&[$($scopes),+]));
                    actix_web::dev::HttpServiceFactory::register(res, config);
                }
            }
        }
    };

    ($name:ident => $method:ident $path:literal) => {
        paste::paste! { pub struct [<$name:camel Route>];}
        paste::paste! {
            impl [<$name:camel Route>] {
                #[allow(clippy::new_without_default)]
                pub fn new() -> Self { Self }
            }
        }
        paste::paste! {
            impl actix_web::dev::HttpServiceFactory for [<$name:camel Route>] {
                fn register(self, config: &mut actix_web::dev::AppService) {
                    let res = actix_web::Resource::new($path)
                        .name(stringify!($name))
                        .guard(actix_web::guard::$method())
                        .to($name);
                    actix_web::dev::HttpServiceFactory::register(res, config);
                }
            }
        }
    };
}

/// Registers the routes for one path, followed by the 405 catch-all for that path.
macro_rules! path_routes {
    ($cfg:ident, $path:literal => $($route:ty),+) => {
        $( $cfg.service(<$route>::new()); )+
        $cfg.service(method_not_allowed($path));
    };
}

/// A resource matching any method on `path` that answers 405. Registered after the real routes for the path.
pub fn method_not_allowed(path: &str) -> Resource {
    web::resource(path).to(|| async { Err::<HttpResponse, _>(ServerError::MethodNotAllowed("Method not allowed".into())) })
}

/// The app's default service. Anything no route claims ends up here.
pub async fn endpoint_not_found() -> Result<HttpResponse, ServerError> {
    Err(ServerError::NotFound("Endpoint not found".into()))
}

/// Every route the server knows about: the public ones at the root, and the resource routes under
/// [`APPLICATION_PREFIX`].
pub fn configure(cfg: &mut web::ServiceConfig) {
    path_routes!(cfg, "/ping" => misc::PingRoute);
    cfg.service(misc::AdminResetRoute::new());
    cfg.service(web::resource("/admin/reset").to(|| async {
        Err::<HttpResponse, _>(ServerError::MethodNotAllowed("POST only".into()))
    }));
    path_routes!(cfg, "/v3/public/oauth/token" => oauth::IssueTokenRoute);
    cfg.service(web::scope(APPLICATION_PREFIX).configure(application_routes));
}

fn application_routes(cfg: &mut web::ServiceConfig) {
    // Misc
    path_routes!(cfg, "/openapi-ping" => misc::OpenapiPingRoute);
    path_routes!(cfg, "/scopes" => misc::TokenScopesRoute);
    path_routes!(cfg, "/shipping-carriers" => misc::ShippingCarriersRoute);
    path_routes!(cfg, "/buyer-taxonomy/nodes" => misc::BuyerTaxonomyNodesRoute);
    path_routes!(cfg, "/seller-taxonomy/nodes" => misc::SellerTaxonomyNodesRoute);
    path_routes!(cfg, "/buyer-taxonomy/nodes/{taxonomy_id}/properties" => misc::BuyerTaxonomyPropertiesRoute);
    path_routes!(cfg, "/seller-taxonomy/nodes/{taxonomy_id}/properties" => misc::SellerTaxonomyPropertiesRoute);

    // Marketplace listings
    path_routes!(cfg, "/listings/batch" => listings::ListingsBatchRoute);
    path_routes!(cfg, "/listings/active" => listings::FindActiveListingsRoute);
    path_routes!(cfg, "/listings/{listing_id}" => listings::GetListingRoute, listings::DeleteListingRoute);
    path_routes!(cfg, "/listings/{listing_id}/inventory" => listings::ListingInventoryRoute);
    path_routes!(cfg, "/listings/{listing_id}/reviews" => listings::ListingReviewsRoute);
    path_routes!(cfg, "/listings/{listing_id}/personalization" => listings::ListingPersonalizationRoute);
    path_routes!(cfg, "/listings/{listing_id}/images" => listing_media::ListingImagesRoute);
    path_routes!(cfg, "/listings/{listing_id}/videos" => listing_media::ListingVideosRoute);
    path_routes!(cfg, "/listings/{listing_id}/videos/{video_id}" => listing_media::ListingVideoRoute);
    path_routes!(cfg, "/listings/{listing_id}/products/{product_id}/offerings/{offering_id}" =>
        listings::ListingOfferingRoute);

    // Users
    path_routes!(cfg, "/users/me" => users::CurrentUserRoute);
    path_routes!(cfg, "/users/{user_id}" => users::GetUserRoute);
    path_routes!(cfg, "/users/{user_id}/addresses" => users::UserAddressesRoute);
    path_routes!(cfg, "/users/{user_id}/addresses/{user_address_id}" => users::DeleteUserAddressRoute);
    path_routes!(cfg, "/users/{user_id}/shops" => users::UserShopsRoute);

    // Shops
    path_routes!(cfg, "/shops" => shops::FindShopsRoute);
    path_routes!(cfg, "/shops/{shop_id}" => shops::GetShopRoute, shops::UpdateShopRoute);
    path_routes!(cfg, "/shops/{shop_id}/reviews" => shops::ShopReviewsRoute);
    path_routes!(cfg, "/shops/{shop_id}/production-partners" => shops::ProductionPartnersRoute);
    path_routes!(cfg, "/shops/{shop_id}/readiness-state-definitions" => shops::ReadinessStateDefinitionsRoute);
    path_routes!(cfg, "/shops/{shop_id}/holiday-preferences" =>
        shops::HolidayPreferencesRoute, shops::UpdateHolidayPreferencesRoute);
    path_routes!(cfg, "/shops/{shop_id}/sections" => shops::ShopSectionsRoute, shops::CreateShopSectionRoute);
    path_routes!(cfg, "/shops/{shop_id}/sections/{shop_section_id}" => shops::ShopSectionRoute);
    path_routes!(cfg, "/shops/{shop_id}/shop-sections/listings" => listings::ShopSectionListingsRoute);
    path_routes!(cfg, "/shops/{shop_id}/return-policies" =>
        shops::ReturnPoliciesRoute, shops::CreateReturnPolicyRoute);
    path_routes!(cfg, "/shops/{shop_id}/return-policies/{return_policy_id}" => shops::ReturnPolicyRoute);
    path_routes!(cfg, "/shops/{shop_id}/shipping-profiles" =>
        shops::ShippingProfilesRoute, shops::CreateShippingProfileRoute);
    path_routes!(cfg, "/shops/{shop_id}/shipping-profiles/{shipping_profile_id}" =>
        shops::ShippingProfileRoute, shops::DeleteShippingProfileRoute);

    // Shop listings
    path_routes!(cfg, "/shops/{shop_id}/listings" => listings::ShopListingsRoute, listings::CreateListingRoute);
    path_routes!(cfg, "/shops/{shop_id}/listings/active" => listings::ShopActiveListingsRoute);
    path_routes!(cfg, "/shops/{shop_id}/listings/featured" => listings::FeaturedListingsRoute);
    path_routes!(cfg, "/shops/{shop_id}/listings/{listing_id}" =>
        listings::ShopListingRoute,
        listings::UpdateListingRoute,
        listings::PatchListingRoute,
        listings::DeleteShopListingRoute);
    path_routes!(cfg, "/shops/{shop_id}/listings/{listing_id}/images" =>
        listing_media::ShopListingImagesRoute, listing_media::UploadListingImageRoute);
    path_routes!(cfg, "/shops/{shop_id}/listings/{listing_id}/images/{listing_image_id}" =>
        listing_media::DeleteListingImageRoute);
    path_routes!(cfg, "/shops/{shop_id}/listings/{listing_id}/files" =>
        listing_media::ListingFilesRoute, listing_media::UploadListingFileRoute);
    path_routes!(cfg, "/shops/{shop_id}/listings/{listing_id}/files/{listing_file_id}" =>
        listing_media::ListingFileRoute, listing_media::DeleteListingFileRoute);
    path_routes!(cfg, "/shops/{shop_id}/listings/{listing_id}/inventory" => listings::ShopListingInventoryRoute);
    path_routes!(cfg, "/shops/{shop_id}/listings/{listing_id}/properties" => listings::ListingPropertiesRoute);
    path_routes!(cfg, "/shops/{shop_id}/listings/{listing_id}/personalization" =>
        listings::ShopListingPersonalizationRoute, listings::UpdateListingPersonalizationRoute);
    path_routes!(cfg, "/shops/{shop_id}/listings/{listing_id}/videos" =>
        listing_media::ShopListingVideosRoute, listing_media::UploadListingVideoRoute);
    path_routes!(cfg, "/shops/{shop_id}/listings/{listing_id}/videos/{video_id}" =>
        listing_media::ShopListingVideoRoute, listing_media::DeleteListingVideoRoute);
    path_routes!(cfg, "/shops/{shop_id}/listings/{listing_id}/translations/{language}" =>
        listings::ListingTranslationRoute, listings::UpdateListingTranslationRoute);
    path_routes!(cfg, "/shops/{shop_id}/listings/{listing_id}/variation-images" =>
        listings::ListingVariationImagesRoute, listings::UpdateVariationImagesRoute);

    // Orders
    path_routes!(cfg, "/shops/{shop_id}/receipts" => orders::ShopReceiptsRoute);
    path_routes!(cfg, "/shops/{shop_id}/receipts/{receipt_id}" => orders::GetReceiptRoute, orders::UpdateReceiptRoute);
    path_routes!(cfg, "/shops/{shop_id}/receipts/{receipt_id}/payments" => orders::ReceiptPaymentsRoute);
    path_routes!(cfg, "/shops/{shop_id}/receipts/{receipt_id}/transactions" => orders::ReceiptTransactionsRoute);
    path_routes!(cfg, "/shops/{shop_id}/receipts/{receipt_id}/tracking" => orders::CreateReceiptShipmentRoute);
    path_routes!(cfg, "/shops/{shop_id}/transactions" => orders::ShopTransactionsRoute);
    path_routes!(cfg, "/shops/{shop_id}/transactions/{transaction_id}" => orders::GetTransactionRoute);
    path_routes!(cfg, "/shops/{shop_id}/payments" => orders::ShopPaymentsRoute);
    path_routes!(cfg, "/shops/{shop_id}/payment-account/ledger-entries" => orders::LedgerEntriesRoute);
}
