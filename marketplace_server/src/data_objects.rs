//! Request bodies accepted by the resource endpoints, and their conversion into store inputs.
use marketplace_common::Money;
use marketplace_engine::db_types::{
    ListingState,
    ListingType,
    ListingUpdate,
    ListingVariationImage,
    NewListing,
};
use serde::{Deserialize, Serialize};

use crate::errors::ServerError;

const REQUIRED_LISTING_FIELDS: &str =
    "Missing required fields: title, quantity, price, who_made, when_made, taxonomy_id";

fn to_money(price: f64) -> Result<Money, ServerError> {
    Money::try_from_dollars(price).map_err(|e| ServerError::BadRequest(e.to_string()))
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateListingRequest {
    pub quantity: i32,
    pub title: String,
    pub description: String,
    /// In dollars, e.g. `19.99`.
    pub price: f64,
    pub who_made: String,
    pub when_made: String,
    pub taxonomy_id: i64,
    pub shipping_profile_id: Option<i64>,
    pub return_policy_id: Option<i64>,
    pub materials: Vec<String>,
    pub tags: Vec<String>,
    pub styles: Vec<String>,
    pub listing_type: Option<ListingType>,
    pub is_supply: Option<bool>,
    pub is_customizable: bool,
    pub is_personalizable: bool,
    pub item_weight: Option<f32>,
    pub item_weight_unit: Option<String>,
    pub item_length: Option<f32>,
    pub item_width: Option<f32>,
    pub item_height: Option<f32>,
    pub item_dimensions_unit: Option<String>,
}

impl TryFrom<CreateListingRequest> for NewListing {
    type Error = ServerError;

    fn try_from(req: CreateListingRequest) -> Result<Self, Self::Error> {
        let missing_fields = req.title.is_empty() ||
            req.quantity <= 0 ||
            req.price <= 0.0 ||
            req.who_made.is_empty() ||
            req.when_made.is_empty() ||
            req.taxonomy_id == 0;
        if missing_fields {
            return Err(ServerError::BadRequest(REQUIRED_LISTING_FIELDS.into()));
        }
        Ok(NewListing {
            price: to_money(req.price)?,
            title: req.title,
            description: req.description,
            quantity: req.quantity,
            who_made: req.who_made,
            when_made: req.when_made,
            taxonomy_id: req.taxonomy_id,
            shipping_profile_id: req.shipping_profile_id,
            return_policy_id: req.return_policy_id,
            materials: req.materials,
            tags: req.tags,
            styles: req.styles,
            listing_type: req.listing_type.unwrap_or_default(),
            is_supply: req.is_supply,
            is_customizable: req.is_customizable,
            is_personalizable: req.is_personalizable,
            item_weight: req.item_weight,
            item_weight_unit: req.item_weight_unit,
            item_length: req.item_length,
            item_width: req.item_width,
            item_height: req.item_height,
            item_dimensions_unit: req.item_dimensions_unit,
        })
    }
}

/// Every field is optional. Fields that are absent are left as they are.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateListingRequest {
    pub quantity: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub who_made: Option<String>,
    pub when_made: Option<String>,
    pub taxonomy_id: Option<i64>,
    pub shipping_profile_id: Option<i64>,
    pub return_policy_id: Option<i64>,
    pub materials: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub state: Option<ListingState>,
    pub is_supply: Option<bool>,
    pub item_weight: Option<f32>,
    pub item_weight_unit: Option<String>,
    pub item_length: Option<f32>,
    pub item_width: Option<f32>,
    pub item_height: Option<f32>,
    pub item_dimensions_unit: Option<String>,
}

impl TryFrom<UpdateListingRequest> for ListingUpdate {
    type Error = ServerError;

    fn try_from(req: UpdateListingRequest) -> Result<Self, Self::Error> {
        Ok(ListingUpdate {
            price: req.price.map(to_money).transpose()?,
            title: req.title,
            description: req.description,
            quantity: req.quantity,
            state: req.state,
            who_made: req.who_made,
            when_made: req.when_made,
            taxonomy_id: req.taxonomy_id,
            shipping_profile_id: req.shipping_profile_id,
            return_policy_id: req.return_policy_id,
            materials: req.materials,
            tags: req.tags,
            is_supply: req.is_supply,
            item_weight: req.item_weight,
            item_weight_unit: req.item_weight_unit,
            item_length: req.item_length,
            item_width: req.item_width,
            item_height: req.item_height,
            item_dimensions_unit: req.item_dimensions_unit,
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VariationImagesRequest {
    pub variation_images: Vec<ListingVariationImage>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewSectionRequest {
    pub title: String,
    pub rank: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewReturnPolicyRequest {
    pub accepts_returns: bool,
    pub accepts_exchanges: bool,
    pub return_deadline: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewShippingProfileRequest {
    pub title: String,
    pub origin_country_iso: String,
    pub profile_type: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HolidayPreferencesRequest {
    pub is_vacation: Option<bool>,
    pub vacation_message: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackingRequest {
    pub carrier_name: String,
    pub tracking_code: String,
}

#[cfg(test)]
mod test {
    use super::*;

    fn valid_request() -> CreateListingRequest {
        serde_json::from_str(
            r#"{"title":"X","quantity":5,"price":10.0,"who_made":"i_did","when_made":"2020_2026","taxonomy_id":1207}"#,
        )
        .unwrap()
    }

    #[test]
    fn create_listing_conversion() {
        let listing = NewListing::try_from(valid_request()).unwrap();
        assert_eq!(listing.price, Money::usd(1000));
        assert_eq!(listing.listing_type, ListingType::Physical);
        assert_eq!(listing.quantity, 5);
    }

    #[test]
    fn create_listing_requires_fields() {
        let cases: [fn(&mut CreateListingRequest); 6] = [
            |r| r.title.clear(),
            |r| r.quantity = 0,
            |r| r.price = -1.0,
            |r| r.who_made.clear(),
            |r| r.when_made.clear(),
            |r| r.taxonomy_id = 0,
        ];
        for f in cases {
            let mut req = valid_request();
            f(&mut req);
            let err = NewListing::try_from(req).unwrap_err();
            assert_eq!(err.to_string(), REQUIRED_LISTING_FIELDS);
        }
    }

    #[test]
    fn update_listing_price_is_converted() {
        let req: UpdateListingRequest = serde_json::from_str(r#"{"price": 12.346, "state": "active"}"#).unwrap();
        let update = ListingUpdate::try_from(req).unwrap();
        assert_eq!(update.price, Some(Money::usd(1235)));
        assert_eq!(update.state, Some(ListingState::Active));
        assert!(update.title.is_none());
    }

    #[test]
    fn unknown_state_is_rejected_by_serde() {
        assert!(serde_json::from_str::<UpdateListingRequest>(r#"{"state": "haunted"}"#).is_err());
    }
}
