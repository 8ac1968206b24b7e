//! Inputs to the store's create and update operations. Every `Option` field that is `None` leaves the stored value
//! untouched.

use marketplace_common::Money;
use serde::{Deserialize, Serialize};

use crate::db_types::{ListingState, ListingType};

//--------------------------------------       NewListing      ---------------------------------------------------------
/// A validated listing ready to be stored. Ids, timestamps and the owning user are assigned by the store.
#[derive(Debug, Clone, Default)]
pub struct NewListing {
    pub title: String,
    pub description: String,
    pub quantity: i32,
    pub price: Money,
    pub who_made: String,
    pub when_made: String,
    pub taxonomy_id: i64,
    pub shipping_profile_id: Option<i64>,
    pub return_policy_id: Option<i64>,
    pub materials: Vec<String>,
    pub tags: Vec<String>,
    pub styles: Vec<String>,
    pub listing_type: ListingType,
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

//--------------------------------------     ListingUpdate     ---------------------------------------------------------
#[derive(Debug, Clone, Default)]
pub struct ListingUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<i32>,
    pub price: Option<Money>,
    pub state: Option<ListingState>,
    pub who_made: Option<String>,
    pub when_made: Option<String>,
    pub taxonomy_id: Option<i64>,
    pub shipping_profile_id: Option<i64>,
    pub return_policy_id: Option<i64>,
    pub materials: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub is_supply: Option<bool>,
    pub item_weight: Option<f32>,
    pub item_weight_unit: Option<String>,
    pub item_length: Option<f32>,
    pub item_width: Option<f32>,
    pub item_height: Option<f32>,
    pub item_dimensions_unit: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalizationUpdate {
    pub is_personalizable: Option<bool>,
    pub personalization_is_required: Option<bool>,
    pub personalization_char_count_max: Option<i32>,
    pub personalization_instructions: Option<String>,
}

//--------------------------------------       ShopUpdate      ---------------------------------------------------------
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopUpdate {
    pub title: Option<String>,
    pub announcement: Option<String>,
    pub sale_message: Option<String>,
    pub is_vacation: Option<bool>,
    pub vacation_message: Option<String>,
}

//--------------------------------------     ReceiptUpdate     ---------------------------------------------------------
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReceiptUpdate {
    pub message_from_seller: Option<String>,
    pub is_shipped: Option<bool>,
    pub is_paid: Option<bool>,
}
