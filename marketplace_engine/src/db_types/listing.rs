use std::{fmt::Display, str::FromStr};

use marketplace_common::Money;
use serde::{Deserialize, Serialize};

use crate::db_types::ConversionError;

//--------------------------------------     ListingState      ---------------------------------------------------------
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingState {
    /// Live and purchasable.
    Active,
    /// Taken down by the seller.
    Inactive,
    /// Quantity has run out.
    SoldOut,
    /// Newly created listings start here.
    #[default]
    Draft,
    /// The listing reached its ending timestamp.
    Expired,
}

impl Display for ListingState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListingState::Active => write!(f, "active"),
            ListingState::Inactive => write!(f, "inactive"),
            ListingState::SoldOut => write!(f, "sold_out"),
            ListingState::Draft => write!(f, "draft"),
            ListingState::Expired => write!(f, "expired"),
        }
    }
}

impl FromStr for ListingState {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "sold_out" => Ok(Self::SoldOut),
            "draft" => Ok(Self::Draft),
            "expired" => Ok(Self::Expired),
            s => Err(ConversionError(format!("Invalid listing state: {s}"))),
        }
    }
}

//--------------------------------------      ListingType      ---------------------------------------------------------
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingType {
    #[default]
    Physical,
    Download,
    Both,
}

impl ListingType {
    pub fn is_digital(&self) -> bool {
        matches!(self, Self::Download | Self::Both)
    }
}

//--------------------------------------      ShopListing      ---------------------------------------------------------
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopListing {
    pub listing_id: i64,
    pub user_id: i64,
    pub shop_id: i64,
    pub title: String,
    pub description: String,
    pub state: ListingState,
    pub creation_timestamp: i64,
    pub created_timestamp: i64,
    pub ending_timestamp: i64,
    pub original_creation_timestamp: i64,
    pub last_modified_timestamp: i64,
    pub updated_timestamp: i64,
    pub state_timestamp: Option<i64>,
    pub quantity: i32,
    pub shop_section_id: Option<i64>,
    pub featured_rank: i32,
    pub url: String,
    pub num_favorers: i32,
    pub non_taxable: bool,
    pub is_taxable: bool,
    pub is_customizable: bool,
    pub is_personalizable: bool,
    pub personalization_is_required: bool,
    pub personalization_char_count_max: Option<i32>,
    pub personalization_instructions: Option<String>,
    pub listing_type: ListingType,
    pub tags: Vec<String>,
    pub materials: Vec<String>,
    pub shipping_profile_id: Option<i64>,
    pub return_policy_id: Option<i64>,
    pub processing_min: Option<i32>,
    pub processing_max: Option<i32>,
    pub who_made: Option<String>,
    pub when_made: Option<String>,
    pub is_supply: Option<bool>,
    pub item_weight: Option<f32>,
    pub item_weight_unit: Option<String>,
    pub item_length: Option<f32>,
    pub item_width: Option<f32>,
    pub item_height: Option<f32>,
    pub item_dimensions_unit: Option<String>,
    pub is_private: bool,
    pub style: Vec<String>,
    pub file_data: Option<String>,
    pub has_variations: bool,
    pub should_auto_renew: bool,
    pub language: Option<String>,
    pub price: Money,
    pub taxonomy_id: Option<i64>,
    pub views: i32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<ListingImage>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub videos: Vec<ListingVideo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory: Option<ListingInventory>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skus: Vec<String>,
}

impl ShopListing {
    /// Case-insensitive substring match over the title, description and tags. `needle` must already be lowercase.
    pub fn matches_keywords(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) ||
            self.description.to_lowercase().contains(needle) ||
            self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }

    /// The inventory for this listing. Listings without an explicit inventory get a single product with a single
    /// offering carrying the listing's own quantity and price. Product and offering ids are derived from the listing
    /// id, so repeated calls give identical results.
    pub fn effective_inventory(&self) -> ListingInventory {
        if let Some(inventory) = &self.inventory {
            return inventory.clone();
        }
        let offering = Offering {
            offering_id: self.listing_id * 100,
            quantity: self.quantity,
            is_enabled: true,
            is_deleted: false,
            price: self.price.clone(),
        };
        let product = Product {
            product_id: self.listing_id * 10,
            sku: String::default(),
            is_deleted: false,
            offerings: vec![offering],
            property_values: vec![],
        };
        ListingInventory {
            products: vec![product],
            price_on_property: vec![],
            quantity_on_property: vec![],
            sku_on_property: vec![],
        }
    }
}

//--------------------------------------     ListingImage      ---------------------------------------------------------
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingImage {
    pub listing_id: i64,
    pub listing_image_id: i64,
    pub hex_code: Option<String>,
    pub red: Option<i32>,
    pub green: Option<i32>,
    pub blue: Option<i32>,
    pub hue: Option<i32>,
    pub saturation: Option<i32>,
    pub brightness: Option<i32>,
    pub is_black_and_white: Option<bool>,
    pub creation_tsz: i64,
    pub created_timestamp: i64,
    pub rank: i32,
    pub url_75x75: String,
    pub url_170x135: String,
    #[serde(rename = "url_570xN")]
    pub url_570x_n: String,
    pub url_fullxfull: String,
    pub full_height: Option<i32>,
    pub full_width: Option<i32>,
    pub alt_text: Option<String>,
}

impl ListingImage {
    /// An image record with the mock CDN urls filled in for every size.
    pub fn with_mock_urls(listing_id: i64, listing_image_id: i64, rank: i32, timestamp: i64) -> Self {
        let url = |size: &str| format!("https://mock.etsy.com/images/{listing_image_id}_{size}.jpg");
        Self {
            listing_id,
            listing_image_id,
            creation_tsz: timestamp,
            created_timestamp: timestamp,
            rank,
            url_75x75: url("75x75"),
            url_170x135: url("170x135"),
            url_570x_n: url("570xN"),
            url_fullxfull: url("fullxfull"),
            ..Default::default()
        }
    }
}

//--------------------------------------     ListingVideo      ---------------------------------------------------------
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingVideo {
    pub video_id: i64,
    pub height: i32,
    pub width: i32,
    pub thumbnail_url: String,
    pub video_url: String,
    pub video_state: String,
}

//--------------------------------------      ListingFile      ---------------------------------------------------------
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingFile {
    pub listing_file_id: i64,
    pub listing_id: i64,
    pub rank: i32,
    pub filename: String,
    pub filesize: String,
    pub size_bytes: i64,
    pub filetype: String,
    pub create_timestamp: i64,
    pub created_timestamp: i64,
}

//--------------------------------------   ListingInventory    ---------------------------------------------------------
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingInventory {
    pub products: Vec<Product>,
    pub price_on_property: Vec<i64>,
    pub quantity_on_property: Vec<i64>,
    pub sku_on_property: Vec<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: i64,
    pub sku: String,
    pub is_deleted: bool,
    pub offerings: Vec<Offering>,
    pub property_values: Vec<ListingPropertyValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Offering {
    pub offering_id: i64,
    pub quantity: i32,
    pub is_enabled: bool,
    pub is_deleted: bool,
    pub price: Money,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingPropertyValue {
    pub property_id: i64,
    pub property_name: Option<String>,
    pub scale_id: Option<i64>,
    pub scale_name: Option<String>,
    pub value_ids: Vec<i64>,
    pub values: Vec<String>,
}

//--------------------------------------  Listing sub-resources  -------------------------------------------------------
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingPersonalization {
    pub is_personalizable: bool,
    pub personalization_is_required: bool,
    pub personalization_char_count_max: Option<i32>,
    pub personalization_instructions: Option<String>,
}

impl From<&ShopListing> for ListingPersonalization {
    fn from(listing: &ShopListing) -> Self {
        Self {
            is_personalizable: listing.is_personalizable,
            personalization_is_required: listing.personalization_is_required,
            personalization_char_count_max: listing.personalization_char_count_max,
            personalization_instructions: listing.personalization_instructions.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingTranslation {
    pub listing_id: i64,
    pub language: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingVariationImage {
    pub property_id: i64,
    pub value_id: i64,
    pub image_id: i64,
}
