use serde::{Deserialize, Serialize};

//--------------------------------------         Shop          ---------------------------------------------------------
/// A seller's storefront. `listing_active_count` and `digital_listing_count` are denormalised counters that are set
/// when the shop is seeded. Listing mutations do not recompute them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Shop {
    pub shop_id: i64,
    pub user_id: i64,
    pub shop_name: String,
    pub create_date: i64,
    pub created_timestamp: i64,
    pub title: Option<String>,
    pub announcement: Option<String>,
    pub currency_code: String,
    pub is_vacation: bool,
    pub vacation_message: Option<String>,
    pub sale_message: Option<String>,
    pub digital_sale_message: Option<String>,
    pub update_date: i64,
    pub updated_timestamp: i64,
    pub listing_active_count: i32,
    pub digital_listing_count: i32,
    pub login_name: String,
    pub accepts_custom_requests: bool,
    pub policy_welcome: Option<String>,
    pub policy_payment: Option<String>,
    pub policy_shipping: Option<String>,
    pub policy_refunds: Option<String>,
    pub policy_additional: Option<String>,
    pub policy_seller_info: Option<String>,
    pub policy_update_date: i64,
    pub policy_has_private_receipt_info: bool,
    pub has_unstructured_policies: bool,
    pub policy_privacy: Option<String>,
    pub vacation_autoreply: Option<String>,
    pub url: String,
    pub image_url_760x100: Option<String>,
    pub num_favorers: i32,
    pub languages: Vec<String>,
    pub icon_url_fullxfull: Option<String>,
    pub is_using_structured_policies: bool,
    pub has_onboarded_structured_policies: bool,
    pub include_dispute_form_link: bool,
    pub is_direct_checkout_onboarded: bool,
    pub is_etsy_payments_onboarded: bool,
    pub is_calculated_eligible: bool,
    pub is_opted_in_to_buyer_promise: bool,
    pub is_shop_us_based: bool,
    pub transaction_sold_count: i32,
    pub shipping_from_country_iso: Option<String>,
    pub shop_location_country_iso: Option<String>,
    pub review_count: Option<i32>,
    pub review_average: Option<f32>,
}

//--------------------------------------      ShopSection      ---------------------------------------------------------
/// Sections are keyed to their shop through `user_id`, which holds the shop id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopSection {
    pub shop_section_id: i64,
    pub title: String,
    pub rank: i32,
    pub user_id: i64,
    pub active_listing_count: i32,
}

//--------------------------------------   ShopReturnPolicy    ---------------------------------------------------------
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopReturnPolicy {
    pub return_policy_id: i64,
    pub shop_id: i64,
    pub accepts_returns: bool,
    pub accepts_exchanges: bool,
    pub return_deadline: Option<i32>,
}

//--------------------------------------   Shop reference data  --------------------------------------------------------
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopProductionPartner {
    pub production_partner_id: i64,
    pub partner_name: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopHolidayPreferences {
    pub shop_id: i64,
    pub is_vacation: bool,
    pub vacation_start: Option<i64>,
    pub vacation_end: Option<i64>,
    pub vacation_message: Option<String>,
}

impl From<&Shop> for ShopHolidayPreferences {
    fn from(shop: &Shop) -> Self {
        Self {
            shop_id: shop.shop_id,
            is_vacation: shop.is_vacation,
            vacation_start: None,
            vacation_end: None,
            vacation_message: shop.vacation_message.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessStateDefinition {
    pub readiness_state_id: i64,
    pub name: String,
    pub label: String,
    pub processing_time_unit: String,
    pub processing_min: i32,
    pub processing_max: i32,
}

impl ReadinessStateDefinition {
    /// The two processing profiles every shop offers.
    pub fn standard_set() -> Vec<Self> {
        vec![
            Self {
                readiness_state_id: 1,
                name: "ready_to_ship".into(),
                label: "Ready to ship".into(),
                processing_time_unit: "business_days".into(),
                processing_min: 1,
                processing_max: 3,
            },
            Self {
                readiness_state_id: 2,
                name: "made_to_order".into(),
                label: "Made to order".into(),
                processing_time_unit: "business_days".into(),
                processing_min: 3,
                processing_max: 7,
            },
        ]
    }
}
