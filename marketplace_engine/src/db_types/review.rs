use serde::{Deserialize, Serialize};

/// Reviews have no id of their own. They are kept in insertion order per shop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingReview {
    pub shop_id: i64,
    pub listing_id: i64,
    pub transaction_id: i64,
    pub buyer_user_id: Option<i64>,
    pub rating: i32,
    pub review: String,
    pub language: String,
    pub image_url_fullxfull: Option<String>,
    pub create_timestamp: i64,
    pub created_timestamp: i64,
    pub update_timestamp: i64,
    pub updated_timestamp: i64,
}
