use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: i64,
    pub primary_email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub image_url_75x75: Option<String>,
}

/// A postal address. More than one address per user may carry `is_default_shipping_address`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAddress {
    pub user_address_id: i64,
    pub user_id: i64,
    pub name: String,
    pub first_line: String,
    pub second_line: Option<String>,
    pub city: String,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub iso_country_code: Option<String>,
    pub country_name: Option<String>,
    pub is_default_shipping_address: bool,
}
