use serde::{Deserialize, Serialize};

//--------------------------------------  ShopShippingProfile  ---------------------------------------------------------
/// Shipping profiles belong to the shop owner (`user_id`). Deleting a profile only sets `is_deleted`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopShippingProfile {
    pub shipping_profile_id: i64,
    pub title: Option<String>,
    pub user_id: i64,
    pub origin_country_iso: String,
    pub is_deleted: bool,
    pub shipping_profile_destinations: Vec<ShippingProfileDestination>,
    pub shipping_profile_upgrades: Vec<ShippingProfileUpgrade>,
    pub origin_postal_code: Option<String>,
    pub profile_type: String,
    pub domestic_handling_fee: i64,
    pub international_handling_fee: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingProfileDestination {
    pub shipping_profile_destination_id: i64,
    pub shipping_profile_id: i64,
    pub origin_country_iso: String,
    pub destination_country_iso: String,
    pub destination_region: String,
    pub primary_cost: marketplace_common::Money,
    pub secondary_cost: marketplace_common::Money,
    pub shipping_carrier_id: Option<i64>,
    pub mail_class: Option<String>,
    pub min_delivery_days: Option<i32>,
    pub max_delivery_days: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingProfileUpgrade {
    pub shipping_profile_id: i64,
    pub upgrade_id: i64,
    pub upgrade_name: String,
    #[serde(rename = "type")]
    pub upgrade_type: String,
    pub rank: i32,
    pub language: String,
    pub price: marketplace_common::Money,
    pub secondary_price: marketplace_common::Money,
    pub shipping_carrier_id: Option<i64>,
    pub mail_class: Option<String>,
    pub min_delivery_days: Option<i32>,
    pub max_delivery_days: Option<i32>,
}

//--------------------------------------    ShippingCarrier    ---------------------------------------------------------
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingCarrier {
    pub shipping_carrier_id: i64,
    pub name: String,
    pub domestic_classes: Vec<MailClass>,
    pub international_classes: Vec<MailClass>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailClass {
    pub mail_class_key: String,
    pub name: String,
}

fn classes(list: &[(&str, &str)]) -> Vec<MailClass> {
    list.iter().map(|(key, name)| MailClass { mail_class_key: key.to_string(), name: name.to_string() }).collect()
}

impl ShippingCarrier {
    /// The fixed carrier catalogue.
    pub fn catalogue() -> Vec<Self> {
        vec![
            Self {
                shipping_carrier_id: 1,
                name: "USPS".into(),
                domestic_classes: classes(&[
                    ("usps_first_class", "First Class"),
                    ("usps_priority", "Priority Mail"),
                    ("usps_priority_express", "Priority Mail Express"),
                ]),
                international_classes: classes(&[
                    ("usps_first_class_international", "First Class International"),
                    ("usps_priority_international", "Priority Mail International"),
                ]),
            },
            Self {
                shipping_carrier_id: 2,
                name: "UPS".into(),
                domestic_classes: classes(&[
                    ("ups_ground", "Ground"),
                    ("ups_2day", "2nd Day Air"),
                    ("ups_next_day", "Next Day Air"),
                ]),
                international_classes: classes(&[("ups_worldwide_express", "Worldwide Express")]),
            },
            Self {
                shipping_carrier_id: 3,
                name: "FedEx".into(),
                domestic_classes: classes(&[
                    ("fedex_ground", "Ground"),
                    ("fedex_2day", "2Day"),
                    ("fedex_overnight", "Standard Overnight"),
                ]),
                international_classes: classes(&[("fedex_international_economy", "International Economy")]),
            },
            Self {
                shipping_carrier_id: 4,
                name: "Canada Post".into(),
                domestic_classes: classes(&[
                    ("canadapost_regular", "Regular Parcel"),
                    ("canadapost_expedited", "Expedited Parcel"),
                ]),
                international_classes: classes(&[("canadapost_international", "International Parcel")]),
            },
            Self {
                shipping_carrier_id: 5,
                name: "Royal Mail".into(),
                domestic_classes: classes(&[("royalmail_first", "1st Class"), ("royalmail_second", "2nd Class")]),
                international_classes: classes(&[(
                    "royalmail_international_standard",
                    "International Standard",
                )]),
            },
        ]
    }
}
