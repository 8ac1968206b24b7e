use marketplace_common::Money;
use serde::{Deserialize, Serialize};

//--------------------------------------      ShopReceipt      ---------------------------------------------------------
/// A buyer's order. `seller_user_id` is the shop owner's user id, not the shop id.
///
/// Transactions are not owned by the receipt. The store keeps each transaction once, indexed by id, and fills in
/// `transactions` whenever a receipt is read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopReceipt {
    pub receipt_id: i64,
    pub receipt_type: i32,
    pub seller_user_id: i64,
    pub seller_email: Option<String>,
    pub buyer_user_id: i64,
    pub buyer_email: Option<String>,
    pub name: String,
    pub first_line: Option<String>,
    pub second_line: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub status: String,
    pub formatted_address: Option<String>,
    pub country_iso: Option<String>,
    pub payment_method: String,
    pub payment_email: Option<String>,
    pub message_from_seller: Option<String>,
    pub message_from_buyer: Option<String>,
    pub message_from_payment: Option<String>,
    pub is_paid: bool,
    pub is_shipped: bool,
    pub create_timestamp: i64,
    pub created_timestamp: i64,
    pub update_timestamp: i64,
    pub updated_timestamp: i64,
    pub is_gift: bool,
    pub gift_message: String,
    pub gift_sender: String,
    pub grandtotal: Money,
    pub subtotal: Money,
    pub total_price: Money,
    pub total_shipping_cost: Money,
    pub total_tax_cost: Money,
    pub total_vat_cost: Money,
    pub discount_amt: Money,
    pub gift_wrap_price: Money,
    pub shipments: Vec<Shipment>,
    pub transactions: Vec<Transaction>,
    pub refunds: Vec<ShopRefund>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shipment {
    pub receipt_shipping_id: Option<i64>,
    pub shipment_notification_timestamp: i64,
    pub carrier_name: String,
    pub tracking_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopRefund {
    pub amount: Money,
    pub created_timestamp: i64,
    pub reason: Option<String>,
    pub note_from_issuer: Option<String>,
    pub status: Option<String>,
}

//--------------------------------------      Transaction      ---------------------------------------------------------
/// A single line item on a receipt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub seller_user_id: i64,
    pub buyer_user_id: i64,
    pub create_timestamp: i64,
    pub created_timestamp: i64,
    pub paid_timestamp: Option<i64>,
    pub shipped_timestamp: Option<i64>,
    pub quantity: i32,
    pub listing_image_id: Option<i64>,
    pub receipt_id: i64,
    pub is_digital: bool,
    pub file_data: String,
    pub listing_id: Option<i64>,
    pub transaction_type: String,
    pub product_id: Option<i64>,
    pub sku: Option<String>,
    pub price: Money,
    pub shipping_cost: Money,
    pub variations: Vec<TransactionVariation>,
    pub shipping_profile_id: Option<i64>,
    pub min_processing_days: Option<i32>,
    pub max_processing_days: Option<i32>,
    pub shipping_method: Option<String>,
    pub shipping_upgrade: Option<String>,
    pub expected_ship_date: Option<i64>,
    pub buyer_coupon: f64,
    pub shop_coupon: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionVariation {
    pub property_id: i64,
    pub value_id: i64,
    pub formatted_name: String,
    pub formatted_value: String,
}
