use marketplace_common::Money;
use serde::{Deserialize, Serialize};

//--------------------------------------        Payment        ---------------------------------------------------------
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub payment_id: i64,
    pub buyer_user_id: i64,
    pub shop_id: i64,
    pub receipt_id: i64,
    pub amount_gross: Money,
    pub amount_fees: Money,
    pub amount_net: Money,
    pub posted_gross: Option<Money>,
    pub posted_fees: Option<Money>,
    pub posted_net: Option<Money>,
    pub adjusted_gross: Option<Money>,
    pub adjusted_fees: Option<Money>,
    pub adjusted_net: Option<Money>,
    pub currency: String,
    pub shop_currency: Option<String>,
    pub buyer_currency: Option<String>,
    pub shipping_user_id: Option<i64>,
    pub shipping_address_id: i64,
    pub billing_address_id: i64,
    pub status: String,
    pub shipped_timestamp: Option<i64>,
    pub create_timestamp: i64,
    pub created_timestamp: i64,
    pub update_timestamp: i64,
    pub updated_timestamp: i64,
    pub payment_adjustments: Vec<PaymentAdjustment>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentAdjustment {
    pub payment_adjustment_id: i64,
    pub payment_id: i64,
    pub status: String,
    pub is_success: bool,
    pub user_id: i64,
    pub reason_code: String,
    pub total_adjustment_amount: Option<i64>,
    pub shop_total_adjustment_amount: Option<i64>,
    pub buyer_total_adjustment_amount: Option<i64>,
    pub total_fee_adjustment_amount: Option<i64>,
    pub create_timestamp: i64,
    pub created_timestamp: i64,
    pub update_timestamp: i64,
    pub updated_timestamp: i64,
    pub payment_adjustment_items: Vec<PaymentAdjustmentItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentAdjustmentItem {
    pub payment_adjustment_id: i64,
    pub payment_adjustment_item_id: i64,
    pub adjustment_type: Option<String>,
    pub amount: i64,
    pub shop_amount: i64,
    pub transaction_id: Option<i64>,
    pub bill_payment_id: Option<i64>,
    pub created_timestamp: i64,
    pub updated_timestamp: i64,
}

//--------------------------------------      LedgerEntry      ---------------------------------------------------------
/// One movement on a shop's payment account. Entries are append-only and `sequence_number` increases per shop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentAccountLedgerEntry {
    pub entry_id: i64,
    pub ledger_id: i64,
    pub sequence_number: i64,
    pub amount: i64,
    pub currency: String,
    pub description: String,
    pub balance: i64,
    pub create_date: i64,
    pub created_timestamp: i64,
    pub ledger_type: String,
    pub reference_type: String,
    pub reference_id: Option<String>,
    pub parent_entry_id: i64,
    pub payment_adjustments: Vec<PaymentAdjustment>,
}
