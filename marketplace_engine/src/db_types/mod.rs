//! The records held by the [`MarketStore`](crate::MarketStore).
//!
//! Field names match the JSON wire format, so every type here serializes directly into response bodies.
use thiserror::Error;

mod listing;
mod payment;
mod receipt;
mod review;
mod shipping;
mod shop;
mod taxonomy;
mod updates;
mod user;

pub use listing::{
    ListingFile,
    ListingImage,
    ListingInventory,
    ListingPersonalization,
    ListingPropertyValue,
    ListingState,
    ListingTranslation,
    ListingType,
    ListingVariationImage,
    ListingVideo,
    Offering,
    Product,
    ShopListing,
};
pub use payment::{Payment, PaymentAccountLedgerEntry, PaymentAdjustment, PaymentAdjustmentItem};
pub use receipt::{Shipment, ShopReceipt, ShopRefund, Transaction, TransactionVariation};
pub use review::ListingReview;
pub use shipping::{MailClass, ShippingCarrier, ShippingProfileDestination, ShippingProfileUpgrade, ShopShippingProfile};
pub use shop::{
    ReadinessStateDefinition,
    Shop,
    ShopHolidayPreferences,
    ShopProductionPartner,
    ShopReturnPolicy,
    ShopSection,
};
pub use taxonomy::{PropertyScale, PropertyValue, TaxonomyNode, TaxonomyNodeProperty};
pub use updates::{ListingUpdate, NewListing, PersonalizationUpdate, ReceiptUpdate, ShopUpdate};
pub use user::{User, UserAddress};

#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct ConversionError(pub String);
