use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::db_types::ConversionError;

/// An OAuth2 capability granted to a token. Access control is a membership test on the token's scope set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    AddressR,
    AddressW,
    BillingR,
    CartR,
    CartW,
    EmailR,
    FavoritesR,
    FavoritesW,
    FeedbackR,
    ListingsD,
    ListingsR,
    ListingsW,
    ProfileR,
    ProfileW,
    RecommendR,
    RecommendW,
    ShopsR,
    ShopsW,
    TransactionsR,
    TransactionsW,
}

impl Scope {
    pub const ALL: [Scope; 20] = [
        Scope::AddressR,
        Scope::AddressW,
        Scope::BillingR,
        Scope::CartR,
        Scope::CartW,
        Scope::EmailR,
        Scope::FavoritesR,
        Scope::FavoritesW,
        Scope::FeedbackR,
        Scope::ListingsD,
        Scope::ListingsR,
        Scope::ListingsW,
        Scope::ProfileR,
        Scope::ProfileW,
        Scope::RecommendR,
        Scope::RecommendW,
        Scope::ShopsR,
        Scope::ShopsW,
        Scope::TransactionsR,
        Scope::TransactionsW,
    ];

    pub fn all() -> Vec<Scope> {
        Self::ALL.to_vec()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::AddressR => "address_r",
            Scope::AddressW => "address_w",
            Scope::BillingR => "billing_r",
            Scope::CartR => "cart_r",
            Scope::CartW => "cart_w",
            Scope::EmailR => "email_r",
            Scope::FavoritesR => "favorites_r",
            Scope::FavoritesW => "favorites_w",
            Scope::FeedbackR => "feedback_r",
            Scope::ListingsD => "listings_d",
            Scope::ListingsR => "listings_r",
            Scope::ListingsW => "listings_w",
            Scope::ProfileR => "profile_r",
            Scope::ProfileW => "profile_w",
            Scope::RecommendR => "recommend_r",
            Scope::RecommendW => "recommend_w",
            Scope::ShopsR => "shops_r",
            Scope::ShopsW => "shops_w",
            Scope::TransactionsR => "transactions_r",
            Scope::TransactionsW => "transactions_w",
        }
    }
}

impl Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|scope| scope.as_str() == s)
            .copied()
            .ok_or_else(|| ConversionError(format!("Unknown scope: {s}")))
    }
}
