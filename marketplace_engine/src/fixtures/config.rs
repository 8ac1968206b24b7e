use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::db_types::ListingState;

#[derive(Debug, Error)]
pub enum SeedConfigError {
    #[error("Could not read seed configuration. {0}")]
    Io(#[from] std::io::Error),
    #[error("Seed configuration is not valid JSON. {0}")]
    Json(#[from] serde_json::Error),
}

/// An inclusive `min..=max` count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    pub min: usize,
    pub max: usize,
}

impl CountRange {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }
}

/// Shape of the randomly generated marketplace. Every field is optional in the JSON file; missing fields keep their
/// defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub shops: usize,
    pub listings_per_shop: CountRange,
    pub reviews_per_shop: CountRange,
    pub receipts_per_shop: CountRange,
    pub include_digital_listings: bool,
    pub include_personalized_listings: bool,
    /// New listings draw their state from this list, so repeated entries act as weights.
    pub listing_states: Vec<ListingState>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            shops: 5,
            listings_per_shop: CountRange::new(8, 25),
            reviews_per_shop: CountRange::new(3, 15),
            receipts_per_shop: CountRange::new(2, 10),
            include_digital_listings: true,
            include_personalized_listings: true,
            listing_states: vec![
                ListingState::Active,
                ListingState::Active,
                ListingState::Active,
                ListingState::Draft,
                ListingState::SoldOut,
            ],
        }
    }
}

impl SeedConfig {
    pub fn from_json(json: &str) -> Result<Self, SeedConfigError> {
        let config = serde_json::from_str::<SeedConfig>(json)?;
        Ok(config.clamped())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SeedConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// At least one shop, at least one listing per shop, `max >= min` and a non-empty state list.
    pub fn clamped(mut self) -> Self {
        self.shops = self.shops.max(1);
        self.listings_per_shop.min = self.listings_per_shop.min.max(1);
        for range in [&mut self.listings_per_shop, &mut self.reviews_per_shop, &mut self.receipts_per_shop] {
            range.max = range.max.max(range.min);
        }
        if self.listing_states.is_empty() {
            self.listing_states = vec![ListingState::Active];
        }
        self
    }
}
