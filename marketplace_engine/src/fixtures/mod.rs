//! Seed data for the [`MarketStore`].
//!
//! A [`Seeder`] fills an empty store. [`StaticFixtures`] gives a small, fully known marketplace that the tests and
//! documentation refer to by id; [`RandomFixtures`] builds larger, randomised marketplaces shaped by a [`SeedConfig`].
//! [`Fixtures`] picks one of them (or nothing) at startup and is re-run whenever the store is reset.
use log::*;

use crate::MarketStore;

mod config;
mod pools;
mod random;
mod static_data;
mod taxonomy;

pub use config::{CountRange, SeedConfig, SeedConfigError};
pub use random::RandomFixtures;
pub use static_data::StaticFixtures;
pub use taxonomy::{taxonomy_properties, taxonomy_tree};

pub trait Seeder {
    fn seed(&self, store: &MarketStore);
}

#[derive(Debug, Clone, Default)]
pub enum Fixtures {
    #[default]
    Static,
    Random(SeedConfig),
    Empty,
}

impl Fixtures {
    /// Seeds a fresh copy of the store and swaps it in, so concurrent readers never see a half-seeded store.
    pub fn reseed(&self, store: &MarketStore) {
        store.rebuild(|staging| self.seed(staging));
    }
}

impl Seeder for Fixtures {
    fn seed(&self, store: &MarketStore) {
        match self {
            Fixtures::Static => StaticFixtures.seed(store),
            Fixtures::Random(config) => RandomFixtures::new(config.clone()).seed(store),
            Fixtures::Empty => info!("🌱️ Seeding disabled. The store starts empty"),
        }
    }
}
