//! Marketplace Engine
//!
//! The engine holds everything the mock marketplace knows, independent of how it is served. It has no HTTP types.
//!
//! The library is divided into four sections:
//! 1. The domain records ([`mod@db_types`]). Shops, listings, receipts, payments and friends, with field names that
//!    match the JSON wire format.
//! 2. The entity store ([`MarketStore`]). A thread-safe, in-memory collection of every record, with the lookups,
//!    filters, pagination and mutations the API needs. Ids are handed out by [`MarketStore::next_id`].
//! 3. The credential registries ([`mod@credentials`]). Application API keys, OAuth access tokens and their scopes.
//! 4. Seed data ([`mod@fixtures`]). A fixed marketplace for tests and demos, and a random generator for bigger ones.
pub mod credentials;
pub mod db_types;
pub mod fixtures;
pub mod helpers;
mod store;

pub use credentials::{
    generate_token,
    ApiKeyEntry,
    ApiKeyRegistry,
    ApiKeyStatus,
    CredentialError,
    Scope,
    TokenEntry,
    TokenRegistry,
};
pub use fixtures::{Fixtures, RandomFixtures, SeedConfig, SeedConfigError, Seeder, StaticFixtures};
pub use store::{paginate, ListingSearch, MarketStore, Page, SortOn, SortOrder, DEFAULT_PAGE_LIMIT, ID_COUNTER_START};
