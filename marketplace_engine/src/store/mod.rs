//! The in-memory entity store.
//!
//! [`MarketStore`] owns every domain record behind a single readers-writer lock. Reads run in parallel, writes are
//! exclusive, and every method holds the lock only for its own body, so no caller ever sees a half-applied update.
//! Ids come from one shared atomic counter and are never reused, not even after [`MarketStore::reset`] or
//! [`MarketStore::rebuild`].
//!
//! All reads hand out clones. Collections are sorted by primary id before they are filtered or paginated, so page
//! boundaries are stable between calls.
use std::{
    collections::HashMap,
    fmt::Debug,
    mem,
    sync::{
        atomic::{AtomicI64, Ordering},
        Arc,
    },
};

use log::*;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::db_types::{
    ListingFile,
    ListingImage,
    ListingReview,
    Payment,
    PaymentAccountLedgerEntry,
    Shop,
    ShopListing,
    ShopReceipt,
    ShopReturnPolicy,
    ShopSection,
    ShopShippingProfile,
    TaxonomyNode,
    TaxonomyNodeProperty,
    Transaction,
    User,
    UserAddress,
};

mod catalog;
mod listings;
mod orders;
mod pagination;
mod shops;

pub use listings::{ListingSearch, SortOn, SortOrder};
pub use pagination::{paginate, Page, DEFAULT_PAGE_LIMIT};

/// The counter starts here, so the first id handed out is 10001.
pub const ID_COUNTER_START: i64 = 10_000;

#[derive(Debug, Default)]
pub(crate) struct StoreState {
    pub(crate) users: HashMap<i64, User>,
    /// Keyed by user id
    pub(crate) addresses: HashMap<i64, Vec<UserAddress>>,
    pub(crate) shops: HashMap<i64, Shop>,
    pub(crate) sections: HashMap<i64, ShopSection>,
    pub(crate) return_policies: HashMap<i64, ShopReturnPolicy>,
    pub(crate) shipping_profiles: HashMap<i64, ShopShippingProfile>,
    pub(crate) listings: HashMap<i64, ShopListing>,
    /// Keyed by listing id
    pub(crate) images: HashMap<i64, Vec<ListingImage>>,
    /// Keyed by listing id
    pub(crate) files: HashMap<i64, Vec<ListingFile>>,
    pub(crate) receipts: HashMap<i64, ShopReceipt>,
    pub(crate) transactions: HashMap<i64, Transaction>,
    pub(crate) payments: HashMap<i64, Payment>,
    /// Keyed by shop id, in insertion order
    pub(crate) reviews: HashMap<i64, Vec<ListingReview>>,
    /// Keyed by shop id, in sequence order
    pub(crate) ledger: HashMap<i64, Vec<PaymentAccountLedgerEntry>>,
    pub(crate) taxonomy: Vec<TaxonomyNode>,
    pub(crate) taxonomy_properties: HashMap<i64, Vec<TaxonomyNodeProperty>>,
}

pub struct MarketStore {
    state: RwLock<StoreState>,
    // Shared with staging stores, so ids handed out while a rebuild runs stay unique
    last_id: Arc<AtomicI64>,
}

impl Debug for MarketStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        write!(
            f,
            "MarketStore ({} shops, {} listings, {} receipts, last id {})",
            state.shops.len(),
            state.listings.len(),
            state.receipts.len(),
            self.last_id.load(Ordering::SeqCst)
        )
    }
}

impl Default for MarketStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MarketStore {
    pub fn new() -> Self {
        Self { state: RwLock::new(StoreState::default()), last_id: Arc::new(AtomicI64::new(ID_COUNTER_START)) }
    }

    /// Returns a fresh id. Safe to call from any number of threads; no two calls ever return the same value.
    pub fn next_id(&self) -> i64 {
        self.last_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Drops every record. The id counter keeps counting.
    pub fn reset(&self) {
        *self.write() = StoreState::default();
        info!("🗃️ Store cleared");
    }

    /// Replaces every record with what `populate` writes into an empty staging store.
    ///
    /// Readers see either the old contents or the new ones, never an empty or partly filled store. Writes that land
    /// on the live store while `populate` runs are discarded by the swap.
    pub fn rebuild<F>(&self, populate: F)
    where F: FnOnce(&MarketStore) {
        let staging = MarketStore { state: RwLock::new(StoreState::default()), last_id: Arc::clone(&self.last_id) };
        populate(&staging);
        let fresh = staging.state.into_inner();
        let _old = mem::replace(&mut *self.write(), fresh);
        info!("🗃️ Store rebuilt");
    }

    /// Moves the id counter past `id`, so that records inserted with fixed ids never collide with generated ones.
    pub(crate) fn reserve_id(&self, id: i64) {
        self.last_id.fetch_max(id, Ordering::SeqCst);
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read()
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write()
    }
}

/// Clones `values` into a vector sorted by `key`.
pub(crate) fn sorted_values<'a, T, I>(values: I, key: impl Fn(&T) -> i64) -> Vec<T>
where
    T: Clone + 'a,
    I: Iterator<Item = &'a T>,
{
    let mut result = values.cloned().collect::<Vec<T>>();
    result.sort_by_key(|v| key(v));
    result
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ids_start_after_counter_base() {
        let store = MarketStore::new();
        assert_eq!(store.next_id(), 10_001);
        assert_eq!(store.next_id(), 10_002);
    }

    #[test]
    fn reset_keeps_counting() {
        let store = MarketStore::new();
        let before = store.next_id();
        store.insert_user(User { user_id: 1, ..Default::default() });
        store.reset();
        assert!(store.user(1).is_none());
        assert!(store.next_id() > before);
    }

    #[test]
    fn rebuild_swaps_in_staged_records() {
        let store = MarketStore::new();
        store.insert_user(User { user_id: 1, ..Default::default() });
        let before = store.next_id();
        store.rebuild(|staging| {
            assert!(staging.user(1).is_none());
            staging.insert_user(User { user_id: 2, ..Default::default() });
            assert_eq!(staging.next_id(), before + 1);
        });
        assert!(store.user(1).is_none());
        assert!(store.user(2).is_some());
        assert_eq!(store.next_id(), before + 2);
    }

    #[test]
    fn fixed_ids_move_the_counter() {
        let store = MarketStore::new();
        store.reserve_id(20_000);
        assert_eq!(store.next_id(), 20_001);
        store.reserve_id(5);
        assert_eq!(store.next_id(), 20_002);
    }
}
