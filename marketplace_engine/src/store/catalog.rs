use std::collections::HashMap;

use super::{paginate, MarketStore, Page};
use crate::db_types::{ListingReview, TaxonomyNode, TaxonomyNodeProperty, User, UserAddress};

impl MarketStore {
    //--------------------------------------         Users         -----------------------------------------------------
    pub fn insert_user(&self, user: User) {
        self.reserve_id(user.user_id);
        self.write().users.insert(user.user_id, user);
    }

    pub fn user(&self, user_id: i64) -> Option<User> {
        self.read().users.get(&user_id).cloned()
    }

    pub fn insert_user_address(&self, address: UserAddress) {
        self.reserve_id(address.user_address_id);
        self.write().addresses.entry(address.user_id).or_default().push(address);
    }

    pub fn user_addresses(&self, user_id: i64) -> Vec<UserAddress> {
        self.read().addresses.get(&user_id).cloned().unwrap_or_default()
    }

    /// Returns false if the user has no address with that id.
    pub fn delete_user_address(&self, user_id: i64, address_id: i64) -> bool {
        let mut state = self.write();
        let Some(addresses) = state.addresses.get_mut(&user_id) else {
            return false;
        };
        let before = addresses.len();
        addresses.retain(|a| a.user_address_id != address_id);
        before != addresses.len()
    }

    //--------------------------------------        Reviews        -----------------------------------------------------
    pub fn insert_review(&self, review: ListingReview) {
        self.write().reviews.entry(review.shop_id).or_default().push(review);
    }

    pub fn shop_reviews(&self, shop_id: i64, limit: usize, offset: usize) -> Page<ListingReview> {
        let reviews = self.read().reviews.get(&shop_id).cloned().unwrap_or_default();
        paginate(reviews, limit, offset)
    }

    /// Reviews of one listing, gathered across every shop in shop id order.
    pub fn listing_reviews(&self, listing_id: i64, limit: usize, offset: usize) -> Page<ListingReview> {
        let state = self.read();
        let mut shop_ids = state.reviews.keys().copied().collect::<Vec<i64>>();
        shop_ids.sort_unstable();
        let reviews = shop_ids
            .iter()
            .filter_map(|id| state.reviews.get(id))
            .flatten()
            .filter(|r| r.listing_id == listing_id)
            .cloned()
            .collect();
        paginate(reviews, limit, offset)
    }

    //--------------------------------------       Taxonomy        -----------------------------------------------------
    /// Replaces the taxonomy tree and its per-node properties.
    pub fn load_taxonomy(&self, nodes: Vec<TaxonomyNode>, properties: HashMap<i64, Vec<TaxonomyNodeProperty>>) {
        let mut state = self.write();
        state.taxonomy = nodes;
        state.taxonomy_properties = properties;
    }

    pub fn taxonomy_nodes(&self) -> Vec<TaxonomyNode> {
        self.read().taxonomy.clone()
    }

    /// `None` if the node has no properties registered.
    pub fn taxonomy_properties(&self, taxonomy_id: i64) -> Option<Vec<TaxonomyNodeProperty>> {
        self.read().taxonomy_properties.get(&taxonomy_id).cloned()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn listing_reviews_span_shops() {
        let store = MarketStore::new();
        for (shop_id, listing_id, rating) in [(5002, 7001, 3), (5001, 7001, 5), (5001, 7002, 4)] {
            store.insert_review(ListingReview { shop_id, listing_id, rating, ..Default::default() });
        }
        let page = store.listing_reviews(7001, 25, 0);
        assert_eq!(page.total, 2);
        assert_eq!(page.results.iter().map(|r| r.rating).collect::<Vec<_>>(), vec![5, 3]);
        assert_eq!(store.shop_reviews(5001, 1, 0).results[0].listing_id, 7001);
        assert_eq!(store.shop_reviews(5001, 1, 0).total, 2);
    }

    #[test]
    fn addresses() {
        let store = MarketStore::new();
        store.insert_user_address(UserAddress { user_address_id: 2001, user_id: 1001, ..Default::default() });
        assert_eq!(store.user_addresses(1001).len(), 1);
        assert!(!store.delete_user_address(1002, 2001));
        assert!(store.delete_user_address(1001, 2001));
        assert!(store.user_addresses(1001).is_empty());
    }
}
