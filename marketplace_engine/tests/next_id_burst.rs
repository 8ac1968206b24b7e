use std::{collections::HashSet, sync::Arc, thread};

use log::*;
use marketplace_common::Money;
use marketplace_engine::{db_types::NewListing, Fixtures, MarketStore, Seeder};

const NUM_THREADS: usize = 16;
const IDS_PER_THREAD: usize = 1_000;

#[test]
fn next_id_burst() {
    let _ = env_logger::try_init().ok();
    info!("🚀️ Hammering next_id from {NUM_THREADS} threads");
    let store = Arc::new(MarketStore::new());
    let handles = (0..NUM_THREADS)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || (0..IDS_PER_THREAD).map(|_| store.next_id()).collect::<Vec<i64>>())
        })
        .collect::<Vec<_>>();
    let mut ids = HashSet::new();
    for handle in handles {
        for id in handle.join().expect("worker thread panicked") {
            assert!(ids.insert(id), "id {id} was handed out twice");
        }
    }
    assert_eq!(ids.len(), NUM_THREADS * IDS_PER_THREAD);
    assert_eq!(ids.iter().min(), Some(&10_001));
}

#[test]
fn concurrent_listing_creation() {
    let _ = env_logger::try_init().ok();
    let store = Arc::new(MarketStore::new());
    Fixtures::Static.seed(&store);
    let before = store.shop_listings(5001, None, 1000, 0).total;
    let handles = (0..NUM_THREADS)
        .map(|i| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                let listing = NewListing {
                    title: format!("Burst listing {i}"),
                    quantity: 1,
                    price: Money::usd(100),
                    who_made: "i_did".into(),
                    when_made: "made_to_order".into(),
                    taxonomy_id: 1,
                    ..Default::default()
                };
                store.create_listing(5001, listing).expect("shop 5001 exists").listing_id
            })
        })
        .collect::<Vec<_>>();
    let ids = handles.into_iter().map(|h| h.join().expect("worker thread panicked")).collect::<HashSet<i64>>();
    assert_eq!(ids.len(), NUM_THREADS);
    assert_eq!(store.shop_listings(5001, None, 1000, 0).total, before + NUM_THREADS);
    info!("🚀️ test complete");
}
