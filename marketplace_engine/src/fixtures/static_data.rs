//! The fixed marketplace every fresh server starts with: two sellers (Alice and Bob), two buyers, and enough listings,
//! orders and money movements to exercise every read endpoint.
use log::*;
use marketplace_common::Money;

use super::{
    taxonomy::{taxonomy_properties, taxonomy_tree, TAXONOMY_KITCHEN, TAXONOMY_NECKLACES},
    Seeder,
};
use crate::{
    db_types::{
        ListingFile,
        ListingImage,
        ListingReview,
        ListingState,
        ListingType,
        Payment,
        PaymentAccountLedgerEntry,
        Shipment,
        ShippingProfileDestination,
        ShippingProfileUpgrade,
        Shop,
        ShopListing,
        ShopReceipt,
        ShopReturnPolicy,
        ShopSection,
        ShopShippingProfile,
        Transaction,
        User,
        UserAddress,
    },
    helpers::{days_ago, now_unix},
    MarketStore,
};

const DAY: i64 = 24 * 60 * 60;

#[derive(Debug, Clone, Copy, Default)]
pub struct StaticFixtures;

impl Seeder for StaticFixtures {
    fn seed(&self, store: &MarketStore) {
        users(store);
        shops(store);
        shipping_and_policies(store);
        sections(store);
        listings(store);
        receipts(store);
        payments(store);
        reviews(store);
        store.load_taxonomy(taxonomy_tree(), taxonomy_properties());
        info!("🌱️ Static fixtures loaded");
    }
}

fn some(s: &str) -> Option<String> {
    Some(s.to_string())
}

fn strings(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

//--------------------------------------         Users         ---------------------------------------------------------
fn users(store: &MarketStore) {
    for (user_id, first, last) in
        [(1001, "Alice", "Johnson"), (1002, "Bob", "Smith"), (1003, "Carol", "Williams"), (1004, "Dave", "Brown")]
    {
        let handle = first.to_lowercase();
        store.insert_user(User {
            user_id,
            primary_email: Some(format!("{handle}@example.com")),
            first_name: some(first),
            last_name: some(last),
            image_url_75x75: Some(format!("https://mock.etsy.com/avatars/{handle}.jpg")),
        });
    }
    let us_address = |user_address_id, user_id, name: &str, first_line: &str, city: &str, state: &str, zip: &str| {
        UserAddress {
            user_address_id,
            user_id,
            name: name.into(),
            first_line: first_line.into(),
            second_line: None,
            city: city.into(),
            state: some(state),
            zip: some(zip),
            iso_country_code: some("US"),
            country_name: some("United States"),
            is_default_shipping_address: true,
        }
    };
    store.insert_user_address(us_address(2001, 1001, "Alice Johnson", "123 Craft Lane", "Portland", "OR", "97201"));
    store.insert_user_address(us_address(2002, 1002, "Bob Smith", "456 Maker Ave", "Austin", "TX", "78701"));
}

//--------------------------------------         Shops         ---------------------------------------------------------
fn onboarded_us_shop() -> Shop {
    Shop {
        currency_code: "USD".into(),
        accepts_custom_requests: true,
        languages: strings(&["en"]),
        is_using_structured_policies: true,
        has_onboarded_structured_policies: true,
        is_direct_checkout_onboarded: true,
        is_etsy_payments_onboarded: true,
        is_shop_us_based: true,
        shipping_from_country_iso: some("US"),
        shop_location_country_iso: some("US"),
        ..Default::default()
    }
}

fn shops(store: &MarketStore) {
    store.insert_shop(Shop {
        shop_id: 5001,
        user_id: 1001,
        shop_name: "AliceCrafts".into(),
        login_name: "alicecrafts".into(),
        url: "https://www.etsy.com/shop/AliceCrafts".into(),
        create_date: days_ago(365),
        created_timestamp: days_ago(365),
        update_date: days_ago(1),
        updated_timestamp: days_ago(1),
        title: some("Handmade Jewelry & Accessories"),
        announcement: some("Welcome to AliceCrafts! Free shipping on orders over $50."),
        transaction_sold_count: 156,
        listing_active_count: 12,
        digital_listing_count: 2,
        num_favorers: 234,
        review_count: Some(42),
        review_average: Some(4.8),
        policy_welcome: some("Thanks for visiting!"),
        policy_payment: some("We accept all major credit cards through Etsy Payments."),
        policy_shipping: some("Orders ship within 1-3 business days."),
        policy_refunds: some("Returns accepted within 30 days."),
        ..onboarded_us_shop()
    });
    store.insert_shop(Shop {
        shop_id: 5002,
        user_id: 1002,
        shop_name: "BobsWoodworks".into(),
        login_name: "bobswoodworks".into(),
        url: "https://www.etsy.com/shop/BobsWoodworks".into(),
        create_date: days_ago(200),
        created_timestamp: days_ago(200),
        update_date: days_ago(3),
        updated_timestamp: days_ago(3),
        title: some("Custom Woodworking & Home Decor"),
        announcement: some("Handcrafted wooden items made with love."),
        transaction_sold_count: 78,
        listing_active_count: 8,
        num_favorers: 89,
        review_count: Some(15),
        review_average: Some(4.5),
        ..onboarded_us_shop()
    });
}

fn shipping_and_policies(store: &MarketStore) {
    let destination = |id, profile, country: &str, primary, secondary, min_days, max_days| ShippingProfileDestination {
        shipping_profile_destination_id: id,
        shipping_profile_id: profile,
        origin_country_iso: "US".into(),
        destination_country_iso: country.into(),
        destination_region: "none".into(),
        primary_cost: Money::usd(primary),
        secondary_cost: Money::usd(secondary),
        min_delivery_days: Some(min_days),
        max_delivery_days: Some(max_days),
        ..Default::default()
    };
    store.insert_shipping_profile(ShopShippingProfile {
        shipping_profile_id: 3001,
        title: some("Standard US Shipping"),
        user_id: 1001,
        origin_country_iso: "US".into(),
        origin_postal_code: some("97201"),
        profile_type: "manual".into(),
        shipping_profile_destinations: vec![
            destination(3101, 3001, "US", 499, 199, 3, 7),
            destination(3102, 3001, "", 1499, 499, 7, 21),
        ],
        shipping_profile_upgrades: vec![ShippingProfileUpgrade {
            shipping_profile_id: 3001,
            upgrade_id: 3201,
            upgrade_name: "Priority".into(),
            upgrade_type: "0".into(),
            rank: 1,
            language: "en".into(),
            price: Money::usd(999),
            secondary_price: Money::usd(499),
            min_delivery_days: Some(1),
            max_delivery_days: Some(3),
            ..Default::default()
        }],
        ..Default::default()
    });
    store.insert_shipping_profile(ShopShippingProfile {
        shipping_profile_id: 3002,
        title: some("Woodworks Shipping"),
        user_id: 1002,
        origin_country_iso: "US".into(),
        origin_postal_code: some("78701"),
        profile_type: "manual".into(),
        shipping_profile_destinations: vec![destination(3103, 3002, "US", 999, 499, 5, 10)],
        ..Default::default()
    });
    for (return_policy_id, shop_id, accepts_exchanges) in [(4001, 5001, true), (4002, 5002, false)] {
        store.insert_return_policy(ShopReturnPolicy {
            return_policy_id,
            shop_id,
            accepts_returns: true,
            accepts_exchanges,
            return_deadline: Some(30),
        });
    }
}

fn sections(store: &MarketStore) {
    for (shop_section_id, shop_id, title, rank, active_listing_count) in [
        (6001, 5001, "Necklaces", 1, 4),
        (6002, 5001, "Earrings", 2, 3),
        (6003, 5001, "Bracelets", 3, 2),
        (6004, 5002, "Cutting Boards", 1, 3),
        (6005, 5002, "Shelves", 2, 2),
    ] {
        store.insert_shop_section(ShopSection {
            shop_section_id,
            title: title.into(),
            rank,
            user_id: shop_id,
            active_listing_count,
        });
    }
}

//--------------------------------------       Listings        ---------------------------------------------------------
/// Fields every seeded listing shares. `created` and `modified` are ages in days; `lifetime` is days until it ends.
fn base_listing(listing_id: i64, shop_id: i64, created: i64, modified: i64, lifetime: i64) -> ShopListing {
    let (user_id, shipping_profile_id, return_policy_id, taxonomy_id) = match shop_id {
        5001 => (1001, 3001, 4001, TAXONOMY_NECKLACES),
        _ => (1002, 3002, 4002, TAXONOMY_KITCHEN),
    };
    ShopListing {
        listing_id,
        user_id,
        shop_id,
        state: ListingState::Active,
        creation_timestamp: days_ago(created),
        created_timestamp: days_ago(created),
        original_creation_timestamp: days_ago(created),
        last_modified_timestamp: days_ago(modified),
        updated_timestamp: days_ago(modified),
        ending_timestamp: now_unix() + lifetime * DAY,
        url: format!("https://www.etsy.com/listing/{listing_id}"),
        is_taxable: true,
        listing_type: ListingType::Physical,
        shipping_profile_id: Some(shipping_profile_id),
        return_policy_id: Some(return_policy_id),
        who_made: some("i_did"),
        when_made: some("2020_2026"),
        is_supply: Some(false),
        language: some("en"),
        taxonomy_id: Some(taxonomy_id),
        should_auto_renew: true,
        ..Default::default()
    }
}

fn seeded_listings() -> Vec<ShopListing> {
    vec![
        ShopListing {
            title: "Handmade Silver Pendant Necklace".into(),
            description: "Beautiful handcrafted sterling silver pendant with a minimalist design. Perfect for everyday \
                          wear or as a gift."
                .into(),
            quantity: 15,
            shop_section_id: Some(6001),
            num_favorers: 23,
            tags: strings(&["silver", "necklace", "pendant", "handmade", "minimalist"]),
            materials: strings(&["sterling silver", "silver chain"]),
            processing_min: Some(1),
            processing_max: Some(3),
            item_weight: Some(0.5),
            item_weight_unit: some("oz"),
            price: Money::usd(4500),
            views: 312,
            style: strings(&["minimalist"]),
            ..base_listing(7001, 5001, 90, 5, 30)
        },
        ShopListing {
            title: "Gold Hoop Earrings - Large".into(),
            description: "Elegant gold-plated hoop earrings. Lightweight and comfortable for all-day wear.".into(),
            quantity: 25,
            shop_section_id: Some(6002),
            num_favorers: 45,
            tags: strings(&["gold", "earrings", "hoops", "jewelry", "gift"]),
            materials: strings(&["gold plated brass"]),
            processing_min: Some(1),
            processing_max: Some(3),
            item_weight: Some(0.3),
            item_weight_unit: some("oz"),
            price: Money::usd(2800),
            views: 567,
            style: strings(&["bohemian"]),
            ..base_listing(7002, 5001, 60, 10, 60)
        },
        ShopListing {
            title: "Beaded Friendship Bracelet Set".into(),
            description: "Set of 3 handmade beaded bracelets. Choose your colors at checkout.".into(),
            quantity: 50,
            num_favorers: 12,
            is_personalizable: true,
            personalization_char_count_max: Some(50),
            personalization_instructions: some("Tell us your 3 preferred colors"),
            tags: strings(&["bracelet", "friendship", "beaded", "colorful", "set"]),
            materials: strings(&["glass beads", "elastic cord"]),
            processing_min: Some(2),
            processing_max: Some(5),
            price: Money::usd(1800),
            views: 189,
            ..base_listing(7003, 5001, 30, 2, 90)
        },
        ShopListing {
            title: "Digital Jewelry Making Guide - PDF".into(),
            description: "Complete guide to beginner jewelry making with step-by-step instructions and photos.".into(),
            quantity: 999,
            num_favorers: 78,
            listing_type: ListingType::Download,
            tags: strings(&["digital", "jewelry", "guide", "tutorial", "pdf"]),
            shipping_profile_id: None,
            price: Money::usd(1299),
            views: 1024,
            ..base_listing(7004, 5001, 120, 30, 120)
        },
        ShopListing {
            title: "Rose Gold Ring - Stacking Ring".into(),
            description: "Dainty rose gold stacking ring. Available in sizes 5-10.".into(),
            state: ListingState::Draft,
            quantity: 30,
            has_variations: true,
            tags: strings(&["ring", "rose gold", "stacking", "dainty"]),
            materials: strings(&["rose gold plated brass"]),
            processing_min: Some(1),
            processing_max: Some(3),
            price: Money::usd(2200),
            views: 5,
            style: strings(&["minimalist"]),
            should_auto_renew: false,
            ..base_listing(7005, 5001, 2, 1, 120)
        },
        ShopListing {
            title: "Walnut Cutting Board - Large".into(),
            description: "Handcrafted walnut cutting board with juice groove. 18x12 inches.".into(),
            quantity: 8,
            shop_section_id: Some(6004),
            num_favorers: 56,
            tags: strings(&["cutting board", "walnut", "kitchen", "handmade", "wood"]),
            materials: strings(&["walnut wood", "food-safe mineral oil"]),
            processing_min: Some(3),
            processing_max: Some(7),
            item_weight: Some(4.5),
            item_weight_unit: some("lb"),
            item_length: Some(18.0),
            item_width: Some(12.0),
            item_height: Some(1.5),
            item_dimensions_unit: some("in"),
            price: Money::usd(7500),
            views: 445,
            style: strings(&["rustic"]),
            ..base_listing(7010, 5002, 150, 7, 30)
        },
        ShopListing {
            title: "Floating Wall Shelf - Pine".into(),
            description: "Minimalist floating wall shelf made from reclaimed pine. Perfect for plants or books.".into(),
            quantity: 12,
            num_favorers: 34,
            tags: strings(&["shelf", "floating", "wall", "pine", "reclaimed"]),
            materials: strings(&["reclaimed pine", "steel brackets"]),
            processing_min: Some(5),
            processing_max: Some(10),
            item_weight: Some(3.0),
            item_weight_unit: some("lb"),
            item_length: Some(24.0),
            item_width: Some(6.0),
            item_height: Some(2.0),
            item_dimensions_unit: some("in"),
            price: Money::usd(4500),
            views: 223,
            style: strings(&["minimalist", "rustic"]),
            ..base_listing(7011, 5002, 100, 14, 60)
        },
        ShopListing {
            title: "Personalized Wooden Sign".into(),
            description: "Custom engraved wooden sign. Perfect for weddings, home decor, or gifts.".into(),
            quantity: 20,
            num_favorers: 67,
            is_customizable: true,
            is_personalizable: true,
            personalization_is_required: true,
            personalization_char_count_max: Some(100),
            personalization_instructions: some("Enter the text you want engraved"),
            tags: strings(&["wooden sign", "personalized", "custom", "engraved", "wedding"]),
            materials: strings(&["oak wood", "wood stain"]),
            processing_min: Some(5),
            processing_max: Some(14),
            price: Money::usd(5500),
            views: 678,
            style: strings(&["rustic"]),
            ..base_listing(7012, 5002, 80, 3, 45)
        },
    ]
}

fn listings(store: &MarketStore) {
    for listing in seeded_listings() {
        for rank in 1..=3 {
            let image_id = listing.listing_id * 10 + i64::from(rank);
            store.insert_listing_image(ListingImage {
                full_height: Some(800),
                full_width: Some(600),
                alt_text: Some(format!("Image {rank} of {}", listing.title)),
                ..ListingImage::with_mock_urls(listing.listing_id, image_id, rank, listing.created_timestamp)
            });
        }
        store.insert_listing(listing);
    }
    store.insert_listing_file(ListingFile {
        listing_file_id: 8001,
        listing_id: 7004,
        rank: 1,
        filename: "jewelry-making-guide.pdf".into(),
        filesize: "2.5 MB".into(),
        size_bytes: 2_621_440,
        filetype: "application/pdf".into(),
        create_timestamp: days_ago(120),
        created_timestamp: days_ago(120),
    });
}

//--------------------------------------        Orders         ---------------------------------------------------------
struct Order {
    receipt_id: i64,
    transaction_id: i64,
    listing: (i64, &'static str),
    seller: (i64, &'static str),
    buyer: (i64, &'static str, &'static str),
    status: &'static str,
    age: i64,
    item_cents: i64,
    shipping_cents: i64,
    tax_cents: i64,
    processing: (i32, i32),
    shipping_profile_id: i64,
}

fn receipt_for(order: &Order) -> ShopReceipt {
    let created = days_ago(order.age);
    let (buyer_user_id, buyer_name, buyer_email) = order.buyer;
    let transaction = Transaction {
        transaction_id: order.transaction_id,
        title: some(order.listing.1),
        seller_user_id: order.seller.0,
        buyer_user_id,
        create_timestamp: created,
        created_timestamp: created,
        paid_timestamp: Some(created),
        quantity: 1,
        receipt_id: order.receipt_id,
        listing_id: Some(order.listing.0),
        transaction_type: "listing".into(),
        price: Money::usd(order.item_cents),
        shipping_cost: Money::usd(order.shipping_cents),
        shipping_profile_id: Some(order.shipping_profile_id),
        min_processing_days: Some(order.processing.0),
        max_processing_days: Some(order.processing.1),
        ..Default::default()
    };
    ShopReceipt {
        receipt_id: order.receipt_id,
        seller_user_id: order.seller.0,
        seller_email: some(order.seller.1),
        buyer_user_id,
        buyer_email: some(buyer_email),
        name: buyer_name.into(),
        country_iso: some("US"),
        status: order.status.into(),
        payment_method: "cc".into(),
        is_paid: true,
        create_timestamp: created,
        created_timestamp: created,
        update_timestamp: created,
        updated_timestamp: created,
        grandtotal: Money::usd(order.item_cents + order.shipping_cents + order.tax_cents),
        subtotal: Money::usd(order.item_cents),
        total_price: Money::usd(order.item_cents),
        total_shipping_cost: Money::usd(order.shipping_cents),
        total_tax_cost: Money::usd(order.tax_cents),
        transactions: vec![transaction],
        ..Default::default()
    }
}

const CAROL: (i64, &str, &str) = (1003, "Carol Williams", "carol@example.com");
const DAVE: (i64, &str, &str) = (1004, "Dave Brown", "dave@example.com");
const ALICE: (i64, &str) = (1001, "alice@example.com");
const BOB: (i64, &str) = (1002, "bob@example.com");

fn carol_address(receipt: ShopReceipt) -> ShopReceipt {
    ShopReceipt {
        first_line: some("789 Elm St"),
        city: some("Seattle"),
        state: some("WA"),
        zip: some("98101"),
        formatted_address: some("456 Oak Ave\nSeattle, WA 98101\nUnited States"),
        ..receipt
    }
}

fn receipts(store: &MarketStore) {
    let necklace = receipt_for(&Order {
        receipt_id: 9001,
        transaction_id: 9201,
        listing: (7001, "Handmade Silver Pendant Necklace"),
        seller: ALICE,
        buyer: CAROL,
        status: "completed",
        age: 20,
        item_cents: 4500,
        shipping_cents: 499,
        tax_cents: 299,
        processing: (1, 3),
        shipping_profile_id: 3001,
    });
    let mut necklace = carol_address(ShopReceipt {
        is_shipped: true,
        update_timestamp: days_ago(10),
        updated_timestamp: days_ago(10),
        message_from_buyer: some("Love your work!"),
        message_from_seller: some("Thank you! Shipped today!"),
        shipments: vec![Shipment {
            receipt_shipping_id: Some(9101),
            shipment_notification_timestamp: days_ago(12),
            carrier_name: "USPS".into(),
            tracking_code: "9400111899223100012345".into(),
        }],
        ..necklace
    });
    for transaction in necklace.transactions.iter_mut() {
        transaction.paid_timestamp = Some(days_ago(15));
        transaction.shipped_timestamp = Some(days_ago(12));
        transaction.shipping_method = some("USPS First Class");
    }

    let earrings = receipt_for(&Order {
        receipt_id: 9002,
        transaction_id: 9202,
        listing: (7002, "Gold Hoop Earrings - Large"),
        seller: ALICE,
        buyer: DAVE,
        status: "paid",
        age: 3,
        item_cents: 2800,
        shipping_cents: 499,
        tax_cents: 0,
        processing: (1, 3),
        shipping_profile_id: 3001,
    });
    let earrings = ShopReceipt {
        first_line: some("321 Pine Rd"),
        city: some("Portland"),
        state: some("OR"),
        zip: some("97201"),
        formatted_address: some("123 Main St\nPortland, OR 97201\nUnited States"),
        message_from_buyer: some("Can you gift wrap this?"),
        is_gift: true,
        gift_message: "Happy Birthday!".into(),
        gift_sender: "Dave".into(),
        ..earrings
    };

    let cutting_board = carol_address(receipt_for(&Order {
        receipt_id: 9003,
        transaction_id: 9203,
        listing: (7010, "Walnut Cutting Board - Large"),
        seller: BOB,
        buyer: CAROL,
        status: "paid",
        age: 5,
        item_cents: 7500,
        shipping_cents: 999,
        tax_cents: 0,
        processing: (3, 7),
        shipping_profile_id: 3002,
    }));

    for receipt in [necklace, earrings, cutting_board] {
        store.insert_receipt(receipt);
    }
}

fn payments(store: &MarketStore) {
    for (payment_id, buyer_user_id, shop_id, receipt_id, gross, fees, address, status, age, updated) in [
        (11001, 1003, 5001, 9001, 5298, 345, 2002, "settled", 20, 10),
        (11002, 1004, 5001, 9002, 3298, 215, 2001, "open", 3, 3),
        (11003, 1003, 5002, 9003, 8499, 554, 2002, "open", 5, 5),
    ] {
        store.insert_payment(Payment {
            payment_id,
            buyer_user_id,
            shop_id,
            receipt_id,
            amount_gross: Money::usd(gross),
            amount_fees: Money::usd(fees),
            amount_net: Money::usd(gross - fees),
            currency: "USD".into(),
            shop_currency: some("USD"),
            buyer_currency: some("USD"),
            shipping_address_id: address,
            status: status.into(),
            create_timestamp: days_ago(age),
            created_timestamp: days_ago(age),
            update_timestamp: days_ago(updated),
            updated_timestamp: days_ago(updated),
            ..Default::default()
        });
    }
    for (entry_id, amount, description, ledger_type, reference_type) in [
        (12001, 4953, "Sale: Handmade Silver Pendant Necklace", "credit", "receipt"),
        (12002, -345, "Etsy fee", "debit", "fee"),
    ] {
        store.append_ledger_entry(5001, PaymentAccountLedgerEntry {
            entry_id,
            amount,
            currency: "USD".into(),
            description: description.into(),
            create_date: days_ago(15),
            created_timestamp: days_ago(15),
            ledger_type: ledger_type.into(),
            reference_type: reference_type.into(),
            reference_id: some("9001"),
            ..Default::default()
        });
    }
}

fn reviews(store: &MarketStore) {
    for (shop_id, listing_id, transaction_id, buyer, rating, review, age) in [
        (5001, 7001, 9201, 1003, 5, "Absolutely beautiful necklace! The craftsmanship is amazing.", 8),
        (5001, 7002, 9202, 1004, 4, "Great earrings, very lightweight and comfortable.", 2),
        (5002, 7010, 9203, 1003, 5, "This cutting board is a work of art. Beautifully made!", 1),
    ] {
        let ts = days_ago(age);
        store.insert_review(ListingReview {
            shop_id,
            listing_id,
            transaction_id,
            buyer_user_id: Some(buyer),
            rating,
            review: review.into(),
            language: "en".into(),
            image_url_fullxfull: None,
            create_timestamp: ts,
            created_timestamp: ts,
            update_timestamp: ts,
            updated_timestamp: ts,
        });
    }
}
