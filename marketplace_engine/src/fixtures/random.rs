//! A generator for larger, randomised marketplaces. Every record gets its id from [`MarketStore::next_id`], so a
//! random marketplace can be layered on top of any existing data.
use log::*;
use marketplace_common::Money;
use rand::Rng;

use super::{
    config::{CountRange, SeedConfig},
    pools::*,
    taxonomy::{taxonomy_properties, taxonomy_tree},
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
    helpers::now_unix,
    MarketStore,
};

const DAY: i64 = 24 * 60 * 60;
const HOUR: i64 = 60 * 60;
/// Marketplace fee in tenths of a percent
const FEE_PER_MILLE: i64 = 65;
const RECEIPT_STATUSES: &[&str] = &["paid", "completed", "completed", "open"];

#[derive(Debug, Clone, Default)]
pub struct RandomFixtures {
    config: SeedConfig,
}

impl RandomFixtures {
    pub fn new(config: SeedConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SeedConfig {
        &self.config
    }

    /// Seeds `store` using the given source of randomness. Passing a seeded rng gives a reproducible marketplace.
    pub fn seed_with_rng<R: Rng>(&self, store: &MarketStore, rng: &mut R) {
        let mut generator = Generator { store, rng, config: self.config.clone().clamped(), now: now_unix() };
        generator.run();
    }
}

impl Seeder for RandomFixtures {
    fn seed(&self, store: &MarketStore) {
        self.seed_with_rng(store, &mut rand::thread_rng());
    }
}

fn pick<T: Copy>(rng: &mut impl Rng, pool: &[T]) -> T {
    pool[rng.gen_range(0..pool.len())]
}

fn count(rng: &mut impl Rng, range: CountRange) -> usize {
    rng.gen_range(range.min..=range.max)
}

fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

struct Person {
    user: User,
    address: UserAddress,
}

struct Generator<'a, R> {
    store: &'a MarketStore,
    rng: &'a mut R,
    config: SeedConfig,
    now: i64,
}

impl<'a, R: Rng> Generator<'a, R> {
    fn run(&mut self) {
        self.store.load_taxonomy(taxonomy_tree(), taxonomy_properties());
        let people = self.people();
        let (owners, buyers) = people.split_at(self.config.shops);
        for owner in owners {
            self.shop(owner, buyers);
        }
        info!("🌱️ Random fixtures loaded: {} shops, {} users", owners.len(), people.len());
    }

    fn days_ago(&mut self, min: i64, max: i64) -> i64 {
        self.now - self.rng.gen_range(min..=max) * DAY
    }

    fn chance(&mut self, p: f64) -> bool {
        self.rng.gen_bool(p)
    }

    //--------------------------------------        People         -----------------------------------------------------
    /// Three people per shop plus five. The first `shops` of them become shop owners, the rest only ever buy.
    fn people(&mut self) -> Vec<Person> {
        (0..self.config.shops * 3 + 5).map(|_| self.person()).collect()
    }

    fn person(&mut self) -> Person {
        let user_id = self.store.next_id();
        let first = pick(self.rng, FIRST_NAMES);
        let last = pick(self.rng, LAST_NAMES);
        let user = User {
            user_id,
            primary_email: Some(format!("{}.{}.{user_id}@example.com", first.to_lowercase(), last.to_lowercase())),
            first_name: Some(first.into()),
            last_name: Some(last.into()),
            image_url_75x75: Some(format!("https://mock.etsy.com/avatars/{user_id}.jpg")),
        };
        let (city, state, zip) = pick(self.rng, CITIES);
        let address = UserAddress {
            user_address_id: self.store.next_id(),
            user_id,
            name: format!("{first} {last}"),
            first_line: pick(self.rng, STREETS).into(),
            second_line: None,
            city: city.into(),
            state: Some(state.into()),
            zip: Some(zip.into()),
            iso_country_code: Some("US".into()),
            country_name: Some("United States".into()),
            is_default_shipping_address: true,
        };
        self.store.insert_user(user.clone());
        self.store.insert_user_address(address.clone());
        Person { user, address }
    }

    //--------------------------------------         Shops         -----------------------------------------------------
    fn shop_name(&mut self) -> String {
        let prefix = pick(self.rng, SHOP_PREFIXES);
        let noun = pick(self.rng, SHOP_NOUNS);
        let suffix = pick(self.rng, SHOP_SUFFIXES);
        format!("{prefix}{noun}{suffix}")
    }

    fn shop(&mut self, owner: &Person, buyers: &[Person]) {
        let shop_id = self.store.next_id();
        let owner_id = owner.user.user_id;
        let category = &CATEGORIES[self.rng.gen_range(0..CATEGORIES.len())];
        let shop_name = self.shop_name();
        let (_, _, zip) = pick(self.rng, CITIES);

        let shipping_profile_id = self.shipping_profile(owner_id, zip);
        let return_policy_id = self.store.next_id();
        let accepts_exchanges = self.chance(0.7);
        self.store.insert_return_policy(ShopReturnPolicy {
            return_policy_id,
            shop_id,
            accepts_returns: true,
            accepts_exchanges,
            return_deadline: Some(30),
        });

        let items = category.items;
        let section_names = [items[0], items[items.len() / 3], items[items.len() * 2 / 3]];
        let mut section_ids = Vec::with_capacity(section_names.len());
        for (rank, name) in (1..).zip(section_names) {
            let shop_section_id = self.store.next_id();
            self.store.insert_shop_section(ShopSection {
                shop_section_id,
                title: format!("{name}s"),
                rank,
                user_id: shop_id,
                active_listing_count: 0,
            });
            section_ids.push(shop_section_id);
        }

        let context = ShopContext {
            shop_id,
            owner_id,
            category,
            shipping_profile_id,
            return_policy_id,
            section_ids,
        };
        let listing_count = count(self.rng, self.config.listings_per_shop);
        let listings = (0..listing_count).map(|_| self.listing(&context)).collect::<Vec<ShopListing>>();
        let active = listings.iter().filter(|l| l.state == ListingState::Active).count();
        let digital = listings.iter().filter(|l| l.listing_type.is_digital()).count();

        let review_count = count(self.rng, self.config.reviews_per_shop);
        let review_average = 3.8 + self.rng.gen::<f32>() * 1.2;
        let shop = Shop {
            shop_id,
            user_id: owner_id,
            shop_name: shop_name.clone(),
            login_name: shop_name.to_lowercase(),
            url: format!("https://www.etsy.com/shop/{shop_name}"),
            create_date: self.days_ago(100, 1000),
            created_timestamp: self.days_ago(100, 1000),
            update_date: self.days_ago(0, 10),
            updated_timestamp: self.days_ago(0, 10),
            title: Some(format!("Handmade {} & More", category.name)),
            announcement: Some(pick(self.rng, SHOP_ANNOUNCEMENTS).into()),
            currency_code: "USD".into(),
            accepts_custom_requests: self.chance(0.7),
            languages: vec!["en".into()],
            is_using_structured_policies: true,
            has_onboarded_structured_policies: true,
            is_direct_checkout_onboarded: true,
            is_etsy_payments_onboarded: true,
            is_shop_us_based: true,
            transaction_sold_count: self.rng.gen_range(10..=500),
            listing_active_count: active as i32,
            digital_listing_count: digital as i32,
            shipping_from_country_iso: Some("US".into()),
            shop_location_country_iso: Some("US".into()),
            num_favorers: self.rng.gen_range(5..=500),
            review_count: Some(review_count as i32),
            review_average: Some(review_average),
            policy_welcome: Some("Thanks for visiting our shop!".into()),
            policy_payment: Some("We accept all major credit cards through Etsy Payments.".into()),
            policy_shipping: Some("Orders ship within 1-3 business days.".into()),
            policy_refunds: Some("Returns accepted within 30 days of delivery.".into()),
            ..Default::default()
        };
        self.store.insert_shop(shop);

        for _ in 0..review_count {
            self.review(shop_id, &listings, buyers);
        }
        let receipt_count = count(self.rng, self.config.receipts_per_shop);
        for _ in 0..receipt_count {
            self.receipt(&context, owner, &listings, buyers);
        }
        debug!("🌱️ Shop {shop_id} seeded with {listing_count} listings and {receipt_count} receipts");
    }

    fn shipping_profile(&mut self, owner_id: i64, zip: &str) -> i64 {
        let shipping_profile_id = self.store.next_id();
        let destination = ShippingProfileDestination {
            shipping_profile_destination_id: self.store.next_id(),
            shipping_profile_id,
            origin_country_iso: "US".into(),
            destination_country_iso: "US".into(),
            destination_region: "none".into(),
            primary_cost: Money::usd(self.rng.gen_range(399..=999)),
            secondary_cost: Money::usd(self.rng.gen_range(99..=399)),
            min_delivery_days: Some(3),
            max_delivery_days: Some(7),
            ..Default::default()
        };
        self.store.insert_shipping_profile(ShopShippingProfile {
            shipping_profile_id,
            title: Some("Standard Shipping".into()),
            user_id: owner_id,
            origin_country_iso: "US".into(),
            origin_postal_code: Some(zip.into()),
            profile_type: "manual".into(),
            shipping_profile_destinations: vec![destination],
            ..Default::default()
        });
        shipping_profile_id
    }

    //--------------------------------------       Listings        -----------------------------------------------------
    fn listing(&mut self, shop: &ShopContext) -> ShopListing {
        let listing_id = self.store.next_id();
        let category = shop.category;
        let item = pick(self.rng, category.items);
        let materials = pick(self.rng, category.materials);
        let style = pick(self.rng, category.styles);
        let title = format!("{} {item} - {}", title_case(materials[0]), title_case(style));
        let mut tags = pick(self.rng, category.tags).iter().map(|t| t.to_string()).collect::<Vec<String>>();
        tags.push(item.to_lowercase());

        let is_digital = self.config.include_digital_listings && self.chance(0.1);
        let is_personalizable = self.config.include_personalized_listings && self.chance(0.15);
        let (min_weight, max_weight) = category.weight_range;
        let created = self.days_ago(5, 200);
        let mut listing = ShopListing {
            listing_id,
            user_id: shop.owner_id,
            shop_id: shop.shop_id,
            title: title.clone(),
            description: pick(self.rng, category.descriptions).into(),
            state: pick(self.rng, &self.config.listing_states),
            creation_timestamp: created,
            created_timestamp: created,
            ending_timestamp: self.now + self.rng.gen_range(30..=120) * DAY,
            original_creation_timestamp: self.days_ago(5, 300),
            last_modified_timestamp: self.days_ago(0, 30),
            updated_timestamp: self.days_ago(0, 30),
            quantity: self.rng.gen_range(1..=50),
            shop_section_id: Some(pick(self.rng, &shop.section_ids)),
            url: format!("https://www.etsy.com/listing/{listing_id}"),
            num_favorers: self.rng.gen_range(0..=200),
            is_taxable: true,
            is_personalizable,
            listing_type: if is_digital { ListingType::Download } else { ListingType::Physical },
            tags,
            materials: materials.iter().map(|m| m.to_string()).collect(),
            shipping_profile_id: (!is_digital).then_some(shop.shipping_profile_id),
            return_policy_id: Some(shop.return_policy_id),
            processing_min: Some(self.rng.gen_range(1..=3)),
            processing_max: Some(self.rng.gen_range(3..=10)),
            who_made: Some("i_did".into()),
            when_made: Some("2020_2026".into()),
            is_supply: Some(category.taxonomy_id == SUPPLY_TAXONOMY_ID),
            item_weight: Some(min_weight + self.rng.gen::<f32>() * (max_weight - min_weight)),
            item_weight_unit: Some(category.weight_unit.into()),
            price: Money::usd(self.rng.gen_range(category.price_range.0..=category.price_range.1)),
            taxonomy_id: Some(category.taxonomy_id),
            language: Some("en".into()),
            views: self.rng.gen_range(10..=2000),
            style: vec![style.into()],
            should_auto_renew: true,
            ..Default::default()
        };
        if is_personalizable {
            listing.personalization_is_required = self.chance(0.5);
            listing.personalization_char_count_max = Some(self.rng.gen_range(20..=200));
            listing.personalization_instructions = Some("Please enter your customization details".into());
        }

        for rank in 1..=self.rng.gen_range(2..=5) {
            let image_id = self.store.next_id();
            self.store.insert_listing_image(ListingImage {
                full_height: Some(self.rng.gen_range(600..=1200)),
                full_width: Some(self.rng.gen_range(600..=1200)),
                alt_text: Some(format!("Image {rank} of {title}")),
                ..ListingImage::with_mock_urls(listing_id, image_id, rank, created)
            });
        }
        if is_digital {
            let megabytes = 0.5 + self.rng.gen::<f64>() * 10.0;
            self.store.insert_listing_file(ListingFile {
                listing_file_id: self.store.next_id(),
                listing_id,
                rank: 1,
                filename: format!("{}.pdf", item.to_lowercase().replace(' ', "-")),
                filesize: format!("{megabytes:.1} MB"),
                size_bytes: self.rng.gen_range(500_000..=10_000_000),
                filetype: "application/pdf".into(),
                create_timestamp: created,
                created_timestamp: created,
            });
        }
        self.store.insert_listing(listing.clone());
        listing
    }

    //--------------------------------------  Reviews and orders   -----------------------------------------------------
    fn review(&mut self, shop_id: i64, listings: &[ShopListing], buyers: &[Person]) {
        let buyer = &buyers[self.rng.gen_range(0..buyers.len())];
        let listing = &listings[self.rng.gen_range(0..listings.len())];
        let rating = if self.chance(0.7) { self.rng.gen_range(4..=5) } else { self.rng.gen_range(3..=5) };
        let ts = self.days_ago(1, 90);
        self.store.insert_review(ListingReview {
            shop_id,
            listing_id: listing.listing_id,
            transaction_id: self.store.next_id(),
            buyer_user_id: Some(buyer.user.user_id),
            rating,
            review: pick(self.rng, REVIEW_TEXTS).into(),
            language: "en".into(),
            image_url_fullxfull: None,
            create_timestamp: ts,
            created_timestamp: ts,
            update_timestamp: ts,
            updated_timestamp: ts,
        });
    }

    /// One receipt with a single transaction and its payment. Paid receipts are credited to the shop's ledger.
    fn receipt(&mut self, shop: &ShopContext, owner: &Person, listings: &[ShopListing], buyers: &[Person]) {
        let receipt_id = self.store.next_id();
        let transaction_id = self.store.next_id();
        let buyer = &buyers[self.rng.gen_range(0..buyers.len())];
        let listing = &listings[self.rng.gen_range(0..listings.len())];
        let status = pick(self.rng, RECEIPT_STATUSES);
        let is_paid = status != "open";
        let is_shipped = status == "completed";

        let quantity = self.rng.gen_range(1..=3);
        let shipping = self.rng.gen_range(399..=1299);
        let subtotal = listing.price.amount * i64::from(quantity);
        let tax = subtotal / 10;
        let total = subtotal + shipping + tax;

        let ts = self.days_ago(1, 60);
        let mut shipments = Vec::new();
        let mut shipped_timestamp = None;
        if is_shipped {
            let shipped = ts + self.rng.gen_range(DAY..=5 * DAY);
            shipped_timestamp = Some(shipped);
            shipments.push(Shipment {
                receipt_shipping_id: Some(self.store.next_id()),
                shipment_notification_timestamp: shipped,
                carrier_name: "USPS".into(),
                tracking_code: format!("9400111899223{:010}", self.rng.gen_range(0..9_999_999_999u64)),
            });
        }

        let address = &buyer.address;
        let transaction = Transaction {
            transaction_id,
            title: Some(listing.title.clone()),
            seller_user_id: shop.owner_id,
            buyer_user_id: buyer.user.user_id,
            create_timestamp: ts,
            created_timestamp: ts,
            paid_timestamp: Some(ts + HOUR),
            shipped_timestamp,
            quantity,
            receipt_id,
            listing_id: Some(listing.listing_id),
            transaction_type: "listing".into(),
            price: listing.price.clone(),
            shipping_cost: Money::usd(shipping),
            shipping_profile_id: Some(shop.shipping_profile_id),
            min_processing_days: Some(1),
            max_processing_days: Some(5),
            ..Default::default()
        };
        let receipt = ShopReceipt {
            receipt_id,
            seller_user_id: shop.owner_id,
            seller_email: owner.user.primary_email.clone(),
            buyer_user_id: buyer.user.user_id,
            buyer_email: buyer.user.primary_email.clone(),
            name: address.name.clone(),
            first_line: Some(address.first_line.clone()),
            city: Some(address.city.clone()),
            state: address.state.clone(),
            zip: address.zip.clone(),
            country_iso: address.iso_country_code.clone(),
            status: status.into(),
            formatted_address: Some(format!(
                "{}\n{}, {} {}\nUnited States",
                address.first_line,
                address.city,
                address.state.as_deref().unwrap_or_default(),
                address.zip.as_deref().unwrap_or_default()
            )),
            payment_method: "cc".into(),
            is_paid,
            is_shipped,
            create_timestamp: ts,
            created_timestamp: ts,
            update_timestamp: ts + HOUR,
            updated_timestamp: ts + HOUR,
            grandtotal: Money::usd(total),
            subtotal: Money::usd(subtotal),
            total_price: Money::usd(subtotal),
            total_shipping_cost: Money::usd(shipping),
            total_tax_cost: Money::usd(tax),
            shipments,
            transactions: vec![transaction],
            ..Default::default()
        };
        self.store.insert_receipt(receipt);

        let fees = total * FEE_PER_MILLE / 1000;
        self.store.insert_payment(Payment {
            payment_id: self.store.next_id(),
            buyer_user_id: buyer.user.user_id,
            shop_id: shop.shop_id,
            receipt_id,
            amount_gross: Money::usd(total),
            amount_fees: Money::usd(fees),
            amount_net: Money::usd(total - fees),
            currency: "USD".into(),
            shop_currency: Some("USD".into()),
            buyer_currency: Some("USD".into()),
            shipping_address_id: address.user_address_id,
            status: if is_shipped { "settled" } else { "open" }.into(),
            create_timestamp: ts,
            created_timestamp: ts,
            update_timestamp: ts + HOUR,
            updated_timestamp: ts + HOUR,
            ..Default::default()
        });

        if is_paid {
            self.store.append_ledger_entry(shop.shop_id, PaymentAccountLedgerEntry {
                entry_id: self.store.next_id(),
                amount: total,
                currency: "USD".into(),
                description: format!("Sale: {}", listing.title),
                create_date: ts,
                created_timestamp: ts,
                ledger_type: "credit".into(),
                reference_type: "receipt".into(),
                reference_id: Some(receipt_id.to_string()),
                ..Default::default()
            });
        }
    }
}

struct ShopContext {
    shop_id: i64,
    owner_id: i64,
    category: &'static Category,
    shipping_profile_id: i64,
    return_policy_id: i64,
    section_ids: Vec<i64>,
}

#[cfg(test)]
mod test {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::ID_COUNTER_START;

    fn small_config() -> SeedConfig {
        SeedConfig {
            shops: 2,
            listings_per_shop: CountRange::new(3, 3),
            reviews_per_shop: CountRange::new(2, 2),
            receipts_per_shop: CountRange::new(4, 4),
            ..Default::default()
        }
    }

    #[test]
    fn generates_the_configured_shape() {
        let store = MarketStore::new();
        RandomFixtures::new(small_config()).seed_with_rng(&store, &mut StdRng::seed_from_u64(42));
        let first_user = ID_COUNTER_START + 1;
        let shops = store.shops_for_user(first_user);
        assert_eq!(shops.len(), 1);
        let shop = &shops[0];
        assert_eq!(store.shop_listings(shop.shop_id, None, 100, 0).total, 3);
        assert_eq!(store.shop_sections(shop.shop_id).len(), 3);
        assert_eq!(store.shop_reviews(shop.shop_id, 100, 0).total, 2);
        assert_eq!(store.shop_receipts(shop.shop_id, 100, 0).total, 4);
        assert_eq!(store.shop_payments(shop.shop_id).len(), 4);
        assert_eq!(store.user_addresses(first_user).len(), 1);
        assert_eq!(store.taxonomy_nodes().len(), 5);
    }

    #[test]
    fn receipts_are_internally_consistent() {
        let store = MarketStore::new();
        RandomFixtures::new(small_config()).seed_with_rng(&store, &mut StdRng::seed_from_u64(7));
        let shop = &store.shops_for_user(ID_COUNTER_START + 1)[0];
        let receipts = store.shop_receipts(shop.shop_id, 100, 0).results;
        for receipt in &receipts {
            assert_eq!(receipt.transactions.len(), 1);
            let subtotal = receipt.subtotal.amount;
            assert_eq!(
                receipt.grandtotal.amount,
                subtotal + receipt.total_shipping_cost.amount + receipt.total_tax_cost.amount
            );
            assert_eq!(receipt.is_shipped, !receipt.shipments.is_empty());
            let payment = &store.receipt_payments(receipt.receipt_id)[0];
            assert_eq!(payment.amount_gross.amount, payment.amount_fees.amount + payment.amount_net.amount);
        }
        let paid = receipts.iter().filter(|r| r.is_paid).count();
        let ledger = store.ledger_entries(shop.shop_id, 100, 0);
        assert_eq!(ledger.total, paid);
        assert!(ledger.results.windows(2).all(|w| w[1].sequence_number == w[0].sequence_number + 1));
    }

    #[test]
    fn digital_listings_can_be_disabled() {
        let store = MarketStore::new();
        let config = SeedConfig {
            include_digital_listings: false,
            listings_per_shop: CountRange::new(30, 30),
            listing_states: vec![ListingState::Active],
            ..small_config()
        };
        RandomFixtures::new(config).seed_with_rng(&store, &mut StdRng::seed_from_u64(3));
        let shop = &store.shops_for_user(ID_COUNTER_START + 1)[0];
        let listings = store.shop_listings(shop.shop_id, None, 100, 0).results;
        assert!(listings.iter().all(|l| l.listing_type == ListingType::Physical && l.shipping_profile_id.is_some()));
        assert!(listings.iter().all(|l| l.state == ListingState::Active));
        assert_eq!(shop.listing_active_count, 30);
    }

    #[test]
    fn title_casing() {
        assert_eq!(title_case("sterling silver"), "Sterling Silver");
        assert_eq!(title_case("14k gold"), "14k Gold");
    }
}
