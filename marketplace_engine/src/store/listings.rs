use std::{cmp::Reverse, str::FromStr};

use log::*;

use super::{paginate, sorted_values, MarketStore, Page, StoreState};
use crate::{
    db_types::{
        ConversionError,
        ListingFile,
        ListingImage,
        ListingInventory,
        ListingState,
        ListingUpdate,
        ListingVideo,
        NewListing,
        PersonalizationUpdate,
        ShopListing,
    },
    helpers::now_unix,
};

/// New listings stay up for 120 days.
const LISTING_LIFETIME_SECS: i64 = 120 * 24 * 60 * 60;
/// The first few active listings of a shop are always featured.
const MIN_FEATURED: usize = 3;

//--------------------------------------     ListingSearch     ---------------------------------------------------------
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOn {
    Created,
    Price,
    Updated,
    /// Relevance. There is no scoring, so this keeps id order.
    #[default]
    Score,
}

impl FromStr for SortOn {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created" => Ok(Self::Created),
            "price" => Ok(Self::Price),
            "updated" => Ok(Self::Updated),
            "score" => Ok(Self::Score),
            s => Err(ConversionError(format!("Invalid sort_on value: {s}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" | "up" => Ok(Self::Asc),
            "desc" | "descending" | "down" => Ok(Self::Desc),
            s => Err(ConversionError(format!("Invalid sort_order value: {s}"))),
        }
    }
}

/// Filter for the marketplace-wide active listing search.
#[derive(Debug, Clone, Default)]
pub struct ListingSearch {
    pub keywords: Option<String>,
    pub taxonomy_id: Option<i64>,
    pub sort_on: SortOn,
    pub sort_order: SortOrder,
}

impl ListingSearch {
    fn sort(&self, listings: &mut [ShopListing]) {
        match (self.sort_on, self.sort_order) {
            (SortOn::Created, SortOrder::Asc) => listings.sort_by_key(|l| (l.created_timestamp, l.listing_id)),
            (SortOn::Created, SortOrder::Desc) => listings.sort_by_key(|l| Reverse((l.created_timestamp, l.listing_id))),
            (SortOn::Price, SortOrder::Asc) => listings.sort_by_key(|l| (l.price.amount, l.listing_id)),
            (SortOn::Price, SortOrder::Desc) => listings.sort_by_key(|l| Reverse((l.price.amount, l.listing_id))),
            (SortOn::Updated, SortOrder::Asc) => listings.sort_by_key(|l| (l.updated_timestamp, l.listing_id)),
            (SortOn::Updated, SortOrder::Desc) => listings.sort_by_key(|l| Reverse((l.updated_timestamp, l.listing_id))),
            (SortOn::Score, _) => {},
        }
    }
}

fn active_listings_for_shop(state: &StoreState, shop_id: i64) -> Vec<ShopListing> {
    sorted_values(
        state.listings.values().filter(|l| l.shop_id == shop_id && l.state == ListingState::Active),
        |l| l.listing_id,
    )
}

fn with_images(state: &StoreState, mut listing: ShopListing) -> ShopListing {
    listing.images = state.images.get(&listing.listing_id).cloned().unwrap_or_default();
    listing
}

impl MarketStore {
    pub fn insert_listing(&self, listing: ShopListing) {
        self.reserve_id(listing.listing_id);
        self.write().listings.insert(listing.listing_id, listing);
    }

    /// The stored listing, without its images.
    pub fn listing(&self, listing_id: i64) -> Option<ShopListing> {
        self.read().listings.get(&listing_id).cloned()
    }

    /// The listing with its `images` field populated.
    pub fn listing_with_images(&self, listing_id: i64) -> Option<ShopListing> {
        let state = self.read();
        state.listings.get(&listing_id).cloned().map(|l| with_images(&state, l))
    }

    /// Listings for the given ids, in the order requested, with images attached. Unknown ids are skipped.
    pub fn listings_by_ids(&self, ids: &[i64]) -> Vec<ShopListing> {
        let state = self.read();
        ids.iter().filter_map(|id| state.listings.get(id).cloned()).map(|l| with_images(&state, l)).collect()
    }

    pub fn shop_listings(
        &self,
        shop_id: i64,
        state_filter: Option<ListingState>,
        limit: usize,
        offset: usize,
    ) -> Page<ShopListing> {
        let state = self.read();
        let listings = sorted_values(
            state.listings.values().filter(|l| l.shop_id == shop_id && state_filter.map_or(true, |s| l.state == s)),
            |l| l.listing_id,
        );
        paginate(listings, limit, offset)
    }

    pub fn active_shop_listings(&self, shop_id: i64, limit: usize, offset: usize) -> Page<ShopListing> {
        self.shop_listings(shop_id, Some(ListingState::Active), limit, offset)
    }

    /// Active listings with a positive `featured_rank`, plus the shop's first three active listings by id.
    pub fn featured_listings(&self, shop_id: i64, limit: usize, offset: usize) -> Page<ShopListing> {
        let state = self.read();
        let featured = active_listings_for_shop(&state, shop_id)
            .into_iter()
            .enumerate()
            .filter(|(i, l)| l.featured_rank > 0 || *i < MIN_FEATURED)
            .map(|(_, l)| l)
            .collect();
        paginate(featured, limit, offset)
    }

    /// Active listings of the shop that sit in any of `section_ids`. An empty id list matches every active listing.
    pub fn section_listings(
        &self,
        shop_id: i64,
        section_ids: &[i64],
        limit: usize,
        offset: usize,
    ) -> Page<ShopListing> {
        let state = self.read();
        let listings = active_listings_for_shop(&state, shop_id)
            .into_iter()
            .filter(|l| section_ids.is_empty() || l.shop_section_id.map_or(false, |id| section_ids.contains(&id)))
            .collect();
        paginate(listings, limit, offset)
    }

    /// Searches active listings across every shop.
    pub fn find_active_listings(&self, search: &ListingSearch, limit: usize, offset: usize) -> Page<ShopListing> {
        let needle = search.keywords.as_ref().map(|k| k.trim().to_lowercase()).filter(|k| !k.is_empty());
        let state = self.read();
        let mut listings = sorted_values(
            state.listings.values().filter(|l| {
                l.state == ListingState::Active &&
                    needle.as_ref().map_or(true, |n| l.matches_keywords(n)) &&
                    search.taxonomy_id.map_or(true, |t| l.taxonomy_id == Some(t))
            }),
            |l| l.listing_id,
        );
        search.sort(&mut listings);
        paginate(listings, limit, offset)
    }

    /// Stores a new draft listing under `shop_id`. Returns `None` if the shop does not exist.
    pub fn create_listing(&self, shop_id: i64, new_listing: NewListing) -> Option<ShopListing> {
        let mut state = self.write();
        let owner = state.shops.get(&shop_id).map(|s| s.user_id)?;
        let listing_id = self.next_id();
        let now = now_unix();
        let listing = ShopListing {
            listing_id,
            user_id: owner,
            shop_id,
            title: new_listing.title,
            description: new_listing.description,
            state: ListingState::Draft,
            creation_timestamp: now,
            created_timestamp: now,
            ending_timestamp: now + LISTING_LIFETIME_SECS,
            original_creation_timestamp: now,
            last_modified_timestamp: now,
            updated_timestamp: now,
            state_timestamp: Some(now),
            quantity: new_listing.quantity,
            url: format!("https://www.etsy.com/listing/{listing_id}"),
            is_taxable: true,
            is_customizable: new_listing.is_customizable,
            is_personalizable: new_listing.is_personalizable,
            listing_type: new_listing.listing_type,
            tags: new_listing.tags,
            materials: new_listing.materials,
            shipping_profile_id: new_listing.shipping_profile_id,
            return_policy_id: new_listing.return_policy_id,
            who_made: Some(new_listing.who_made),
            when_made: Some(new_listing.when_made),
            is_supply: new_listing.is_supply,
            item_weight: new_listing.item_weight,
            item_weight_unit: new_listing.item_weight_unit,
            item_length: new_listing.item_length,
            item_width: new_listing.item_width,
            item_height: new_listing.item_height,
            item_dimensions_unit: new_listing.item_dimensions_unit,
            style: new_listing.styles,
            price: new_listing.price,
            taxonomy_id: Some(new_listing.taxonomy_id),
            ..Default::default()
        };
        state.listings.insert(listing_id, listing.clone());
        info!("🗃️ Listing {listing_id} created in shop {shop_id}");
        Some(listing)
    }

    /// Applies the `Some` fields of `update` and refreshes the modification timestamps.
    pub fn update_listing(&self, listing_id: i64, update: ListingUpdate) -> Option<ShopListing> {
        let mut state = self.write();
        let listing = state.listings.get_mut(&listing_id)?;
        let now = now_unix();
        if let Some(title) = update.title {
            listing.title = title;
        }
        if let Some(description) = update.description {
            listing.description = description;
        }
        if let Some(quantity) = update.quantity {
            listing.quantity = quantity;
        }
        if let Some(price) = update.price {
            listing.price = price;
        }
        if let Some(new_state) = update.state {
            if listing.state != new_state {
                listing.state_timestamp = Some(now);
            }
            listing.state = new_state;
        }
        if update.who_made.is_some() {
            listing.who_made = update.who_made;
        }
        if update.when_made.is_some() {
            listing.when_made = update.when_made;
        }
        if update.taxonomy_id.is_some() {
            listing.taxonomy_id = update.taxonomy_id;
        }
        if update.shipping_profile_id.is_some() {
            listing.shipping_profile_id = update.shipping_profile_id;
        }
        if update.return_policy_id.is_some() {
            listing.return_policy_id = update.return_policy_id;
        }
        if let Some(materials) = update.materials {
            listing.materials = materials;
        }
        if let Some(tags) = update.tags {
            listing.tags = tags;
        }
        if update.is_supply.is_some() {
            listing.is_supply = update.is_supply;
        }
        if update.item_weight.is_some() {
            listing.item_weight = update.item_weight;
        }
        if update.item_weight_unit.is_some() {
            listing.item_weight_unit = update.item_weight_unit;
        }
        if update.item_length.is_some() {
            listing.item_length = update.item_length;
        }
        if update.item_width.is_some() {
            listing.item_width = update.item_width;
        }
        if update.item_height.is_some() {
            listing.item_height = update.item_height;
        }
        if update.item_dimensions_unit.is_some() {
            listing.item_dimensions_unit = update.item_dimensions_unit;
        }
        listing.last_modified_timestamp = now;
        listing.updated_timestamp = now;
        debug!("🗃️ Listing {listing_id} updated");
        Some(listing.clone())
    }

    pub fn update_listing_personalization(
        &self,
        listing_id: i64,
        update: PersonalizationUpdate,
    ) -> Option<ShopListing> {
        let mut state = self.write();
        let listing = state.listings.get_mut(&listing_id)?;
        if let Some(personalizable) = update.is_personalizable {
            listing.is_personalizable = personalizable;
        }
        if let Some(required) = update.personalization_is_required {
            listing.personalization_is_required = required;
        }
        if update.personalization_char_count_max.is_some() {
            listing.personalization_char_count_max = update.personalization_char_count_max;
        }
        if update.personalization_instructions.is_some() {
            listing.personalization_instructions = update.personalization_instructions;
        }
        let now = now_unix();
        listing.last_modified_timestamp = now;
        listing.updated_timestamp = now;
        Some(listing.clone())
    }

    /// Removes the listing together with its images and files. Returns false if there was no such listing.
    pub fn delete_listing(&self, listing_id: i64) -> bool {
        let mut state = self.write();
        if state.listings.remove(&listing_id).is_none() {
            return false;
        }
        state.images.remove(&listing_id);
        state.files.remove(&listing_id);
        info!("🗃️ Listing {listing_id} deleted");
        true
    }

    /// Synthesizes a default inventory if the listing has none. Nothing is written back to the listing.
    pub fn listing_inventory(&self, listing_id: i64) -> Option<ListingInventory> {
        self.read().listings.get(&listing_id).map(ShopListing::effective_inventory)
    }

    //--------------------------------------        Images         -----------------------------------------------------
    pub fn insert_listing_image(&self, image: ListingImage) {
        self.reserve_id(image.listing_image_id);
        self.write().images.entry(image.listing_id).or_default().push(image);
    }

    pub fn listing_images(&self, listing_id: i64) -> Vec<ListingImage> {
        self.read().images.get(&listing_id).cloned().unwrap_or_default()
    }

    /// Returns `None` if the listing does not exist.
    pub fn add_listing_image(&self, listing_id: i64, alt_text: Option<String>, rank: i32) -> Option<ListingImage> {
        let image_id = self.next_id();
        let mut state = self.write();
        if !state.listings.contains_key(&listing_id) {
            return None;
        }
        let image = ListingImage { alt_text, ..ListingImage::with_mock_urls(listing_id, image_id, rank, now_unix()) };
        state.images.entry(listing_id).or_default().push(image.clone());
        debug!("🗃️ Image {image_id} added to listing {listing_id}");
        Some(image)
    }

    pub fn delete_listing_image(&self, listing_id: i64, image_id: i64) -> bool {
        let mut state = self.write();
        let Some(images) = state.images.get_mut(&listing_id) else {
            return false;
        };
        let before = images.len();
        images.retain(|i| i.listing_image_id != image_id);
        before != images.len()
    }

    //--------------------------------------         Files         -----------------------------------------------------
    pub fn insert_listing_file(&self, file: ListingFile) {
        self.reserve_id(file.listing_file_id);
        self.write().files.entry(file.listing_id).or_default().push(file);
    }

    pub fn listing_files(&self, listing_id: i64) -> Vec<ListingFile> {
        self.read().files.get(&listing_id).cloned().unwrap_or_default()
    }

    pub fn listing_file(&self, listing_id: i64, file_id: i64) -> Option<ListingFile> {
        self.read().files.get(&listing_id)?.iter().find(|f| f.listing_file_id == file_id).cloned()
    }

    /// Returns `None` if the listing does not exist. The new file is ranked after the existing ones.
    pub fn add_listing_file(
        &self,
        listing_id: i64,
        filename: &str,
        filetype: &str,
        size_bytes: i64,
    ) -> Option<ListingFile> {
        let file_id = self.next_id();
        let mut state = self.write();
        if !state.listings.contains_key(&listing_id) {
            return None;
        }
        let files = state.files.entry(listing_id).or_default();
        let now = now_unix();
        let file = ListingFile {
            listing_file_id: file_id,
            listing_id,
            rank: i32::try_from(files.len()).unwrap_or(i32::MAX - 1) + 1,
            filename: filename.to_string(),
            filesize: format!("{size_bytes} bytes"),
            size_bytes,
            filetype: filetype.to_string(),
            create_timestamp: now,
            created_timestamp: now,
        };
        files.push(file.clone());
        debug!("🗃️ File {file_id} added to listing {listing_id}");
        Some(file)
    }

    pub fn delete_listing_file(&self, listing_id: i64, file_id: i64) -> bool {
        let mut state = self.write();
        let Some(files) = state.files.get_mut(&listing_id) else {
            return false;
        };
        let before = files.len();
        files.retain(|f| f.listing_file_id != file_id);
        before != files.len()
    }

    //--------------------------------------        Videos         -----------------------------------------------------
    /// Attaches a placeholder video to the listing. Returns `None` if the listing does not exist.
    pub fn add_listing_video(&self, listing_id: i64) -> Option<ListingVideo> {
        let video_id = self.next_id();
        let mut state = self.write();
        let listing = state.listings.get_mut(&listing_id)?;
        let video = ListingVideo {
            video_id,
            height: 1080,
            width: 1920,
            thumbnail_url: format!("https://mock.etsy.com/videos/{video_id}_thumb.jpg"),
            video_url: format!("https://mock.etsy.com/videos/{video_id}.mp4"),
            video_state: "active".into(),
        };
        listing.videos.push(video.clone());
        let now = now_unix();
        listing.last_modified_timestamp = now;
        listing.updated_timestamp = now;
        Some(video)
    }

    pub fn delete_listing_video(&self, listing_id: i64, video_id: i64) -> bool {
        let mut state = self.write();
        let Some(listing) = state.listings.get_mut(&listing_id) else {
            return false;
        };
        let before = listing.videos.len();
        listing.videos.retain(|v| v.video_id != video_id);
        if before == listing.videos.len() {
            return false;
        }
        let now = now_unix();
        listing.last_modified_timestamp = now;
        listing.updated_timestamp = now;
        true
    }
}
