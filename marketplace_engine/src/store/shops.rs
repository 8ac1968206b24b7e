use log::*;

use super::{sorted_values, MarketStore};
use crate::{
    db_types::{Shop, ShopHolidayPreferences, ShopReturnPolicy, ShopSection, ShopShippingProfile, ShopUpdate},
    helpers::now_unix,
};

impl MarketStore {
    pub fn insert_shop(&self, shop: Shop) {
        self.reserve_id(shop.shop_id);
        self.write().shops.insert(shop.shop_id, shop);
    }

    pub fn shop(&self, shop_id: i64) -> Option<Shop> {
        self.read().shops.get(&shop_id).cloned()
    }

    /// Exact, case-sensitive lookup on `shop_name`.
    pub fn shop_by_name(&self, name: &str) -> Option<Shop> {
        self.read().shops.values().find(|s| s.shop_name == name).cloned()
    }

    pub fn shops_for_user(&self, user_id: i64) -> Vec<Shop> {
        let state = self.read();
        sorted_values(state.shops.values().filter(|s| s.user_id == user_id), |s| s.shop_id)
    }

    /// Applies the `Some` fields of `update` and refreshes the shop's update timestamps.
    pub fn update_shop(&self, shop_id: i64, update: ShopUpdate) -> Option<Shop> {
        let mut state = self.write();
        let shop = state.shops.get_mut(&shop_id)?;
        if let Some(title) = update.title {
            shop.title = Some(title);
        }
        if let Some(announcement) = update.announcement {
            shop.announcement = Some(announcement);
        }
        if let Some(sale_message) = update.sale_message {
            shop.sale_message = Some(sale_message);
        }
        if let Some(is_vacation) = update.is_vacation {
            shop.is_vacation = is_vacation;
        }
        if let Some(message) = update.vacation_message {
            shop.vacation_message = Some(message);
        }
        let now = now_unix();
        shop.update_date = now;
        shop.updated_timestamp = now;
        debug!("🗃️ Shop {shop_id} updated");
        Some(shop.clone())
    }

    pub fn holiday_preferences(&self, shop_id: i64) -> Option<ShopHolidayPreferences> {
        self.read().shops.get(&shop_id).map(ShopHolidayPreferences::from)
    }

    pub fn update_holiday_preferences(
        &self,
        shop_id: i64,
        is_vacation: Option<bool>,
        vacation_message: Option<String>,
    ) -> Option<ShopHolidayPreferences> {
        let update = ShopUpdate { is_vacation, vacation_message, ..Default::default() };
        self.update_shop(shop_id, update).as_ref().map(ShopHolidayPreferences::from)
    }

    //--------------------------------------       Sections        -----------------------------------------------------
    pub fn insert_shop_section(&self, section: ShopSection) {
        self.reserve_id(section.shop_section_id);
        self.write().sections.insert(section.shop_section_id, section);
    }

    /// Sections hold the shop id in their `user_id` field.
    pub fn shop_sections(&self, shop_id: i64) -> Vec<ShopSection> {
        let state = self.read();
        sorted_values(state.sections.values().filter(|s| s.user_id == shop_id), |s| s.shop_section_id)
    }

    /// Returns the section only if it belongs to `shop_id`.
    pub fn shop_section(&self, shop_id: i64, section_id: i64) -> Option<ShopSection> {
        self.read().sections.get(&section_id).filter(|s| s.user_id == shop_id).cloned()
    }

    pub fn create_shop_section(&self, shop_id: i64, title: &str, rank: i32) -> ShopSection {
        let section = ShopSection {
            shop_section_id: self.next_id(),
            title: title.to_string(),
            rank,
            user_id: shop_id,
            active_listing_count: 0,
        };
        self.write().sections.insert(section.shop_section_id, section.clone());
        debug!("🗃️ Section {} created in shop {shop_id}", section.shop_section_id);
        section
    }

    //--------------------------------------    Return policies    -----------------------------------------------------
    pub fn insert_return_policy(&self, policy: ShopReturnPolicy) {
        self.reserve_id(policy.return_policy_id);
        self.write().return_policies.insert(policy.return_policy_id, policy);
    }

    pub fn return_policies(&self, shop_id: i64) -> Vec<ShopReturnPolicy> {
        let state = self.read();
        sorted_values(state.return_policies.values().filter(|p| p.shop_id == shop_id), |p| p.return_policy_id)
    }

    pub fn return_policy(&self, policy_id: i64) -> Option<ShopReturnPolicy> {
        self.read().return_policies.get(&policy_id).cloned()
    }

    pub fn create_return_policy(
        &self,
        shop_id: i64,
        accepts_returns: bool,
        accepts_exchanges: bool,
        return_deadline: Option<i32>,
    ) -> ShopReturnPolicy {
        let policy = ShopReturnPolicy {
            return_policy_id: self.next_id(),
            shop_id,
            accepts_returns,
            accepts_exchanges,
            return_deadline,
        };
        self.write().return_policies.insert(policy.return_policy_id, policy.clone());
        debug!("🗃️ Return policy {} created for shop {shop_id}", policy.return_policy_id);
        policy
    }

    //--------------------------------------   Shipping profiles   -----------------------------------------------------
    pub fn insert_shipping_profile(&self, profile: ShopShippingProfile) {
        self.reserve_id(profile.shipping_profile_id);
        self.write().shipping_profiles.insert(profile.shipping_profile_id, profile);
    }

    /// Profiles owned by the shop's user, including soft-deleted ones. An unknown shop has no profiles.
    pub fn shipping_profiles(&self, shop_id: i64) -> Vec<ShopShippingProfile> {
        let state = self.read();
        let Some(owner) = state.shops.get(&shop_id).map(|s| s.user_id) else {
            return Vec::new();
        };
        sorted_values(state.shipping_profiles.values().filter(|p| p.user_id == owner), |p| p.shipping_profile_id)
    }

    pub fn shipping_profile(&self, profile_id: i64) -> Option<ShopShippingProfile> {
        self.read().shipping_profiles.get(&profile_id).cloned()
    }

    pub fn create_shipping_profile(
        &self,
        user_id: i64,
        title: &str,
        origin_country_iso: &str,
        profile_type: &str,
    ) -> ShopShippingProfile {
        let profile = ShopShippingProfile {
            shipping_profile_id: self.next_id(),
            title: Some(title.to_string()),
            user_id,
            origin_country_iso: origin_country_iso.to_string(),
            profile_type: profile_type.to_string(),
            ..Default::default()
        };
        self.write().shipping_profiles.insert(profile.shipping_profile_id, profile.clone());
        debug!("🗃️ Shipping profile {} created for user {user_id}", profile.shipping_profile_id);
        profile
    }

    /// Soft delete. The record stays in the store with `is_deleted` set. Returns false if there is no such profile.
    pub fn delete_shipping_profile(&self, profile_id: i64) -> bool {
        match self.write().shipping_profiles.get_mut(&profile_id) {
            Some(profile) => {
                profile.is_deleted = true;
                debug!("🗃️ Shipping profile {profile_id} marked as deleted");
                true
            },
            None => false,
        }
    }
}
