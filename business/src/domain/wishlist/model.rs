use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use super::errors::WishlistError;
use crate::domain::catalog::store::CatalogStore;
use crate::domain::catalog::value_objects::ItemId;
use crate::domain::notifier::{Notification, Notifier};

pub type SharedWishlist = Arc<Mutex<Wishlist>>;

pub struct Wishlist {
    catalog: Arc<CatalogStore>,
    notifier: Arc<dyn Notifier>,
    item_ids: HashSet<ItemId>,
}

impl Wishlist {
    pub fn new(catalog: Arc<CatalogStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            catalog,
            notifier,
            item_ids: HashSet::new(),
        }
    }

    /// Flips membership of `item_id` and returns whether it is now present.
    pub fn toggle(&mut self, item_id: ItemId) -> Result<bool, WishlistError> {
        if self.catalog.get(item_id).is_none() {
            return Err(WishlistError::UnknownItem(item_id));
        }

        let present = if self.item_ids.remove(&item_id) {
            self.notifier.notify(Notification::new(
                "Removed from Wishlist",
                "Item removed from your wishlist.",
            ));
            false
        } else {
            self.item_ids.insert(item_id);
            self.notifier.notify(Notification::new(
                "Added to Wishlist",
                "Item added to your wishlist.",
            ));
            true
        };
        Ok(present)
    }

    pub fn contains(&self, item_id: ItemId) -> bool {
        self.item_ids.contains(&item_id)
    }

    /// Members in ascending id order.
    pub fn item_ids(&self) -> Vec<ItemId> {
        let mut ids: Vec<ItemId> = self.item_ids.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.item_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.item_ids.is_empty()
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }
}
