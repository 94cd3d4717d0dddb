use std::sync::{Arc, Mutex};

use bigdecimal::BigDecimal;
use num_traits::Zero;

use super::errors::CartError;
use crate::domain::catalog::model::Item;
use crate::domain::catalog::store::CatalogStore;
use crate::domain::catalog::value_objects::ItemId;
use crate::domain::notifier::{Notification, Notifier};

/// One selected item. The ledger never stores more than one entry per id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartEntry {
    pub item_id: ItemId,
    pub quantity: u32,
}

/// Ledger shared between the cart use cases of one browsing session.
pub type SharedCartLedger = Arc<Mutex<CartLedger>>;

/// Shopping cart keyed by item id. Prices are always read from the catalog.
///
/// Entries keep the order in which they were first added. Every mutation
/// either applies fully or returns an error with the ledger untouched.
pub struct CartLedger {
    catalog: Arc<CatalogStore>,
    notifier: Arc<dyn Notifier>,
    entries: Vec<CartEntry>,
}

impl CartLedger {
    pub fn new(catalog: Arc<CatalogStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            catalog,
            notifier,
            entries: Vec::new(),
        }
    }

    /// Adds one unit of `item_id` and returns the resulting quantity.
    pub fn add(&mut self, item_id: ItemId) -> Result<u32, CartError> {
        let catalog = Arc::clone(&self.catalog);
        let item = purchasable(&catalog, item_id)?;

        let quantity = match self.position(item_id) {
            Some(position) => {
                let entry = &mut self.entries[position];
                entry.quantity = entry
                    .quantity
                    .checked_add(1)
                    .ok_or(CartError::InvalidQuantity(i64::from(entry.quantity) + 1))?;
                entry.quantity
            }
            None => {
                self.entries.push(CartEntry {
                    item_id,
                    quantity: 1,
                });
                1
            }
        };

        self.notifier.notify(Notification::new(
            "Added to Cart",
            format!("{} has been added to your cart.", item.name),
        ));
        Ok(quantity)
    }

    /// Sets the quantity of `item_id`, creating the entry when absent.
    /// Zero removes the entry; negative quantities are rejected.
    pub fn set_quantity(&mut self, item_id: ItemId, quantity: i64) -> Result<(), CartError> {
        let catalog = Arc::clone(&self.catalog);
        let item = lookup(&catalog, item_id)?;

        if quantity < 0 {
            return Err(CartError::InvalidQuantity(quantity));
        }
        if quantity == 0 {
            self.remove_entry(item);
            return Ok(());
        }

        let quantity = u32::try_from(quantity).map_err(|_| CartError::InvalidQuantity(quantity))?;
        let item = purchasable(&catalog, item_id)?;

        match self.position(item_id) {
            Some(position) if self.entries[position].quantity == quantity => return Ok(()),
            Some(position) => self.entries[position].quantity = quantity,
            None => self.entries.push(CartEntry { item_id, quantity }),
        }

        self.notifier.notify(Notification::new(
            "Cart Updated",
            format!("{} quantity set to {}.", item.name, quantity),
        ));
        Ok(())
    }

    /// Removes the entry for `item_id`. Returns whether an entry existed.
    pub fn remove(&mut self, item_id: ItemId) -> Result<bool, CartError> {
        let catalog = Arc::clone(&self.catalog);
        let item = lookup(&catalog, item_id)?;
        Ok(self.remove_entry(item))
    }

    /// Empties the cart. Returns the number of distinct entries dropped.
    pub fn clear(&mut self) -> usize {
        let dropped = self.entries.len();
        if dropped > 0 {
            self.entries.clear();
            self.notifier.notify(Notification::new(
                "Cart Cleared",
                "Your cart is now empty.",
            ));
        }
        dropped
    }

    /// Sum of `price * quantity` using current catalog prices.
    pub fn total(&self) -> BigDecimal {
        self.entries
            .iter()
            .filter_map(|entry| {
                self.catalog
                    .price_of(entry.item_id)
                    .map(|price| price.clone() * BigDecimal::from(entry.quantity))
            })
            .fold(BigDecimal::zero(), |total, line| total + line)
    }

    /// Sum of all quantities (the badge count).
    pub fn item_count(&self) -> u64 {
        self.entries
            .iter()
            .map(|entry| u64::from(entry.quantity))
            .sum()
    }

    pub fn quantity(&self, item_id: ItemId) -> u32 {
        self.position(item_id)
            .map(|position| self.entries[position].quantity)
            .unwrap_or(0)
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    fn position(&self, item_id: ItemId) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.item_id == item_id)
    }

    fn remove_entry(&mut self, item: &Item) -> bool {
        let Some(position) = self.position(item.id) else {
            return false;
        };
        self.entries.remove(position);
        self.notifier.notify(Notification::new(
            "Removed from Cart",
            format!("{} has been removed from your cart.", item.name),
        ));
        true
    }
}

fn lookup(catalog: &CatalogStore, item_id: ItemId) -> Result<&Item, CartError> {
    catalog.get(item_id).ok_or(CartError::UnknownItem(item_id))
}

fn purchasable(catalog: &CatalogStore, item_id: ItemId) -> Result<&Item, CartError> {
    let item = lookup(catalog, item_id)?;
    if item.price.is_none() {
        return Err(CartError::NotForSale(item_id));
    }
    if !item.is_in_stock() {
        return Err(CartError::OutOfStock(item_id));
    }
    Ok(item)
}
