use bigdecimal::BigDecimal;

use super::model::CartLedger;
use crate::domain::catalog::value_objects::ItemId;

#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub item_id: ItemId,
    pub name: String,
    pub unit_price: BigDecimal,
    pub quantity: u32,
    pub line_total: BigDecimal,
}

/// Snapshot of the cart with prices resolved against the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSummary {
    pub lines: Vec<CartLine>,
    pub total: BigDecimal,
    pub item_count: u64,
}

impl CartSummary {
    pub fn from_ledger(ledger: &CartLedger) -> Self {
        let catalog = ledger.catalog();
        let lines = ledger
            .entries()
            .iter()
            .filter_map(|entry| {
                let item = catalog.get(entry.item_id)?;
                let unit_price = item.price.clone()?;
                let line_total = unit_price.clone() * BigDecimal::from(entry.quantity);
                Some(CartLine {
                    item_id: entry.item_id,
                    name: item.name.clone(),
                    unit_price,
                    quantity: entry.quantity,
                    line_total,
                })
            })
            .collect();

        Self {
            lines,
            total: ledger.total(),
            item_count: ledger.item_count(),
        }
    }

    pub fn distinct_items(&self) -> usize {
        self.lines.len()
    }
}
