use poem_openapi::Object;

use business::domain::cart::summary::{CartLine, CartSummary};

use crate::api::catalog::dto::format_price;

#[derive(Debug, Clone, Object)]
pub struct AddToCartRequest {
    /// Catalog item to add one unit of
    pub item_id: u32,
}

#[derive(Debug, Clone, Object)]
pub struct SetQuantityRequest {
    /// New quantity. Zero removes the line
    pub quantity: i64,
}

#[derive(Debug, Clone, Object)]
pub struct CartLineResponse {
    pub item_id: u32,
    pub name: String,
    pub unit_price: String,
    pub quantity: u32,
    pub line_total: String,
}

impl From<CartLine> for CartLineResponse {
    fn from(line: CartLine) -> Self {
        Self {
            item_id: line.item_id.value(),
            name: line.name,
            unit_price: format_price(&line.unit_price),
            quantity: line.quantity,
            line_total: format_price(&line.line_total),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    /// Lines in the order items were first added
    pub lines: Vec<CartLineResponse>,
    /// Sum of all line totals
    pub total: String,
    /// Sum of all quantities
    pub item_count: u64,
}

impl From<CartSummary> for CartResponse {
    fn from(summary: CartSummary) -> Self {
        Self {
            total: format_price(&summary.total),
            item_count: summary.item_count,
            lines: summary.lines.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ClearCartResponse {
    /// Number of lines removed
    pub count: u64,
}
