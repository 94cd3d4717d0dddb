use crate::domain::catalog::value_objects::ItemId;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CartError {
    #[error("cart.unknown_item")]
    UnknownItem(ItemId),
    #[error("cart.invalid_quantity")]
    InvalidQuantity(i64),
    #[error("cart.out_of_stock")]
    OutOfStock(ItemId),
    #[error("cart.not_for_sale")]
    NotForSale(ItemId),
}
