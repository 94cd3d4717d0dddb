use crate::domain::catalog::value_objects::ItemId;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum WishlistError {
    #[error("wishlist.unknown_item")]
    UnknownItem(ItemId),
}
