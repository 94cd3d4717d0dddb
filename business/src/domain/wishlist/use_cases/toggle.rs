use async_trait::async_trait;

use crate::domain::catalog::value_objects::ItemId;
use crate::domain::wishlist::errors::WishlistError;

pub struct ToggleWishlistParams {
    pub item_id: ItemId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WishlistToggle {
    pub item_id: ItemId,
    pub present: bool,
}

#[async_trait]
pub trait ToggleWishlistUseCase: Send + Sync {
    async fn execute(&self, params: ToggleWishlistParams) -> Result<WishlistToggle, WishlistError>;
}
