use async_trait::async_trait;

use crate::domain::catalog::model::Item;
use crate::domain::wishlist::errors::WishlistError;

#[async_trait]
pub trait GetWishlistUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Item>, WishlistError>;
}
