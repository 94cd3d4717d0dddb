use std::sync::{Arc, PoisonError};

use async_trait::async_trait;

use crate::domain::catalog::model::Item;
use crate::domain::logger::Logger;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::SharedWishlist;
use crate::domain::wishlist::use_cases::get::GetWishlistUseCase;

pub struct GetWishlistUseCaseImpl {
    pub wishlist: SharedWishlist,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetWishlistUseCase for GetWishlistUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Item>, WishlistError> {
        let wishlist = self
            .wishlist
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let items: Vec<Item> = wishlist
            .item_ids()
            .into_iter()
            .filter_map(|id| wishlist.catalog().get(id).cloned())
            .collect();

        self.logger
            .debug(&format!("Wishlist holds {} items", items.len()));
        Ok(items)
    }
}
