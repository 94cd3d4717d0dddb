use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::summary::CartSummary;
use crate::domain::catalog::value_objects::ItemId;

pub struct AddToCartParams {
    pub item_id: ItemId,
}

#[async_trait]
pub trait AddToCartUseCase: Send + Sync {
    async fn execute(&self, params: AddToCartParams) -> Result<CartSummary, CartError>;
}
