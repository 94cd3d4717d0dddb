use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::summary::CartSummary;
use crate::domain::catalog::value_objects::ItemId;

pub struct SetCartQuantityParams {
    pub item_id: ItemId,
    pub quantity: i64,
}

#[async_trait]
pub trait SetCartQuantityUseCase: Send + Sync {
    async fn execute(&self, params: SetCartQuantityParams) -> Result<CartSummary, CartError>;
}
