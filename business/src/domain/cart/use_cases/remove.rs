use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::summary::CartSummary;
use crate::domain::catalog::value_objects::ItemId;

pub struct RemoveFromCartParams {
    pub item_id: ItemId,
}

#[async_trait]
pub trait RemoveFromCartUseCase: Send + Sync {
    async fn execute(&self, params: RemoveFromCartParams) -> Result<CartSummary, CartError>;
}
