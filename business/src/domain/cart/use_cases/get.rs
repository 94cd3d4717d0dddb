use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::summary::CartSummary;

#[async_trait]
pub trait GetCartUseCase: Send + Sync {
    async fn execute(&self) -> Result<CartSummary, CartError>;
}
