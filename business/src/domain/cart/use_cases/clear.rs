use async_trait::async_trait;

use crate::domain::cart::errors::CartError;

#[async_trait]
pub trait ClearCartUseCase: Send + Sync {
    /// Returns the number of distinct entries removed.
    async fn execute(&self) -> Result<usize, CartError>;
}
