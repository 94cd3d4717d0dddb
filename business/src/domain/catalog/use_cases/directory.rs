use async_trait::async_trait;

use crate::domain::catalog::directory::CatalogDirectory;
use crate::domain::catalog::errors::CatalogError;

#[async_trait]
pub trait GetCatalogDirectoryUseCase: Send + Sync {
    async fn execute(&self) -> Result<CatalogDirectory, CatalogError>;
}
