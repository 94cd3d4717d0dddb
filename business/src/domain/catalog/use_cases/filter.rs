use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Item;
use crate::domain::catalog::value_objects::{CategoryFilter, SearchQuery};

pub struct FilterCatalogParams {
    pub query: SearchQuery,
    pub category: CategoryFilter,
}

#[async_trait]
pub trait FilterCatalogUseCase: Send + Sync {
    async fn execute(&self, params: FilterCatalogParams) -> Result<Vec<Item>, CatalogError>;
}
