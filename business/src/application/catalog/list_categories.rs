use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::store::CatalogStore;
use crate::domain::catalog::use_cases::list_categories::ListCategoriesUseCase;
use crate::domain::logger::Logger;

pub struct ListCategoriesUseCaseImpl {
    pub catalog: Arc<CatalogStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListCategoriesUseCase for ListCategoriesUseCaseImpl {
    async fn execute(&self) -> Result<Vec<String>, CatalogError> {
        self.logger.debug("Listing catalog categories");
        Ok(self.catalog.category_options())
    }
}
