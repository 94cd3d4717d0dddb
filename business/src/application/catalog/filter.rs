use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Item;
use crate::domain::catalog::store::CatalogStore;
use crate::domain::catalog::use_cases::filter::{FilterCatalogParams, FilterCatalogUseCase};
use crate::domain::logger::Logger;

pub struct FilterCatalogUseCaseImpl {
    pub catalog: Arc<CatalogStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl FilterCatalogUseCase for FilterCatalogUseCaseImpl {
    async fn execute(&self, params: FilterCatalogParams) -> Result<Vec<Item>, CatalogError> {
        self.logger.debug(&format!(
            "Filtering catalog: query='{}', category={:?}",
            params.query.as_str(),
            params.category
        ));

        let items: Vec<Item> = self
            .catalog
            .filter(&params.query, &params.category)
            .into_iter()
            .cloned()
            .collect();

        self.logger.info(&format!(
            "Catalog filter matched {} of {} items",
            items.len(),
            self.catalog.len()
        ));
        Ok(items)
    }
}
