use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Item;
use crate::domain::catalog::store::CatalogStore;
use crate::domain::catalog::use_cases::get_by_id::{GetItemByIdParams, GetItemByIdUseCase};
use crate::domain::logger::Logger;

pub struct GetItemByIdUseCaseImpl {
    pub catalog: Arc<CatalogStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetItemByIdUseCase for GetItemByIdUseCaseImpl {
    async fn execute(&self, params: GetItemByIdParams) -> Result<Item, CatalogError> {
        self.logger
            .info(&format!("Fetching catalog item: {}", params.id));

        match self.catalog.get(params.id) {
            Some(item) => Ok(item.clone()),
            None => {
                self.logger
                    .warn(&format!("Catalog item not found: {}", params.id));
                Err(CatalogError::NotFound)
            }
        }
    }
}
