use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::directory::CatalogDirectory;
use super::model::NewItemProps;
use super::value_objects::Category;

/// The startup payload a catalog is built from.
///
/// `categories` is the declared category set, in display order. When empty,
/// the store derives it from the items. `directory` carries the listings
/// that are served alongside the items.
#[derive(Debug)]
pub struct CatalogPayload {
    pub categories: Vec<Category>,
    pub items: Vec<NewItemProps>,
    pub directory: CatalogDirectory,
}

/// Catalog load port. Implementations return items in catalog order with ids assigned.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn load(&self) -> Result<CatalogPayload, RepositoryError>;
}
