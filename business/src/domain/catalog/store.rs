use std::collections::HashMap;

use bigdecimal::BigDecimal;

use super::directory::CatalogDirectory;
use super::errors::CatalogError;
use super::model::Item;
use super::repository::CatalogPayload;
use super::value_objects::{ALL_CATEGORIES, Category, CategoryFilter, ItemId, SearchQuery};

/// Read-only, ordered collection of items with an id index.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    categories: Vec<Category>,
    items: Vec<Item>,
    index: HashMap<ItemId, usize>,
    directory: CatalogDirectory,
}

impl CatalogStore {
    pub fn new(categories: Vec<Category>, items: Vec<Item>) -> Result<Self, CatalogError> {
        let categories = if categories.is_empty() {
            let mut derived: Vec<Category> = Vec::new();
            for item in &items {
                if !derived.contains(&item.category) {
                    derived.push(item.category.clone());
                }
            }
            derived
        } else {
            categories
        };

        let mut index = HashMap::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            if !categories.contains(&item.category) {
                return Err(CatalogError::UnknownCategory(item.category.clone()));
            }
            if index.insert(item.id, position).is_some() {
                return Err(CatalogError::DuplicateItem(item.id));
            }
        }

        Ok(Self {
            categories,
            items,
            index,
            directory: CatalogDirectory::default(),
        })
    }

    pub fn from_payload(payload: CatalogPayload) -> Result<Self, CatalogError> {
        let items = payload
            .items
            .into_iter()
            .map(Item::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(payload.categories, items)?.with_directory(payload.directory))
    }

    pub fn with_directory(mut self, directory: CatalogDirectory) -> Self {
        self.directory = directory;
        self
    }

    pub fn directory(&self) -> &CatalogDirectory {
        &self.directory
    }

    /// Items matching `query` on name or category, restricted by `category`,
    /// in catalog order.
    pub fn filter(&self, query: &SearchQuery, category: &CategoryFilter) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| category.accepts(&item.category) && item.matches(query))
            .collect()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.index.get(&id).map(|&position| &self.items[position])
    }

    pub fn price_of(&self, id: ItemId) -> Option<&BigDecimal> {
        self.get(id).and_then(|item| item.price.as_ref())
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// `"All"` followed by the declared categories, as offered to the UI.
    pub fn category_options(&self) -> Vec<String> {
        std::iter::once(ALL_CATEGORIES.to_string())
            .chain(self.categories.iter().map(|c| c.as_str().to_string()))
            .collect()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
