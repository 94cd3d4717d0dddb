use super::value_objects::{Category, ItemId};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.name_empty")]
    NameEmpty,
    #[error("catalog.duplicate_item")]
    DuplicateItem(ItemId),
    #[error("catalog.unknown_category")]
    UnknownCategory(Category),
    #[error("catalog.negative_price")]
    NegativePrice,
    #[error("catalog.price_precision")]
    PricePrecision,
    #[error("catalog.invalid_rating")]
    InvalidRating,
    #[error("catalog.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
