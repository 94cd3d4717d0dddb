use bigdecimal::BigDecimal;
use num_traits::{ToPrimitive, Zero};

use super::errors::CatalogError;
use super::value_objects::{Category, Difficulty, ItemId, SearchQuery};

pub const MAX_RATING: f64 = 5.0;

/// Prices are whole cents.
pub const PRICE_SCALE: i64 = 2;

/// Attributes that only make sense for one of the two catalogs.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemKind {
    Product {
        original_price: Option<BigDecimal>,
        reviews: u32,
        on_sale: bool,
    },
    Resource {
        files: u32,
        videos: u32,
        difficulty: Difficulty,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub category: Category,
    pub description: Option<String>,
    pub price: Option<BigDecimal>,
    pub rating: Option<f64>,
    pub stock: u32,
    pub kind: ItemKind,
}

#[derive(Debug)]
pub struct NewItemProps {
    pub id: ItemId,
    pub name: String,
    pub category: Category,
    pub description: Option<String>,
    pub price: Option<BigDecimal>,
    pub rating: Option<f64>,
    pub stock: u32,
    pub kind: ItemKind,
}

impl Item {
    pub fn new(props: NewItemProps) -> Result<Self, CatalogError> {
        if props.name.trim().is_empty() {
            return Err(CatalogError::NameEmpty);
        }

        let original_price = match &props.kind {
            ItemKind::Product { original_price, .. } => original_price.as_ref(),
            ItemKind::Resource { .. } => None,
        };
        for price in props.price.iter().chain(original_price) {
            if price < &BigDecimal::zero() {
                return Err(CatalogError::NegativePrice);
            }
            if &price.with_scale(PRICE_SCALE) != price {
                return Err(CatalogError::PricePrecision);
            }
        }

        if let Some(rating) = props.rating
            && !(0.0..=MAX_RATING).contains(&rating)
        {
            return Err(CatalogError::InvalidRating);
        }

        Ok(Self {
            id: props.id,
            name: props.name,
            category: props.category,
            description: props.description,
            price: props.price,
            rating: props.rating,
            stock: props.stock,
            kind: props.kind,
        })
    }

    /// Name or category contains the query, ignoring case.
    pub fn matches(&self, query: &SearchQuery) -> bool {
        query.matches(&self.name) || query.matches(self.category.as_str())
    }

    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    pub fn is_on_sale(&self) -> bool {
        matches!(self.kind, ItemKind::Product { on_sale: true, .. })
    }

    /// Rounded percentage off the original price, when the item is discounted.
    pub fn discount_percent(&self) -> Option<u32> {
        let ItemKind::Product {
            original_price: Some(original),
            ..
        } = &self.kind
        else {
            return None;
        };
        let price = self.price.as_ref()?;
        if original.is_zero() || price >= original {
            return None;
        }

        let ratio = (original - price) * BigDecimal::from(100) / original;
        ratio.round(0).to_u32()
    }
}
