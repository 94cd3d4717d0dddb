use bigdecimal::{BigDecimal, RoundingMode};
use poem_openapi::Object;

use business::domain::catalog::directory::{CodingPlatform, RecentResource};
use business::domain::catalog::model::{Item, ItemKind};

/// Renders a price with two decimals, the way it is displayed.
pub fn format_price(price: &BigDecimal) -> String {
    price.with_scale_round(2, RoundingMode::HalfEven).to_string()
}

#[derive(Debug, Clone, Object)]
pub struct ItemResponse {
    /// Item identifier
    pub id: u32,
    /// `product` or `resource`
    pub kind: String,
    pub name: String,
    pub category: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Unit price as a decimal string
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub original_price: Option<String>,
    /// Whole-number discount against the original price
    #[oai(skip_serializing_if_is_none)]
    pub discount_percent: Option<u32>,
    #[oai(skip_serializing_if_is_none)]
    pub rating: Option<f64>,
    #[oai(skip_serializing_if_is_none)]
    pub reviews: Option<u32>,
    pub stock: u32,
    pub in_stock: bool,
    pub on_sale: bool,
    #[oai(skip_serializing_if_is_none)]
    pub files: Option<u32>,
    #[oai(skip_serializing_if_is_none)]
    pub videos: Option<u32>,
    #[oai(skip_serializing_if_is_none)]
    pub difficulty: Option<String>,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        let discount_percent = item.discount_percent();
        let in_stock = item.is_in_stock();
        let on_sale = item.is_on_sale();

        let mut response = Self {
            id: item.id.value(),
            kind: String::new(),
            name: item.name,
            category: item.category.to_string(),
            description: item.description,
            price: item.price.as_ref().map(format_price),
            original_price: None,
            discount_percent,
            rating: item.rating,
            reviews: None,
            stock: item.stock,
            in_stock,
            on_sale,
            files: None,
            videos: None,
            difficulty: None,
        };

        match item.kind {
            ItemKind::Product {
                original_price,
                reviews,
                ..
            } => {
                response.kind = "product".to_string();
                response.original_price = original_price.as_ref().map(format_price);
                response.reviews = Some(reviews);
            }
            ItemKind::Resource {
                files,
                videos,
                difficulty,
            } => {
                response.kind = "resource".to_string();
                response.files = Some(files);
                response.videos = Some(videos);
                response.difficulty = Some(difficulty.to_string());
            }
        }

        response
    }
}

#[derive(Debug, Clone, Object)]
pub struct CategoriesResponse {
    /// Selectable categories, starting with "All"
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Object)]
pub struct CodingPlatformResponse {
    pub name: String,
    pub url: String,
    pub description: String,
    /// Audience size as advertised, e.g. "50M+"
    pub users: String,
}

impl From<CodingPlatform> for CodingPlatformResponse {
    fn from(platform: CodingPlatform) -> Self {
        Self {
            name: platform.name,
            url: platform.url,
            description: platform.description,
            users: platform.users,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct RecentResourceResponse {
    pub title: String,
    /// `PDF` or `Video`
    #[oai(rename = "type")]
    pub format: String,
    /// Relative age label, e.g. "2 days ago"
    pub added: String,
}

impl From<RecentResource> for RecentResourceResponse {
    fn from(resource: RecentResource) -> Self {
        Self {
            title: resource.title,
            format: resource.format.to_string(),
            added: resource.added,
        }
    }
}
