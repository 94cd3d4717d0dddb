use bigdecimal::BigDecimal;
use serde::Deserialize;

use business::domain::catalog::directory::{
    CatalogDirectory, CodingPlatform, RecentResource, ResourceFormat,
};
use business::domain::catalog::model::{ItemKind, NewItemProps};
use business::domain::catalog::repository::CatalogPayload;
use business::domain::catalog::value_objects::{Category, Difficulty, ItemId};
use business::domain::errors::RepositoryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKindEntity {
    Product,
    Resource,
}

/// One record of a catalog seed file. Prices are decimal strings.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemEntity {
    pub id: Option<u32>,
    pub kind: ItemKindEntity,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub price: Option<BigDecimal>,
    pub original_price: Option<BigDecimal>,
    pub rating: Option<f64>,
    #[serde(default)]
    pub reviews: u32,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub sale: bool,
    #[serde(default)]
    pub files: u32,
    #[serde(default)]
    pub videos: u32,
    pub difficulty: Option<Difficulty>,
}

#[derive(Debug, Deserialize)]
pub struct CodingPlatformEntity {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub users: String,
}

#[derive(Debug, Deserialize)]
pub struct RecentResourceEntity {
    pub title: String,
    #[serde(rename = "type")]
    pub format: ResourceFormat,
    pub time: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntity {
    #[serde(default)]
    pub categories: Vec<String>,
    pub items: Vec<ItemEntity>,
    #[serde(default)]
    pub coding_platforms: Vec<CodingPlatformEntity>,
    #[serde(default)]
    pub recently_added: Vec<RecentResourceEntity>,
}

impl CodingPlatformEntity {
    pub fn into_domain(self) -> Result<CodingPlatform, RepositoryError> {
        if self.name.trim().is_empty() || self.url.trim().is_empty() {
            return Err(RepositoryError::Malformed);
        }
        Ok(CodingPlatform {
            name: self.name,
            url: self.url,
            description: self.description,
            users: self.users,
        })
    }
}

impl From<RecentResourceEntity> for RecentResource {
    fn from(entity: RecentResourceEntity) -> Self {
        Self {
            title: entity.title,
            format: entity.format,
            added: entity.time,
        }
    }
}

impl ItemEntity {
    pub fn into_domain(self, id: ItemId) -> Result<NewItemProps, RepositoryError> {
        let kind = match self.kind {
            ItemKindEntity::Product => ItemKind::Product {
                original_price: self.original_price,
                reviews: self.reviews,
                on_sale: self.sale,
            },
            ItemKindEntity::Resource => ItemKind::Resource {
                files: self.files,
                videos: self.videos,
                difficulty: self.difficulty.ok_or(RepositoryError::Malformed)?,
            },
        };

        Ok(NewItemProps {
            id,
            name: self.name,
            category: Category::new(self.category),
            description: self.description,
            price: self.price,
            rating: self.rating,
            stock: self.stock,
            kind,
        })
    }
}

impl CatalogEntity {
    /// Records without an `id` get the next id after the largest explicit one,
    /// in payload order.
    pub fn into_payload(self) -> Result<CatalogPayload, RepositoryError> {
        let mut next_id = self
            .items
            .iter()
            .filter_map(|item| item.id)
            .max()
            .map_or(Some(1), |max| max.checked_add(1));

        let mut items = Vec::with_capacity(self.items.len());
        for entity in self.items {
            let id = match entity.id {
                Some(id) => id,
                None => {
                    let id = next_id.ok_or(RepositoryError::Malformed)?;
                    next_id = id.checked_add(1);
                    id
                }
            };
            items.push(entity.into_domain(ItemId::new(id))?);
        }

        let platforms = self
            .coding_platforms
            .into_iter()
            .map(CodingPlatformEntity::into_domain)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CatalogPayload {
            categories: self.categories.into_iter().map(Category::new).collect(),
            items,
            directory: CatalogDirectory {
                platforms,
                recently_added: self.recently_added.into_iter().map(Into::into).collect(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn parse(json: &str) -> CatalogEntity {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn should_map_product_fields() {
        let entity = parse(
            r#"{"items":[{"id":1,"kind":"product","name":"Wireless Bluetooth Headphones",
            "category":"Electronics","price":"79.99","originalPrice":"99.99",
            "rating":4.5,"reviews":127,"stock":15,"sale":true}]}"#,
        );

        let payload = entity.into_payload().unwrap();

        assert!(payload.categories.is_empty());
        let item = &payload.items[0];
        assert_eq!(item.id, ItemId::new(1));
        assert_eq!(item.price, Some(BigDecimal::from_str("79.99").unwrap()));
        assert_eq!(item.stock, 15);
        assert_eq!(
            item.kind,
            ItemKind::Product {
                original_price: Some(BigDecimal::from_str("99.99").unwrap()),
                reviews: 127,
                on_sale: true,
            }
        );
    }

    #[test]
    fn should_assign_ids_after_largest_explicit_id() {
        let entity = parse(
            r#"{"items":[
                {"kind":"resource","name":"A","category":"Theory","difficulty":"Beginner"},
                {"id":7,"kind":"resource","name":"B","category":"Theory","difficulty":"Advanced"},
                {"kind":"resource","name":"C","category":"Theory","difficulty":"Intermediate"}
            ]}"#,
        );

        let payload = entity.into_payload().unwrap();

        let ids: Vec<u32> = payload.items.iter().map(|i| i.id.value()).collect();
        assert_eq!(ids, vec![8, 7, 9]);
    }

    #[test]
    fn should_start_ids_at_one_when_none_given() {
        let entity = parse(
            r#"{"items":[
                {"kind":"resource","name":"A","category":"Theory","difficulty":"Beginner"},
                {"kind":"resource","name":"B","category":"Theory","difficulty":"Beginner"}
            ]}"#,
        );

        let ids: Vec<u32> = entity
            .into_payload()
            .unwrap()
            .items
            .iter()
            .map(|i| i.id.value())
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn should_reject_resource_without_difficulty() {
        let entity = parse(r#"{"items":[{"kind":"resource","name":"A","category":"Theory"}]}"#);

        assert!(matches!(
            entity.into_payload().unwrap_err(),
            RepositoryError::Malformed
        ));
    }

    #[test]
    fn should_map_directory_listings() {
        let entity = parse(
            r#"{"items":[],
            "codingPlatforms":[{"name":"LeetCode","url":"https://leetcode.com",
                "description":"Practice coding problems","users":"50M+"}],
            "recentlyAdded":[{"title":"SQL Query Optimization","type":"PDF","time":"3 days ago"}]}"#,
        );

        let directory = entity.into_payload().unwrap().directory;

        assert_eq!(directory.platforms[0].users, "50M+");
        assert_eq!(directory.recently_added[0].format, ResourceFormat::Pdf);
        assert_eq!(directory.recently_added[0].added, "3 days ago");
    }

    #[test]
    fn should_reject_platform_without_url() {
        let entity = parse(r#"{"items":[],"codingPlatforms":[{"name":"LeetCode","url":""}]}"#);

        assert!(matches!(
            entity.into_payload().unwrap_err(),
            RepositoryError::Malformed
        ));
    }
}
