use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::catalog::use_cases::directory::GetCatalogDirectoryUseCase;
use business::domain::catalog::use_cases::filter::{FilterCatalogParams, FilterCatalogUseCase};
use business::domain::catalog::use_cases::get_by_id::{GetItemByIdParams, GetItemByIdUseCase};
use business::domain::catalog::use_cases::list_categories::ListCategoriesUseCase;
use business::domain::catalog::value_objects::{CategoryFilter, ItemId, SearchQuery};

use crate::api::catalog::dto::{
    CategoriesResponse, CodingPlatformResponse, ItemResponse, RecentResourceResponse,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

/// Use cases bound to one catalog. The shop and the toolkit each get their own.
pub struct CatalogHandlers {
    filter_use_case: Arc<dyn FilterCatalogUseCase>,
    get_by_id_use_case: Arc<dyn GetItemByIdUseCase>,
    list_categories_use_case: Arc<dyn ListCategoriesUseCase>,
}

impl CatalogHandlers {
    pub fn new(
        filter_use_case: Arc<dyn FilterCatalogUseCase>,
        get_by_id_use_case: Arc<dyn GetItemByIdUseCase>,
        list_categories_use_case: Arc<dyn ListCategoriesUseCase>,
    ) -> Self {
        Self {
            filter_use_case,
            get_by_id_use_case,
            list_categories_use_case,
        }
    }

    async fn filter(&self, query: Option<String>, category: Option<String>) -> ListItemsResponse {
        // An empty `category` is what a cleared select sends; treat it as unset.
        let category = category.filter(|value| !value.trim().is_empty());
        let params = FilterCatalogParams {
            query: SearchQuery::new(query.unwrap_or_default()),
            category: CategoryFilter::parse(category.as_deref()),
        };

        match self.filter_use_case.execute(params).await {
            Ok(items) => ListItemsResponse::Ok(Json(items.into_iter().map(Into::into).collect())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ListItemsResponse::InternalError(json)
            }
        }
    }

    async fn get_by_id(&self, id: u32) -> GetItemResponse {
        let params = GetItemByIdParams {
            id: ItemId::new(id),
        };

        match self.get_by_id_use_case.execute(params).await {
            Ok(item) => GetItemResponse::Ok(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetItemResponse::NotFound(json),
                    _ => GetItemResponse::InternalError(json),
                }
            }
        }
    }

    async fn categories(&self) -> ListCategoriesResponse {
        match self.list_categories_use_case.execute().await {
            Ok(categories) => ListCategoriesResponse::Ok(Json(CategoriesResponse { categories })),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ListCategoriesResponse::InternalError(json)
            }
        }
    }
}

pub struct ShopApi {
    handlers: CatalogHandlers,
}

impl ShopApi {
    pub fn new(handlers: CatalogHandlers) -> Self {
        Self { handlers }
    }
}

/// Shop catalog API
///
/// Browse the products of the demo shop.
#[OpenApi]
impl ShopApi {
    /// Search products
    ///
    /// Case-insensitive match of `query` against product name or category,
    /// optionally narrowed to one category. `All` disables the category filter.
    #[oai(path = "/shop/items", method = "get", tag = "ApiTags::Shop")]
    async fn list_items(
        &self,
        query: Query<Option<String>>,
        category: Query<Option<String>>,
    ) -> ListItemsResponse {
        self.handlers.filter(query.0, category.0).await
    }

    /// Get a product
    #[oai(path = "/shop/items/:id", method = "get", tag = "ApiTags::Shop")]
    async fn get_item(&self, id: Path<u32>) -> GetItemResponse {
        self.handlers.get_by_id(id.0).await
    }

    /// List product categories
    #[oai(path = "/shop/categories", method = "get", tag = "ApiTags::Shop")]
    async fn list_categories(&self) -> ListCategoriesResponse {
        self.handlers.categories().await
    }
}

pub struct ToolkitApi {
    handlers: CatalogHandlers,
    directory_use_case: Arc<dyn GetCatalogDirectoryUseCase>,
}

impl ToolkitApi {
    pub fn new(
        handlers: CatalogHandlers,
        directory_use_case: Arc<dyn GetCatalogDirectoryUseCase>,
    ) -> Self {
        Self {
            handlers,
            directory_use_case,
        }
    }
}

/// Academic toolkit API
///
/// Browse the study subjects of the toolkit.
#[OpenApi]
impl ToolkitApi {
    /// Search subjects
    ///
    /// Same matching rules as the shop: name or category, case-insensitive.
    #[oai(path = "/toolkit/subjects", method = "get", tag = "ApiTags::Toolkit")]
    async fn list_subjects(
        &self,
        query: Query<Option<String>>,
        category: Query<Option<String>>,
    ) -> ListItemsResponse {
        self.handlers.filter(query.0, category.0).await
    }

    /// Get a subject
    #[oai(path = "/toolkit/subjects/:id", method = "get", tag = "ApiTags::Toolkit")]
    async fn get_subject(&self, id: Path<u32>) -> GetItemResponse {
        self.handlers.get_by_id(id.0).await
    }

    /// List subject categories
    #[oai(path = "/toolkit/categories", method = "get", tag = "ApiTags::Toolkit")]
    async fn list_categories(&self) -> ListCategoriesResponse {
        self.handlers.categories().await
    }

    /// List coding platforms
    #[oai(path = "/toolkit/platforms", method = "get", tag = "ApiTags::Toolkit")]
    async fn list_platforms(&self) -> ListPlatformsResponse {
        match self.directory_use_case.execute().await {
            Ok(directory) => ListPlatformsResponse::Ok(Json(
                directory.platforms.into_iter().map(Into::into).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ListPlatformsResponse::InternalError(json)
            }
        }
    }

    /// List recently added resources
    #[oai(path = "/toolkit/recent", method = "get", tag = "ApiTags::Toolkit")]
    async fn list_recent(&self) -> ListRecentResponse {
        match self.directory_use_case.execute().await {
            Ok(directory) => ListRecentResponse::Ok(Json(
                directory.recently_added.into_iter().map(Into::into).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ListRecentResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListItemsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ItemResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetItemResponse {
    #[oai(status = 200)]
    Ok(Json<ItemResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListCategoriesResponse {
    #[oai(status = 200)]
    Ok(Json<CategoriesResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListPlatformsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CodingPlatformResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListRecentResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<RecentResourceResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    use bigdecimal::BigDecimal;
    use logger::TracingLogger;

    use business::application::catalog::directory::GetCatalogDirectoryUseCaseImpl;
    use business::application::catalog::filter::FilterCatalogUseCaseImpl;
    use business::application::catalog::get_by_id::GetItemByIdUseCaseImpl;
    use business::application::catalog::list_categories::ListCategoriesUseCaseImpl;
    use business::domain::catalog::directory::{CatalogDirectory, CodingPlatform};
    use business::domain::catalog::model::{Item, ItemKind, NewItemProps};
    use business::domain::catalog::store::CatalogStore;
    use business::domain::catalog::value_objects::Category;
    use business::domain::logger::Logger;

    fn product(id: u32, name: &str, category: &str) -> Item {
        Item::new(NewItemProps {
            id: ItemId::new(id),
            name: name.to_string(),
            category: Category::new(category),
            description: None,
            price: Some(BigDecimal::from_str("10.00").unwrap()),
            rating: None,
            stock: 3,
            kind: ItemKind::Product {
                original_price: None,
                reviews: 0,
                on_sale: false,
            },
        })
        .unwrap()
    }

    fn catalog() -> Arc<CatalogStore> {
        let store = CatalogStore::new(
            vec![Category::new("Electronics"), Category::new("Food")],
            vec![
                product(1, "Smart Watch", "Electronics"),
                product(2, "Organic Coffee Beans", "Food"),
            ],
        )
        .unwrap()
        .with_directory(CatalogDirectory {
            platforms: vec![CodingPlatform {
                name: "LeetCode".to_string(),
                url: "https://leetcode.com".to_string(),
                description: "Practice coding problems".to_string(),
                users: "50M+".to_string(),
            }],
            recently_added: vec![],
        });
        Arc::new(store)
    }

    fn handlers(catalog: Arc<CatalogStore>) -> CatalogHandlers {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        CatalogHandlers::new(
            Arc::new(FilterCatalogUseCaseImpl {
                catalog: catalog.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetItemByIdUseCaseImpl {
                catalog: catalog.clone(),
                logger: logger.clone(),
            }),
            Arc::new(ListCategoriesUseCaseImpl { catalog, logger }),
        )
    }

    fn names(response: ListItemsResponse) -> Vec<String> {
        match response {
            ListItemsResponse::Ok(Json(items)) => items.into_iter().map(|i| i.name).collect(),
            ListItemsResponse::InternalError(_) => panic!("filter failed"),
        }
    }

    #[tokio::test]
    async fn should_return_full_catalog_for_empty_category() {
        let handlers = handlers(catalog());

        let items = names(handlers.filter(None, Some(String::new())).await);

        assert_eq!(items, vec!["Smart Watch", "Organic Coffee Beans"]);
    }

    #[tokio::test]
    async fn should_treat_blank_and_all_category_as_unfiltered() {
        let handlers = handlers(catalog());

        assert_eq!(names(handlers.filter(None, Some("  ".to_string())).await).len(), 2);
        assert_eq!(names(handlers.filter(None, Some("All".to_string())).await).len(), 2);
        assert_eq!(
            names(handlers.filter(None, Some("Food".to_string())).await),
            vec!["Organic Coffee Beans"]
        );
    }

    #[tokio::test]
    async fn should_map_unknown_id_to_not_found() {
        let handlers = handlers(catalog());

        assert!(matches!(
            handlers.get_by_id(99).await,
            GetItemResponse::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn should_list_toolkit_platforms() {
        let catalog = catalog();
        let api = ToolkitApi::new(
            handlers(catalog.clone()),
            Arc::new(GetCatalogDirectoryUseCaseImpl {
                catalog,
                logger: Arc::new(TracingLogger),
            }),
        );

        let ListPlatformsResponse::Ok(Json(platforms)) = api.list_platforms().await else {
            panic!("expected platforms");
        };
        let ListRecentResponse::Ok(Json(recent)) = api.list_recent().await else {
            panic!("expected recent resources");
        };

        assert_eq!(platforms.len(), 1);
        assert_eq!(platforms[0].users, "50M+");
        assert!(recent.is_empty());
    }
}
