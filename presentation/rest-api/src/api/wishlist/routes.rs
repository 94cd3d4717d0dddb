use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::catalog::value_objects::ItemId;
use business::domain::wishlist::use_cases::get::GetWishlistUseCase;
use business::domain::wishlist::use_cases::toggle::{
    ToggleWishlistParams, ToggleWishlistUseCase,
};

use crate::api::catalog::dto::ItemResponse;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;
use crate::api::wishlist::dto::WishlistToggleResponse;

pub struct WishlistApi {
    get_use_case: Arc<dyn GetWishlistUseCase>,
    toggle_use_case: Arc<dyn ToggleWishlistUseCase>,
}

impl WishlistApi {
    pub fn new(
        get_use_case: Arc<dyn GetWishlistUseCase>,
        toggle_use_case: Arc<dyn ToggleWishlistUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            toggle_use_case,
        }
    }
}

/// Wishlist API
#[OpenApi]
impl WishlistApi {
    /// List wishlisted items
    ///
    /// Items are returned in id order.
    #[oai(path = "/wishlist", method = "get", tag = "ApiTags::Wishlist")]
    async fn get(&self) -> GetWishlistResponse {
        match self.get_use_case.execute().await {
            Ok(items) => {
                GetWishlistResponse::Ok(Json(items.into_iter().map(Into::into).collect()))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetWishlistResponse::InternalError(json)
            }
        }
    }

    /// Toggle an item
    ///
    /// Adds the item when absent, removes it when present.
    #[oai(path = "/wishlist/:id/toggle", method = "post", tag = "ApiTags::Wishlist")]
    async fn toggle(&self, id: Path<u32>) -> ToggleWishlistResponse {
        let params = ToggleWishlistParams {
            item_id: ItemId::new(id.0),
        };

        match self.toggle_use_case.execute(params).await {
            Ok(toggle) => ToggleWishlistResponse::Ok(Json(toggle.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => ToggleWishlistResponse::NotFound(json),
                    _ => ToggleWishlistResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetWishlistResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ItemResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ToggleWishlistResponse {
    #[oai(status = 200)]
    Ok(Json<WishlistToggleResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
