use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::cart::errors::CartError;
use business::domain::cart::use_cases::add::{AddToCartParams, AddToCartUseCase};
use business::domain::cart::use_cases::clear::ClearCartUseCase;
use business::domain::cart::use_cases::get::GetCartUseCase;
use business::domain::cart::use_cases::remove::{RemoveFromCartParams, RemoveFromCartUseCase};
use business::domain::cart::use_cases::set_quantity::{
    SetCartQuantityParams, SetCartQuantityUseCase,
};
use business::domain::catalog::value_objects::ItemId;

use crate::api::cart::dto::{AddToCartRequest, CartResponse, ClearCartResponse, SetQuantityRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    get_use_case: Arc<dyn GetCartUseCase>,
    add_use_case: Arc<dyn AddToCartUseCase>,
    set_quantity_use_case: Arc<dyn SetCartQuantityUseCase>,
    remove_use_case: Arc<dyn RemoveFromCartUseCase>,
    clear_use_case: Arc<dyn ClearCartUseCase>,
}

impl CartApi {
    pub fn new(
        get_use_case: Arc<dyn GetCartUseCase>,
        add_use_case: Arc<dyn AddToCartUseCase>,
        set_quantity_use_case: Arc<dyn SetCartQuantityUseCase>,
        remove_use_case: Arc<dyn RemoveFromCartUseCase>,
        clear_use_case: Arc<dyn ClearCartUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            add_use_case,
            set_quantity_use_case,
            remove_use_case,
            clear_use_case,
        }
    }
}

/// Shopping cart API
///
/// Quantities are kept per shop item. Totals are computed from catalog prices.
#[OpenApi]
impl CartApi {
    /// Get the cart
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get(&self) -> CartMutationResponse {
        match self.get_use_case.execute().await {
            Ok(summary) => CartMutationResponse::Ok(Json(summary.into())),
            Err(err) => err.into(),
        }
    }

    /// Add one unit of an item
    #[oai(path = "/cart/items", method = "post", tag = "ApiTags::Cart")]
    async fn add(&self, body: Json<AddToCartRequest>) -> CartMutationResponse {
        let params = AddToCartParams {
            item_id: ItemId::new(body.0.item_id),
        };

        match self.add_use_case.execute(params).await {
            Ok(summary) => CartMutationResponse::Ok(Json(summary.into())),
            Err(err) => err.into(),
        }
    }

    /// Set the quantity of an item
    ///
    /// A quantity of zero removes the line. Negative quantities are rejected.
    #[oai(path = "/cart/items/:id", method = "put", tag = "ApiTags::Cart")]
    async fn set_quantity(
        &self,
        id: Path<u32>,
        body: Json<SetQuantityRequest>,
    ) -> CartMutationResponse {
        let params = SetCartQuantityParams {
            item_id: ItemId::new(id.0),
            quantity: body.0.quantity,
        };

        match self.set_quantity_use_case.execute(params).await {
            Ok(summary) => CartMutationResponse::Ok(Json(summary.into())),
            Err(err) => err.into(),
        }
    }

    /// Remove an item from the cart
    #[oai(path = "/cart/items/:id", method = "delete", tag = "ApiTags::Cart")]
    async fn remove(&self, id: Path<u32>) -> CartMutationResponse {
        let params = RemoveFromCartParams {
            item_id: ItemId::new(id.0),
        };

        match self.remove_use_case.execute(params).await {
            Ok(summary) => CartMutationResponse::Ok(Json(summary.into())),
            Err(err) => err.into(),
        }
    }

    /// Empty the cart
    #[oai(path = "/cart", method = "delete", tag = "ApiTags::Cart")]
    async fn clear(&self) -> ClearCartApiResponse {
        match self.clear_use_case.execute().await {
            Ok(count) => ClearCartApiResponse::Ok(Json(ClearCartResponse {
                count: count as u64,
            })),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ClearCartApiResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartMutationResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl From<CartError> for CartMutationResponse {
    fn from(err: CartError) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => CartMutationResponse::BadRequest(json),
            404 => CartMutationResponse::NotFound(json),
            409 => CartMutationResponse::Conflict(json),
            _ => CartMutationResponse::InternalError(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ClearCartApiResponse {
    #[oai(status = 200)]
    Ok(Json<ClearCartResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
