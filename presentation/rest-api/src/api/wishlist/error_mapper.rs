use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::wishlist::errors::WishlistError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for WishlistError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            WishlistError::UnknownItem(_) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new("NotFound", &self.to_string()),
            ),
        }
    }
}
