use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            CartError::UnknownItem(_) => (StatusCode::NOT_FOUND, "NotFound"),
            CartError::InvalidQuantity(_) | CartError::NotForSale(_) => {
                (StatusCode::BAD_REQUEST, "ValidationError")
            }
            CartError::OutOfStock(_) => (StatusCode::CONFLICT, "Conflict"),
        };

        (status, ErrorResponse::new(name, &self.to_string()))
    }
}
