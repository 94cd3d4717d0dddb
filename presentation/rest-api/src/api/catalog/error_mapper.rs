use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::catalog::errors::CatalogError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CatalogError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            CatalogError::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
            CatalogError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
            CatalogError::NameEmpty
            | CatalogError::DuplicateItem(_)
            | CatalogError::UnknownCategory(_)
            | CatalogError::NegativePrice
            | CatalogError::PricePrecision
            | CatalogError::InvalidRating => (StatusCode::BAD_REQUEST, "ValidationError"),
        };

        (status, ErrorResponse::new(name, &self.to_string()))
    }
}
