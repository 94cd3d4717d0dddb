use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::contact::errors::ContactError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ContactError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            ContactError::NameEmpty | ContactError::EmailInvalid | ContactError::MessageEmpty => {
                (StatusCode::BAD_REQUEST, "ValidationError")
            }
            ContactError::DeliveryFailed => (StatusCode::BAD_GATEWAY, "DeliveryFailed"),
            ContactError::NotConfigured => (StatusCode::SERVICE_UNAVAILABLE, "NotConfigured"),
        };

        (status, ErrorResponse::new(name, &self.to_string()))
    }
}
