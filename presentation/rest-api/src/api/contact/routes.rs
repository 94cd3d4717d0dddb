use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::contact::use_cases::submit::SubmitContactMessageUseCase;

use crate::api::contact::dto::ContactRequest;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct ContactApi {
    submit_use_case: Arc<dyn SubmitContactMessageUseCase>,
}

impl ContactApi {
    pub fn new(submit_use_case: Arc<dyn SubmitContactMessageUseCase>) -> Self {
        Self { submit_use_case }
    }
}

/// Contact form API
#[OpenApi]
impl ContactApi {
    /// Send a contact message
    ///
    /// Validates the form and relays it through EmailJS. The outcome is also
    /// published as a notification.
    #[oai(path = "/contact", method = "post", tag = "ApiTags::Contact")]
    async fn submit(&self, body: Json<ContactRequest>) -> SubmitContactResponse {
        match self.submit_use_case.execute(body.0.into()).await {
            Ok(()) => SubmitContactResponse::Accepted,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SubmitContactResponse::BadRequest(json),
                    502 => SubmitContactResponse::BadGateway(json),
                    _ => SubmitContactResponse::ServiceUnavailable(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SubmitContactResponse {
    #[oai(status = 202)]
    Accepted,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}
