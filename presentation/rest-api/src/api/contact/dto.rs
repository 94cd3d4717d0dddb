use poem_openapi::Object;

use business::domain::contact::use_cases::submit::SubmitContactMessageParams;

#[derive(Debug, Clone, Object)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[oai(default)]
    pub subject: String,
    pub message: String,
}

impl From<ContactRequest> for SubmitContactMessageParams {
    fn from(request: ContactRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            subject: request.subject,
            body: request.message,
        }
    }
}
