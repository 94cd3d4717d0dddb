use async_trait::async_trait;

use crate::domain::contact::errors::ContactError;

pub struct SubmitContactMessageParams {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub body: String,
}

#[async_trait]
pub trait SubmitContactMessageUseCase: Send + Sync {
    async fn execute(&self, params: SubmitContactMessageParams) -> Result<(), ContactError>;
}
