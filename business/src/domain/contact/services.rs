use async_trait::async_trait;

use super::errors::ContactError;
use super::model::ContactMessage;

/// Service port for delivering contact messages through a third-party email service.
#[async_trait]
pub trait ContactMessageSender: Send + Sync {
    async fn send(&self, message: &ContactMessage) -> Result<(), ContactError>;
}
