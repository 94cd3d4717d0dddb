use async_trait::async_trait;

use business::domain::contact::errors::ContactError;
use business::domain::contact::model::ContactMessage;
use business::domain::contact::services::ContactMessageSender;

/// Stands in for the EmailJS sender when no account is configured.
pub struct DisabledContactSender;

#[async_trait]
impl ContactMessageSender for DisabledContactSender {
    async fn send(&self, _message: &ContactMessage) -> Result<(), ContactError> {
        tracing::warn!("Contact message dropped, EmailJS is not configured");
        Err(ContactError::NotConfigured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_report_not_configured() {
        let message = ContactMessage::new(
            "Ada".to_string(),
            "ada@example.com".to_string(),
            String::new(),
            "Hi".to_string(),
        )
        .unwrap();

        let result = DisabledContactSender.send(&message).await;

        assert_eq!(result.unwrap_err(), ContactError::NotConfigured);
    }
}
