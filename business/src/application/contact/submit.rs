use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::contact::errors::ContactError;
use crate::domain::contact::model::ContactMessage;
use crate::domain::contact::services::ContactMessageSender;
use crate::domain::contact::use_cases::submit::{
    SubmitContactMessageParams, SubmitContactMessageUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::notifier::{Notification, Notifier};

pub struct SubmitContactMessageUseCaseImpl {
    pub sender: Arc<dyn ContactMessageSender>,
    pub notifier: Arc<dyn Notifier>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SubmitContactMessageUseCase for SubmitContactMessageUseCaseImpl {
    async fn execute(&self, params: SubmitContactMessageParams) -> Result<(), ContactError> {
        let message =
            ContactMessage::new(params.name, params.email, params.subject, params.body)?;
        self.logger
            .info(&format!("Sending contact message from {}", message.email));

        match self.sender.send(&message).await {
            Ok(()) => {
                self.logger.info("Contact message delivered");
                self.notifier.notify(Notification::new(
                    "Message Sent Successfully!",
                    "Thank you for your message. I'll get back to you soon.",
                ));
                Ok(())
            }
            Err(err) => {
                self.logger
                    .error(&format!("Contact message delivery failed: {}", err));
                self.notifier.notify(Notification::destructive(
                    "Error",
                    "Failed to send message. Please try again or contact me directly.",
                ));
                Err(err)
            }
        }
    }
}
