use async_trait::async_trait;
use serde::Serialize;

use business::domain::contact::errors::ContactError;
use business::domain::contact::model::ContactMessage;
use business::domain::contact::services::ContactMessageSender;

use crate::client::EmailJsClient;

/// Account settings identifying the EmailJS service and template to use.
#[derive(Debug, Clone)]
pub struct EmailJsAccount {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub recipient_name: String,
}

#[derive(Debug, Serialize, PartialEq)]
struct TemplateParams<'a> {
    from_name: &'a str,
    from_email: &'a str,
    subject: &'a str,
    message: &'a str,
    to_name: &'a str,
}

#[derive(Debug, Serialize, PartialEq)]
struct SendEmailRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

pub struct EmailJsContactSender {
    client: EmailJsClient,
    account: EmailJsAccount,
}

impl EmailJsContactSender {
    pub fn new(client: EmailJsClient, account: EmailJsAccount) -> Self {
        Self { client, account }
    }

    fn build_request<'a>(&'a self, message: &'a ContactMessage) -> SendEmailRequest<'a> {
        SendEmailRequest {
            service_id: &self.account.service_id,
            template_id: &self.account.template_id,
            user_id: &self.account.public_key,
            template_params: TemplateParams {
                from_name: &message.name,
                from_email: &message.email,
                subject: &message.subject,
                message: &message.body,
                to_name: &self.account.recipient_name,
            },
        }
    }
}

#[async_trait]
impl ContactMessageSender for EmailJsContactSender {
    async fn send(&self, message: &ContactMessage) -> Result<(), ContactError> {
        let body = self.build_request(message);

        let response = self
            .client
            .client
            .post(self.client.send_url())
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "EmailJS request failed");
                ContactError::DeliveryFailed
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, detail = %detail, "EmailJS rejected the message");
            return Err(ContactError::DeliveryFailed);
        }

        Ok(())
    }
}
