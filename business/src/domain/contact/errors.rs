#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("contact.name_empty")]
    NameEmpty,
    #[error("contact.email_invalid")]
    EmailInvalid,
    #[error("contact.message_empty")]
    MessageEmpty,
    #[error("contact.delivery_failed")]
    DeliveryFailed,
    #[error("contact.not_configured")]
    NotConfigured,
}
