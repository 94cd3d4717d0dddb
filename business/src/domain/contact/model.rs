use once_cell::sync::Lazy;
use regex::Regex;

use super::errors::ContactError;

static EMAIL_PATTERN: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// A message submitted through the portfolio contact form.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub body: String,
}

impl ContactMessage {
    pub fn new(
        name: String,
        email: String,
        subject: String,
        body: String,
    ) -> Result<Self, ContactError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(ContactError::NameEmpty);
        }

        let email = email.trim().to_string();
        let valid_email = EMAIL_PATTERN
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(&email));
        if !valid_email {
            return Err(ContactError::EmailInvalid);
        }

        if body.trim().is_empty() {
            return Err(ContactError::MessageEmpty);
        }

        Ok(Self {
            name,
            email,
            subject: subject.trim().to_string(),
            body,
        })
    }
}
