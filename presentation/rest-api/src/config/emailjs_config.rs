use emailjs::contact_sender::EmailJsAccount;

const DEFAULT_RECIPIENT_NAME: &str = "Portfolio Owner";

/// EmailJS account used by the contact form.
///
/// Environment variables:
/// - EMAILJS_SERVICE_ID, EMAILJS_TEMPLATE_ID, EMAILJS_PUBLIC_KEY: required to
///   enable the contact form
/// - EMAILJS_RECIPIENT_NAME: `to_name` template parameter (default: "Portfolio Owner")
///
/// Returns `None` when any required key is missing.
pub fn from_env() -> Option<EmailJsAccount> {
    from_lookup(|key| std::env::var(key).ok())
}

fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<EmailJsAccount> {
    let required = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    Some(EmailJsAccount {
        service_id: required("EMAILJS_SERVICE_ID")?,
        template_id: required("EMAILJS_TEMPLATE_ID")?,
        public_key: required("EMAILJS_PUBLIC_KEY")?,
        recipient_name: required("EMAILJS_RECIPIENT_NAME")
            .unwrap_or_else(|| DEFAULT_RECIPIENT_NAME.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn should_build_account_when_keys_present() {
        let account = from_lookup(lookup(&[
            ("EMAILJS_SERVICE_ID", "service_1"),
            ("EMAILJS_TEMPLATE_ID", "template_1"),
            ("EMAILJS_PUBLIC_KEY", "key_1"),
        ]))
        .unwrap();

        assert_eq!(account.service_id, "service_1");
        assert_eq!(account.recipient_name, DEFAULT_RECIPIENT_NAME);
    }

    #[test]
    fn should_disable_when_key_missing() {
        let account = from_lookup(lookup(&[
            ("EMAILJS_SERVICE_ID", "service_1"),
            ("EMAILJS_PUBLIC_KEY", "key_1"),
        ]));

        assert!(account.is_none());
    }
}
