use reqwest::Client;

/// Shared EmailJS HTTP client configuration.
pub struct EmailJsClient {
    pub client: Client,
    pub base_url: String,
}

impl EmailJsClient {
    pub fn new() -> Self {
        Self::with_base_url("https://api.emailjs.com/api/v1.0".to_string())
    }

    pub fn with_base_url(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Returns the send-email endpoint URL.
    pub fn send_url(&self) -> String {
        format!("{}/email/send", self.base_url)
    }
}

impl Default for EmailJsClient {
    fn default() -> Self {
        Self::new()
    }
}
