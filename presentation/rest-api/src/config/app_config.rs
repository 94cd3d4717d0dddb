use super::{
    catalog_config::CatalogConfig, cors_config, emailjs_config, error::ConfigError,
    notification_config::NotificationConfig, server_config::ServerConfig,
};
use emailjs::contact_sender::EmailJsAccount;
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub catalog: CatalogConfig,
    pub notifications: NotificationConfig,
    pub emailjs: Option<EmailJsAccount>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            catalog: CatalogConfig::from_env(),
            notifications: NotificationConfig::from_env()?,
            emailjs: emailjs_config::from_env(),
        })
    }
}
