#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config.invalid: {key}={value}")]
    Invalid { key: &'static str, value: String },
}
