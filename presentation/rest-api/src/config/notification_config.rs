use notifier::queue::DEFAULT_CAPACITY;

use super::error::ConfigError;

/// Environment variables:
/// - NOTIFICATION_QUEUE_CAPACITY: pending notifications kept before the
///   oldest is dropped (default: 50)
#[derive(Debug, Clone)]
pub struct NotificationConfig {
    pub capacity: usize,
}

impl NotificationConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::parse(std::env::var("NOTIFICATION_QUEUE_CAPACITY").ok().as_deref())
    }

    fn parse(raw: Option<&str>) -> Result<Self, ConfigError> {
        let capacity = match raw {
            None => DEFAULT_CAPACITY,
            Some(value) => match value.trim().parse::<usize>() {
                Ok(capacity) if capacity > 0 => capacity,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "NOTIFICATION_QUEUE_CAPACITY",
                        value: value.to_string(),
                    });
                }
            },
        };
        Ok(Self { capacity })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_capacity_when_unset() {
        assert_eq!(NotificationConfig::parse(None).unwrap().capacity, DEFAULT_CAPACITY);
    }

    #[test]
    fn should_parse_capacity() {
        assert_eq!(NotificationConfig::parse(Some(" 10 ")).unwrap().capacity, 10);
    }

    #[test]
    fn should_reject_zero_or_garbage() {
        assert!(NotificationConfig::parse(Some("0")).is_err());
        assert!(NotificationConfig::parse(Some("many")).is_err());
    }
}
