use chrono::{DateTime, Utc};
use poem_openapi::Object;
use uuid::Uuid;

use business::domain::notifier::Notification;

#[derive(Debug, Clone, Object)]
pub struct NotificationResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// `default` or `destructive`
    pub variant: String,
    pub created_at: DateTime<Utc>,
}

impl From<Notification> for NotificationResponse {
    fn from(notification: Notification) -> Self {
        Self {
            id: notification.id,
            title: notification.title,
            description: notification.description,
            variant: notification.variant.to_string(),
            created_at: notification.created_at,
        }
    }
}
