use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use notifier::queue::QueuedNotifier;

use crate::api::notifications::dto::NotificationResponse;
use crate::api::tags::ApiTags;

pub struct NotificationApi {
    queue: Arc<QueuedNotifier>,
}

impl NotificationApi {
    pub fn new(queue: Arc<QueuedNotifier>) -> Self {
        Self { queue }
    }
}

/// Pending notifications API
#[OpenApi]
impl NotificationApi {
    /// Take pending notifications
    ///
    /// Returns every queued notification, oldest first, and empties the queue.
    #[oai(path = "/notifications", method = "get", tag = "ApiTags::Notifications")]
    async fn drain(&self) -> Json<Vec<NotificationResponse>> {
        Json(self.queue.drain().into_iter().map(Into::into).collect())
    }
}
