use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use business::domain::notifier::{Notification, Notifier};
use tracing::info;

pub const DEFAULT_CAPACITY: usize = 50;

/// Notifier that keeps the most recent notifications until the presentation
/// layer drains them. When full, the oldest notification is dropped.
pub struct QueuedNotifier {
    capacity: usize,
    queue: Mutex<VecDeque<Notification>>,
}

impl QueuedNotifier {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            queue: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Takes every pending notification, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain(..)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for QueuedNotifier {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl Notifier for QueuedNotifier {
    fn notify(&self, notification: Notification) {
        info!(
            target: "storefront::notifications",
            title = %notification.title,
            variant = %notification.variant,
            "{}",
            notification.description
        );

        let mut queue = self.queue.lock().unwrap_or_else(PoisonError::into_inner);
        if queue.len() == self.capacity {
            queue.pop_front();
        }
        queue.push_back(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_notifications_in_emission_order() {
        let notifier = QueuedNotifier::new(10);
        notifier.notify(Notification::new("Added to Cart", "first"));
        notifier.notify(Notification::new("Cart Updated", "second"));

        let drained = notifier.drain();

        let titles: Vec<&str> = drained.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["Added to Cart", "Cart Updated"]);
    }

    #[test]
    fn should_be_empty_after_drain() {
        let notifier = QueuedNotifier::default();
        notifier.notify(Notification::new("Added to Wishlist", "Item added to your wishlist."));

        assert_eq!(notifier.len(), 1);
        notifier.drain();
        assert!(notifier.is_empty());
        assert!(notifier.drain().is_empty());
    }

    #[test]
    fn should_drop_oldest_when_full() {
        let notifier = QueuedNotifier::new(2);
        notifier.notify(Notification::new("one", ""));
        notifier.notify(Notification::new("two", ""));
        notifier.notify(Notification::new("three", ""));

        let titles: Vec<String> = notifier.drain().into_iter().map(|n| n.title).collect();
        assert_eq!(titles, vec!["two", "three"]);
    }

    #[test]
    fn should_keep_at_least_one_slot() {
        let notifier = QueuedNotifier::new(0);
        notifier.notify(Notification::new("only", ""));
        notifier.notify(Notification::new("latest", ""));

        let drained = notifier.drain();
        assert_eq!(drained.len(), 1);
        assert_eq!(drained[0].title, "latest");
    }
}
