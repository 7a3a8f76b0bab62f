//! Notification channel
//!
//! Decouples message producers (services, views, the HTTP error
//! interceptor) from the single alert renderer. Delivery is best effort: a
//! message emitted while nobody listens is dropped.

use log::debug;

use crate::observable::{Broadcast, Subscription};

use super::notification::{Notification, NotificationKind};

/// Fire-and-forget publisher of [`Notification`]s
#[derive(Debug, Default)]
pub struct NotificationChannel {
    topic: Broadcast<Notification>,
}

impl NotificationChannel {
    /// Create a channel with no listeners
    pub fn new() -> Self {
        Self::default()
    }

    /// Broadcast a message to the current listeners
    ///
    /// Returns how many listeners received it.
    pub fn emit(&self, kind: NotificationKind, message: impl Into<String>) -> usize {
        let notification = Notification::new(kind, message);
        let delivered = self.topic.emit(&notification);
        debug!(
            "event=notify kind={} delivered={}",
            notification.kind.title().to_ascii_lowercase(),
            delivered
        );
        delivered
    }

    pub fn success(&self, message: impl Into<String>) -> usize {
        self.emit(NotificationKind::Success, message)
    }

    pub fn error(&self, message: impl Into<String>) -> usize {
        self.emit(NotificationKind::Error, message)
    }

    pub fn info(&self, message: impl Into<String>) -> usize {
        self.emit(NotificationKind::Info, message)
    }

    pub fn warning(&self, message: impl Into<String>) -> usize {
        self.emit(NotificationKind::Warning, message)
    }

    /// Listen for notifications until the returned guard is dropped
    pub fn subscribe(
        &self,
        listener: impl Fn(&Notification) + Send + Sync + 'static,
    ) -> Subscription {
        self.topic.subscribe(listener)
    }

    /// Number of active listeners
    pub fn listener_count(&self) -> usize {
        self.topic.subscriber_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_emit_without_listener_is_dropped() {
        let channel = NotificationChannel::new();
        assert_eq!(channel.success("nobody hears this"), 0);
    }

    #[test]
    fn test_listener_receives_kind_and_message() {
        let channel = NotificationChannel::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let _sub = channel.subscribe(move |n| sink.lock().unwrap().push(n.clone()));

        channel.warning("Careful");
        channel.error("Broken");

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], Notification::warning("Careful"));
        assert_eq!(seen[1].kind, NotificationKind::Error);
    }

    #[test]
    fn test_late_listener_misses_earlier_messages() {
        let channel = NotificationChannel::new();
        channel.info("early");

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let _sub = channel.subscribe(move |n| sink.lock().unwrap().push(n.message.clone()));
        channel.info("late");

        assert_eq!(*seen.lock().unwrap(), vec!["late".to_string()]);
    }
}
