//! Alert view
//!
//! Shows at most one notification. A new notification replaces the current
//! one and restarts the dismissal clock. Non-error notifications disappear
//! once `dismiss_after` has elapsed; errors stay until dismissed or replaced.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use crate::notify::{Notification, NotificationChannel};
use crate::observable::Subscription;

#[derive(Debug, Default)]
struct Shown {
    current: Option<(Notification, Instant)>,
}

/// Renderer state for the notification channel
#[derive(Debug)]
pub struct AlertView {
    shown: Arc<Mutex<Shown>>,
    dismiss_after: Duration,
    _subscription: Subscription,
}

impl AlertView {
    /// Start listening on `channel`
    pub fn new(channel: &NotificationChannel, dismiss_after: Duration) -> Self {
        let shown = Arc::new(Mutex::new(Shown::default()));
        let sink = Arc::clone(&shown);
        let subscription = channel.subscribe(move |notification| {
            let mut shown = sink.lock().unwrap_or_else(PoisonError::into_inner);
            shown.current = Some((notification.clone(), Instant::now()));
        });

        Self {
            shown,
            dismiss_after,
            _subscription: subscription,
        }
    }

    /// The notification visible at `now`, applying the dismissal policy
    pub fn visible(&self, now: Instant) -> Option<Notification> {
        let mut shown = self.shown.lock().unwrap_or_else(PoisonError::into_inner);

        let expired = match &shown.current {
            Some((notification, since)) => {
                notification.kind.auto_dismisses()
                    && now.saturating_duration_since(*since) >= self.dismiss_after
            }
            None => false,
        };
        if expired {
            shown.current = None;
        }

        shown.current.as_ref().map(|(notification, _)| notification.clone())
    }

    /// Close the current notification
    pub fn dismiss(&self) {
        self.shown
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .current = None;
    }
}
