//! User-facing notifications
//!
//! - `Notification`: the `{kind, message}` value type
//! - `NotificationChannel`: best-effort broadcast to listeners
//!
//! The dismissal policy lives with the renderer's state in
//! `views::alert`.

pub mod channel;
pub mod notification;

pub use channel::NotificationChannel;
pub use notification::{Notification, NotificationKind};
