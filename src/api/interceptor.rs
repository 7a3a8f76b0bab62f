//! Request and failure interceptors
//!
//! Interceptors run in registration order. `on_request` may modify the
//! outgoing request; `on_error` sees every failed call after it has been
//! classified.

use std::sync::Arc;

use log::warn;

use crate::error::ExpenseError;
use crate::notify::NotificationChannel;
use crate::session::{LogoutReason, SessionStore};

use super::transport::ApiRequest;

/// Message shown when the server rejects the session
pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please log in again.";

/// Message shown when no response was received
pub const UNREACHABLE_MESSAGE: &str = "Unable to reach the server";

/// A hook around every API call
pub trait Interceptor: Send + Sync {
    fn on_request(&self, _request: &mut ApiRequest) {}

    fn on_error(&self, _request: &ApiRequest, _error: &ExpenseError) {}
}

/// Attaches the session token to non-public requests
pub struct AuthInterceptor {
    session: Arc<SessionStore>,
}

impl AuthInterceptor {
    pub fn new(session: Arc<SessionStore>) -> Self {
        Self { session }
    }
}

impl Interceptor for AuthInterceptor {
    fn on_request(&self, request: &mut ApiRequest) {
        request.bearer = if request.public {
            None
        } else {
            self.session.token()
        };
    }
}

/// Reacts to failed calls
///
/// A rejected session ends the session (which redirects to login) and
/// raises one generic notification. Every other failure is reported through
/// the notification channel with a readable message.
pub struct ErrorInterceptor {
    session: Arc<SessionStore>,
    notifications: Arc<NotificationChannel>,
}

impl ErrorInterceptor {
    pub fn new(session: Arc<SessionStore>, notifications: Arc<NotificationChannel>) -> Self {
        Self {
            session,
            notifications,
        }
    }
}

impl Interceptor for ErrorInterceptor {
    fn on_error(&self, request: &ApiRequest, error: &ExpenseError) {
        if error.is_session_rejected() {
            warn!(
                "event=session_rejected method={} path={}",
                request.method, request.path
            );
            self.session.end_session(LogoutReason::Rejected);
            self.notifications.error(SESSION_EXPIRED_MESSAGE);
            return;
        }

        self.notifications.error(user_message(error));
    }
}

/// Human-readable text for a failed call
pub fn user_message(error: &ExpenseError) -> String {
    match error {
        ExpenseError::InvalidCredentials(message) => message.clone(),
        ExpenseError::Api { message, .. } => message.clone(),
        ExpenseError::Network(_) => UNREACHABLE_MESSAGE.to_string(),
        ExpenseError::SessionRejected { .. } => SESSION_EXPIRED_MESSAGE.to_string(),
        ExpenseError::BadResponse(_) => "The server sent an unexpected response".to_string(),
        other => other.to_string(),
    }
}
