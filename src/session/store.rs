//! Session store
//!
//! The single owner of the bearer token. Everything else reads it through
//! `current()`/`is_authenticated()` or observes it through `subscribe()`.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{info, warn};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{LoginRequest, LoginResponse};
use crate::observable::{Observable, Subscription};
use crate::router::{AuthState, Navigator, Route};
use crate::storage::{is_well_formed_token, PersistedSession, SessionFile};

use super::token::expiry_from_token;

/// Exchanges credentials for a token
pub trait Authenticator {
    fn authenticate(&self, credentials: &LoginRequest) -> ExpenseResult<LoginResponse>;
}

/// An active session
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Session {
    token: String,
    #[zeroize(skip)]
    expires_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        let token = token.into();
        let expires_at = expiry_from_token(&token);
        Self { token, expires_at }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Expiry taken from the token's `exp` claim; `None` for opaque tokens
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|deadline| now >= deadline)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoutReason {
    /// The user asked to log out
    User,
    /// The server answered 401/403 to an authenticated request
    Rejected,
    /// The token's `exp` claim passed
    Expired,
}

impl LogoutReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogoutReason::User => "user",
            LogoutReason::Rejected => "rejected",
            LogoutReason::Expired => "expired",
        }
    }
}

/// Owns the session and its persisted copy
pub struct SessionStore {
    state: Observable<Option<Session>>,
    file: SessionFile,
    navigator: Arc<Navigator>,
    audit: AuditLogger,
}

impl SessionStore {
    /// Create an unauthenticated store; call [`restore`](Self::restore) once
    /// at startup to pick up a persisted session
    pub fn new(file: SessionFile, navigator: Arc<Navigator>, audit: AuditLogger) -> Self {
        Self {
            state: Observable::new(None),
            file,
            navigator,
            audit,
        }
    }

    /// Adopt the persisted token, if any, without contacting the server
    ///
    /// A malformed session file is removed and the store stays logged out.
    /// Returns whether a session was restored.
    pub fn restore(&self) -> bool {
        match self.file.load() {
            Ok(Some(persisted)) => {
                let session = Session::new(persisted.token.as_str());
                info!(
                    "event=session_restore status=ok has_expiry={}",
                    session.expires_at().is_some()
                );
                self.state.set(Some(session));
                true
            }
            Ok(None) => {
                info!("event=session_restore status=empty");
                false
            }
            Err(e) => {
                warn!("event=session_restore status=discarded error={}", e);
                if let Err(e) = self.file.clear() {
                    warn!("event=session_clear status=error error={}", e);
                }
                false
            }
        }
    }

    /// Send `credentials` through `auth` and adopt the returned token
    ///
    /// On failure the store is left untouched and the error is returned.
    pub fn login(
        &self,
        auth: &dyn Authenticator,
        credentials: &LoginRequest,
    ) -> ExpenseResult<()> {
        let response = match auth.authenticate(credentials) {
            Ok(response) => response,
            Err(e) => {
                warn!("event=login status=error error={}", e);
                return Err(e);
            }
        };

        self.adopt_token(response.token.as_str())?;
        self.audit
            .record(&AuditEntry::login(Some(credentials.email.as_str())));
        info!("event=login status=ok");
        Ok(())
    }

    /// Persist and adopt `token`
    ///
    /// The token is written to disk before it becomes visible, so a
    /// subscriber never sees a session that would not survive a restart.
    pub fn adopt_token(&self, token: &str) -> ExpenseResult<()> {
        if token.trim().is_empty() {
            return Err(ExpenseError::BadResponse(
                "Login response did not contain a token".into(),
            ));
        }
        if !is_well_formed_token(token) {
            return Err(ExpenseError::BadResponse(
                "Login response contained a malformed token".into(),
            ));
        }

        self.file.save(&PersistedSession {
            token: token.to_string(),
        })?;
        self.state.set(Some(Session::new(token)));
        Ok(())
    }

    /// End the session at the user's request
    pub fn logout(&self) {
        self.end_session(LogoutReason::User);
    }

    /// End the session for `reason`
    ///
    /// Always clears the persisted file and redirects to the login view.
    /// Subscribers and the audit trail only hear about it when a session was
    /// actually active. Returns whether one was.
    pub fn end_session(&self, reason: LogoutReason) -> bool {
        let was_active = self.is_authenticated();

        if let Err(e) = self.file.clear() {
            warn!("event=session_clear status=error error={}", e);
        }

        if was_active {
            self.state.set(None);
            self.audit.record(&AuditEntry::logout(reason.as_str()));
            info!("event=logout status=ok reason={}", reason.as_str());
        }

        self.navigator.go(Route::Login);
        was_active
    }

    /// Log out if the token's expiry has passed at `now`
    ///
    /// Returns whether the session was ended.
    pub fn expire_if_due(&self, now: DateTime<Utc>) -> bool {
        let due = self
            .state
            .with(|session| session.as_ref().is_some_and(|s| s.is_expired(now)));

        if due {
            self.end_session(LogoutReason::Expired)
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<Session> {
        self.state.get()
    }

    /// The bearer token, if a session is active
    pub fn token(&self) -> Option<String> {
        self.state
            .with(|session| session.as_ref().map(|s| s.token().to_string()))
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(Option::is_some)
    }

    /// Deadline of the pending expiry, if any
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.state
            .with(|session| session.as_ref().and_then(Session::expires_at))
    }

    /// Observe session changes; replays the current state on subscribe
    pub fn subscribe(
        &self,
        callback: impl Fn(&Option<Session>) + Send + Sync + 'static,
    ) -> Subscription {
        self.state.subscribe(callback)
    }

    /// Number of live session subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.state.subscriber_count()
    }
}

impl AuthState for SessionStore {
    fn is_authenticated(&self) -> bool {
        SessionStore::is_authenticated(self)
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &self.is_authenticated())
            .field("file", self.file.path())
            .finish()
    }
}
