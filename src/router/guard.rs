//! Route guard
//!
//! Allows a protected route only while a session is active. The check is
//! synchronous and never touches the network.

use std::sync::Arc;

use log::info;

use super::route::Route;

/// Anything that can answer "is there an active session?"
pub trait AuthState: Send + Sync {
    fn is_authenticated(&self) -> bool;
}

/// Outcome of a guard check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(Route),
}

/// Denies protected routes to unauthenticated users
#[derive(Clone)]
pub struct AuthGuard {
    auth: Arc<dyn AuthState>,
}

impl AuthGuard {
    pub fn new(auth: Arc<dyn AuthState>) -> Self {
        Self { auth }
    }

    /// Decide whether `route` may be entered
    pub fn check(&self, route: Route) -> GuardDecision {
        if !route.requires_auth() || self.auth.is_authenticated() {
            return GuardDecision::Allow;
        }

        info!("event=guard_redirect from={} to={}", route, Route::Login);
        GuardDecision::Redirect(Route::Login)
    }
}

impl std::fmt::Debug for AuthGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthGuard")
            .field("authenticated", &self.auth.is_authenticated())
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    /// Switchable auth state for router tests
    #[derive(Default)]
    pub(crate) struct FakeAuth(pub AtomicBool);

    impl AuthState for FakeAuth {
        fn is_authenticated(&self) -> bool {
            self.0.load(Ordering::SeqCst)
        }
    }

    #[test]
    fn test_public_routes_always_allowed() {
        let guard = AuthGuard::new(Arc::new(FakeAuth::default()));
        assert_eq!(guard.check(Route::Login), GuardDecision::Allow);
        assert_eq!(guard.check(Route::Register), GuardDecision::Allow);
    }

    #[test]
    fn test_protected_route_redirects_when_logged_out() {
        let auth = Arc::new(FakeAuth::default());
        let guard = AuthGuard::new(auth.clone());

        assert_eq!(
            guard.check(Route::ExpenseList),
            GuardDecision::Redirect(Route::Login)
        );

        auth.0.store(true, Ordering::SeqCst);
        assert_eq!(guard.check(Route::ExpenseList), GuardDecision::Allow);
    }
}
