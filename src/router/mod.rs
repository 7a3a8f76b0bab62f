//! Navigation for the expense tracker client
//!
//! - `Route`: the route table and path parsing
//! - `Navigator`: observable current route
//! - `AuthGuard`: session check for protected routes
//! - `Router`: guarded navigation on top of both

mod guard;
mod navigator;
mod route;

use std::sync::Arc;

pub use guard::{AuthGuard, AuthState, GuardDecision};
pub use navigator::Navigator;
pub use route::Route;

/// Guarded navigation
#[derive(Debug, Clone)]
pub struct Router {
    navigator: Arc<Navigator>,
    guard: AuthGuard,
}

impl Router {
    pub fn new(navigator: Arc<Navigator>, guard: AuthGuard) -> Self {
        Self { navigator, guard }
    }

    /// Navigate to `route`, or to the guard's redirect target
    ///
    /// Returns the route actually entered.
    pub fn navigate(&self, route: Route) -> Route {
        let target = match self.guard.check(route) {
            GuardDecision::Allow => route,
            GuardDecision::Redirect(to) => to,
        };
        self.navigator.go(target);
        target
    }

    pub fn current(&self) -> Route {
        self.navigator.current()
    }

    pub fn navigator(&self) -> &Arc<Navigator> {
        &self.navigator
    }
}
