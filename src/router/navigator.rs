//! Current-route state

use log::debug;

use crate::observable::{Observable, Subscription};

use super::route::Route;

/// Holds the current route and tells subscribers when it changes
///
/// `go` is unguarded; callers that need the session check go through
/// [`Router`](super::Router).
#[derive(Debug)]
pub struct Navigator {
    current: Observable<Route>,
}

impl Navigator {
    pub fn new(initial: Route) -> Self {
        Self {
            current: Observable::new(initial),
        }
    }

    /// Switch to `route`
    pub fn go(&self, route: Route) {
        debug!("event=navigate to={}", route);
        self.current.set(route);
    }

    pub fn current(&self) -> Route {
        self.current.get()
    }

    /// Observe route changes (replays the current route)
    pub fn subscribe(&self, callback: impl Fn(&Route) + Send + Sync + 'static) -> Subscription {
        self.current.subscribe(callback)
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Route::Login)
    }
}
