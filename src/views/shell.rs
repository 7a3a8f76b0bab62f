//! Application shell (header and sidebar chrome)

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::app::App;
use crate::observable::Subscription;

/// Shows navigation chrome only while a session is active
pub struct ShellView<'a> {
    app: &'a App,
    show_navigation: Arc<AtomicBool>,
    _subscription: Subscription,
}

impl<'a> ShellView<'a> {
    pub fn new(app: &'a App) -> Self {
        let show_navigation = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&show_navigation);
        let subscription = app
            .session()
            .subscribe(move |session| flag.store(session.is_some(), Ordering::SeqCst));

        Self {
            app,
            show_navigation,
            _subscription: subscription,
        }
    }

    pub fn show_navigation(&self) -> bool {
        self.show_navigation.load(Ordering::SeqCst)
    }

    /// Header logout button
    pub fn logout(&self) {
        self.app.session().logout();
    }
}
