//! Application context
//!
//! Builds every store, service handle and interceptor once and hands them
//! out by reference. There are no globals; views and CLI commands receive
//! the `App` explicitly.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::info;

use crate::api::{
    ApiClient, AuthInterceptor, ErrorInterceptor, HttpTransport, Transport,
    SESSION_EXPIRED_MESSAGE,
};
use crate::audit::AuditLogger;
use crate::config::{ExpensePaths, Settings};
use crate::error::ExpenseResult;
use crate::notify::NotificationChannel;
use crate::router::{AuthGuard, Navigator, Route, Router};
use crate::services::{AuthService, CategoryService, ExpenseService};
use crate::session::SessionStore;
use crate::storage::SessionFile;

/// Everything a view or command needs
pub struct App {
    paths: ExpensePaths,
    settings: Settings,
    session: Arc<SessionStore>,
    notifications: Arc<NotificationChannel>,
    router: Router,
    api: ApiClient,
    audit: AuditLogger,
}

impl App {
    /// Start against the configured API over HTTP
    pub fn bootstrap(paths: ExpensePaths, settings: Settings) -> ExpenseResult<Self> {
        let transport = HttpTransport::new(settings.api_url.clone(), settings.request_timeout())?;
        Ok(Self::with_transport(paths, settings, Arc::new(transport)))
    }

    /// Start with an explicit transport
    ///
    /// Restores the persisted session, drops it if its expiry already
    /// passed, then enters the default route through the guard.
    pub fn with_transport(
        paths: ExpensePaths,
        settings: Settings,
        transport: Arc<dyn Transport>,
    ) -> Self {
        let audit = AuditLogger::new(paths.audit_log());
        let navigator = Arc::new(Navigator::default());
        let notifications = Arc::new(NotificationChannel::new());
        let session = Arc::new(SessionStore::new(
            SessionFile::new(paths.session_file()),
            navigator.clone(),
            audit.clone(),
        ));

        let api = ApiClient::new(transport)
            .with_interceptor(Arc::new(AuthInterceptor::new(session.clone())))
            .with_interceptor(Arc::new(ErrorInterceptor::new(
                session.clone(),
                notifications.clone(),
            )));

        let router = Router::new(navigator, AuthGuard::new(session.clone()));

        let app = Self {
            paths,
            settings,
            session,
            notifications,
            router,
            api,
            audit,
        };

        app.session.restore();
        app.tick(Utc::now());
        app.router.navigate(Route::ExpenseList);
        info!(
            "event=app_ready authenticated={} route={}",
            app.session.is_authenticated(),
            app.router.current()
        );
        app
    }

    /// Periodic housekeeping: ends the session once its expiry has passed
    ///
    /// Returns whether the session was ended.
    pub fn tick(&self, now: DateTime<Utc>) -> bool {
        if self.session.expire_if_due(now) {
            self.notifications.error(SESSION_EXPIRED_MESSAGE);
            true
        } else {
            false
        }
    }

    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    pub fn notifications(&self) -> &Arc<NotificationChannel> {
        &self.notifications
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    pub fn auth_service(&self) -> AuthService<'_> {
        AuthService::new(&self.api)
    }

    pub fn expense_service(&self) -> ExpenseService<'_> {
        ExpenseService::new(&self.api, &self.audit)
    }

    pub fn category_service(&self) -> CategoryService<'_> {
        CategoryService::new(&self.api, &self.audit)
    }
}
