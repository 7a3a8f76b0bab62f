//! Test fixtures: a scripted transport and a ready-made `App`

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use serde_json::Value;
use tempfile::TempDir;

use crate::api::{ApiRequest, ApiResponse, Transport};
use crate::app::App;
use crate::config::{ExpensePaths, Settings};
use crate::error::{ExpenseError, ExpenseResult};
use crate::notify::Notification;
use crate::observable::Subscription;

/// Replays queued responses in order and records every request
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    responses: Mutex<VecDeque<ExpenseResult<ApiResponse>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub(crate) fn respond(&self, status: u16, body: Value) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(ApiResponse::new(status, body.to_string())));
    }

    pub(crate) fn fail_network(&self) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(ExpenseError::Network("connection refused".into())));
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for ScriptedTransport {
    fn execute(&self, request: &ApiRequest) -> ExpenseResult<ApiResponse> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ExpenseError::Network("no scripted response".into())))
    }
}

/// An `App` over a temp directory and a scripted transport
pub(crate) struct TestApp {
    pub(crate) app: App,
    pub(crate) transport: Arc<ScriptedTransport>,
    subscriptions: Mutex<Vec<Subscription>>,
    pub(crate) temp: TempDir,
}

impl TestApp {
    pub(crate) fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp.path().to_path_buf());
        let transport = Arc::new(ScriptedTransport::default());
        let app = App::with_transport(paths, Settings::default(), transport.clone());
        Self {
            app,
            transport,
            subscriptions: Mutex::new(Vec::new()),
            temp,
        }
    }

    pub(crate) fn logged_in(token: &str) -> Self {
        let test_app = Self::new();
        test_app.app.session().adopt_token(token).unwrap();
        test_app
    }

    /// Collect every notification emitted from now on
    pub(crate) fn record_notifications(&self) -> Arc<Mutex<Vec<Notification>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let subscription = self
            .app
            .notifications()
            .subscribe(move |n| sink.lock().unwrap().push(n.clone()));
        self.subscriptions.lock().unwrap().push(subscription);
        seen
    }
}
