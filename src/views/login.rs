//! Login view

use zeroize::Zeroizing;

use crate::app::App;
use crate::error::ExpenseResult;
use crate::models::LoginRequest;
use crate::router::Route;

use super::{ensure_valid, is_valid_email};

pub struct LoginView<'a> {
    app: &'a App,
    pub email: String,
    pub password: Zeroizing<String>,
    is_loading: bool,
}

impl<'a> LoginView<'a> {
    pub fn new(app: &'a App) -> Self {
        Self {
            app,
            email: String::new(),
            password: Zeroizing::new(String::new()),
            is_loading: false,
        }
    }

    /// Field errors for the current form values
    pub fn errors(&self) -> Vec<&'static str> {
        let mut errors = Vec::new();
        let email = self.email.trim();
        if email.is_empty() {
            errors.push("Email is required");
        } else if !is_valid_email(email) {
            errors.push("Please enter a valid email");
        }
        if self.password.is_empty() {
            errors.push("Password is required");
        }
        errors
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Log in and move to the expense list
    ///
    /// On failure the form keeps its values so the user can retry.
    pub fn submit(&mut self) -> ExpenseResult<()> {
        ensure_valid(self.errors())?;

        self.is_loading = true;
        let credentials = LoginRequest::new(self.email.trim(), self.password.as_str());
        let result = self
            .app
            .session()
            .login(&self.app.auth_service(), &credentials);
        self.is_loading = false;
        result?;

        self.app.notifications().success("Login successful");
        self.app.router().navigate(Route::ExpenseList);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExpenseError;
    use crate::testing::TestApp;
    use serde_json::json;

    fn fill<'a>(view: &mut LoginView<'a>, email: &str, password: &str) {
        view.email = email.into();
        view.password = Zeroizing::new(password.into());
    }

    #[test]
    fn test_successful_login() {
        let app = TestApp::new();
        let alerts = app.record_notifications();
        app.transport.respond(200, json!({"token": "abc"}));

        let mut view = LoginView::new(&app.app);
        fill(&mut view, "a@b.com", "secret1");
        view.submit().unwrap();

        assert!(app.app.session().is_authenticated());
        assert_eq!(app.app.session().token().as_deref(), Some("abc"));
        let stored = std::fs::read_to_string(app.app.paths().session_file()).unwrap();
        assert_eq!(stored, r#"{"token":"abc"}"#);
        assert_eq!(app.app.router().current(), Route::ExpenseList);
        assert_eq!(alerts.lock().unwrap()[0].message, "Login successful");
        assert!(!view.is_loading());
    }

    #[test]
    fn test_invalid_form_never_sends() {
        let app = TestApp::new();
        let mut view = LoginView::new(&app.app);
        fill(&mut view, "not-an-email", "");

        assert_eq!(
            view.errors(),
            vec!["Please enter a valid email", "Password is required"]
        );
        assert!(view.submit().unwrap_err().is_validation());
        assert!(app.transport.requests().is_empty());
    }

    #[test]
    fn test_rejected_credentials_keep_form() {
        let app = TestApp::new();
        app.transport
            .respond(401, json!({"error": "Invalid credentials"}));

        let mut view = LoginView::new(&app.app);
        fill(&mut view, "a@b.com", "wrong");
        let err = view.submit().unwrap_err();

        assert!(matches!(err, ExpenseError::InvalidCredentials(_)));
        assert!(!app.app.session().is_authenticated());
        assert!(!view.is_loading());
        assert_eq!(view.email, "a@b.com");
        assert_eq!(app.app.router().current(), Route::Login);
    }

    #[test]
    fn test_unusable_token_is_reported_and_not_stored() {
        let app = TestApp::new();
        let alerts = app.record_notifications();
        app.transport.respond(200, json!({"token": "abc\ndef"}));

        let mut view = LoginView::new(&app.app);
        fill(&mut view, "a@b.com", "secret1");
        let err = view.submit().unwrap_err();

        assert!(matches!(err, ExpenseError::BadResponse(_)));
        assert!(!app.app.session().is_authenticated());
        assert!(!app.app.paths().session_file().exists());
        assert_eq!(app.app.router().current(), Route::Login);
        let alerts = alerts.lock().unwrap();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].message, "The server sent an unexpected response");
    }
}
