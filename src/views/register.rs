//! Registration view

use zeroize::Zeroizing;

use crate::app::App;
use crate::error::ExpenseResult;
use crate::models::RegistrationRequest;
use crate::router::Route;

use super::{ensure_valid, is_valid_email};

const MIN_PASSWORD_LEN: usize = 8;

pub struct RegisterView<'a> {
    app: &'a App,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: Zeroizing<String>,
    is_loading: bool,
}

impl<'a> RegisterView<'a> {
    pub fn new(app: &'a App) -> Self {
        Self {
            app,
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            password: Zeroizing::new(String::new()),
            is_loading: false,
        }
    }

    pub fn errors(&self) -> Vec<&'static str> {
        let mut errors = Vec::new();
        if self.first_name.trim().is_empty() {
            errors.push("First name is required");
        }
        if self.last_name.trim().is_empty() {
            errors.push("Last name is required");
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push("Email is required");
        } else if !is_valid_email(email) {
            errors.push("Please enter a valid email");
        }

        if self.password.is_empty() {
            errors.push("Password is required");
        } else if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.push("Password must be at least 8 characters");
        }
        errors
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Create the account and send the user to the login view
    pub fn submit(&mut self) -> ExpenseResult<()> {
        ensure_valid(self.errors())?;

        self.is_loading = true;
        let request = RegistrationRequest {
            email: self.email.trim().to_string(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            password: self.password.to_string(),
        };
        let result = self.app.auth_service().register(&request);
        self.is_loading = false;
        result?;

        self.app
            .notifications()
            .success("Registration successful. Please login.");
        self.app.router().navigate(Route::Login);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestApp;
    use serde_json::json;

    fn filled(app: &App) -> RegisterView<'_> {
        let mut view = RegisterView::new(app);
        view.first_name = "Ada".into();
        view.last_name = "Lovelace".into();
        view.email = "ada@example.com".into();
        view.password = Zeroizing::new("analytical".into());
        view
    }

    #[test]
    fn test_successful_registration_goes_to_login() {
        let app = TestApp::new();
        let alerts = app.record_notifications();
        app.transport
            .respond(201, json!({"message": "User registered successfully"}));
        app.app.router().navigate(Route::Register);

        let mut view = filled(&app.app);
        view.submit().unwrap();

        assert_eq!(app.app.router().current(), Route::Login);
        assert!(!app.app.session().is_authenticated());
        assert_eq!(
            alerts.lock().unwrap()[0].message,
            "Registration successful. Please login."
        );
    }

    #[test]
    fn test_short_password_rejected_locally() {
        let app = TestApp::new();
        let mut view = filled(&app.app);
        view.password = Zeroizing::new("short".into());

        assert_eq!(view.errors(), vec!["Password must be at least 8 characters"]);
        assert!(view.submit().is_err());
        assert!(app.transport.requests().is_empty());
    }

    #[test]
    fn test_all_fields_required() {
        let app = TestApp::new();
        let view = RegisterView::new(&app.app);
        assert_eq!(view.errors().len(), 4);
    }

    #[test]
    fn test_server_conflict_resets_loading() {
        let app = TestApp::new();
        app.transport
            .respond(409, json!({"error": "Email already registered"}));

        let mut view = filled(&app.app);
        let err = view.submit().unwrap_err();

        assert!(err.to_string().contains("Email already registered"));
        assert!(!view.is_loading());
    }
}
