//! Authentication service

use log::info;

use crate::api::ApiClient;
use crate::error::ExpenseResult;
use crate::models::{LoginRequest, LoginResponse, RegistrationRequest, RegistrationResponse};
use crate::session::Authenticator;

/// Service for the public auth endpoints
pub struct AuthService<'a> {
    api: &'a ApiClient,
}

impl<'a> AuthService<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Create an account; the user still has to log in afterwards
    pub fn register(&self, request: &RegistrationRequest) -> ExpenseResult<RegistrationResponse> {
        let response: RegistrationResponse = self.api.post_public("/auth/register", request)?;
        info!("event=register status=ok");
        Ok(response)
    }

    /// Exchange credentials for a token
    ///
    /// Does not touch the session; [`SessionStore::login`] adopts the token.
    ///
    /// [`SessionStore::login`]: crate::session::SessionStore::login
    pub fn login(&self, credentials: &LoginRequest) -> ExpenseResult<LoginResponse> {
        self.api.post_public("/auth/login", credentials)
    }
}

impl Authenticator for AuthService<'_> {
    fn authenticate(&self, credentials: &LoginRequest) -> ExpenseResult<LoginResponse> {
        self.login(credentials)
    }
}
