//! API client
//!
//! Runs every call through the interceptor chain, classifies non-2xx
//! responses into [`ExpenseError`] variants and decodes JSON bodies.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ExpenseError, ExpenseResult};

use super::interceptor::Interceptor;
use super::transport::{ApiRequest, ApiResponse, Transport};

/// Entry point for all REST calls
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    interceptors: Vec<Arc<dyn Interceptor>>,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            interceptors: Vec::new(),
        }
    }

    /// Append an interceptor to the chain
    pub fn with_interceptor(mut self, interceptor: Arc<dyn Interceptor>) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    /// Perform one call and return the successful response
    pub fn send(&self, request: ApiRequest) -> ExpenseResult<ApiResponse> {
        self.run(request, Ok)
    }

    /// Perform one call and decode the JSON body
    pub fn fetch<T: DeserializeOwned>(&self, request: ApiRequest) -> ExpenseResult<T> {
        self.run(request, |response| response.json())
    }

    pub fn get<T: DeserializeOwned>(&self, path: &str) -> ExpenseResult<T> {
        self.fetch(ApiRequest::get(path))
    }

    pub fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> ExpenseResult<T> {
        self.fetch(ApiRequest::post(path, serde_json::to_value(body)?))
    }

    pub fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> ExpenseResult<T> {
        self.fetch(ApiRequest::put(path, serde_json::to_value(body)?))
    }

    /// DELETE; any response body is ignored
    pub fn delete(&self, path: &str) -> ExpenseResult<()> {
        self.send(ApiRequest::delete(path)).map(|_| ())
    }

    /// POST to a public endpoint, without the session token
    pub fn post_public<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ExpenseResult<T> {
        self.fetch(ApiRequest::post(path, serde_json::to_value(body)?).public())
    }

    fn run<T>(
        &self,
        mut request: ApiRequest,
        decode: impl FnOnce(ApiResponse) -> ExpenseResult<T>,
    ) -> ExpenseResult<T> {
        for interceptor in &self.interceptors {
            interceptor.on_request(&mut request);
        }

        let started = Instant::now();
        let result = self
            .transport
            .execute(&request)
            .and_then(|response| {
                if response.is_success() {
                    Ok(response)
                } else {
                    Err(classify(&request, &response))
                }
            })
            .and_then(decode);
        let elapsed_ms = started.elapsed().as_millis();

        match &result {
            Ok(_) => debug!(
                "event=http method={} path={} status=ok elapsed_ms={}",
                request.method, request.path, elapsed_ms
            ),
            Err(e) => {
                warn!(
                    "event=http method={} path={} status=error elapsed_ms={} error={}",
                    request.method, request.path, elapsed_ms, e
                );
                for interceptor in &self.interceptors {
                    interceptor.on_error(&request, e);
                }
            }
        }

        result
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("interceptors", &self.interceptors.len())
            .finish()
    }
}

/// Map a non-2xx response to an error
///
/// 401/403 mean bad credentials on a public endpoint and a rejected session
/// everywhere else.
pub fn classify(request: &ApiRequest, response: &ApiResponse) -> ExpenseError {
    let message = response.error_message();
    match response.status {
        401 | 403 if request.public => ExpenseError::InvalidCredentials(
            message.unwrap_or_else(|| "Invalid credentials".to_string()),
        ),
        401 | 403 => ExpenseError::SessionRejected {
            status: response.status,
        },
        status => ExpenseError::Api {
            status,
            message: message.unwrap_or_else(|| format!("Request failed (HTTP {})", status)),
        },
    }
}
