//! REST API access
//!
//! - `transport`: request/response types and the `reqwest` transport
//! - `interceptor`: token attachment and failure handling
//! - `client`: the interceptor-aware client used by the services

pub mod client;
pub mod interceptor;
pub mod transport;

pub use client::{classify, ApiClient};
pub use interceptor::{
    user_message, AuthInterceptor, ErrorInterceptor, Interceptor, SESSION_EXPIRED_MESSAGE,
    UNREACHABLE_MESSAGE,
};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, Transport};
