//! Custom error types for the expense tracker client
//!
//! Every failure the client can observe maps onto one variant of
//! [`ExpenseError`]. The variants follow the client's failure taxonomy:
//! local validation, rejected credentials, rejected session, and generic
//! server or network failures.

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Form-level validation errors; never reach the network
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Credentials rejected by a public endpoint (login, registration)
    #[error("Authentication failed: {0}")]
    InvalidCredentials(String),

    /// The server rejected the session token on an authenticated request
    #[error("Session rejected by server (HTTP {status})")]
    SessionRejected { status: u16 },

    /// Any other non-success response from the API
    #[error("Server error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// A success response whose body the client could not use
    #[error("Unexpected response: {0}")]
    BadResponse(String),

    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// Navigation was denied because no session is active
    #[error("Not logged in")]
    NotAuthenticated,

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ExpenseError {
    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
            || matches!(self, Self::Api { status: 404, .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if the server rejected the current session
    ///
    /// These failures are handled globally (forced logout), so views must
    /// not report them a second time.
    pub fn is_session_rejected(&self) -> bool {
        matches!(self, Self::SessionRejected { .. })
    }

    /// Check if this failure came from the remote API or the network
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials(_)
                | Self::SessionRejected { .. }
                | Self::Api { .. }
                | Self::BadResponse(_)
                | Self::Network(_)
        )
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<reqwest::Error> for ExpenseError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExpenseError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = ExpenseError::category_not_found("7");
        assert_eq!(err.to_string(), "Category not found: 7");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_api_404_counts_as_not_found() {
        let err = ExpenseError::Api {
            status: 404,
            message: "Expense not found".into(),
        };
        assert!(err.is_not_found());
        assert!(err.is_remote());
    }

    #[test]
    fn test_session_rejected_classification() {
        let err = ExpenseError::SessionRejected { status: 401 };
        assert!(err.is_session_rejected());
        assert!(!ExpenseError::InvalidCredentials("bad".into()).is_session_rejected());
        assert_eq!(err.to_string(), "Session rejected by server (HTTP 401)");
    }

    #[test]
    fn test_undecodable_response_is_remote_but_local_json_is_not() {
        assert!(ExpenseError::BadResponse("not json".into()).is_remote());
        assert!(!ExpenseError::Json("bad audit line".into()).is_remote());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ExpenseError = io_err.into();
        assert!(matches!(err, ExpenseError::Io(_)));
        assert!(!err.is_remote());
    }
}
