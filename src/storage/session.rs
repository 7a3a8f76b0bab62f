//! Durable session persistence
//!
//! A single JSON file holding `{"token": "..."}`. It is read once at startup,
//! written on login and removed on logout.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ExpenseError;

use super::file_io::{read_json_optional, remove_if_exists, write_json_atomic};

/// On-disk shape of the persisted session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSession {
    pub token: String,
}

/// Check that `token` can be sent as a bearer credential
///
/// Tokens are non-empty runs of visible ASCII; whitespace and control
/// characters would not survive an `Authorization` header.
pub fn is_well_formed_token(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_graphic())
}

/// Reads and writes the persisted session file
#[derive(Debug, Clone)]
pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    /// Create a session file handle for `path`
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the persisted session
    ///
    /// Returns `Ok(None)` when nothing is stored. A file that exists but is
    /// not a well-formed `{"token": <token>}` is reported as a storage error.
    pub fn load(&self) -> Result<Option<PersistedSession>, ExpenseError> {
        let stored: Option<PersistedSession> = read_json_optional(&self.path)?;
        match stored {
            Some(session) if !is_well_formed_token(&session.token) => Err(
                ExpenseError::Storage(format!("Malformed token in {}", self.path.display())),
            ),
            other => Ok(other),
        }
    }

    /// Persist a session, replacing any previous one
    pub fn save(&self, session: &PersistedSession) -> Result<(), ExpenseError> {
        write_json_atomic(&self.path, session)
    }

    /// Erase the persisted session; missing files are not an error
    pub fn clear(&self) -> Result<(), ExpenseError> {
        remove_if_exists(&self.path).map(|_| ())
    }

    /// Check whether a session file is present on disk
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Get the path to the session file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn session_file() -> (SessionFile, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let file = SessionFile::new(temp_dir.path().join("session.json"));
        (file, temp_dir)
    }

    #[test]
    fn test_load_missing_is_none() {
        let (file, _temp) = session_file();
        assert!(file.load().unwrap().is_none());
    }

    #[test]
    fn test_save_writes_token_object() {
        let (file, _temp) = session_file();
        file.save(&PersistedSession {
            token: "abc".into(),
        })
        .unwrap();

        let raw = std::fs::read_to_string(file.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value, serde_json::json!({"token": "abc"}));
    }

    #[test]
    fn test_malformed_file_is_error() {
        let (file, _temp) = session_file();
        std::fs::write(file.path(), r#"{"user": "x"}"#).unwrap();
        assert!(file.load().is_err());

        std::fs::write(file.path(), r#"{"token": "  "}"#).unwrap();
        assert!(file.load().is_err());

        std::fs::write(file.path(), r#"{"token": "abc\ndef"}"#).unwrap();
        assert!(file.load().is_err());
    }

    #[test]
    fn test_token_shape() {
        assert!(is_well_formed_token("abc"));
        assert!(is_well_formed_token("eyJhbGciOiJIUzI1NiJ9.e30.sig-_"));
        assert!(!is_well_formed_token(""));
        assert!(!is_well_formed_token("abc def"));
        assert!(!is_well_formed_token("abc\ndef"));
        assert!(!is_well_formed_token("tökén"));
    }

    #[test]
    fn test_clear_twice() {
        let (file, _temp) = session_file();
        file.save(&PersistedSession {
            token: "abc".into(),
        })
        .unwrap();

        file.clear().unwrap();
        file.clear().unwrap();
        assert!(!file.exists());
    }
}
