//! User settings for the expense tracker client
//!
//! Holds the API base URL, request timeout, notification dismissal delay,
//! log level and display preferences.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;

/// Environment variable that overrides the configured API base URL
pub const API_URL_ENV: &str = "EXPENSE_TRACKER_API_URL";

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Base URL of the REST API (no trailing slash)
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Timeout applied to every HTTP request
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// How long non-error notifications stay visible
    #[serde(default = "default_notification_dismiss_secs")]
    pub notification_dismiss_secs: u64,

    /// Diagnostic log level (trace|debug|info|warn|error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Currency symbol used when rendering amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_api_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_notification_dismiss_secs() -> u64 {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            api_url: default_api_url(),
            request_timeout_secs: default_request_timeout_secs(),
            notification_dismiss_secs: default_notification_dismiss_secs(),
            log_level: default_log_level(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    ///
    /// `EXPENSE_TRACKER_API_URL` takes precedence over the stored API URL.
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        let mut settings = if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                ExpenseError::Io(format!("Failed to read settings file: {}", e))
            })?;

            serde_json::from_str::<Settings>(&contents).map_err(|e| {
                ExpenseError::Config(format!("Failed to parse settings file: {}", e))
            })?
        } else {
            // Don't save yet - let caller decide when to persist
            Settings::default()
        };

        if let Ok(url) = std::env::var(API_URL_ENV) {
            settings.api_url = url;
        }
        settings.api_url = normalize_api_url(&settings.api_url)?;

        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            ExpenseError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            ExpenseError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Request timeout as a `Duration`
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Notification auto-dismiss delay as a `Duration`
    pub fn notification_dismiss(&self) -> Duration {
        Duration::from_secs(self.notification_dismiss_secs)
    }
}

fn normalize_api_url(url: &str) -> Result<String, ExpenseError> {
    let trimmed = url.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ExpenseError::Config(format!(
            "API URL must start with http:// or https://, got `{}`",
            url
        )));
    }
    Ok(trimmed.to_string())
}
