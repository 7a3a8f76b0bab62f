//! Configuration module for the expense tracker client
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User settings persistence (API URL, timeouts, display preferences)

pub mod paths;
pub mod settings;

pub use paths::ExpensePaths;
pub use settings::Settings;
