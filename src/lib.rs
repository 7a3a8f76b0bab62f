//! Expense Tracker - client for a personal expense tracking REST API
//!
//! This library provides the client-side core: a session store that keeps
//! the authentication token in sync with durable storage, a guarded router,
//! an HTTP client whose interceptors attach the token and end the session
//! when the server rejects it, a notification channel, and the view
//! controllers that drive the expense and category screens.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Wire-format data models (expenses, categories, auth bodies)
//! - `storage`: JSON file storage for the persisted session
//! - `observable`: Replaying and non-replaying pub/sub primitives
//! - `session`: The session store and token expiry
//! - `router`: Routes, navigation and the authentication guard
//! - `notify`: Transient user notifications
//! - `api`: Transport, interceptors and the API client
//! - `services`: One round trip per operation, with auditing
//! - `views`: View-state controllers
//! - `audit`: Audit logging system
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `expenses` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::{ExpensePaths, Settings};
//! use expense_tracker::App;
//!
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let app = App::bootstrap(paths, settings)?;
//! println!("logged in: {}", app.session().is_authenticated());
//! ```

pub mod api;
pub mod app;
pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod notify;
pub mod observable;
pub mod router;
pub mod services;
pub mod session;
pub mod storage;
pub mod views;

#[cfg(test)]
mod testing;

pub use app::App;
pub use error::{ExpenseError, ExpenseResult};
pub use router::Route;
pub use session::SessionStore;
