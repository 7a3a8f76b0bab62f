//! Service layer for the expense tracker client
//!
//! Thin wrappers over the REST endpoints: each operation validates its input
//! locally, performs exactly one round trip and records successful writes
//! in the audit trail. Nothing is cached; callers refresh their own lists.

pub mod auth;
pub mod category;
pub mod expense;

pub use auth::AuthService;
pub use category::CategoryService;
pub use expense::ExpenseService;
