//! Core data models for the expense tracker client
//!
//! Data-transfer structs for every endpoint plus the value types they use
//! (IDs, money, dates).

pub mod auth;
pub mod category;
pub mod expense;
pub mod ids;
pub mod money;

pub use auth::{LoginRequest, LoginResponse, RegistrationRequest, RegistrationResponse};
pub use category::{Category, CreateCategoryRequest, UNCATEGORIZED};
pub use expense::{CreateExpenseRequest, Expense};
pub use ids::{CategoryId, ExpenseId, UserId};
pub use money::Money;
