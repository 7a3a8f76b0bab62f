//! Route table

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::ExpenseId;

/// A navigable view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    Login,
    Register,
    ExpenseList,
    NewExpense,
    ExpenseDetails(ExpenseId),
    EditExpense(ExpenseId),
    NewCategory,
}

impl Route {
    /// Resolve a path to a route
    ///
    /// The empty path and any unknown path redirect to the expense list.
    pub fn parse(path: &str) -> Route {
        let segments: Vec<&str> = path
            .trim()
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        match segments.as_slice() {
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            ["expenses"] => Route::ExpenseList,
            ["expenses", "new"] => Route::NewExpense,
            ["expenses", id] => match id.parse() {
                Ok(id) => Route::ExpenseDetails(id),
                Err(_) => Route::ExpenseList,
            },
            ["expenses", id, "edit"] => match id.parse() {
                Ok(id) => Route::EditExpense(id),
                Err(_) => Route::ExpenseList,
            },
            ["categories", "new"] => Route::NewCategory,
            _ => Route::ExpenseList,
        }
    }

    /// Canonical path for this route
    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::ExpenseList => "/expenses".to_string(),
            Route::NewExpense => "/expenses/new".to_string(),
            Route::ExpenseDetails(id) => format!("/expenses/{}", id),
            Route::EditExpense(id) => format!("/expenses/{}/edit", id),
            Route::NewCategory => "/categories/new".to_string(),
        }
    }

    /// Whether the route is only reachable with an active session
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Login | Route::Register)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
