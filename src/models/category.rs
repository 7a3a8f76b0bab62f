//! Category model
//!
//! Categories are a flat list of names owned by the server. Expenses point
//! at them by ID; the client never enforces that the reference resolves.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;

/// Label shown for expenses without a resolvable category
pub const UNCATEGORIZED: &str = "Uncategorized";

/// An expense category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Server-assigned ID (absent until persisted)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CategoryId>,

    /// Category name
    pub name: String,
}

impl Category {
    /// Create an unsaved category
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    /// Create a category with a known ID
    pub fn with_id(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
        }
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        let len = self.name.chars().count();
        if len > 50 {
            return Err(CategoryValidationError::NameTooLong(len));
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Request body for `POST /categories`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
}

/// Resolve a category reference to its display name
pub fn category_name(categories: &[Category], id: Option<CategoryId>) -> &str {
    id.and_then(|id| categories.iter().find(|c| c.id == Some(id)))
        .map(|c| c.name.as_str())
        .unwrap_or(UNCATEGORIZED)
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name is required"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max 50)", len)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}
