//! Expense model
//!
//! An expense is owned by the server: the client only ever holds copies
//! returned by the API, and sends [`CreateExpenseRequest`] bodies for both
//! creation and update.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::{self, Category};
use super::ids::{CategoryId, ExpenseId, UserId};
use super::money::Money;

/// An expense record as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Server-assigned ID (absent until persisted)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ExpenseId>,

    /// Short title, required
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,

    #[serde(
        default,
        with = "wire_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<NaiveDate>,

    /// Category reference; unresolved IDs display as "Uncategorized"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Set by the server from the session owner
    #[serde(
        default,
        alias = "ownerID",
        alias = "OwnerID",
        skip_serializing_if = "Option::is_none"
    )]
    pub owner_id: Option<UserId>,
}

impl Expense {
    /// Create an unsaved expense with just a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            amount: None,
            date: None,
            category_id: None,
            merchant: None,
            description: None,
            owner_id: None,
        }
    }

    /// Resolve the category name against a loaded category list
    pub fn category_name<'a>(&self, categories: &'a [Category]) -> &'a str {
        category::category_name(categories, self.category_id)
    }

    /// Build the request body that would recreate this expense
    pub fn to_request(&self) -> CreateExpenseRequest {
        CreateExpenseRequest {
            title: self.title.clone(),
            amount: self.amount,
            description: self.description.clone(),
            date: self.date,
            category_id: self.category_id,
            merchant: self.merchant.clone(),
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Request body for `POST /expenses` and `PUT /expenses/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExpenseRequest {
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(
        default,
        with = "wire_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant: Option<String>,
}

impl CreateExpenseRequest {
    /// Create a request with only a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            amount: None,
            description: None,
            date: None,
            category_id: None,
            merchant: None,
        }
    }

    /// Set the amount
    pub fn with_amount(mut self, amount: Money) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Validate before submission
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.title.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyTitle);
        }

        let title_len = self.title.chars().count();
        if title_len > 255 {
            return Err(ExpenseValidationError::TitleTooLong(title_len));
        }

        if let Some(merchant) = &self.merchant {
            let merchant_len = merchant.chars().count();
            if merchant_len > 255 {
                return Err(ExpenseValidationError::MerchantTooLong(merchant_len));
            }
        }

        Ok(())
    }
}

/// Validation errors for expense requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyTitle,
    TitleTooLong(usize),
    MerchantTooLong(usize),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Title is required"),
            Self::TitleTooLong(len) => {
                write!(f, "Title too long ({} chars, max 255)", len)
            }
            Self::MerchantTooLong(len) => {
                write!(f, "Merchant too long ({} chars, max 255)", len)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

/// Calendar dates on the wire
///
/// Requests always carry `YYYY-MM-DD`. Responses may carry either that or a
/// full RFC 3339 timestamp; only the date part is kept.
mod wire_date {
    use chrono::{DateTime, NaiveDate};
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => serializer.serialize_str(&date.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) => parse(text).map(Some).map_err(serde::de::Error::custom),
        }
    }

    pub(super) fn parse(text: &str) -> Result<NaiveDate, String> {
        if let Ok(date) = NaiveDate::parse_from_str(text, FORMAT) {
            return Ok(date);
        }
        DateTime::parse_from_rfc3339(text)
            .map(|dt| dt.date_naive())
            .map_err(|_| format!("invalid date `{}`", text))
    }
}
