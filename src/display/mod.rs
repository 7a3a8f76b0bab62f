//! Display formatting for terminal output
//!
//! Lists render as tables; single records render as aligned `Label: value`
//! lines. Amounts and dates follow the user's settings.

pub mod category;
pub mod expense;

pub use category::format_category_list;
pub use expense::{format_expense_details, format_expense_list};

/// Truncate a string to a maximum length with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
