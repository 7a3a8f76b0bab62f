//! View-state controllers
//!
//! Each view holds the state a renderer needs (form values, loaded lists,
//! busy flags) and performs its actions through the services. Views borrow
//! the [`App`](crate::app::App) they run in; the ones that observe a stream
//! hold their subscription guard and release it on drop.
//!
//! Busy flags (`is_loading`, `is_saving`) are raised before a request is
//! dispatched and cleared when it settles, on both success and failure.

pub mod alert;
pub mod category_form;
pub mod expense_details;
pub mod expense_form;
pub mod expense_list;
pub mod login;
pub mod register;
pub mod shell;

pub use alert::AlertView;
pub use category_form::CategoryFormView;
pub use expense_details::ExpenseDetailsView;
pub use expense_form::{ExpenseForm, ExpenseFormView, FormMode};
pub use expense_list::ExpenseListView;
pub use login::LoginView;
pub use register::RegisterView;
pub use shell::ShellView;

use crate::error::{ExpenseError, ExpenseResult};

const MAX_EMAIL_LEN: usize = 254;
const MAX_LOCAL_PART_LEN: usize = 64;
const MAX_DOMAIN_LABEL_LEN: usize = 63;

/// Loose email format check: `local@domain` with sane characters
///
/// A dotless domain (`user@localhost`) is accepted.
pub fn is_valid_email(email: &str) -> bool {
    if email.len() > MAX_EMAIL_LEN {
        return false;
    }

    let Some((local, domain)) = email.rsplit_once('@') else {
        return false;
    };

    let local_ok = !local.is_empty()
        && local.len() <= MAX_LOCAL_PART_LEN
        && !local.starts_with('.')
        && !local.ends_with('.')
        && !local.contains("..")
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "!#$%&'*+/=?^_`{|}~.-".contains(c));

    let domain_ok = !domain.is_empty()
        && domain.split('.').all(|label| {
            !label.is_empty()
                && label.len() <= MAX_DOMAIN_LABEL_LEN
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        });

    local_ok && domain_ok
}

/// Turn a list of field errors into a validation failure
fn ensure_valid(errors: Vec<&'static str>) -> ExpenseResult<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ExpenseError::Validation(errors.join("; ")))
    }
}

/// Normalize an optional text field: blank means absent
fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
