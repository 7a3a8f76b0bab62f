//! CLI command handlers
//!
//! Each handler drives the same view controllers a graphical client would,
//! so routing, guarding and notifications behave identically. Protected
//! commands enter their route through the [`Router`](crate::router::Router)
//! first and fail with [`ExpenseError::NotAuthenticated`] when the guard
//! redirects to login.

pub mod auth;
pub mod category;
pub mod expense;

pub use auth::{
    handle_config_command, handle_history_command, handle_login_command,
    handle_logout_command, handle_register_command, handle_status_command,
};
pub use category::{handle_category_command, CategoryCommands};
pub use expense::{handle_expense_command, ExpenseCommands};

use std::io::{self, BufRead, Write};

use zeroize::Zeroizing;

use crate::app::App;
use crate::error::{ExpenseError, ExpenseResult};
use crate::notify::NotificationKind;
use crate::observable::Subscription;
use crate::router::Route;

/// Echo notifications to the terminal while the guard is alive
pub fn print_notifications(app: &App) -> Subscription {
    app.notifications().subscribe(|notification| {
        if notification.kind == NotificationKind::Error {
            eprintln!("{}", notification);
        } else {
            println!("{}", notification);
        }
    })
}

/// Enter `route`, failing if the guard sent the user to login instead
pub fn enter(app: &App, route: Route) -> ExpenseResult<()> {
    let landed = app.router().navigate(route);
    if landed == Route::Login && route != Route::Login {
        return Err(ExpenseError::NotAuthenticated);
    }
    Ok(())
}

/// Read one trimmed line from stdin after printing `prompt`
fn prompt_line(prompt: &str) -> ExpenseResult<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Prompt for a password (hidden input)
fn prompt_password(prompt: &str) -> ExpenseResult<Zeroizing<String>> {
    rpassword::prompt_password(prompt)
        .map(Zeroizing::new)
        .map_err(|e| ExpenseError::Io(format!("Failed to read password: {}", e)))
}

/// Use the flag value when given, otherwise ask
fn value_or_prompt(value: Option<String>, prompt: &str) -> ExpenseResult<String> {
    match value {
        Some(value) => Ok(value),
        None => prompt_line(prompt),
    }
}
