//! Session and account CLI commands
//!
//! Login, logout, registration and the read-only status/config/history
//! reports.

use clap::Args;
use zeroize::Zeroizing;

use crate::app::App;
use crate::error::ExpenseResult;
use crate::logging::logging_status;
use crate::router::Route;
use crate::views::{LoginView, RegisterView, ShellView};

use super::{enter, prompt_password, value_or_prompt};

/// Arguments for `login`
#[derive(Args)]
pub struct LoginArgs {
    /// Account email
    #[arg(short, long)]
    pub email: Option<String>,

    /// Password (prompted without echo when omitted)
    #[arg(long)]
    pub password: Option<String>,
}

/// Arguments for `register`
#[derive(Args)]
pub struct RegisterArgs {
    /// Account email
    #[arg(short, long)]
    pub email: Option<String>,

    /// First name
    #[arg(long)]
    pub first_name: Option<String>,

    /// Last name
    #[arg(long)]
    pub last_name: Option<String>,

    /// Password, at least 8 characters (prompted when omitted)
    #[arg(long)]
    pub password: Option<String>,
}

fn password_or_prompt(password: Option<String>) -> ExpenseResult<Zeroizing<String>> {
    match password {
        Some(password) => Ok(Zeroizing::new(password)),
        None => prompt_password("Password: "),
    }
}

/// Handle `login`
pub fn handle_login_command(app: &App, args: LoginArgs) -> ExpenseResult<()> {
    enter(app, Route::Login)?;

    let mut view = LoginView::new(app);
    view.email = value_or_prompt(args.email, "Email: ")?;
    view.password = password_or_prompt(args.password)?;
    view.submit()?;

    if let Some(expires_at) = app.session().expires_at() {
        println!("Session expires {}", expires_at.format("%Y-%m-%d %H:%M UTC"));
    }
    Ok(())
}

/// Handle `logout`
pub fn handle_logout_command(app: &App) -> ExpenseResult<()> {
    let was_logged_in = app.session().is_authenticated();
    ShellView::new(app).logout();

    if was_logged_in {
        println!("Logged out.");
    } else {
        println!("Not logged in.");
    }
    Ok(())
}

/// Handle `register`
pub fn handle_register_command(app: &App, args: RegisterArgs) -> ExpenseResult<()> {
    enter(app, Route::Register)?;

    let mut view = RegisterView::new(app);
    view.first_name = value_or_prompt(args.first_name, "First name: ")?;
    view.last_name = value_or_prompt(args.last_name, "Last name: ")?;
    view.email = value_or_prompt(args.email, "Email: ")?;
    view.password = password_or_prompt(args.password)?;
    view.submit()
}

/// Handle `status`
pub fn handle_status_command(app: &App) -> ExpenseResult<()> {
    let session = app.session();

    if session.is_authenticated() {
        match session.expires_at() {
            Some(expires_at) => println!(
                "Logged in (session expires {})",
                expires_at.format("%Y-%m-%d %H:%M UTC")
            ),
            None => println!("Logged in"),
        }
    } else {
        println!("Not logged in. Run 'expenses login' to start a session.");
    }

    println!("API: {}", app.settings().api_url);
    println!("Route: {}", app.router().current());
    Ok(())
}

/// Handle `config`
pub fn handle_config_command(app: &App) -> ExpenseResult<()> {
    let paths = app.paths();
    let settings = app.settings();

    println!("Expense Tracker Configuration");
    println!("=============================");
    println!("Data directory: {}", paths.base_dir().display());
    println!("Settings file:  {}", paths.settings_file().display());
    println!("Session file:   {}", paths.session_file().display());
    println!("Audit log:      {}", paths.audit_log().display());
    println!("Log directory:  {}", paths.log_dir().display());
    println!();
    println!("Settings:");
    println!("  API URL:              {}", settings.api_url);
    println!("  Request timeout:      {}s", settings.request_timeout_secs);
    println!("  Notification dismiss: {}s", settings.notification_dismiss_secs);
    println!("  Log level:            {}", settings.log_level);
    println!("  Currency symbol:      {}", settings.currency_symbol);
    println!("  Date format:          {}", settings.date_format);

    if let Some((level, dir)) = logging_status() {
        println!();
        println!("Logging: {} -> {}", level, dir.display());
    }
    Ok(())
}

/// Handle `history`
pub fn handle_history_command(app: &App, limit: usize) -> ExpenseResult<()> {
    let entries = app.audit().read_recent(limit)?;

    if entries.is_empty() {
        println!("No activity recorded.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
