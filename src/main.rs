use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::auth::{LoginArgs, RegisterArgs};
use expense_tracker::cli::{
    handle_category_command, handle_config_command, handle_expense_command,
    handle_history_command, handle_login_command, handle_logout_command,
    handle_register_command, handle_status_command, print_notifications,
};
use expense_tracker::config::{ExpensePaths, Settings};
use expense_tracker::logging::init_logging;
use expense_tracker::{App, ExpenseError};

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Track personal expenses against an expense tracker server",
    long_about = "A command-line client for an expense tracker REST API. Log in \
                  once and the session is kept until you log out, the server \
                  rejects it, or it expires."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and store the session
    Login(LoginArgs),

    /// End the current session
    Logout,

    /// Create a new account
    Register(RegisterArgs),

    /// Show whether a session is active
    Status,

    /// Show current configuration and paths
    Config,

    /// Show recent activity from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(expense_tracker::cli::ExpenseCommands),

    /// Category management commands
    #[command(subcommand, alias = "cat")]
    Category(expense_tracker::cli::CategoryCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths, settings and logging
    let paths = ExpensePaths::new()?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;
    init_logging(&settings.log_level, &paths.log_dir())?;

    let app = App::bootstrap(paths, settings)?;
    let _printer = print_notifications(&app);

    let result = match cli.command {
        Some(Commands::Login(args)) => handle_login_command(&app, args),
        Some(Commands::Logout) => handle_logout_command(&app),
        Some(Commands::Register(args)) => handle_register_command(&app, args),
        Some(Commands::Status) => handle_status_command(&app),
        Some(Commands::Config) => handle_config_command(&app),
        Some(Commands::History { limit }) => handle_history_command(&app, limit),
        Some(Commands::Expense(cmd)) => handle_expense_command(&app, cmd),
        Some(Commands::Category(cmd)) => handle_category_command(&app, cmd),
        None => {
            println!("Expenses - personal expense tracker client");
            println!();
            println!("Run 'expenses --help' for usage information.");
            println!("Run 'expenses login' to start a session.");
            Ok(())
        }
    };

    match result {
        Ok(()) => Ok(()),
        Err(ExpenseError::NotAuthenticated) => {
            eprintln!("Not logged in. Run 'expenses login' first.");
            std::process::exit(1);
        }
        // Already reported through the notification channel
        Err(e) if e.is_remote() => std::process::exit(1),
        Err(e) => Err(e.into()),
    }
}
