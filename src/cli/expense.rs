//! Expense CLI commands

use chrono::NaiveDate;
use clap::Subcommand;

use crate::app::App;
use crate::display::{format_expense_details, format_expense_list};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, CategoryId, ExpenseId, Money};
use crate::router::Route;
use crate::views::{ExpenseDetailsView, ExpenseForm, ExpenseFormView, ExpenseListView, FormMode};

use super::{enter, prompt_line};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// List all expenses
    List,

    /// Show one expense
    Show {
        /// Expense ID
        id: ExpenseId,
    },

    /// Record a new expense
    Add {
        /// Title
        title: String,
        /// Amount (e.g., "4.50")
        #[arg(short, long)]
        amount: Option<String>,
        /// Date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
        /// Category ID
        #[arg(short, long)]
        category: Option<CategoryId>,
        /// Merchant
        #[arg(short, long)]
        merchant: Option<String>,
        /// Description
        #[arg(long)]
        description: Option<String>,
    },

    /// Edit an expense; omitted fields keep their value
    Edit {
        /// Expense ID
        id: ExpenseId,
        /// New title
        #[arg(short, long)]
        title: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<NaiveDate>,
        /// New category ID
        #[arg(short, long)]
        category: Option<CategoryId>,
        /// New merchant
        #[arg(short, long)]
        merchant: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
    },

    /// Delete an expense
    Delete {
        /// Expense ID
        id: ExpenseId,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

fn parse_amount(amount: &str) -> ExpenseResult<Money> {
    Money::parse(amount).map_err(|e| ExpenseError::Validation(format!("Invalid amount: {}", e)))
}

/// Reject a category id the server did not list
///
/// Skipped when the category list could not be loaded.
fn ensure_known_category(categories: &[Category], id: Option<CategoryId>) -> ExpenseResult<()> {
    match id {
        Some(id) if !categories.is_empty() && !categories.iter().any(|c| c.id == Some(id)) => {
            Err(ExpenseError::category_not_found(id.to_string()))
        }
        _ => Ok(()),
    }
}

/// Field overrides shared by `add` and `edit`
struct FormChanges {
    title: Option<String>,
    amount: Option<String>,
    date: Option<NaiveDate>,
    category: Option<CategoryId>,
    merchant: Option<String>,
    description: Option<String>,
}

impl FormChanges {
    fn apply(self, form: &mut ExpenseForm) -> ExpenseResult<()> {
        if let Some(title) = self.title {
            form.title = title;
        }
        if let Some(amount) = self.amount {
            form.amount = Some(parse_amount(&amount)?);
        }
        if let Some(date) = self.date {
            form.date = Some(date);
        }
        if let Some(category) = self.category {
            form.category_id = Some(category);
        }
        if let Some(merchant) = self.merchant {
            form.merchant = merchant;
        }
        if let Some(description) = self.description {
            form.description = description;
        }
        Ok(())
    }
}

/// Handle an expense command
pub fn handle_expense_command(app: &App, cmd: ExpenseCommands) -> ExpenseResult<()> {
    match cmd {
        ExpenseCommands::List => {
            enter(app, Route::ExpenseList)?;
            let mut view = ExpenseListView::new(app);
            view.load()?;
            print!(
                "{}",
                format_expense_list(view.expenses(), view.categories(), app.settings())
            );
        }

        ExpenseCommands::Show { id } => {
            enter(app, Route::ExpenseDetails(id))?;
            let mut view = ExpenseDetailsView::new(app, id);
            view.load()?;
            if let (Some(expense), Some(category)) = (view.expense(), view.category_name()) {
                print!(
                    "{}",
                    format_expense_details(expense, category, app.settings())
                );
            }
        }

        ExpenseCommands::Add {
            title,
            amount,
            date,
            category,
            merchant,
            description,
        } => {
            enter(app, Route::NewExpense)?;
            let mut view = ExpenseFormView::new(app, FormMode::Create);
            view.load()?;
            ensure_known_category(view.categories(), category)?;
            FormChanges {
                title: Some(title),
                amount,
                date,
                category,
                merchant,
                description,
            }
            .apply(&mut view.form)?;

            let saved = view.submit()?;
            if let Some(id) = saved.id {
                println!("  ID: {}", id);
            }
        }

        ExpenseCommands::Edit {
            id,
            title,
            amount,
            date,
            category,
            merchant,
            description,
        } => {
            enter(app, Route::EditExpense(id))?;
            let mut view = ExpenseFormView::new(app, FormMode::Edit(id));
            view.load()?;
            ensure_known_category(view.categories(), category)?;
            FormChanges {
                title,
                amount,
                date,
                category,
                merchant,
                description,
            }
            .apply(&mut view.form)?;
            view.submit()?;
        }

        ExpenseCommands::Delete { id, yes } => {
            enter(app, Route::ExpenseDetails(id))?;

            if !yes {
                let answer = prompt_line(&format!("Delete expense #{}? [y/N] ", id))?;
                if !answer.eq_ignore_ascii_case("y") && !answer.eq_ignore_ascii_case("yes") {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            let mut view = ExpenseDetailsView::new(app, id);
            view.confirm_delete();
            view.delete()?;
        }
    }

    Ok(())
}
