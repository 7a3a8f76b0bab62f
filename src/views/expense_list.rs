//! Expense list view

use crate::app::App;
use crate::error::ExpenseResult;
use crate::models::{Category, CreateExpenseRequest, Expense, ExpenseId, Money};
use crate::router::Route;

/// The expense table with its categories and a delete confirmation
pub struct ExpenseListView<'a> {
    app: &'a App,
    expenses: Vec<Expense>,
    categories: Vec<Category>,
    is_loading: bool,
    pending_delete: Option<ExpenseId>,
}

impl<'a> ExpenseListView<'a> {
    pub fn new(app: &'a App) -> Self {
        Self {
            app,
            expenses: Vec::new(),
            categories: Vec::new(),
            is_loading: false,
            pending_delete: None,
        }
    }

    /// Load expenses, then categories
    ///
    /// Category failures only cost the names; rows then show
    /// "Uncategorized".
    pub fn load(&mut self) -> ExpenseResult<()> {
        self.is_loading = true;
        let expenses = self.app.expense_service().list();
        self.is_loading = false;
        self.expenses = expenses?;

        if let Ok(categories) = self.app.category_service().list() {
            self.categories = categories;
        }
        Ok(())
    }

    /// Create an expense and append the server's record without reloading
    pub fn create(&mut self, request: &CreateExpenseRequest) -> ExpenseResult<&Expense> {
        let created = self.app.expense_service().create(request)?;
        self.app
            .notifications()
            .success("Expense created successfully");
        self.expenses.push(created);
        Ok(&self.expenses[self.expenses.len() - 1])
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn category_name(&self, expense: &Expense) -> &str {
        expense.category_name(&self.categories)
    }

    /// Sum of all listed amounts
    pub fn total(&self) -> Money {
        self.expenses.iter().filter_map(|e| e.amount).sum()
    }

    pub fn view(&self, id: ExpenseId) -> Route {
        self.app.router().navigate(Route::ExpenseDetails(id))
    }

    pub fn edit(&self, id: ExpenseId) -> Route {
        self.app.router().navigate(Route::EditExpense(id))
    }

    /// Ask for confirmation before deleting `id`
    pub fn confirm_delete(&mut self, id: ExpenseId) {
        self.pending_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn pending_delete(&self) -> Option<ExpenseId> {
        self.pending_delete
    }

    /// Delete the confirmed expense and drop exactly that row
    ///
    /// Returns `Ok(false)` when nothing was awaiting confirmation. The
    /// confirmation is cleared whatever the outcome.
    pub fn delete(&mut self) -> ExpenseResult<bool> {
        let Some(id) = self.pending_delete.take() else {
            return Ok(false);
        };

        self.app.expense_service().delete(id)?;
        self.expenses.retain(|expense| expense.id != Some(id));
        self.app
            .notifications()
            .success("Expense deleted successfully");
        Ok(true)
    }
}
