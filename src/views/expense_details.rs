//! Single expense view

use crate::app::App;
use crate::error::ExpenseResult;
use crate::models::{Category, Expense, ExpenseId};
use crate::router::Route;

pub struct ExpenseDetailsView<'a> {
    app: &'a App,
    id: ExpenseId,
    expense: Option<Expense>,
    categories: Vec<Category>,
    is_loading: bool,
    confirming_delete: bool,
}

impl<'a> ExpenseDetailsView<'a> {
    pub fn new(app: &'a App, id: ExpenseId) -> Self {
        Self {
            app,
            id,
            expense: None,
            categories: Vec::new(),
            is_loading: false,
            confirming_delete: false,
        }
    }

    /// Load categories, then the expense
    ///
    /// When the expense cannot be loaded the user is sent back to the list,
    /// unless the session was rejected.
    pub fn load(&mut self) -> ExpenseResult<()> {
        match self.app.category_service().list() {
            Ok(categories) => self.categories = categories,
            Err(e) if e.is_session_rejected() => return Err(e),
            Err(_) => {}
        }

        self.is_loading = true;
        let result = self.app.expense_service().get(self.id);
        self.is_loading = false;

        match result {
            Ok(expense) => {
                self.expense = Some(expense);
                Ok(())
            }
            Err(e) => {
                if !e.is_session_rejected() {
                    self.app.notifications().error("Failed to load expense");
                    self.app.router().navigate(Route::ExpenseList);
                }
                Err(e)
            }
        }
    }

    pub fn expense(&self) -> Option<&Expense> {
        self.expense.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn category_name(&self) -> Option<&str> {
        self.expense
            .as_ref()
            .map(|expense| expense.category_name(&self.categories))
    }

    pub fn edit(&self) -> Route {
        self.app.router().navigate(Route::EditExpense(self.id))
    }

    pub fn confirm_delete(&mut self) {
        self.confirming_delete = true;
    }

    pub fn cancel_delete(&mut self) {
        self.confirming_delete = false;
    }

    pub fn is_confirming_delete(&self) -> bool {
        self.confirming_delete
    }

    /// Delete after confirmation, then return to the list
    ///
    /// Returns `Ok(false)` when the delete was not confirmed.
    pub fn delete(&mut self) -> ExpenseResult<bool> {
        if !self.confirming_delete {
            return Ok(false);
        }

        let result = self.app.expense_service().delete(self.id);
        self.confirming_delete = false;
        result?;

        self.app
            .notifications()
            .success("Expense deleted successfully");
        self.app.router().navigate(Route::ExpenseList);
        Ok(true)
    }
}
