//! Create/edit expense form

use chrono::{Local, NaiveDate};

use crate::app::App;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, CategoryId, CreateExpenseRequest, Expense, ExpenseId, Money};
use crate::router::Route;

use super::non_blank;

/// Which expense the form is for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(ExpenseId),
}

/// Editable form values
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseForm {
    pub title: String,
    pub amount: Option<Money>,
    pub date: Option<NaiveDate>,
    pub category_id: Option<CategoryId>,
    pub merchant: String,
    pub description: String,
}

impl ExpenseForm {
    /// Blank form dated `today`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            title: String::new(),
            amount: None,
            date: Some(today),
            category_id: None,
            merchant: String::new(),
            description: String::new(),
        }
    }

    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            title: expense.title.clone(),
            amount: expense.amount,
            date: expense.date,
            category_id: expense.category_id,
            merchant: expense.merchant.clone().unwrap_or_default(),
            description: expense.description.clone().unwrap_or_default(),
        }
    }

    pub fn to_request(&self) -> CreateExpenseRequest {
        CreateExpenseRequest {
            title: self.title.trim().to_string(),
            amount: self.amount,
            description: non_blank(&self.description),
            date: self.date,
            category_id: self.category_id,
            merchant: non_blank(&self.merchant),
        }
    }
}

pub struct ExpenseFormView<'a> {
    app: &'a App,
    mode: FormMode,
    pub form: ExpenseForm,
    categories: Vec<Category>,
    original: Option<Expense>,
    is_loading: bool,
    is_saving: bool,
}

impl<'a> ExpenseFormView<'a> {
    pub fn new(app: &'a App, mode: FormMode) -> Self {
        Self {
            app,
            mode,
            form: ExpenseForm::new(Local::now().date_naive()),
            categories: Vec::new(),
            original: None,
            is_loading: false,
            is_saving: false,
        }
    }

    /// Load categories and, in edit mode, the expense being edited
    ///
    /// A failed category load is reported and the form stays usable. A
    /// failed expense load is reported and sends the user back to the list,
    /// unless the session was rejected (that redirect already happened).
    pub fn load(&mut self) -> ExpenseResult<()> {
        match self.app.category_service().list() {
            Ok(categories) => self.categories = categories,
            Err(e) if e.is_session_rejected() => return Err(e),
            Err(_) => {
                self.app.notifications().error("Failed to load categories");
            }
        }

        let FormMode::Edit(id) = self.mode else {
            return Ok(());
        };

        self.is_loading = true;
        let result = self.app.expense_service().get(id);
        self.is_loading = false;

        match result {
            Ok(expense) => {
                self.form = ExpenseForm::from_expense(&expense);
                self.original = Some(expense);
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

    /// Save the form and return to the list
    pub fn submit(&mut self) -> ExpenseResult<Expense> {
        let request = self.form.to_request();
        request
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        self.is_saving = true;
        let result = match self.mode {
            FormMode::Create => self.app.expense_service().create(&request),
            FormMode::Edit(id) => {
                self.app
                    .expense_service()
                    .update(id, &request, self.original.as_ref())
            }
        };
        self.is_saving = false;
        let saved = result?;

        let message = match self.mode {
            FormMode::Create => "Expense created successfully",
            FormMode::Edit(_) => "Expense updated successfully",
        };
        self.app.notifications().success(message);
        self.app.router().navigate(Route::ExpenseList);
        Ok(saved)
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_saving(&self) -> bool {
        self.is_saving
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NotificationKind;
    use crate::testing::TestApp;
    use serde_json::json;

    #[test]
    fn test_new_form_defaults_to_today() {
        let app = TestApp::logged_in("abc");
        let view = ExpenseFormView::new(&app.app, FormMode::Create);
        assert_eq!(view.form.date, Some(Local::now().date_naive()));
        assert!(view.form.title.is_empty());
    }

    #[test]
    fn test_create_notifies_and_returns_to_list() {
        let app = TestApp::logged_in("abc");
        let alerts = app.record_notifications();
        app.transport.respond(200, json!([{"id": 1, "name": "Food"}]));
        app.transport
            .respond(201, json!({"id": 5, "title": "Lunch", "date": "2025-03-01"}));

        let mut view = ExpenseFormView::new(&app.app, FormMode::Create);
        view.load().unwrap();
        view.form.title = "Lunch".into();
        view.form.date = NaiveDate::from_ymd_opt(2025, 3, 1);
        view.form.category_id = Some(CategoryId::new(1));
        let saved = view.submit().unwrap();

        assert_eq!(saved.id, Some(ExpenseId::new(5)));
        assert_eq!(view.categories().len(), 1);
        assert_eq!(
            app.transport.requests()[1].body,
            Some(json!({"title": "Lunch", "date": "2025-03-01", "categoryId": 1}))
        );
        assert_eq!(app.app.router().current(), Route::ExpenseList);
        assert_eq!(
            alerts.lock().unwrap().last().unwrap().message,
            "Expense created successfully"
        );
        assert!(!view.is_saving());
    }

    #[test]
    fn test_missing_title_is_caught_locally() {
        let app = TestApp::logged_in("abc");
        let mut view = ExpenseFormView::new(&app.app, FormMode::Create);
        let err = view.submit().unwrap_err();
        assert!(err.is_validation());
        assert!(app.transport.requests().is_empty());
    }

    #[test]
    fn test_edit_loads_and_updates() {
        let app = TestApp::logged_in("abc");
        let alerts = app.record_notifications();
        app.transport.respond(200, json!([]));
        app.transport.respond(
            200,
            json!({"id": 3, "title": "Coffee", "amount": 4.5, "merchant": "Cafe"}),
        );
        app.transport
            .respond(200, json!({"id": 3, "title": "Coffee", "amount": 5.0}));

        let mut view = ExpenseFormView::new(&app.app, FormMode::Edit(ExpenseId::new(3)));
        view.load().unwrap();
        assert_eq!(view.form.title, "Coffee");
        assert_eq!(view.form.merchant, "Cafe");
        assert_eq!(view.form.date, None);

        view.form.amount = Some(Money::from_cents(500));
        view.submit().unwrap();

        let put = &app.transport.requests()[2];
        assert_eq!(put.path, "/expenses/3");
        assert_eq!(
            alerts.lock().unwrap().last().unwrap().message,
            "Expense updated successfully"
        );
    }

    #[test]
    fn test_failed_category_load_keeps_form_usable() {
        let app = TestApp::logged_in("abc");
        let alerts = app.record_notifications();
        app.transport.respond(500, json!({"error": "db down"}));

        let mut view = ExpenseFormView::new(&app.app, FormMode::Create);
        view.load().unwrap();

        let alerts = alerts.lock().unwrap();
        assert_eq!(alerts.last().unwrap().message, "Failed to load categories");
        assert_eq!(alerts.last().unwrap().kind, NotificationKind::Error);
    }

    #[test]
    fn test_missing_expense_returns_to_list() {
        let app = TestApp::logged_in("abc");
        let alerts = app.record_notifications();
        app.app.router().navigate(Route::EditExpense(ExpenseId::new(9)));
        app.transport.respond(200, json!([]));
        app.transport
            .respond(404, json!({"error": "Expense not found"}));

        let mut view = ExpenseFormView::new(&app.app, FormMode::Edit(ExpenseId::new(9)));
        assert!(view.load().unwrap_err().is_not_found());

        assert_eq!(app.app.router().current(), Route::ExpenseList);
        assert_eq!(
            alerts.lock().unwrap().last().unwrap().message,
            "Failed to load expense"
        );
        assert!(!view.is_loading());
    }

    #[test]
    fn test_rejected_session_during_edit_load_goes_to_login() {
        let app = TestApp::logged_in("abc");
        let alerts = app.record_notifications();
        app.transport.respond(200, json!([]));
        app.transport.respond(401, json!({"error": "Invalid token"}));

        let mut view = ExpenseFormView::new(&app.app, FormMode::Edit(ExpenseId::new(4)));
        assert!(view.load().unwrap_err().is_session_rejected());

        assert!(!app.app.session().is_authenticated());
        assert_eq!(app.app.router().current(), Route::Login);
        assert_eq!(alerts.lock().unwrap().len(), 1);
    }
}
