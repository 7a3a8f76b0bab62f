//! Expense service

use crate::api::ApiClient;
use crate::audit::{summarize_changes, AuditEntry, AuditLogger, EntityType};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{CreateExpenseRequest, Expense, ExpenseId};

/// Service for expense management
pub struct ExpenseService<'a> {
    api: &'a ApiClient,
    audit: &'a AuditLogger,
}

impl<'a> ExpenseService<'a> {
    pub fn new(api: &'a ApiClient, audit: &'a AuditLogger) -> Self {
        Self { api, audit }
    }

    /// List the current user's expenses
    pub fn list(&self) -> ExpenseResult<Vec<Expense>> {
        self.api.get("/expenses")
    }

    /// Fetch one expense
    pub fn get(&self, id: ExpenseId) -> ExpenseResult<Expense> {
        self.api.get(&format!("/expenses/{}", id))
    }

    /// Create an expense and return the server's record
    pub fn create(&self, request: &CreateExpenseRequest) -> ExpenseResult<Expense> {
        request
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        let created: Expense = self.api.post("/expenses", request)?;

        if let Some(id) = created.id {
            self.audit
                .record(&AuditEntry::create(EntityType::Expense, id, &created.title));
        }

        Ok(created)
    }

    /// Replace an expense with `request`
    ///
    /// `previous` is the copy the caller already holds; when given, the
    /// audit entry lists the changed fields.
    pub fn update(
        &self,
        id: ExpenseId,
        request: &CreateExpenseRequest,
        previous: Option<&Expense>,
    ) -> ExpenseResult<Expense> {
        request
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        let updated: Expense = self.api.put(&format!("/expenses/{}", id), request)?;

        let changes = previous.and_then(|before| {
            let before = serde_json::to_value(before.to_request()).ok()?;
            let after = serde_json::to_value(updated.to_request()).ok()?;
            summarize_changes(&before, &after)
        });
        self.audit.record(&AuditEntry::update(
            EntityType::Expense,
            id,
            &updated.title,
            changes,
        ));

        Ok(updated)
    }

    /// Delete an expense
    pub fn delete(&self, id: ExpenseId) -> ExpenseResult<()> {
        self.api.delete(&format!("/expenses/{}", id))?;
        self.audit
            .record(&AuditEntry::delete(EntityType::Expense, id, None));
        Ok(())
    }
}
