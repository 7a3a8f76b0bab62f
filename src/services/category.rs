//! Category service

use crate::api::ApiClient;
use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, CreateCategoryRequest};

/// Service for category management
pub struct CategoryService<'a> {
    api: &'a ApiClient,
    audit: &'a AuditLogger,
}

impl<'a> CategoryService<'a> {
    pub fn new(api: &'a ApiClient, audit: &'a AuditLogger) -> Self {
        Self { api, audit }
    }

    /// List all categories
    pub fn list(&self) -> ExpenseResult<Vec<Category>> {
        self.api.get("/categories")
    }

    /// Create a category
    pub fn create(&self, name: &str) -> ExpenseResult<Category> {
        let name = name.trim();
        Category::new(name)
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        let created: Category = self.api.post(
            "/categories",
            &CreateCategoryRequest {
                name: name.to_string(),
            },
        )?;

        if let Some(id) = created.id {
            self.audit
                .record(&AuditEntry::create(EntityType::Category, id, &created.name));
        }

        Ok(created)
    }
}
