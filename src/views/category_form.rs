//! Create-category view

use crate::app::App;
use crate::error::ExpenseResult;
use crate::models::Category;

use super::ensure_valid;

pub struct CategoryFormView<'a> {
    app: &'a App,
    pub name: String,
    categories: Vec<Category>,
    is_loading: bool,
    is_submitting: bool,
}

impl<'a> CategoryFormView<'a> {
    pub fn new(app: &'a App) -> Self {
        Self {
            app,
            name: String::new(),
            categories: Vec::new(),
            is_loading: false,
            is_submitting: false,
        }
    }

    /// Load the existing categories
    pub fn load(&mut self) -> ExpenseResult<()> {
        self.is_loading = true;
        let result = self.app.category_service().list();
        self.is_loading = false;
        self.categories = result?;
        Ok(())
    }

    pub fn errors(&self) -> Vec<&'static str> {
        if self.name.trim().is_empty() {
            vec!["Category name is required"]
        } else {
            Vec::new()
        }
    }

    /// Create the category, append it locally and clear the form
    pub fn submit(&mut self) -> ExpenseResult<Category> {
        ensure_valid(self.errors())?;

        self.is_submitting = true;
        let result = self.app.category_service().create(&self.name);
        self.is_submitting = false;
        let created = result?;

        self.categories.push(created.clone());
        self.app
            .notifications()
            .success("Category created successfully");
        self.name.clear();
        Ok(created)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }
}
