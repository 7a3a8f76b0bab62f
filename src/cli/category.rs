//! Category CLI commands

use clap::Subcommand;

use crate::app::App;
use crate::display::format_category_list;
use crate::error::ExpenseResult;
use crate::router::Route;
use crate::views::CategoryFormView;

use super::enter;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories
    List,

    /// Create a new category
    Add {
        /// Category name
        name: String,
    },
}

/// Handle a category command
pub fn handle_category_command(app: &App, cmd: CategoryCommands) -> ExpenseResult<()> {
    enter(app, Route::NewCategory)?;
    let mut view = CategoryFormView::new(app);

    match cmd {
        CategoryCommands::List => {
            view.load()?;
            print!("{}", format_category_list(view.categories()));
        }

        CategoryCommands::Add { name } => {
            view.name = name;
            let category = view.submit()?;
            if let Some(id) = category.id {
                println!("  ID: {}", id);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExpenseError;
    use crate::testing::TestApp;
    use serde_json::json;

    #[test]
    fn test_add_posts_trimmed_name() {
        let app = TestApp::logged_in("abc");
        app.transport.respond(201, json!({"id": 4, "name": "Books"}));

        handle_category_command(
            &app.app,
            CategoryCommands::Add {
                name: "  Books ".into(),
            },
        )
        .unwrap();

        let request = &app.transport.requests()[0];
        assert_eq!(request.path, "/categories");
        assert_eq!(request.body, Some(json!({"name": "Books"})));
    }

    #[test]
    fn test_logged_out_is_refused() {
        let app = TestApp::new();
        let err = handle_category_command(&app.app, CategoryCommands::List).unwrap_err();
        assert!(matches!(err, ExpenseError::NotAuthenticated));
    }
}
