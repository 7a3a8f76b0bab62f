//! Category display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Category;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
}

/// Format categories as a table
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.\n".to_string();
    }

    let rows = categories.iter().map(|category| CategoryRow {
        id: category
            .id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string()),
        name: category.name.clone(),
    });

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    format!("{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryId;

    #[test]
    fn test_category_table() {
        let output = format_category_list(&[
            Category::with_id(CategoryId::new(1), "Food"),
            Category::with_id(CategoryId::new(2), "Travel"),
        ]);
        assert!(output.contains("Name"));
        assert!(output.contains("Travel"));
    }

    #[test]
    fn test_empty() {
        assert_eq!(format_category_list(&[]), "No categories found.\n");
    }
}
