//! Expense display formatting

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::{Category, Expense, Money};

use super::truncate;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Merchant")]
    merchant: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

fn format_amount(amount: Option<Money>, settings: &Settings) -> String {
    amount
        .map(|a| a.format_with_symbol(&settings.currency_symbol))
        .unwrap_or_else(|| "-".to_string())
}

fn format_date(expense: &Expense, settings: &Settings) -> String {
    expense
        .date
        .map(|d| d.format(&settings.date_format).to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Format expenses as a table with a total line
pub fn format_expense_list(
    expenses: &[Expense],
    categories: &[Category],
    settings: &Settings,
) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let rows = expenses.iter().map(|expense| ExpenseRow {
        id: expense
            .id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string()),
        date: format_date(expense, settings),
        title: truncate(&expense.title, 30),
        category: expense.category_name(categories).to_string(),
        merchant: truncate(expense.merchant.as_deref().unwrap_or(""), 20),
        amount: format_amount(expense.amount, settings),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::sharp())
        .modify(Columns::last(), Alignment::right());

    let total: Money = expenses.iter().filter_map(|e| e.amount).sum();
    format!(
        "{}\n{} expense(s), total {}\n",
        table,
        expenses.len(),
        total.format_with_symbol(&settings.currency_symbol)
    )
}

/// Format one expense for display
pub fn format_expense_details(expense: &Expense, category_name: &str, settings: &Settings) -> String {
    let mut output = String::new();

    if let Some(id) = expense.id {
        output.push_str(&format!("Expense:     #{}\n", id));
    }
    output.push_str(&format!("Title:       {}\n", expense.title));
    output.push_str(&format!(
        "Amount:      {}\n",
        format_amount(expense.amount, settings)
    ));
    output.push_str(&format!("Date:        {}\n", format_date(expense, settings)));
    output.push_str(&format!("Category:    {}\n", category_name));

    if let Some(merchant) = &expense.merchant {
        output.push_str(&format!("Merchant:    {}\n", merchant));
    }

    if let Some(description) = &expense.description {
        output.push_str(&format!("Description: {}\n", description));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, ExpenseId};
    use chrono::NaiveDate;

    fn coffee() -> Expense {
        let mut expense = Expense::new("Coffee");
        expense.id = Some(ExpenseId::new(42));
        expense.amount = Some(Money::from_cents(450));
        expense.date = NaiveDate::from_ymd_opt(2025, 2, 21);
        expense.category_id = Some(CategoryId::new(1));
        expense.merchant = Some("Cafe".into());
        expense
    }

    #[test]
    fn test_list_contains_rows_and_total() {
        let categories = vec![Category::with_id(CategoryId::new(1), "Food")];
        let mut taxi = Expense::new("Taxi");
        taxi.amount = Some(Money::from_cents(1225));

        let output = format_expense_list(&[coffee(), taxi], &categories, &Settings::default());

        assert!(output.contains("Coffee"));
        assert!(output.contains("Food"));
        assert!(output.contains("Uncategorized"));
        assert!(output.contains("$4.50"));
        assert!(output.contains("2 expense(s), total $16.75"));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(
            format_expense_list(&[], &[], &Settings::default()),
            "No expenses found.\n"
        );
    }

    #[test]
    fn test_details_respect_settings() {
        let mut settings = Settings::default();
        settings.currency_symbol = "€".into();
        settings.date_format = "%d/%m/%Y".into();

        let output = format_expense_details(&coffee(), "Food", &settings);

        assert!(output.contains("Expense:     #42"));
        assert!(output.contains("€4.50"));
        assert!(output.contains("21/02/2025"));
        assert!(output.contains("Merchant:    Cafe"));
        assert!(!output.contains("Description"));
    }
}
