//! Expense display formatting
//!
//! Renders ledgers and monthly totals as terminal tables.

use tabled::{settings::Style, Table, Tabled};

use crate::models::{ExpenseRecord, Ledger};
use crate::reports::MonthlyTotal;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: &'static str,
}

#[derive(Tabled)]
struct MonthRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Total")]
    total: String,
}

/// Format the whole ledger with the positions used for deletion
pub fn format_expense_table(ledger: &Ledger, currency: &str, date_format: &str) -> String {
    if ledger.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let rows = ledger.iter().enumerate().map(|(position, record)| ExpenseRow {
        position,
        date: record.date.format(date_format).to_string(),
        description: truncate(&record.description, 40),
        amount: record.amount.format_with_symbol(currency),
        category: record.category.as_str(),
    });

    let mut table = Table::new(rows);
    table.with(Style::modern());
    format!("{}\n", table)
}

/// Format month-by-month totals
pub fn format_monthly_summary(totals: &[MonthlyTotal], currency: &str) -> String {
    if totals.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let rows = totals.iter().map(|t| MonthRow {
        month: t.month.to_string(),
        total: t.total.format_with_symbol(currency),
    });

    let mut table = Table::new(rows);
    table.with(Style::modern());
    format!("{}\n", table)
}

/// Format a single expense for confirmation messages
pub fn format_expense_details(
    position: usize,
    record: &ExpenseRecord,
    currency: &str,
    date_format: &str,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Position:    {}\n", position));
    output.push_str(&format!("Date:        {}\n", record.date.format(date_format)));
    output.push_str(&format!(
        "Amount:      {}\n",
        record.amount.format_with_symbol(currency)
    ));
    output.push_str(&format!("Category:    {}\n", record.category));

    if !record.description.is_empty() {
        output.push_str(&format!("Description: {}\n", record.description));
    }

    output
}

/// Truncate a string to a maximum number of characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
