//! Expense CLI commands
//!
//! Implements adding, listing and deleting expenses.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_expense_details, format_expense_table};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, Money, Owner};
use crate::services::{ExpenseService, LedgerChange, NewExpense};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount spent (e.g., "50" or "12.75")
        #[arg(allow_negative_numbers = true)]
        amount: String,
        /// Category: Food, Transport, Entertainment, Utilities, Rent or Others
        category: String,
        /// What the money was spent on
        #[arg(short, long, default_value = "")]
        description: String,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// List all expenses with their positions
    #[command(alias = "ls")]
    List,
    /// Delete the expense at a position shown by `list`
    #[command(alias = "rm")]
    Delete {
        /// Position of the expense
        #[arg(allow_negative_numbers = true)]
        position: i64,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    owner: Owner,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage, owner);
    let currency = settings.currency_symbol.as_str();
    let date_format = settings.date_format.as_str();

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            description,
            date,
        } => {
            let amount = Money::parse(&amount).map_err(|e| {
                ExpenseError::Validation(format!(
                    "Invalid amount '{}'. Use a format like '50' or '12.75'. Error: {}",
                    amount, e
                ))
            })?;

            let category = category
                .parse::<Category>()
                .map_err(|e| ExpenseError::Validation(e.to_string()))?;

            let date = match date {
                Some(d) => parse_date(&d)?,
                None => chrono::Local::now().date_naive(),
            };

            let change = service.add(NewExpense {
                date,
                description,
                amount,
                category,
            })?;

            println!("Expense added successfully!");
            print!(
                "{}",
                format_expense_details(change.position, &change.record, currency, date_format)
            );
            warn_unaudited(&change);
        }
        ExpenseCommands::List => {
            let ledger = service.list()?;
            print!("{}", format_expense_table(&ledger, currency, date_format));
        }
        ExpenseCommands::Delete { position } => {
            let change = service.delete(position)?;
            println!("Expense deleted successfully!");
            print!(
                "{}",
                format_expense_details(change.position, &change.record, currency, date_format)
            );
            warn_unaudited(&change);
        }
    }

    Ok(())
}

fn warn_unaudited(change: &LedgerChange) {
    if let Some(e) = &change.audit_error {
        eprintln!("Warning: the change was saved but not written to the audit log: {}", e);
    }
}

fn parse_date(s: &str) -> ExpenseResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        ExpenseError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD.", s))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-02-29").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert!(parse_date("2023-02-29").unwrap_err().is_validation());
        assert!(parse_date("29/02/2024").is_err());
    }
}
