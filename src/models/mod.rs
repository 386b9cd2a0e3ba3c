//! Core data models for the expense tracker
//!
//! This module contains the data structures of the expense domain:
//! records, ledgers, categories, money, months and owners.

pub mod category;
pub mod expense;
pub mod money;
pub mod month;
pub mod user;

pub use category::{Category, CategoryParseError};
pub use expense::{ExpenseRecord, Ledger};
pub use money::{Money, MoneyParseError};
pub use month::{MonthParseError, YearMonth};
pub use user::{Owner, UserAccount};
