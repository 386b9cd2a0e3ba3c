//! Expense Tracker - file-backed personal expense tracking
//!
//! This library provides the core of a personal expense tracker: an
//! owner-scoped ledger of dated, categorized expenses, aggregations over it
//! (monthly totals, category breakdowns, cumulative trends), and a budget
//! check for the month.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, ledgers, money, months, owners)
//! - `storage`: CSV ledger files and JSON user registry
//! - `reports`: Aggregation engine, budget evaluator and dashboard
//! - `services`: Business logic layer
//! - `audit`: Audit logging of ledger mutations
//! - `crypto`: Password hashing
//! - `cli` / `display`: Terminal front-end
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::ExpensePaths;
//! use expense_tracker::models::{Money, Owner, YearMonth};
//! use expense_tracker::services::ExpenseService;
//! use expense_tracker::storage::Storage;
//!
//! let storage = Storage::new(ExpensePaths::new()?)?;
//! let service = ExpenseService::new(&storage, Owner::Default);
//! let report = service.dashboard(YearMonth::current(), Money::from_cents(100_000))?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod crypto;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::ExpenseError;
