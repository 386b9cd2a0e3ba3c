//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod config;
pub mod expense;
pub mod report;
pub mod user;

pub use config::{handle_config, ConfigArgs};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use report::{handle_report_command, ReportCommands};
pub use user::{handle_register, resolve_owner};
