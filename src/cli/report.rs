//! CLI commands for reports
//!
//! Dashboard, monthly summary and audit history.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_monthly_summary;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Money, Owner, YearMonth};
use crate::reports::export_monthly_csv;
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Show spend, budget status, breakdown and trend for a month
    #[command(alias = "dash")]
    Dashboard {
        /// Month to show (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
        /// Monthly budget, defaults to the configured budget
        #[arg(short, long)]
        budget: Option<String>,
    },
    /// Show total spend for every month
    Summary {
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show recent additions and deletions
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    owner: Owner,
    cmd: ReportCommands,
) -> ExpenseResult<()> {
    let currency = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Dashboard { month, budget } => {
            let month = match month {
                Some(m) => m
                    .parse::<YearMonth>()
                    .map_err(|e| ExpenseError::Validation(e.to_string()))?,
                None => YearMonth::current(),
            };

            let budget = match budget {
                Some(b) => Money::parse(&b).map_err(|e| {
                    ExpenseError::Validation(format!("Invalid budget '{}': {}", b, e))
                })?,
                None => settings.default_budget,
            };

            let report = ExpenseService::new(storage, owner).dashboard(month, budget)?;
            print!("{}", report.format_terminal(currency));
        }
        ReportCommands::Summary { output } => {
            let totals = ExpenseService::new(storage, owner).monthly_summary()?;

            if let Some(path) = output {
                let file = File::create(&path).map_err(|e| {
                    ExpenseError::Io(format!("Failed to create {}: {}", path.display(), e))
                })?;
                let mut writer = BufWriter::new(file);
                export_monthly_csv(&totals, &mut writer)?;
                println!("Monthly summary exported to: {}", path.display());
            } else {
                print!("{}", format_monthly_summary(&totals, currency));
            }
        }
        ReportCommands::History { limit } => {
            let entries = storage.audit.read_recent(&owner, limit)?;

            if entries.is_empty() {
                println!("No history recorded.");
            }
            for entry in &entries {
                println!("{}", entry.format_human_readable());
            }
        }
    }

    Ok(())
}
