//! Configuration CLI command
//!
//! Shows paths and settings, and updates settings when given options.

use clap::Args;

use crate::config::{paths::ExpensePaths, settings::Settings};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Money;
use crate::storage::Storage;

/// Options for the `config` command; with none, the configuration is shown
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Currency prefix printed before amounts (e.g. "$" or "Rs. ")
    #[arg(long)]
    pub currency: Option<String>,
    /// Budget used by `dashboard` when --budget is not given
    #[arg(long)]
    pub budget: Option<String>,
    /// strftime format for dates in listings
    #[arg(long)]
    pub date_format: Option<String>,
}

impl ConfigArgs {
    fn is_empty(&self) -> bool {
        self.currency.is_none() && self.budget.is_none() && self.date_format.is_none()
    }
}

/// Handle the config command
pub fn handle_config(
    paths: &ExpensePaths,
    storage: &Storage,
    mut settings: Settings,
    args: ConfigArgs,
) -> ExpenseResult<()> {
    if !args.is_empty() {
        apply(&mut settings, args)?;
        settings.save(paths)?;
        println!("Settings saved to {}", paths.settings_file().display());
        println!();
    }

    println!("Expense Tracker Configuration");
    println!("=============================");
    println!("Base directory:  {}", paths.base_dir().display());
    println!("Data directory:  {}", paths.data_dir().display());
    println!("Audit log:       {}", paths.audit_log().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol: {:?}", settings.currency_symbol);
    println!(
        "  Default budget:  {}",
        settings.default_budget.format_with_symbol(&settings.currency_symbol)
    );
    println!("  Date format:     {}", settings.date_format);
    println!("  Registered users: {}", storage.users.count()?);

    Ok(())
}

fn apply(settings: &mut Settings, args: ConfigArgs) -> ExpenseResult<()> {
    if let Some(currency) = args.currency {
        settings.currency_symbol = currency;
    }

    if let Some(budget) = args.budget {
        let amount = Money::parse(&budget).map_err(|e| {
            ExpenseError::Validation(format!("Invalid budget '{}': {}", budget, e))
        })?;
        if amount.is_negative() {
            return Err(ExpenseError::Validation(
                "Default budget must not be negative".into(),
            ));
        }
        settings.default_budget = amount;
    }

    if let Some(format) = args.date_format {
        settings.date_format = format;
    }

    settings.validate()
}
