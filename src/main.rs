use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_config, handle_expense_command, handle_register, handle_report_command,
    resolve_owner, ConfigArgs, ExpenseCommands, ReportCommands,
};
use expense_tracker::config::{paths::ExpensePaths, settings::Settings};
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Track daily expenses against a monthly budget",
    long_about = "Record dated, categorized expenses, see how this month's spending \
                  compares to your budget, and review totals month by month. \
                  Use --user to keep a separate, password-protected ledger."
)]
struct Cli {
    /// Log in as this user and use their ledger
    #[arg(short, long, global = true, env = "EXPENSE_TRACKER_USER")]
    user: Option<String>,

    /// Password for --user or register (prompted for when omitted)
    #[arg(long, global = true, env = "EXPENSE_TRACKER_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    #[command(flatten)]
    Report(ReportCommands),

    /// Create a user with their own ledger
    Register {
        /// Login name (letters, digits, '-', '_' and '.')
        username: String,
    },

    /// Show configuration and paths, or change settings
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            let owner = resolve_owner(&storage, cli.user.as_deref(), cli.password)?;
            handle_expense_command(&storage, &settings, owner, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            let owner = resolve_owner(&storage, cli.user.as_deref(), cli.password)?;
            handle_report_command(&storage, &settings, owner, cmd)?;
        }
        Some(Commands::Register { username }) => {
            handle_register(&storage, &username, cli.password)?;
        }
        Some(Commands::Config(args)) => {
            handle_config(&paths, &storage, settings, args)?;
        }
        None => {
            println!("Expense Tracker");
            println!();
            println!("Run 'expenses --help' for usage information.");
            println!("Run 'expenses dashboard' to see this month's spending.");
        }
    }

    Ok(())
}
