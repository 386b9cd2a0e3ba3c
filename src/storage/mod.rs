//! Storage layer for the expense tracker
//!
//! Ledgers live in one CSV file per owner; user accounts and settings are
//! JSON. All writes go through atomic temp-file-and-rename helpers.

pub mod file_io;
pub mod ledger;
pub mod users;

pub use file_io::{read_json, write_atomic, write_json_atomic};
pub use ledger::{CsvLedgerStore, LedgerStore};
pub use users::UserRepository;

use crate::audit::AuditLogger;
use crate::config::paths::ExpensePaths;
use crate::error::ExpenseError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    pub ledgers: CsvLedgerStore,
    pub users: UserRepository,
    pub audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: ExpensePaths) -> Result<Self, ExpenseError> {
        paths.ensure_directories()?;

        Ok(Self {
            ledgers: CsvLedgerStore::new(paths.data_dir()),
            users: UserRepository::new(paths.users_file()),
            audit: AuditLogger::new(paths.audit_log()),
        })
    }

    /// Load the user registry; ledgers are read on demand per owner
    pub fn load_all(&mut self) -> Result<(), ExpenseError> {
        self.users.load()
    }
}
