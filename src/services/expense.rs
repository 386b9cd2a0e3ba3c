//! Expense service
//!
//! Owner-scoped operations on a ledger: listing, adding and deleting
//! expenses, and building the monthly dashboard. Every committed mutation
//! is also written to the audit log, on a best-effort basis.

use chrono::NaiveDate;

use crate::audit::AuditEntry;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, ExpenseRecord, Ledger, Money, Owner, YearMonth};
use crate::reports::{monthly_summary, DashboardReport, MonthlyTotal};
use crate::storage::{LedgerStore, Storage};

/// Input for recording a new expense
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub date: NaiveDate,
    pub description: String,
    pub amount: Money,
    pub category: Category,
}

/// A mutation that has been saved to the ledger
#[derive(Debug)]
pub struct LedgerChange {
    /// Position of the record when it was added or removed
    pub position: usize,
    pub record: ExpenseRecord,
    /// Set when the ledger was saved but the audit log could not be written
    pub audit_error: Option<ExpenseError>,
}

/// Service for one owner's expenses
pub struct ExpenseService<'a> {
    storage: &'a Storage,
    owner: Owner,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service for `owner`
    pub fn new(storage: &'a Storage, owner: Owner) -> Self {
        Self { storage, owner }
    }

    /// The owner this service acts for
    pub fn owner(&self) -> &Owner {
        &self.owner
    }

    /// Load the owner's ledger in stored order
    pub fn list(&self) -> ExpenseResult<Ledger> {
        self.storage.ledgers.load(&self.owner)
    }

    /// Record a new expense
    ///
    /// Logged-in users must supply a description; the shared default ledger
    /// accepts an empty one. Once the ledger is saved this returns `Ok`,
    /// even if the audit entry fails.
    pub fn add(&self, input: NewExpense) -> ExpenseResult<LedgerChange> {
        let description = input.description.trim().to_string();

        if self.owner.is_authenticated() && description.is_empty() {
            return Err(ExpenseError::Validation("Description is required".into()));
        }

        let record = ExpenseRecord::new(input.date, description, input.amount, input.category);

        let position = self.list()?.len();
        self.storage.ledgers.append(&self.owner, record.clone())?;

        Ok(self.committed(AuditEntry::create(&self.owner, position, &record), record))
    }

    /// Delete the expense at `position` of the current ledger
    ///
    /// Negative positions are reported the same way as positions past the
    /// end. As with `add`, a failed audit entry does not fail the delete.
    pub fn delete(&self, position: i64) -> ExpenseResult<LedgerChange> {
        let index = match usize::try_from(position) {
            Ok(index) => index,
            Err(_) => {
                let len = self.list()?.len();
                return Err(ExpenseError::index(position, len));
            }
        };

        let removed = self.storage.ledgers.delete_at(&self.owner, index)?;

        Ok(self.committed(AuditEntry::delete(&self.owner, index, &removed), removed))
    }

    fn committed(&self, entry: AuditEntry, record: ExpenseRecord) -> LedgerChange {
        LedgerChange {
            position: entry.position,
            record,
            audit_error: self.storage.audit.log(&entry).err(),
        }
    }

    /// Build the dashboard for `month` against `budget`
    pub fn dashboard(&self, month: YearMonth, budget: Money) -> ExpenseResult<DashboardReport> {
        if budget.is_negative() {
            return Err(ExpenseError::Validation(format!(
                "Budget must not be negative (got {})",
                budget
            )));
        }

        let ledger = self.list()?;
        Ok(DashboardReport::generate(&ledger, month, budget))
    }

    /// Month-by-month totals over the whole ledger
    pub fn monthly_summary(&self) -> ExpenseResult<Vec<MonthlyTotal>> {
        let ledger = self.list()?;
        Ok(monthly_summary(ledger.records()))
    }
}
