//! Audit entry data structures
//!
//! Defines the structure of audit log entries for ledger mutations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{ExpenseRecord, Owner};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Expense was appended
    Create,
    /// Expense was removed
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Username of the ledger owner, absent for the default ledger
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    /// Position of the record at the time of the operation
    pub position: usize,

    /// The record that was added or removed
    pub record: ExpenseRecord,
}

impl AuditEntry {
    /// Create a new audit entry for an appended expense
    pub fn create(owner: &Owner, position: usize, record: &ExpenseRecord) -> Self {
        Self::new(Operation::Create, owner, position, record)
    }

    /// Create a new audit entry for a deleted expense
    pub fn delete(owner: &Owner, position: usize, record: &ExpenseRecord) -> Self {
        Self::new(Operation::Delete, owner, position, record)
    }

    fn new(operation: Operation, owner: &Owner, position: usize, record: &ExpenseRecord) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            owner: match owner {
                Owner::Default => None,
                Owner::User(name) => Some(name.clone()),
            },
            position,
            record: record.clone(),
        }
    }

    /// Whether this entry belongs to `owner`'s ledger
    pub fn is_for(&self, owner: &Owner) -> bool {
        match owner {
            Owner::Default => self.owner.is_none(),
            Owner::User(name) => self.owner.as_deref() == Some(name.as_str()),
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} #{}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.position
        );

        if let Some(owner) = &self.owner {
            output.push_str(&format!(" ({})", owner));
        }

        output.push_str(&format!(
            " {} {} {}",
            self.record.date.format("%Y-%m-%d"),
            self.record.category,
            self.record.amount
        ));

        if !self.record.description.is_empty() {
            output.push_str(&format!(" \"{}\"", self.record.description));
        }

        output
    }
}
