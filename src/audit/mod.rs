//! Audit logging for ledger mutations
//!
//! Every expense added or deleted is recorded in an append-only JSON-lines
//! log together with the owner and the position it occupied.
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create(&owner, position, &record))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
