//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, auditing and owner scoping.

pub mod expense;
pub mod user;

pub use expense::{ExpenseService, LedgerChange, NewExpense};
pub use user::UserService;
