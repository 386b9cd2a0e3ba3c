//! Cryptographic functions for the expense tracker
//!
//! Provides Argon2id password hashing for user accounts.

pub mod password;

pub use password::{hash_password, verify_password};
