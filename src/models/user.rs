//! Ledger ownership and user accounts

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The identity a ledger is scoped to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Owner {
    /// The shared ledger used when nobody is logged in
    #[default]
    Default,
    /// The ledger of an authenticated user, keyed by username
    User(String),
}

impl Owner {
    /// Create an owner for an authenticated username
    pub fn user(username: impl Into<String>) -> Self {
        Self::User(username.into())
    }

    /// File name of this owner's ledger, derived from the username verbatim
    pub fn storage_file_name(&self) -> String {
        match self {
            Self::Default => "expenses.csv".to_string(),
            Self::User(name) => format!("{}_expenses.csv", name),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::User(_))
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "(default)"),
            Self::User(name) => write!(f, "{}", name),
        }
    }
}

/// A registered user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    /// Unique, case-sensitive login name
    pub username: String,

    /// Argon2 PHC string
    pub password_hash: String,

    /// When the account was registered
    pub created_at: DateTime<Utc>,
}

impl UserAccount {
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
            created_at: Utc::now(),
        }
    }

    /// The ledger owner for this account
    pub fn owner(&self) -> Owner {
        Owner::User(self.username.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_file_names() {
        assert_eq!(Owner::Default.storage_file_name(), "expenses.csv");
        assert_eq!(Owner::user("alice").storage_file_name(), "alice_expenses.csv");
        assert_ne!(
            Owner::user("Alice").storage_file_name(),
            Owner::user("alice").storage_file_name()
        );
    }

    #[test]
    fn test_account_owner() {
        let account = UserAccount::new("bob", "$argon2id$...");
        assert_eq!(account.owner(), Owner::user("bob"));
        assert!(account.owner().is_authenticated());
        assert!(!Owner::Default.is_authenticated());
    }
}
