//! User account repository for JSON storage
//!
//! Manages loading and saving registered users to users.json

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::ExpenseError;
use crate::models::UserAccount;

use super::file_io::{read_json, write_json_atomic};

/// Serializable user data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct UserData {
    users: Vec<UserAccount>,
}

/// Repository for user account persistence
pub struct UserRepository {
    path: PathBuf,
    data: RwLock<BTreeMap<String, UserAccount>>,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(BTreeMap::new()),
        }
    }

    /// Load users from disk
    pub fn load(&self) -> Result<(), ExpenseError> {
        let file_data: UserData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for user in file_data.users {
            data.insert(user.username.clone(), user);
        }

        Ok(())
    }

    /// Save users to disk
    pub fn save(&self) -> Result<(), ExpenseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = UserData {
            users: data.values().cloned().collect(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a user by exact (case-sensitive) username
    pub fn get(&self, username: &str) -> Result<Option<UserAccount>, ExpenseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(username).cloned())
    }

    /// Insert a new user, failing if the username is taken
    pub fn insert(&self, user: UserAccount) -> Result<(), ExpenseError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if data.contains_key(&user.username) {
            return Err(ExpenseError::Duplicate {
                entity_type: "User",
                identifier: user.username,
            });
        }

        data.insert(user.username.clone(), user);
        Ok(())
    }

    /// Count registered users
    pub fn count(&self) -> Result<usize, ExpenseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, UserRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = UserRepository::new(temp_dir.path().join("users.json"));
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_insert_save_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        repo.insert(UserAccount::new("alice", "hash-a")).unwrap();
        repo.save().unwrap();

        let reloaded = UserRepository::new(temp_dir.path().join("users.json"));
        reloaded.load().unwrap();
        let alice = reloaded.get("alice").unwrap().unwrap();
        assert_eq!(alice.password_hash, "hash-a");
    }

    #[test]
    fn test_usernames_are_case_sensitive() {
        let (_temp_dir, repo) = create_test_repo();
        repo.insert(UserAccount::new("alice", "h1")).unwrap();
        repo.insert(UserAccount::new("Alice", "h2")).unwrap();

        assert_eq!(repo.count().unwrap(), 2);
        assert!(repo.get("ALICE").unwrap().is_none());
    }

    #[test]
    fn test_duplicate_insert() {
        let (_temp_dir, repo) = create_test_repo();
        repo.insert(UserAccount::new("alice", "h1")).unwrap();

        let err = repo.insert(UserAccount::new("alice", "h2")).unwrap_err();
        assert!(matches!(err, ExpenseError::Duplicate { .. }));
        assert_eq!(repo.get("alice").unwrap().unwrap().password_hash, "h1");
    }
}
