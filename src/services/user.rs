//! User service
//!
//! Registration and login for per-user ledgers. A successful login yields
//! the `Owner` that every ledger operation is then scoped to.

use crate::crypto::{hash_password, verify_password};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Owner, UserAccount};
use crate::storage::Storage;

const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Service for user account management
pub struct UserService<'a> {
    storage: &'a Storage,
}

impl<'a> UserService<'a> {
    /// Create a new user service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Register a new user and persist the registry
    pub fn register(&self, username: &str, password: &str) -> ExpenseResult<UserAccount> {
        validate_username(username)?;

        if password.is_empty() {
            return Err(ExpenseError::Validation("Password must not be empty".into()));
        }

        let account = UserAccount::new(username, hash_password(password)?);
        self.storage.users.insert(account.clone())?;
        self.storage.users.save()?;

        Ok(account)
    }

    /// Check credentials and return the owner to scope ledger access to
    ///
    /// Unknown users and wrong passwords produce the same error.
    pub fn authenticate(&self, username: &str, password: &str) -> ExpenseResult<Owner> {
        let account = self
            .storage
            .users
            .get(username)?
            .ok_or_else(|| ExpenseError::Auth(INVALID_CREDENTIALS.into()))?;

        if verify_password(password, &account.password_hash)? {
            Ok(account.owner())
        } else {
            Err(ExpenseError::Auth(INVALID_CREDENTIALS.into()))
        }
    }
}

/// Usernames are used verbatim in ledger file names
fn validate_username(username: &str) -> ExpenseResult<()> {
    if username.is_empty() {
        return Err(ExpenseError::Validation("Username must not be empty".into()));
    }

    if username.starts_with('.') {
        return Err(ExpenseError::Validation(
            "Username must not start with '.'".into(),
        ));
    }

    let allowed = |c: char| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.');
    if !username.chars().all(allowed) {
        return Err(ExpenseError::Validation(format!(
            "Username '{}' may only contain letters, digits, '-', '_' and '.'",
            username
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ExpensePaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_register_and_authenticate() {
        let (_temp_dir, storage) = create_test_storage();
        let service = UserService::new(&storage);

        let account = service.register("alice", "s3cret").unwrap();
        assert_ne!(account.password_hash, "s3cret");

        let owner = service.authenticate("alice", "s3cret").unwrap();
        assert_eq!(owner, Owner::user("alice"));
    }

    #[test]
    fn test_wrong_password_and_unknown_user_look_the_same() {
        let (_temp_dir, storage) = create_test_storage();
        let service = UserService::new(&storage);
        service.register("alice", "s3cret").unwrap();

        let wrong = service.authenticate("alice", "nope").unwrap_err();
        let unknown = service.authenticate("mallory", "s3cret").unwrap_err();
        assert!(matches!(wrong, ExpenseError::Auth(_)));
        assert_eq!(wrong.to_string(), unknown.to_string());
    }

    #[test]
    fn test_username_is_case_sensitive() {
        let (_temp_dir, storage) = create_test_storage();
        let service = UserService::new(&storage);
        service.register("alice", "pw").unwrap();

        assert!(service.authenticate("Alice", "pw").is_err());
    }

    #[test]
    fn test_duplicate_registration() {
        let (_temp_dir, storage) = create_test_storage();
        let service = UserService::new(&storage);
        service.register("alice", "pw").unwrap();

        let err = service.register("alice", "other").unwrap_err();
        assert!(matches!(err, ExpenseError::Duplicate { .. }));
    }

    #[test]
    fn test_registry_persists() {
        let (temp_dir, storage) = create_test_storage();
        UserService::new(&storage).register("alice", "pw").unwrap();

        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut reopened = Storage::new(paths).unwrap();
        reopened.load_all().unwrap();
        assert!(UserService::new(&reopened).authenticate("alice", "pw").is_ok());
    }

    #[test]
    fn test_invalid_registrations() {
        let (_temp_dir, storage) = create_test_storage();
        let service = UserService::new(&storage);

        for bad in ["", ".hidden", "../escape", "a/b", "with space"] {
            assert!(
                service.register(bad, "pw").unwrap_err().is_validation(),
                "{:?} should be rejected",
                bad
            );
        }
        assert!(service.register("ok", "").unwrap_err().is_validation());
        assert!(service.register("jane.doe-99_x", "pw").is_ok());
    }
}
