//! User account CLI commands

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Owner;
use crate::services::UserService;
use crate::storage::Storage;

/// Register a user, prompting for the password when not supplied
pub fn handle_register(
    storage: &Storage,
    username: &str,
    password: Option<String>,
) -> ExpenseResult<()> {
    let password = match password {
        Some(p) => p,
        None => {
            let first = prompt("Choose a password: ")?;
            let second = prompt("Confirm password: ")?;
            if first != second {
                return Err(ExpenseError::Validation("Passwords do not match".into()));
            }
            first
        }
    };

    let account = UserService::new(storage).register(username, &password)?;
    println!("Registered user '{}'.", account.username);
    println!("Use --user {} to work with this ledger.", account.username);
    Ok(())
}

/// Resolve the ledger owner for this invocation
///
/// Without a username the shared default ledger is used.
pub fn resolve_owner(
    storage: &Storage,
    username: Option<&str>,
    password: Option<String>,
) -> ExpenseResult<Owner> {
    let Some(username) = username else {
        return Ok(Owner::Default);
    };

    let password = match password {
        Some(p) => p,
        None => prompt(&format!("Password for {}: ", username))?,
    };

    UserService::new(storage).authenticate(username, &password)
}

fn prompt(message: &str) -> ExpenseResult<String> {
    rpassword::prompt_password(message)
        .map_err(|e| ExpenseError::Io(format!("Failed to read password: {}", e)))
}
