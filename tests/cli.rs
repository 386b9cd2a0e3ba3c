//! End-to-end tests for the `expenses` binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expenses(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expenses").unwrap();
    cmd.env("EXPENSE_TRACKER_DATA_DIR", dir.path())
        .env_remove("EXPENSE_TRACKER_USER")
        .env_remove("EXPENSE_TRACKER_PASSWORD");
    cmd
}

fn add(dir: &TempDir, date: &str, amount: &str, category: &str) {
    expenses(dir)
        .args(["add", amount, category, "--date", date])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added successfully!"));
}

#[test]
fn test_help() {
    let dir = TempDir::new().unwrap();
    expenses(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("dashboard"));
}

#[test]
fn test_add_list_and_file_contents() {
    let dir = TempDir::new().unwrap();
    expenses(&dir)
        .args(["add", "12.5", "transport", "-d", "Bus pass", "--date", "2024-03-02"])
        .assert()
        .success();

    expenses(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bus pass"))
        .stdout(predicate::str::contains("Rs. 12.50"))
        .stdout(predicate::str::contains("Transport"));

    let contents = std::fs::read_to_string(dir.path().join("data").join("expenses.csv")).unwrap();
    assert_eq!(
        contents,
        "Date,Description,Amount,Category\n2024-03-02,Bus pass,12.50,Transport\n"
    );
}

#[test]
fn test_summary_and_dashboard() {
    let dir = TempDir::new().unwrap();
    add(&dir, "2024-01-05", "50", "Food");
    add(&dir, "2024-01-20", "200", "Rent");
    add(&dir, "2024-02-01", "30", "Food");

    expenses(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01"))
        .stdout(predicate::str::contains("Rs. 250.00"))
        .stdout(predicate::str::contains("Rs. 30.00"));

    expenses(&dir)
        .args(["dashboard", "--month", "2024-01", "--budget", "200"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Spend this Month: Rs. 250.00"))
        .stdout(predicate::str::contains("Budget Exceeded by Rs. 50.00"));

    expenses(&dir)
        .args(["dashboard", "--month", "2024-01", "--budget", "300"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Warning: You have used 80% of your budget."));
}

#[test]
fn test_summary_export() {
    let dir = TempDir::new().unwrap();
    add(&dir, "2024-01-05", "50", "Food");
    let out = dir.path().join("summary.csv");

    expenses(&dir)
        .args(["summary", "--output"])
        .arg(&out)
        .assert()
        .success();

    assert_eq!(
        std::fs::read_to_string(out).unwrap(),
        "Date,Total\n2024-01,50.00\n"
    );
}

#[test]
fn test_delete_and_out_of_range() {
    let dir = TempDir::new().unwrap();
    add(&dir, "2024-01-05", "50", "Food");
    add(&dir, "2024-01-06", "70", "Utilities");

    expenses(&dir)
        .args(["delete", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense deleted successfully!"))
        .stdout(predicate::str::contains("Food"));

    expenses(&dir)
        .args(["delete", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No expense at position 1"));

    expenses(&dir)
        .args(["delete", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No expense at position -1"));

    expenses(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Utilities"))
        .stdout(predicate::str::contains("Food").not());
}

#[test]
fn test_invalid_input_is_rejected() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["add", "-5", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not be negative"));

    expenses(&dir)
        .args(["add", "5", "Groceries"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category"));

    expenses(&dir)
        .args(["dashboard", "--month", "2024-13"])
        .assert()
        .failure();
}

#[test]
fn test_corrupt_ledger_reports_storage_error() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    std::fs::create_dir_all(&data).unwrap();
    std::fs::write(
        data.join("expenses.csv"),
        "Date,Description,Amount,Category\nsoon,x,1,Food\n",
    )
    .unwrap();

    expenses(&dir)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Storage error"));
}

#[test]
fn test_user_ledgers_are_separate() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["register", "alice", "--password", "pw"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Registered user 'alice'"));

    expenses(&dir)
        .args(["--user", "alice", "--password", "pw"])
        .args(["add", "9.99", "Entertainment", "-d", "Movie", "--date", "2024-04-01"])
        .assert()
        .success();

    expenses(&dir)
        .args(["--user", "alice", "--password", "pw", "add", "1", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Description is required"));

    expenses(&dir)
        .env("EXPENSE_TRACKER_USER", "alice")
        .env("EXPENSE_TRACKER_PASSWORD", "pw")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Movie"));

    expenses(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded."));

    expenses(&dir)
        .args(["--user", "alice", "--password", "wrong", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid username or password"));

    assert!(dir.path().join("data").join("alice_expenses.csv").exists());
}

#[test]
fn test_history() {
    let dir = TempDir::new().unwrap();
    add(&dir, "2024-01-05", "50", "Food");
    expenses(&dir).args(["delete", "0"]).assert().success();

    expenses(&dir)
        .args(["history", "--limit", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE #0"))
        .stdout(predicate::str::contains("DELETE #0"));
}

#[test]
fn test_config_uses_data_dir_override() {
    let dir = TempDir::new().unwrap();
    expenses(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains(dir.path().to_str().unwrap()));
}

#[test]
fn test_config_updates_default_budget() {
    let dir = TempDir::new().unwrap();
    expenses(&dir)
        .args(["config", "--budget", "100", "--currency", "$"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings saved"))
        .stdout(predicate::str::contains("$100.00"));

    add(&dir, "2024-01-05", "90", "Food");
    expenses(&dir)
        .args(["dashboard", "--month", "2024-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Warning: You have used 80% of your budget."));

    expenses(&dir)
        .args(["config", "--date-format", "%Q"])
        .assert()
        .failure();
}

#[test]
fn test_add_succeeds_when_audit_log_is_unwritable() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("audit.log")).unwrap();

    expenses(&dir)
        .args(["add", "12", "Transport", "--date", "2024-03-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added successfully!"))
        .stderr(predicate::str::contains("not written to the audit log"));

    expenses(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Transport"));
}
