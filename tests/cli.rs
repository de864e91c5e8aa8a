//! End-to-end tests for the fintrack binary
//!
//! Each test runs against an isolated data directory via FINTRACK_DATA_DIR.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fintrack(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fintrack").unwrap();
    cmd.env("FINTRACK_DATA_DIR", dir.path());
    cmd.env_remove("FINTRACK_PROFILE");
    cmd
}

#[test]
fn dashboard_on_fresh_profile() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Balance:   $0.00"))
        .stdout(predicate::str::contains("No budget set"))
        .stdout(predicate::str::contains("No goals yet"));
}

#[test]
fn add_transaction_moves_balance() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["balance", "set", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance set to $1000.00"));

    fintrack(&dir)
        .args(["tx", "add", "50", "--category", "Food", "--merchant", "BigBasket"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance is now $950.00"));

    fintrack(&dir)
        .args(["tx", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BigBasket"))
        .stdout(predicate::str::contains("Food"));
}

#[test]
fn budget_set_and_show() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["budget", "set", "monthly", "3000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget set: Monthly limit: 3000.00"));

    fintrack(&dir)
        .args(["budget", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Policy: Monthly limit: 3000.00"));
}

#[test]
fn negative_budget_limit_is_rejected() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["budget", "set", "monthly", "-100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));
}

#[test]
fn goal_funding_checks_balance() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["goal", "add", "Trip", "500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added goal 'Trip'"));

    // Fresh profile has a zero balance
    fintrack(&dir)
        .args(["goal", "fund", "Trip", "200"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Insufficient funds"));

    fintrack(&dir)
        .args(["balance", "set", "1000"])
        .assert()
        .success();

    fintrack(&dir)
        .args(["goal", "fund", "Trip", "200"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Progress: $200.00 / $500.00"))
        .stdout(predicate::str::contains("Balance is now $800.00"));
}

#[test]
fn import_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("export.csv");
    std::fs::write(
        &csv_path,
        "date,kind,amount,merchant,description,category\n\
         2025-01-15,debit,450.00,BigBasket,Weekly groceries,Food\n\
         2025-01-16,credit,5000.00,Acme Corp,Salary,Salary\n",
    )
    .unwrap();

    fintrack(&dir)
        .args(["import", csv_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Imported 2 transactions (0 duplicates skipped).",
        ));

    fintrack(&dir)
        .args(["import", csv_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Imported 0 transactions (2 duplicates skipped).",
        ));
}

#[test]
fn export_csv_to_stdout() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["tx", "add", "50", "--category", "Food"])
        .assert()
        .success();

    fintrack(&dir)
        .args(["export", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ID,Date,Kind,Amount"))
        .stdout(predicate::str::contains("Food"));
}

#[test]
fn profiles_are_isolated() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["--profile", "alice", "balance", "set", "100"])
        .assert()
        .success();

    fintrack(&dir)
        .args(["--profile", "bob", "balance", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total balance:  $0.00"));

    fintrack(&dir)
        .args(["profile", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("alice"))
        .stdout(predicate::str::contains("bob"));
}

#[test]
fn audit_records_mutations() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["balance", "set", "100"])
        .assert()
        .success();

    fintrack(&dir)
        .args(["audit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("UPDATE Balance"));
}
