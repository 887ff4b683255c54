use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn budgetbuddy(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("budgetbuddy").unwrap();
    cmd.env("BUDGETBUDDY_DATA_DIR", dir.path()).env_remove("RUST_LOG");
    cmd
}

fn add_expense(dir: &TempDir, amount: &str, category: &str, date: &str) {
    budgetbuddy(dir)
        .args(["expense", "add", amount, "--category", category, "--date", date])
        .assert()
        .success();
}

#[test]
fn summary_reflects_expenses_and_goal() {
    let dir = TempDir::new().unwrap();
    add_expense(&dir, "12.50", "Food", "2024-01-10");
    add_expense(&dir, "40", "Rent", "2024-01-10");

    budgetbuddy(&dir)
        .args(["goal", "set", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget goal has been set: $100.00 (Monthly)"));

    budgetbuddy(&dir)
        .args(["report", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$52.50 (2 recorded)"))
        .stdout(predicate::str::contains("Remaining:        $47.50"))
        .stdout(predicate::str::contains("Under budget"))
        .stdout(predicate::str::contains("53%"));
}

#[test]
fn summary_without_goal_omits_progress() {
    let dir = TempDir::new().unwrap();
    add_expense(&dir, "5", "Food", "2024-03-01");

    budgetbuddy(&dir)
        .args(["report", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$5.00 (1 recorded)"))
        .stdout(predicate::str::contains("No budget goal set."))
        .stdout(predicate::str::contains("Remaining").not());
}

#[test]
fn overspending_is_reported_as_over_budget() {
    let dir = TempDir::new().unwrap();
    add_expense(&dir, "120", "Shopping", "2024-02-02");
    budgetbuddy(&dir).args(["goal", "set", "100"]).assert().success();

    budgetbuddy(&dir)
        .args(["report", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$20.00 over budget"))
        .stdout(predicate::str::contains("100%"));
}

#[test]
fn invalid_amount_is_rejected_and_nothing_is_stored() {
    let dir = TempDir::new().unwrap();

    budgetbuddy(&dir)
        .args(["expense", "add", "abc", "--date", "2024-01-10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a valid amount"));

    budgetbuddy(&dir)
        .args(["expense", "add", "0", "--date", "2024-01-10"])
        .assert()
        .failure();

    budgetbuddy(&dir)
        .args(["report", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$0.00 (0 recorded)"));
}

#[test]
fn unknown_category_is_rejected() {
    let dir = TempDir::new().unwrap();

    budgetbuddy(&dir)
        .args(["expense", "add", "10", "--category", "Yachts"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Yachts"));
}

#[test]
fn expenses_persist_as_json_under_the_data_dir() {
    let dir = TempDir::new().unwrap();
    add_expense(&dir, "12.50", "Food", "2024-01-10");

    let raw = fs::read_to_string(dir.path().join("data").join("expenses.json")).unwrap();
    let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let first = &stored[0];
    assert_eq!(first["amount"], 12.5);
    assert_eq!(first["category"], "Food");
    assert_eq!(first["date"], "2024-01-10");
}

#[test]
fn date_format_setting_applies_to_expense_output() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("settings.json"), r#"{"date_format": "%d/%m/%Y"}"#).unwrap();

    budgetbuddy(&dir)
        .args(["expense", "add", "12.50", "--date", "2024-01-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Date:        10/01/2024"));

    budgetbuddy(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("10/01/2024"));
}

#[test]
fn goal_edit_without_period_keeps_the_existing_one() {
    let dir = TempDir::new().unwrap();
    budgetbuddy(&dir)
        .args(["goal", "set", "100", "--period", "semester", "--notes", "books"])
        .assert()
        .success();

    budgetbuddy(&dir)
        .args(["goal", "set", "200"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$200.00 (Semester)"));

    budgetbuddy(&dir)
        .args(["goal", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Notes:         books"));
}

#[test]
fn list_filters_by_category() {
    let dir = TempDir::new().unwrap();
    add_expense(&dir, "12.50", "Food", "2024-01-10");
    add_expense(&dir, "40", "Rent", "2024-01-11");

    budgetbuddy(&dir)
        .args(["expense", "list", "--category", "rent"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$40.00"))
        .stdout(predicate::str::contains("$12.50").not());
}

#[test]
fn delete_removes_expense_by_uuid() {
    let dir = TempDir::new().unwrap();
    add_expense(&dir, "12.50", "Food", "2024-01-10");

    let raw = fs::read_to_string(dir.path().join("data").join("expenses.json")).unwrap();
    let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let id = stored[0]["id"].as_str().unwrap().to_string();

    budgetbuddy(&dir)
        .args(["expense", "delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted expense"));

    budgetbuddy(&dir)
        .args(["report", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$0.00 (0 recorded)"));
}

#[test]
fn delete_unknown_id_fails() {
    let dir = TempDir::new().unwrap();

    budgetbuddy(&dir)
        .args(["expense", "delete", "deadbeef"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn chart_shows_category_split_and_daily_window() {
    let dir = TempDir::new().unwrap();
    add_expense(&dir, "30", "Food", "2024-01-10");
    add_expense(&dir, "10", "Rent", "2024-01-08");

    budgetbuddy(&dir)
        .args(["report", "chart", "--date", "2024-01-10", "--window", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("75%"))
        .stdout(predicate::str::contains("Jan 8"))
        .stdout(predicate::str::contains("Jan 9"))
        .stdout(predicate::str::contains("Jan 10"))
        .stdout(predicate::str::contains("Jan 7").not());
}

#[test]
fn chart_window_is_bounded() {
    let dir = TempDir::new().unwrap();

    for window in ["0", "367", "4000000000"] {
        budgetbuddy(&dir)
            .args(["report", "chart", "--date", "2024-01-10", "--window", window])
            .assert()
            .failure()
            .stderr(predicate::str::contains("--window"));
    }

    budgetbuddy(&dir)
        .args(["report", "chart", "--date", "2024-01-10", "--window", "366"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jan 10"));
}

#[test]
fn export_json_contains_goal_and_expenses() {
    let dir = TempDir::new().unwrap();
    add_expense(&dir, "12.50", "Food", "2024-01-10");
    budgetbuddy(&dir).args(["goal", "set", "100", "--period", "weekly"]).assert().success();

    let out = dir.path().join("export.json");
    budgetbuddy(&dir)
        .args(["export", "ledger", "--format", "json", "--output"])
        .arg(&out)
        .assert()
        .success();

    let exported: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(exported["expenses"].as_array().unwrap().len(), 1);
    assert_eq!(exported["budgetGoal"]["amount"], 100.0);
    assert_eq!(exported["budgetGoal"]["period"], "Weekly");
}

#[test]
fn export_csv_writes_header_to_stdout() {
    let dir = TempDir::new().unwrap();
    add_expense(&dir, "12.50", "Food", "2024-01-10");

    budgetbuddy(&dir)
        .args(["export", "ledger"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("ID,Date,Category,Description,Amount,Created At"))
        .stdout(predicate::str::contains("2024-01-10,Food"));
}

#[test]
fn corrupt_expense_file_does_not_block_the_goal() {
    let dir = TempDir::new().unwrap();
    budgetbuddy(&dir).args(["goal", "set", "100"]).assert().success();
    fs::write(dir.path().join("data").join("expenses.json"), "{ not json").unwrap();

    budgetbuddy(&dir)
        .args(["report", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$0.00 (0 recorded)"))
        .stdout(predicate::str::contains("Budget Goal:      $100.00"));
}

#[test]
fn config_prints_paths() {
    let dir = TempDir::new().unwrap();

    budgetbuddy(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("BudgetBuddy Configuration"))
        .stdout(predicate::str::contains("Currency symbol:     $"));
}
