//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs. Each test
//! gets its own PLANTCARE_HOME so runs never touch the user's garden.

use std::path::Path;
use std::process::Command;

use serde_json::Value;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(home: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-q", "-p", "plantcare-cli", "--"])
        .args(args)
        .env("PLANTCARE_HOME", home)
        .env_remove("PLANTCARE_ENV")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

/// Run a command that must succeed and parse its JSON output.
fn run_json(home: &Path, args: &[&str]) -> Value {
    let (stdout, stderr, code) = run_cli(home, args);
    assert_eq!(code, 0, "command {args:?} failed: {stderr}");
    serde_json::from_str(&stdout).expect("Failed to parse JSON output")
}

fn add_plant(home: &Path, extra: &[&str]) -> String {
    let mut args = vec!["plant", "add", "monstera-deliciosa"];
    args.extend_from_slice(extra);
    let plant = run_json(home, &args);
    plant["id"].as_str().unwrap().to_string()
}

#[test]
fn test_species_list_and_show() {
    let home = tempfile::tempdir().unwrap();
    let list = run_json(home.path(), &["species", "list"]);
    assert!(list.as_array().unwrap().len() >= 9);

    let aloe = run_json(home.path(), &["species", "show", "aloe-vera"]);
    assert_eq!(aloe["water_frequency_days"], 21);

    let (_, stderr, code) = run_cli(home.path(), &["species", "show", "plastic-fern"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_care_log_moves_reminder() {
    let home = tempfile::tempdir().unwrap();
    let id = add_plant(home.path(), &["--nickname", "Monty"]);

    run_json(
        home.path(),
        &["care", "log", &id, "water", "--at", "2030-06-01T09:00:00Z"],
    );
    let water: Vec<Value> = run_json(home.path(), &["reminders", "--today", "2030-06-01", "--view", "all"])
        .as_array()
        .unwrap()
        .iter()
        .filter(|r| r["action"] == "water")
        .cloned()
        .collect();
    assert_eq!(water.len(), 1);
    assert_eq!(water[0]["due_date"], "2030-06-08");
    assert_eq!(water[0]["completed"], true);

    let history = run_json(home.path(), &["care", "history", &id]);
    assert_eq!(history.as_array().unwrap().len(), 1);
}

#[test]
fn test_care_log_keeps_local_offset() {
    let home = tempfile::tempdir().unwrap();
    let id = add_plant(home.path(), &[]);

    let event = run_json(
        home.path(),
        &["care", "log", &id, "water", "--at", "2030-06-01T23:30:00-05:00"],
    );
    assert_eq!(event["performed_at"], "2030-06-01T23:30:00-05:00");

    let water: Vec<Value> = run_json(home.path(), &["reminders", "--today", "2030-06-02", "--view", "all"])
        .as_array()
        .unwrap()
        .iter()
        .filter(|r| r["action"] == "water")
        .cloned()
        .collect();
    assert_eq!(water[0]["due_date"], "2030-06-08");
}

#[test]
fn test_reminders_overview_and_bad_date() {
    let home = tempfile::tempdir().unwrap();
    add_plant(home.path(), &[]);
    let overview = run_json(home.path(), &["reminders", "--today", "2099-01-01"]);
    assert!(!overview["overdue"].as_array().unwrap().is_empty());
    assert_eq!(overview["window_days"], 7);

    let (_, stderr, code) = run_cli(home.path(), &["reminders", "--today", "2024-13-01"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("2024-13-01"));
}

#[test]
fn test_reminders_ics() {
    let home = tempfile::tempdir().unwrap();
    add_plant(home.path(), &[]);
    let (stdout, _, code) = run_cli(home.path(), &["reminders", "--today", "2099-01-01", "--view", "overdue", "--ics"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("BEGIN:VCALENDAR"));
    assert!(stdout.contains("BEGIN:VEVENT"));
}

#[test]
fn test_vacation_workflow() {
    let home = tempfile::tempdir().unwrap();
    add_plant(home.path(), &["--water-every", "2"]);

    let plan = run_json(
        home.path(),
        &["vacation", "create", "Trip", "2030-07-01", "2030-07-07", "--today", "2030-06-30"],
    );
    let plan_id = plan["id"].as_str().unwrap().to_string();
    assert!(!plan["tasks"].as_array().unwrap().is_empty());

    let helper = run_json(home.path(), &["vacation", "add-helper", &plan_id, "Ana", "ana@example.com"]);
    let helper_id = helper["id"].as_str().unwrap().to_string();

    let tasks = run_json(home.path(), &["vacation", "auto-assign", &plan_id]);
    assert!(tasks
        .as_array()
        .unwrap()
        .iter()
        .all(|t| t["helper_id"] == helper_id.as_str()));

    let (summary, _, code) = run_cli(home.path(), &["vacation", "summary", &plan_id, &helper_id]);
    assert_eq!(code, 0);
    assert!(summary.starts_with("Hi Ana,"));

    let (ics, _, code) = run_cli(home.path(), &["vacation", "export", &plan_id]);
    assert_eq!(code, 0);
    assert!(ics.contains("BEGIN:VEVENT"));

    let (_, _, code) = run_cli(home.path(), &["vacation", "create", "Backwards", "2030-07-07", "2030-07-01"]);
    assert_eq!(code, 1);
}

#[test]
fn test_apartment_delete_cascades() {
    let home = tempfile::tempdir().unwrap();
    let apartment = run_json(home.path(), &["apartment", "add", "Flat"]);
    let apartment_id = apartment["id"].as_str().unwrap().to_string();
    let room = run_json(home.path(), &["room", "add", &apartment_id, "Kitchen", "--light", "bright"]);
    let room_id = room["id"].as_str().unwrap().to_string();
    add_plant(home.path(), &["--room", &room_id]);

    let (_, _, code) = run_cli(home.path(), &["apartment", "delete", &apartment_id]);
    assert_eq!(code, 0);
    let plants = run_json(home.path(), &["plant", "list"]);
    assert!(plants.as_array().unwrap().is_empty());
}

#[test]
fn test_config_get_set() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["config", "get", "reminders.upcoming_window_days"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "7");

    let (_, _, code) = run_cli(home.path(), &["config", "set", "reminders.upcoming_window_days", "14"]);
    assert_eq!(code, 0);
    let (stdout, _, _) = run_cli(home.path(), &["config", "get", "reminders.upcoming_window_days"]);
    assert_eq!(stdout.trim(), "14");

    let (_, _, code) = run_cli(home.path(), &["config", "get", "reminders.nope"]);
    assert_eq!(code, 1);
}
