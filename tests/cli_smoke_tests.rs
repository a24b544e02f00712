mod common;

use assert_cmd::Command;
use chrono::SecondsFormat;
use ivy_domain::{Transaction, TransactionKind, TransactionsList};
use predicates::prelude::*;
use predicates::str::contains;
use uuid::Uuid;

use common::{at, household, now, Fixture};

fn list_cmd(fixture: &Fixture) -> Command {
    let mut cmd = Command::cargo_bin("ivy_trn_list").unwrap();
    cmd.env("NO_COLOR", "1")
        .arg("--config")
        .arg(fixture.config_path())
        .arg("--now")
        .arg(now().to_rfc3339_opts(SecondsFormat::Secs, true));
    cmd
}

#[test]
fn prints_sections_then_history() {
    let fixture = Fixture::new();
    let snapshot = fixture.snapshot(household());

    list_cmd(&fixture)
        .arg(&snapshot)
        .arg("--plain")
        .assert()
        .success()
        .stdout(contains("[+] Upcoming (1)"))
        .stdout(contains("[-] Overdue (1)"))
        .stdout(contains("Gym"))
        .stdout(contains("Rent").not())
        .stdout(contains("Fri, 09 May 2025"))
        .stdout(contains("Transfer 11111111 -> 22222222"));
}

#[test]
fn expand_flag_reveals_collapsed_section() {
    let fixture = Fixture::new();
    let snapshot = fixture.snapshot(household());

    list_cmd(&fixture)
        .arg(&snapshot)
        .args(["--expand", "upcoming", "--collapse", "overdue"])
        .assert()
        .success()
        .stdout(contains("[-] Upcoming (1)"))
        .stdout(contains("2025-05-20  Rent"))
        .stdout(contains("Gym").not());
}

#[test]
fn configured_section_defaults_apply() {
    let fixture = Fixture::new();
    let snapshot = fixture.snapshot(household());
    fixture.config(r#"{ "sections": { "upcoming_expanded": true, "overdue_expanded": false } }"#);

    list_cmd(&fixture)
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(contains("Rent"))
        .stdout(contains("[+] Overdue (1)"));
}

#[test]
fn empty_snapshot_shows_empty_state() {
    let fixture = Fixture::new();
    let snapshot = fixture.snapshot(Vec::new());

    list_cmd(&fixture)
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(contains("No transactions"))
        .stdout(contains("Upcoming").not());
}

#[test]
fn configured_empty_title_keeps_builtin_description() {
    let fixture = Fixture::new();
    let snapshot = fixture.snapshot(Vec::new());
    fixture.config(r#"{ "empty_state": { "title": "All clear" } }"#);

    list_cmd(&fixture)
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(contains("All clear"))
        .stdout(contains("You don't have any transactions yet."))
        .stdout(contains("No transactions").not());
}

#[test]
fn json_output_decodes_as_list() {
    let fixture = Fixture::new();
    let snapshot = fixture.snapshot(household());

    let output = list_cmd(&fixture)
        .arg(&snapshot)
        .arg("--json")
        .output()
        .expect("run ivy_trn_list");
    assert!(output.status.success());

    let list: TransactionsList = serde_json::from_slice(&output.stdout).expect("decode list");
    assert_eq!(list.upcoming.map(|s| s.len()), Some(1));
    assert_eq!(list.overdue.map(|s| s.len()), Some(1));
    assert_eq!(list.history.iter().filter(|i| i.is_divider()).count(), 2);
}

#[test]
fn check_reports_broken_transfer_and_fails() {
    let fixture = Fixture::new();
    let lonely_leg =
        Transaction::realized(TransactionKind::Expense, 50.0, at(7, 9), Uuid::new_v4())
            .with_batch(Uuid::new_v4());
    let snapshot = fixture.snapshot(vec![lonely_leg]);

    list_cmd(&fixture)
        .arg(&snapshot)
        .arg("--check")
        .assert()
        .failure()
        .code(1)
        .stdout(contains("issue:"))
        .stderr(contains("Error: 1 record issue(s) found"));
}

#[test]
fn check_passes_clean_snapshot() {
    let fixture = Fixture::new();
    let snapshot = fixture.snapshot(household());

    list_cmd(&fixture)
        .arg(&snapshot)
        .arg("--check")
        .assert()
        .success()
        .stdout(contains("6 record(s), no issues"));
}

#[test]
fn missing_snapshot_file_is_an_error() {
    let fixture = Fixture::new();

    list_cmd(&fixture)
        .arg(fixture.dir.path().join("absent.json"))
        .assert()
        .failure()
        .stderr(contains("Snapshot unavailable"));
}

#[test]
fn invalid_timezone_is_an_error() {
    let fixture = Fixture::new();
    let snapshot = fixture.snapshot(household());

    list_cmd(&fixture)
        .arg(&snapshot)
        .args(["--tz", "Nowhere/Special"])
        .assert()
        .failure()
        .stderr(contains("Invalid time zone: Nowhere/Special"));
}

#[test]
fn build_info_needs_no_snapshot() {
    Command::cargo_bin("ivy_trn_list")
        .unwrap()
        .arg("--build-info")
        .assert()
        .success()
        .stdout(contains("ivy_trn_list"));
}
