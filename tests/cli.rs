use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use serde_json::Value;

fn cmd() -> Command {
    Command::cargo_bin("hanoi").unwrap()
}

#[test]
fn disks_from_argument() {
    cmd()
        .arg("2")
        .assert()
        .success()
        .stdout("\n    0: A->B A->C B->C\n");
}

#[test]
fn disks_from_stdin() {
    cmd()
        .write_stdin("3\n")
        .assert()
        .success()
        .stdout("\n    0: A->C A->B C->B A->C B->A B->C A->C\n");
}

#[test]
fn pegs_from_stdin() {
    cmd()
        .write_stdin("1 X Y Z\n")
        .assert()
        .success()
        .stdout("\n    0: X->Y\n");
}

#[test]
fn peg_flags_override_defaults() {
    cmd()
        .args(["2", "--from", "1", "--to", "3", "--via", "2"])
        .assert()
        .success()
        .stdout("\n    0: 1->2 1->3 2->3\n");
}

#[test]
fn zero_disks_print_nothing() {
    cmd().arg("0").assert().success().stdout("");
}

#[test]
fn fourth_disk_wraps_onto_second_line() {
    cmd()
        .arg("4")
        .assert()
        .success()
        .stdout(contains("\n    0: A->B A->C B->C A->B C->A C->B A->B A->C\n"))
        .stdout(contains("\n    8: B->C B->A C->A B->C A->B A->C B->C\n"));
}

#[test]
fn negative_disks_rejected() {
    cmd()
        .arg("-3")
        .assert()
        .failure()
        .stdout("")
        .stderr(contains("cannot be negative"));
}

#[test]
fn garbage_stdin_rejected() {
    cmd()
        .write_stdin("lots")
        .assert()
        .failure()
        .stderr(contains("whole number"));
}

#[test]
fn empty_stdin_rejected() {
    cmd()
        .write_stdin("")
        .assert()
        .failure()
        .stderr(contains("No disk count"));
}

#[test]
fn duplicate_peg_rejected() {
    cmd()
        .args(["3", "--from", "C"])
        .assert()
        .failure()
        .stderr(contains("distinct"));
}

#[test]
fn multi_char_peg_flag_rejected() {
    cmd()
        .args(["3", "--via", "BB"])
        .assert()
        .failure()
        .stderr(contains("single character"));
}

#[test]
fn json_output() {
    let output = cmd().args(["--json", "2"]).output().unwrap();
    assert!(output.status.success());

    let doc: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["ok"], true);
    assert_eq!(doc["data"]["disks"], 2);
    assert_eq!(doc["data"]["total"], 3);
    assert_eq!(doc["data"]["source"], "A");
    assert_eq!(doc["data"]["moves"][0]["from"], "A");
    assert_eq!(doc["data"]["moves"][0]["to"], "B");
    assert_eq!(doc["data"]["moves"][2]["from"], "B");
    assert_eq!(doc["data"]["moves"][2]["to"], "C");
}

#[test]
fn json_rejects_puzzles_too_large_to_collect() {
    for disks in ["21", "40", "64"] {
        cmd()
            .args(["--json", disks])
            .assert()
            .failure()
            .stdout("")
            .stderr(contains("at most 20"));
    }
}

#[test]
fn write_failure_keeps_io_cause() {
    let err = hanoi::SolveError::Sink(std::io::Error::new(
        std::io::ErrorKind::BrokenPipe,
        "pipe closed",
    ));
    let report = format!("{:#}", anyhow::Error::new(err));
    assert!(report.contains("Failed to record move"));
    assert!(report.contains("pipe closed"));
}

#[test]
fn logs_go_to_stderr() {
    cmd()
        .args(["-vv", "1"])
        .assert()
        .success()
        .stdout("\n    0: A->C\n")
        .stderr(contains("Solving puzzle"));
}

#[test]
fn quiet_by_default() {
    cmd()
        .env_remove("RUST_LOG")
        .arg("1")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
