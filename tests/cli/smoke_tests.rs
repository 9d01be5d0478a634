use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

fn cetnik() -> Command {
    Command::new(env!("CARGO_BIN_EXE_cetnik"))
}

#[test]
fn shows_help() {
    cetnik()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("cetnik"))
        .stdout(predicate::str::contains("--discount"));
}

#[test]
fn inline_text_as_json() {
    let output = cetnik().args(["--text", "aA", "--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(json["entries"][0]["key"], "A");
    assert_eq!(json["entries"][0]["count"], 2);
    assert_eq!(json["input_length"], 2);
}

#[test]
fn case_sensitive_csv() {
    cetnik()
        .args(["-c", "--text", "aA", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a,a,,1,1,"))
        .stdout(predicate::str::contains("A,A,,1,1,"));
}

#[test]
fn reads_stdin_by_default() {
    cetnik()
        .args(["--format", "tsv", "--category", "diacritics"])
        .write_stdin("Čáp 42")
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{0301}\t´\t\t1\t1\t"))
        .stdout(predicate::str::contains("\u{030C}\tˇ\t\t1\t1\t"));
}

#[test]
fn discount_is_subtracted() {
    cetnik()
        .args(["--text", "banana", "--discount", "an", "--format", "csv", "--sort", "frequency"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A,A,,2,3,1"))
        .stdout(predicate::str::contains("N,N,,1,2,1"));
}

#[test]
fn fully_discounted_entries_listed_until_hidden() {
    cetnik()
        .args(["--text", "ab", "--discount", "a", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A,A,,0,1,1"));

    cetnik()
        .args(["--text", "ab", "--discount", "a", "--format", "csv", "--hide-zero"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A,A,").not())
        .stdout(predicate::str::contains("B,B,,1,1,"));
}

#[test]
fn file_input_and_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("vstup.txt");
    let output = dir.path().join("vystup.md");
    fs::write(&input, "\u{FEFF}Žluťoučký kůň").unwrap();

    cetnik()
        .arg(&input)
        .args(["--format", "md", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("### Četnost znaků"));
    assert!(written.contains("12 znaků"));
}

#[test]
fn stdin_cannot_be_read_twice() {
    cetnik()
        .args(["--discount-file", "-"])
        .write_stdin("abc")
        .assert()
        .failure()
        .stderr(predicate::str::contains("stdin"));
}

#[test]
fn missing_file_fails_with_context() {
    let dir = tempfile::tempdir().unwrap();
    cetnik()
        .arg(dir.path().join("missing.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load text"));
}

#[test]
fn rejects_zero_top() {
    cetnik().args(["--text", "a", "--top", "0"]).assert().failure();
}
