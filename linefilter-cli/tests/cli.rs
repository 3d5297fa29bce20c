use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

struct Fixture {
    dir: TempDir,
    source: PathBuf,
    destination: PathBuf,
}

fn fixture(contents: &str) -> Fixture {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("in.csv");
    let destination = dir.path().join("out.csv");
    fs::write(&source, contents).unwrap();
    Fixture {
        dir,
        source,
        destination,
    }
}

fn linefilter(fx: &Fixture, line: &str) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("linefilter");
    cmd.env_remove("RUST_LOG")
        .arg(&fx.source)
        .arg(&fx.destination)
        .arg(line);
    cmd
}

#[test]
fn filters_selected_line_silently() {
    let fx = fixture("id,name\n3,abc,0,7,-5,08\n");

    linefilter(&fx, "1")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());

    assert_eq!(fs::read_to_string(&fx.destination).unwrap(), "3,7,08");
}

#[test]
fn writes_empty_file_when_nothing_qualifies() {
    let fx = fixture("0,0,x,-1");

    linefilter(&fx, "0").assert().success();

    assert_eq!(fs::read_to_string(&fx.destination).unwrap(), "");
}

#[test]
fn out_of_range_line_fails_without_output() {
    let fx = fixture("1,2\n");

    linefilter(&fx, "1")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("line index 1 out of range"));

    assert!(!fx.destination.exists());
}

#[test]
fn missing_source_fails() {
    let fx = fixture("");
    fs::remove_file(&fx.source).unwrap();

    linefilter(&fx, "0")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn unwritable_destination_fails() {
    let fx = fixture("1,2");
    let destination = fx.dir.path().join("missing-dir").join("out.csv");

    cargo_bin_cmd!("linefilter")
        .env_remove("RUST_LOG")
        .arg(&fx.source)
        .arg(&destination)
        .arg("0")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to write"));
}

#[test]
fn non_integer_line_is_a_usage_error() {
    let fx = fixture("1,2");

    linefilter(&fx, "one").assert().code(2);
    linefilter(&fx, "1.5").assert().code(2);

    assert!(!fx.destination.exists());
}

#[test]
fn negative_line_is_rejected() {
    let fx = fixture("1,2");

    linefilter(&fx, "-1").assert().failure();

    assert!(!fx.destination.exists());
}

#[test]
fn missing_arguments_fail() {
    cargo_bin_cmd!("linefilter")
        .arg("in.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn rust_log_enables_debug_diagnostics() {
    let fx = fixture("5,0,6");

    linefilter(&fx, "0")
        .env("RUST_LOG", "linefilter=debug")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("filtered line"));
}

#[test]
fn rust_log_records_failures() {
    let fx = fixture("1,2\n");

    linefilter(&fx, "4")
        .env("RUST_LOG", "linefilter=debug")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error=line index 4 out of range"))
        .stderr(predicate::str::contains("Error: line index 4 out of range"));
}

#[test]
fn failures_are_not_logged_at_default_level() {
    let fx = fixture("1,2\n");

    linefilter(&fx, "4")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error=").not());
}
