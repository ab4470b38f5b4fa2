//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A `marksheet` command isolated from any config on the host.
fn marksheet(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("marksheet").unwrap();
    cmd.current_dir(dir.path()).env("HOME", dir.path());
    cmd
}

#[test]
fn exit_immediately() {
    let dir = TempDir::new().unwrap();
    marksheet(&dir)
        .write_stdin("0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Student Mark Management System"))
        .stdout(predicate::str::contains("[1] Input students"))
        .stdout(predicate::str::contains("[0] Exit"))
        .stdout(predicate::str::contains("Exiting the program. Goodbye!"));
}

#[test]
fn end_of_input_exits_cleanly() {
    let dir = TempDir::new().unwrap();
    marksheet(&dir)
        .write_stdin("5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No courses to list."))
        .stdout(predicate::str::contains("Goodbye").not());
}

#[test]
fn record_and_show_marks() {
    let dir = TempDir::new().unwrap();
    let script = "1\n1\nS1\nAnn\n01/01/2000\n2\n1\nC1\nMath\n3\nC1\n15\n6\nC1\n0\n";
    marksheet(&dir)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("## Marks for Course: Math"))
        .stdout(predicate::str::is_match(r"(?m)^S1\s+Ann\s+15\.00\s*$").unwrap());
}

#[test]
fn show_marks_without_students() {
    let dir = TempDir::new().unwrap();
    marksheet(&dir)
        .write_stdin("6\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Must have courses and students to show marks.",
        ))
        .stdout(predicate::str::contains("Enter the Course ID").not());
}

#[test]
fn duplicate_student_listed_once() {
    let dir = TempDir::new().unwrap();
    let output = marksheet(&dir)
        .write_stdin("1\n2\nS1\nAnn\n01/01/2000\nS1\n4\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Student ID already exists. Skipping this student.",
        ))
        .stdout(predicate::str::contains("Successfully added 1 student(s)."))
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let rows = stdout.lines().filter(|l| l.starts_with("S1 ")).count();
    assert_eq!(rows, 1);
}

#[test]
fn invalid_mark_reprompts() {
    let dir = TempDir::new().unwrap();
    let script = "1\n1\nS1\nAnn\nx\n2\n1\nC1\nMath\n3\nC1\n42\nabc\n20\n6\nC1\n0\n";
    marksheet(&dir)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Mark must be between 0 and 20."))
        .stdout(predicate::str::contains("Invalid input. Please enter a number."))
        .stdout(predicate::str::contains("20.00"));
}

#[test]
fn diagnostics_stay_off_stdout() {
    let dir = TempDir::new().unwrap();
    marksheet(&dir)
        .env("RUST_LOG", "debug")
        .write_stdin("2\n2\nC1\nMath\nC1\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("DEBUG").not())
        .stderr(predicate::str::contains("duplicate course ID skipped"));
}

#[test]
fn init_creates_config() {
    let dir = TempDir::new().unwrap();

    marksheet(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created marksheet.toml"));
    assert!(dir.path().join("marksheet.toml").exists());

    marksheet(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    // the generated file is picked up from the working directory
    marksheet(&dir).write_stdin("0\n").assert().success();
}

#[test]
fn config_changes_title_and_range() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, "title = \"Physics 101\"\nmark_max = 100\n").unwrap();

    let script = "1\n1\nS1\nAnn\nx\n2\n1\nC1\nLab\n3\nC1\n100\n6\nC1\n0\n";
    marksheet(&dir)
        .arg("--config")
        .arg(&path)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Physics 101"))
        .stdout(predicate::str::contains("[0-100]"))
        .stdout(predicate::str::contains("100.00"));
}

#[test]
fn missing_config_fails() {
    let dir = TempDir::new().unwrap();
    marksheet(&dir)
        .arg("--config")
        .arg("nonexistent.toml")
        .write_stdin("0\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn invalid_utf8_input_keeps_session_alive() {
    let dir = TempDir::new().unwrap();
    marksheet(&dir)
        .write_stdin(&b"1\n2\nS1\nAnn\nx\nS2\nB\xffb\ny\n4\n0\n"[..])
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully added 2 student(s)."))
        .stdout(predicate::str::contains("Exiting the program. Goodbye!"));
}
