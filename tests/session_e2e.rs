#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn notepad_cmd() -> Command {
    let mut cmd = Command::new(cargo_bin("notepad"));
    cmd.env_remove("NOTEPAD_CAPACITY").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_full_notepad_session() {
    notepad_cmd()
        .args(["--quiet", "--no-color", "--capacity", "2"])
        .write_stdin("create A\ncreate B\ncreate C\nlist\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[Error] Notepad is full"))
        .stdout(predicate::str::contains("[Info] 1: A\n[Info] 2: B\n"))
        .stdout(predicate::str::ends_with("[Info] Bye!\n"));
}

#[test]
fn test_update_then_list() {
    notepad_cmd()
        .args(["-q", "--no-color", "-c", "3"])
        .write_stdin("create note1\nupdate 1 hello world\nlist\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[OK] The note at position 1 was successfully updated",
        ))
        .stdout(predicate::str::contains("[Info] 1: hello world"));
}

#[test]
fn test_validation_errors_keep_session_alive() {
    notepad_cmd()
        .args(["-q", "--no-color", "-c", "3"])
        .write_stdin(
            "delete 1\ncreate a\ncreate b\nupdate 5 text\nupdate x y\nupdate 1\ndelete\nfoo\ndelete 1\nlist\nexit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("[Error] There is nothing to delete"))
        .stdout(predicate::str::contains(
            "[Error] Position 5 is out of the boundary [1, 3]",
        ))
        .stdout(predicate::str::contains("[Error] Invalid position: x"))
        .stdout(predicate::str::contains("[Error] Missing note argument"))
        .stdout(predicate::str::contains("[Error] Missing position argument"))
        .stdout(predicate::str::contains("[Error] Unknown command"))
        .stdout(predicate::str::contains(
            "[OK] The note at position 1 was successfully deleted",
        ))
        .stdout(predicate::str::contains("[Info] 1: b"));
}

#[test]
fn test_capacity_prompt() {
    notepad_cmd()
        .arg("--no-color")
        .write_stdin("1\ncreate A\ncreate B\nclear\nlist\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Enter the maximum number of notes: ",
        ))
        .stdout(predicate::str::contains("Enter a command and data: "))
        .stdout(predicate::str::contains("[Error] Notepad is full"))
        .stdout(predicate::str::contains(
            "[OK] All notes were successfully deleted",
        ))
        .stdout(predicate::str::contains("[Info] Notepad is empty"));
}

#[test]
fn test_bad_capacity_means_always_full() {
    notepad_cmd()
        .args(["-q", "--no-color"])
        .write_stdin("many\ncreate A\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[Error] Notepad is full"));
}

#[test]
fn test_very_large_capacity_answer() {
    notepad_cmd()
        .args(["-q", "--no-color"])
        .write_stdin(format!("{}\ncreate A\nlist\nexit\n", usize::MAX))
        .assert()
        .success()
        .stdout(predicate::str::contains("[OK] The note was successfully created"))
        .stdout(predicate::str::contains("[Info] 1: A"))
        .stdout(predicate::str::ends_with("[Info] Bye!\n"));
}

#[test]
fn test_very_large_capacity_flag() {
    notepad_cmd()
        .args(["-q", "--no-color", "--capacity"])
        .arg(usize::MAX.to_string())
        .write_stdin("create A\nlist\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[Info] 1: A"));
}

#[test]
fn test_capacity_from_env() {
    notepad_cmd()
        .env("NOTEPAD_CAPACITY", "1")
        .args(["-q", "--no-color"])
        .write_stdin("create A\ncreate B\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[OK] The note was successfully created"))
        .stdout(predicate::str::contains("[Error] Notepad is full"));
}

#[test]
fn test_end_of_input_is_fatal() {
    notepad_cmd()
        .args(["-q", "--no-color", "-c", "1"])
        .write_stdin("create A\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Input closed before exit"));
}

#[test]
fn test_config_file() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("notepad.json");
    fs::write(&config, r#"{"capacity": 1, "prompt": false, "color": false}"#).unwrap();

    notepad_cmd()
        .arg("--config")
        .arg(&config)
        .write_stdin("create A\ncreate B\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[OK] The note was successfully created"))
        .stdout(predicate::str::contains("[Error] Notepad is full"));
}

#[test]
fn test_flag_overrides_config_capacity() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("notepad.json");
    fs::write(&config, r#"{"capacity": 1, "prompt": false}"#).unwrap();

    notepad_cmd()
        .args(["--no-color", "--capacity", "2", "--config"])
        .arg(&config)
        .write_stdin("create A\ncreate B\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[Error]").not());
}

#[test]
fn test_malformed_config_fails() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("notepad.json");
    fs::write(&config, "not json").unwrap();

    notepad_cmd()
        .arg("--config")
        .arg(&config)
        .write_stdin("exit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Serialization error"));
}
