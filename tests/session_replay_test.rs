use assert_cmd::cargo_bin;
use std::process::Command;
use tempfile::tempdir;

mod common;

#[test]
fn test_generated_session_replay() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("session.csv");
    let session = common::generate_session_csv(&input, 42, 500).expect("Failed to generate session");

    let output = Command::new(cargo_bin!("paystation"))
        .arg(&input)
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());
    assert!(output.stderr.is_empty(), "Only legal events were generated");

    let stdout = String::from_utf8_lossy(&output.stdout);
    // Header + one outcome per event
    assert_eq!(stdout.lines().count(), session.rows + 1);

    let expected_till = format!("empty,0,,,{}.{:02}", session.till / 100, session.till % 100);
    assert_eq!(stdout.lines().last(), Some(expected_till.as_str()));
}

#[test]
fn test_generated_session_is_reproducible() {
    let dir = tempdir().unwrap();
    let first = dir.path().join("first.csv");
    let second = dir.path().join("second.csv");

    common::generate_session_csv(&first, 7, 20).unwrap();
    common::generate_session_csv(&second, 7, 20).unwrap();

    assert_eq!(
        std::fs::read_to_string(first).unwrap(),
        std::fs::read_to_string(second).unwrap()
    );
}
