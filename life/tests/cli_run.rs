//! CLI tests for the `life` binary.
//!
//! Spawns the binary against scratch pattern files and verifies output and
//! exit codes for normal runs and fatal input errors.

use std::fs;
use std::process::{Command, Output};

use life::exit_codes;
use life::test_support::PatternFile;

fn life(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_life"))
        .args(args)
        .output()
        .expect("run life")
}

#[test]
fn blinker_runs_to_budget() {
    let file = PatternFile::new("xxx\n").expect("pattern file");
    let path = file.path().to_str().expect("utf8 path");
    let output = life(&["6", "6", "1", path]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Game of Life\n"));
    assert!(stdout.contains("  x   \n  x   \n  x   \n"));
    assert!(stdout.ends_with("1 generations have been processed. Exiting...\n"));
}

#[test]
fn json_summary_reports_stop_reason() {
    let file = PatternFile::new("xx\nxx\n").expect("pattern file");
    let path = file.path().to_str().expect("utf8 path");
    let output = life(&["6", "6", "10", path, "y", "--json"]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"stop\": \"stagnant\""));
    assert!(stdout.contains("\"generations_processed\": 0"));
}

#[test]
fn empty_pattern_exits_with_no_life() {
    let file = PatternFile::new("....\n\n").expect("pattern file");
    let path = file.path().to_str().expect("utf8 path");
    let output = life(&["5", "5", "3", path]);

    assert_eq!(output.status.code(), Some(exit_codes::NO_LIFE));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("pattern contains no alive cells"));
}

#[test]
fn zero_rows_is_invalid() {
    let file = PatternFile::new("x\n").expect("pattern file");
    let path = file.path().to_str().expect("utf8 path");
    let output = life(&["0", "5", "3", path]);

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("rows and columns must be greater than 0"));
}

#[test]
fn oversized_grid_is_invalid_not_a_crash() {
    let file = PatternFile::new("x\n").expect("pattern file");
    let path = file.path().to_str().expect("utf8 path");
    let output = life(&["18446744073709551615", "2", "1", path]);

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("too large"));
    assert!(!stderr.contains("panicked"));
}

#[test]
fn missing_input_is_invalid() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("missing.txt");
    let output = life(&["5", "5", "3", path.to_str().expect("utf8 path")]);

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing.txt"));
}

#[test]
fn pause_without_print_is_invalid() {
    let file = PatternFile::new("xxx\n").expect("pattern file");
    let path = file.path().to_str().expect("utf8 path");
    let output = life(&["5", "5", "3", path, "n", "y"]);

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot pause with printing off"));
}

#[test]
fn config_overrides_markers_and_glyphs() {
    let file = PatternFile::new("###\n").expect("pattern file");
    let temp = tempfile::tempdir().expect("tempdir");
    let config = temp.path().join("life.toml");
    fs::write(&config, "alive_markers = \"#\"\n\n[render]\nalive = \"@\"\ndead = \".\"\n")
        .expect("write config");

    let output = life(&[
        "3",
        "3",
        "0",
        file.path().to_str().expect("utf8 path"),
        "--config",
        config.to_str().expect("utf8 path"),
    ]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("...\n@@@\n...\n"));
    assert!(stdout.ends_with("0 generations have been processed. Exiting...\n"));
}

#[test]
fn help_mentions_life() {
    let output = life(&["--help"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Game of Life"));
}
