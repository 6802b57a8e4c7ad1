#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use serde_json::Value;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with HOME pointed at a scratch dir so the user's
/// real configuration never leaks into a test.
pub fn rwl() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("rewardlog_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("rewardlog");
    cmd.env("HOME", &home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rewardlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Create the schema in test mode (no config file written)
pub fn init_db(db_path: &str) {
    rwl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Run a command with `--json` and parse its stdout.
pub fn run_json(db_path: &str, args: &[&str]) -> Value {
    let mut full = vec!["--db", db_path, "--json"];
    full.extend_from_slice(args);

    let output = rwl().args(&full).output().expect("run rewardlog");
    assert!(
        output.status.success(),
        "command {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );

    serde_json::from_slice(&output.stdout).expect("stdout is a JSON document")
}

pub fn balance(db_path: &str) -> i64 {
    run_json(db_path, &["balance"])["balance"]
        .as_i64()
        .expect("balance is an integer")
}

/// A small ledger: one awarded piano week, one awarded test, one incident.
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);
    run_json(db_path, &["piano", "2026-02-02", "150"]);
    run_json(db_path, &["test", "2026-02-10", "Math", "95", "100"]);
    run_json(db_path, &["incident", "2026-03-01"]);
}
