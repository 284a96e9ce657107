#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Config directory used by every test run of the binary.
pub fn test_home() -> PathBuf {
    let mut home: PathBuf = env::temp_dir();
    home.push("rpunchclock_test_home");
    home
}

/// Binary under test, with its config directory redirected into the temp dir.
pub fn rpc() -> Command {
    let mut cmd = cargo_bin_cmd!("rpunchclock");
    cmd.env(rpunchclock::config::CONFIG_DIR_ENV, test_home());
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rpunchclock.sqlite", name));
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

pub fn init_db(db_path: &str) {
    rpc()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn punch(db_path: &str, timestamp: &str) {
    rpc()
        .args(["--db", db_path, "punch", timestamp])
        .assert()
        .success();
}

/// Initialize DB and punch a full Tuesday (2022-05-17, 9h worked).
pub fn init_db_with_full_day(db_path: &str) {
    init_db(db_path);
    for ts in [
        "2022-05-17T08:00:00",
        "2022-05-17T12:00:00",
        "2022-05-17T13:00:00",
        "2022-05-17T18:00:00",
    ] {
        punch(db_path, ts);
    }
}
