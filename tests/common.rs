#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rfarelog::models::{Person, Roster};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rfl() -> Command {
    cargo_bin_cmd!("rfarelog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rfarelog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Fresh DB initialized through the CLI (no config file written).
pub fn init_test_db(name: &str) -> String {
    let db_path = setup_test_db(name);
    rfl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
    db_path
}

/// Roster from `(name, paid)` pairs.
pub fn roster(entries: &[(&str, bool)]) -> Roster {
    Roster::from_people(
        entries
            .iter()
            .map(|(name, paid)| Person {
                name: name.to_string(),
                paid: *paid,
            })
            .collect(),
    )
}
