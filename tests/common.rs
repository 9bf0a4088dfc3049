#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use horimetro::models::Record;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Binary under test with HOME pointed at an isolated directory, so no
/// real configuration file is read or written.
pub fn hmt(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("horimetro");
    cmd.env("HOME", home).env("APPDATA", home).env_remove("EDITOR");
    cmd
}

/// Fresh, empty directory inside the system temp dir.
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("horimetro_test_{name}"));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Store path inside a fresh temp dir (file not created).
pub fn setup_store(name: &str) -> (PathBuf, String) {
    let dir = temp_dir(name);
    let store = dir.join("registros.csv").to_string_lossy().to_string();
    (dir, store)
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|d| d.and_hms_opt(h, min, 0))
        .expect("valid date")
}

pub fn record(date: NaiveDateTime, operator: &str, fleet: &str, initial: f64, fin: f64) -> Record {
    Record {
        date,
        operator: operator.to_string(),
        fleet: fleet.to_string(),
        initial_reading: initial,
        final_reading: fin,
        worked_hours: horimetro::core::validate::worked_hours(initial, fin),
    }
}

/// Add one reading through the CLI and assert success.
pub fn add_reading(home: &Path, store: &str, operator: &str, fleet: &str, initial: &str, fin: &str, date: &str) {
    hmt(home)
        .args([
            "--store", store, "add", "--operator", operator, "--fleet", fleet, "--initial",
            initial, "--final", fin, "--date", date,
        ])
        .assert()
        .success();
}

/// Store with two fleets: 230 (2h) and 231 (3h).
pub fn init_store_with_data(home: &Path, store: &str) {
    hmt(home)
        .args(["--store", store, "--test", "init"])
        .assert()
        .success();

    add_reading(home, store, "Ana", "230", "100", "102", "2024-01-10");
    add_reading(home, store, "Bruno", "231", "50", "53", "2024-02-05 07:30:00");
}
