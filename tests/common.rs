#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use std::env;
use std::fs;
use std::path::PathBuf;
use workhours::db::MemoryKv;
use workhours::models::{EntryDraft, WorkEntry};
use workhours::store::{FixedClock, WorkHoursStore};

pub const TODAY: &str = "2025-06-18";

pub fn wh() -> Command {
    cargo_bin_cmd!("workhours")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_workhours.sqlite", name));
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

/// Initialize the DB in test mode (no config file written)
pub fn init_db(db_path: &str) {
    wh().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Add an entry through the CLI
pub fn cli_add(db_path: &str, date: &str, client: &str, start: &str, end: &str, driving: bool) {
    let mut args = vec![
        "--db", db_path, "add", "--date", date, "--client", client, "--start", start, "--end",
        end,
    ];
    if driving {
        args.push("--driving");
    }
    wh().args(&args).assert().success();
}

/// Entries currently stored, read back through `export --format json`
pub fn cli_entries(db_path: &str) -> Vec<WorkEntry> {
    let out = wh()
        .args(["--db", db_path, "export", "--format", "json"])
        .output()
        .expect("run export");
    assert!(out.status.success());
    serde_json::from_slice(&out.stdout).expect("parse exported json")
}

pub fn today() -> NaiveDate {
    NaiveDate::parse_from_str(TODAY, "%Y-%m-%d").unwrap()
}

/// In-memory store frozen on `TODAY`
pub fn memory_store() -> WorkHoursStore<MemoryKv, FixedClock> {
    WorkHoursStore::with_clock(MemoryKv::new(), FixedClock::on(today())).expect("open store")
}

pub fn draft(date: &str, client: &str, start: &str, end: &str, driving: bool) -> EntryDraft {
    EntryDraft {
        date: date.to_string(),
        job_client_name: client.to_string(),
        start_time: start.to_string(),
        end_time: end.to_string(),
        driving_required: driving,
    }
}

/// A fully derived entry, built without a store
pub fn entry(date: &str, start: &str, end: &str, driving: bool, bonus: f64) -> WorkEntry {
    let d = draft(date, "Client", start, end, driving);
    let derived = workhours::build_entry(&d, bonus);
    WorkEntry {
        id: format!("{date}-{start}"),
        date: d.date,
        job_client_name: d.job_client_name,
        start_time: d.start_time,
        end_time: d.end_time,
        driving_required: d.driving_required,
        driving_bonus_hours: derived.driving_bonus_hours,
        hours_worked: derived.hours_worked,
        total_hours: derived.total_hours,
        created_at: String::new(),
        updated_at: String::new(),
    }
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
