#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use rtimetracker::core::Clock;
use rtimetracker::models::SessionRecord;
use std::cell::Cell;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

pub fn rtt() -> Command {
    cargo_bin_cmd!("rtimetracker")
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimetracker_log.{}", name, ext));
    fs::remove_file(&path).ok();
    path
}

/// A path inside a directory that does not exist, so every write fails.
pub fn unwritable_out(name: &str, ext: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimetracker_missing_dir", name));
    fs::remove_dir_all(&path).ok();
    path.push(format!("log.{}", ext));
    path
}

/// Write a config file for one CLI test: no startup delay, audit database
/// and log file in the temp dir. Returns the config path.
pub fn setup_test_config(name: &str, log_path: &PathBuf) -> PathBuf {
    let mut dir: PathBuf = env::temp_dir();
    dir.push(format!("{}_rtimetracker_cfg", name));
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).expect("create config dir");

    let db_path = dir.join("audit.sqlite");
    let cfg_path = dir.join("rtimetracker.conf");

    let yaml = format!(
        "save_location: '{}'\ndatabase: '{}'\nstartup_delay_ms: 0\n",
        log_path.display(),
        db_path.display()
    );
    fs::write(&cfg_path, yaml).expect("write config");
    cfg_path
}

/// Clock the test moves by hand. Clones share the same time.
#[derive(Clone)]
pub struct ManualClock(Rc<Cell<NaiveDateTime>>);

impl ManualClock {
    pub fn starting_at(t: NaiveDateTime) -> Self {
        Self(Rc::new(Cell::new(t)))
    }

    pub fn set(&self, t: NaiveDateTime) {
        self.0.set(t);
    }

    pub fn advance(&self, d: TimeDelta) {
        self.0.set(self.0.get() + d);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        self.0.get()
    }
}

/// 2025-01-06 (a Monday) at the given time.
pub fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 6)
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
}

/// Record of a session on 2025-01-06 between the given hours, with `pause_min` paused.
pub fn sample_record(start_h: u32, end_h: u32, pause_min: i64) -> SessionRecord {
    SessionRecord::from_interval(
        at(start_h, 0, 0),
        at(end_h, 0, 0),
        TimeDelta::minutes(pause_min),
    )
}
