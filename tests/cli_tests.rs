mod common;
use common::{rtt, setup_test_config, temp_out};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use rtimetracker::cli::parser::{Action, Prompt};
use rtimetracker::config::Config;
use rtimetracker::logstore::LogStore;
use std::fs;

#[test]
fn test_version_flag() {
    rtt()
        .arg("--version")
        .assert()
        .success()
        .stdout(contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_full_session_is_logged() {
    let out = temp_out("cli_full_session", "xlsx");
    let cfg = setup_test_config("cli_full_session", &out);

    rtt()
        .args(["--config", cfg.to_str().unwrap()])
        .write_stdin("checkin\npause\nresume\nend\nquit\n")
        .assert()
        .success()
        .stdout(contains("Checked in at"))
        .stdout(contains("Session paused."))
        .stdout(contains("Session resumed"))
        .stdout(contains("Session logged and saved to"))
        .stdout(contains("Working Time (hours)"));

    let rows = LogStore::new(&out).read_rows().expect("read log");
    assert_eq!(rows.len(), 1);
}

#[test]
fn test_file_flag_overrides_configured_location() {
    let configured = temp_out("cli_file_flag_configured", "xlsx");
    let overridden = temp_out("cli_file_flag_override", "csv");
    let cfg = setup_test_config("cli_file_flag", &configured);

    rtt()
        .args([
            "--config",
            cfg.to_str().unwrap(),
            "--file",
            overridden.to_str().unwrap(),
        ])
        .write_stdin("in\nout\nexit\n")
        .assert()
        .success();

    assert!(!configured.exists());
    let content = fs::read_to_string(&overridden).expect("read csv log");
    assert!(content.starts_with("Date,Day,Check-In Time,Check-Out Time"));
    assert_eq!(content.lines().count(), 2);
}

#[test]
fn test_end_while_paused_is_refused() {
    let out = temp_out("cli_end_paused", "xlsx");
    let cfg = setup_test_config("cli_end_paused", &out);

    rtt()
        .args(["--config", cfg.to_str().unwrap()])
        .write_stdin("checkin\npause\nend\nstatus\npause\nend\nquit\n")
        .assert()
        .success()
        .stderr(contains("resume before ending the session"))
        .stdout(contains("[Resume]"))
        .stdout(contains("Session logged and saved to"));

    assert_eq!(LogStore::new(&out).read_rows().unwrap().len(), 1);
}

#[test]
fn test_pause_and_resume_are_distinct_actions() {
    assert_eq!(Prompt::parse_line("pause").unwrap(), Some(Action::Pause));
    assert_eq!(Prompt::parse_line("resume").unwrap(), Some(Action::Resume));
    assert_eq!(Prompt::parse_line("   ").unwrap(), None);
}

#[test]
fn test_resume_while_checked_in_is_refused() {
    let out = temp_out("cli_resume_running", "xlsx");
    let cfg = setup_test_config("cli_resume_running", &out);

    rtt()
        .args(["--config", cfg.to_str().unwrap()])
        .write_stdin("checkin\nresume\nend\nquit\n")
        .assert()
        .success()
        .stderr(contains("cannot resume while checked in"))
        .stdout(contains("Session paused.").not())
        .stdout(contains("Session logged and saved to"));

    assert_eq!(LogStore::new(&out).read_rows().unwrap().len(), 1);
}

#[test]
fn test_double_check_in_is_refused() {
    let out = temp_out("cli_double_checkin", "xlsx");
    let cfg = setup_test_config("cli_double_checkin", &out);

    rtt()
        .args(["--config", cfg.to_str().unwrap()])
        .write_stdin("checkin\ncheckin\nquit\n")
        .assert()
        .success()
        .stderr(contains("cannot check in"))
        .stdout(contains("discarded without being logged"));

    assert!(!out.exists());
}

#[test]
fn test_location_is_remembered_in_config() {
    let out = temp_out("cli_location_first", "xlsx");
    let chosen = temp_out("cli_location_chosen", "csv");
    let cfg = setup_test_config("cli_location", &out);

    rtt()
        .args(["--config", cfg.to_str().unwrap()])
        .write_stdin(format!(
            "location {}\ncheckin\nend\nquit\n",
            chosen.display()
        ))
        .assert()
        .success()
        .stdout(contains("Logs will now be saved to:"));

    assert!(!out.exists());
    assert_eq!(LogStore::new(&chosen).read_rows().unwrap().len(), 1);

    let saved = Config::load_from(&cfg).expect("reload config");
    assert_eq!(saved.save_location, chosen.to_string_lossy());
    assert_eq!(saved.startup_delay_ms, 0);
}

#[test]
fn test_location_without_path_keeps_current() {
    let out = temp_out("cli_location_cancel", "xlsx");
    let cfg = setup_test_config("cli_location_cancel", &out);

    rtt()
        .args(["--config", cfg.to_str().unwrap()])
        .write_stdin("location\nstatus\nquit\n")
        .assert()
        .success()
        .stdout(contains("Save location unchanged."))
        .stdout(contains(format!("Save Location: {}", out.display())));
}

#[test]
fn test_unknown_action_does_not_stop_the_prompt() {
    let out = temp_out("cli_unknown_action", "xlsx");
    let cfg = setup_test_config("cli_unknown_action", &out);

    rtt()
        .args(["--config", cfg.to_str().unwrap()])
        .write_stdin("dance\ncheckin\nend\nquit\n")
        .assert()
        .success()
        .stderr(contains("dance"))
        .stdout(contains("Session logged and saved to"));
}

#[test]
fn test_show_and_log_after_a_session() {
    let out = temp_out("cli_show_log", "xlsx");
    let cfg = setup_test_config("cli_show_log", &out);

    rtt()
        .args(["--config", cfg.to_str().unwrap()])
        .write_stdin("show\ncheckin\nend\nshow\nlog\nquit\n")
        .assert()
        .success()
        .stdout(contains("No sessions logged"))
        .stdout(contains("1 session(s)"))
        .stdout(contains("Internal log"))
        .stdout(contains("check_in").and(contains("end")));
}

#[test]
fn test_end_of_input_discards_open_session() {
    let out = temp_out("cli_eof", "xlsx");
    let cfg = setup_test_config("cli_eof", &out);

    rtt()
        .args(["--config", cfg.to_str().unwrap()])
        .write_stdin("checkin\n")
        .assert()
        .success()
        .stdout(contains("discarded without being logged"));

    assert!(!out.exists());
}

#[test]
fn test_failed_save_can_be_retried() {
    let good = temp_out("cli_retry_good", "xlsx");
    let mut bad = std::env::temp_dir();
    bad.push("cli_retry_missing_dir");
    fs::remove_dir_all(&bad).ok();
    bad.push("log.xlsx");

    let cfg = setup_test_config("cli_retry", &bad);

    rtt()
        .args(["--config", cfg.to_str().unwrap()])
        .write_stdin(format!(
            "checkin\nend\nsave\nlocation {}\nsave\nquit\n",
            good.display()
        ))
        .assert()
        .success()
        .stderr(contains("Cannot use log file"))
        .stdout(contains("1 unsaved session(s) kept in memory"))
        .stdout(contains("Unsaved sessions written to"));

    assert_eq!(LogStore::new(&good).read_rows().unwrap().len(), 1);
}

#[test]
fn test_broken_config_is_reported() {
    let out = temp_out("cli_broken_config", "xlsx");
    let cfg = setup_test_config("cli_broken_config", &out);
    fs::write(&cfg, "save_location: [unclosed\n").unwrap();

    rtt()
        .args(["--config", cfg.to_str().unwrap()])
        .write_stdin("quit\n")
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}
