use std::fs;
use std::path::PathBuf;

use applog::{build_basic, build_rotating, field, Error, Level, LogOptions};
use chrono::DateTime;
use tempfile::TempDir;

fn options_in(dir: &TempDir, level: Level) -> LogOptions {
    LogOptions {
        development: false,
        level,
        app_name: "app".to_string(),
        log_file: Some(dir.path().join("log.log")),
        err_log_file: Some(dir.path().join("error.log")),
        max_size_mb: 1,
        max_age_days: 0,
        max_backups: 3,
    }
}

fn json_lines(path: &PathBuf) -> Vec<serde_json::Value> {
    fs::read_to_string(path)
        .unwrap_or_default()
        .lines()
        .map(|l| serde_json::from_str(l).expect("each log line should be valid JSON"))
        .collect()
}

#[test]
fn basic_logger_writes_one_json_line_per_record() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let opts = options_in(&dir, Level::Debug);
    let logger = build_basic(&opts).expect("basic strategy should build");

    logger.info("started", &[field("port", 8080)]);
    logger.sync().expect("healthy sinks should flush");

    let lines = json_lines(&opts.log_file.unwrap());
    assert_eq!(lines.len(), 1, "one record should produce one line");

    let rec = &lines[0];
    assert_eq!(rec["level"], "info");
    assert_eq!(rec["msg"], "started");
    assert_eq!(rec["APP"], "app");
    assert_eq!(rec["port"], 8080);
    let time = rec["time"].as_str().expect("time should be a string");
    DateTime::parse_from_rfc3339(time).expect("time should be ISO-8601");
    let caller = rec["caller"].as_str().expect("caller should be a string");
    assert!(caller.contains("unit_logger.rs:"), "caller was {caller:?}");
}

#[test]
fn basic_logger_routes_error_and_above_to_the_error_file() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let opts = options_in(&dir, Level::Debug);
    let logger = build_basic(&opts).expect("basic strategy should build");

    logger.info("fine", &[]);
    logger.warn("shaky", &[]);
    logger.error("broken", &[]);
    logger.sync().unwrap();

    let primary = json_lines(&opts.log_file.unwrap());
    assert_eq!(primary.len(), 3, "every record should reach the primary file");

    let errors = json_lines(&opts.err_log_file.unwrap());
    assert_eq!(errors.len(), 1, "only error-and-above should reach the error file");
    assert_eq!(errors[0]["msg"], "broken");
}

#[test]
fn records_below_the_minimum_reach_no_sink() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let opts = options_in(&dir, Level::Warn);
    let logger = build_basic(&opts).expect("basic strategy should build");

    logger.debug("dropped", &[]);
    logger.info("also dropped", &[]);
    logger.warn("kept", &[]);
    logger.sync().unwrap();

    let primary = json_lines(&opts.log_file.unwrap());
    assert_eq!(primary.len(), 1);
    assert_eq!(primary[0]["msg"], "kept");
}

#[test]
fn basic_logger_without_file_paths_is_console_only() {
    let opts = LogOptions {
        log_file: None,
        err_log_file: None,
        ..options_in(&TempDir::new().unwrap(), Level::Debug)
    };
    let logger = build_basic(&opts).expect("console-only logger should build");
    logger.info("to console", &[]);
    logger.sync().expect("console sink should flush");
}

#[test]
fn rotating_logger_builds_when_both_paths_are_set() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let opts = options_in(&dir, Level::Info);
    assert!(build_rotating(&opts).is_ok(), "both paths set should build");
}

#[test]
fn rotating_logger_requires_both_file_paths() {
    let dir = TempDir::new().expect("Failed to create temp directory");

    for (log_file, err_log_file) in [
        (None, None),
        (Some(dir.path().join("log.log")), None),
        (None, Some(dir.path().join("error.log"))),
    ] {
        let opts = LogOptions {
            log_file,
            err_log_file,
            ..options_in(&dir, Level::Info)
        };
        let err = build_rotating(&opts).expect_err("missing path should fail");
        assert!(matches!(err, Error::Config(_)), "got {err:?}");
        assert!(err.to_string().contains("must both be set"));
    }
}

#[test]
fn rotating_logger_sends_all_levels_to_the_primary_file() {
    // The error-file path is validated but not routed to; records of every
    // level land in the single rotating file.
    let dir = TempDir::new().expect("Failed to create temp directory");
    let opts = options_in(&dir, Level::Debug);
    let logger = build_rotating(&opts).expect("rotating strategy should build");

    logger.info("fine", &[]);
    logger.error("broken", &[]);
    logger.sync().unwrap();

    let primary = json_lines(&opts.log_file.unwrap());
    assert_eq!(primary.len(), 2);
    assert!(json_lines(&opts.err_log_file.unwrap()).is_empty());
}

#[test]
fn unwritable_log_directory_is_a_config_error() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let clash = dir.path().join("occupied");
    fs::write(&clash, b"a regular file, not a directory").unwrap();

    let opts = LogOptions {
        log_file: Some(clash.join("log.log")),
        ..options_in(&dir, Level::Debug)
    };
    let err = build_basic(&opts).expect_err("unwritable directory should fail");
    assert!(matches!(err, Error::Config(_)), "got {err:?}");
}

#[test]
fn development_mode_attaches_stacktraces_from_warn_upward() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let opts = LogOptions {
        development: true,
        ..options_in(&dir, Level::Debug)
    };
    let logger = build_basic(&opts).expect("basic strategy should build");

    logger.info("calm", &[]);
    logger.warn("tense", &[]);
    logger.sync().unwrap();

    let lines = json_lines(&opts.log_file.unwrap());
    assert!(lines[0].get("stacktrace").is_none(), "info should carry no trace");
    assert!(lines[1].get("stacktrace").is_some(), "warn should carry a trace");
}
