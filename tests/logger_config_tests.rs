// tests/logger_config_tests.rs
mod common;

use common::SharedBuf;
use hooklog::{Logger, Severity};
use std::io::Read;

// All LOG_LEVEL manipulation lives in this single test so parallel tests in
// this binary never race on the environment.
#[test]
fn test_threshold_comes_from_environment() {
    std::env::remove_var("LOG_LEVEL");
    let logger = Logger::from_env("bot", false, Box::new(SharedBuf::new())).unwrap();
    assert_eq!(logger.threshold(), Severity::Info);

    std::env::set_var("LOG_LEVEL", "ERROR");
    let logger = Logger::from_env("bot", false, Box::new(SharedBuf::new())).unwrap();
    assert_eq!(logger.threshold(), Severity::Error);

    std::env::set_var("LOG_LEVEL", "verbose");
    let err = Logger::from_env("bot", false, Box::new(SharedBuf::new())).unwrap_err();
    assert!(err.to_string().contains("verbose"));

    std::env::remove_var("LOG_LEVEL");
}

#[test]
fn test_logger_writes_to_file_sink() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let sink = file.reopen().unwrap();

    let logger = Logger::new("bot", Severity::Debug, false, Box::new(sink));
    logger.info("service started");
    logger.warning("rate limit low");

    let mut contents = String::new();
    file.reopen().unwrap().read_to_string(&mut contents).unwrap();
    assert_eq!(contents, "[INFO] service started\n[WARNING] rate limit low\n");
}

#[test]
fn test_logger_name_is_exposed() {
    let logger = Logger::new("bot", Severity::Info, false, Box::new(SharedBuf::new()));
    assert_eq!(logger.name(), "bot");
}
