//! Logging Tests

use class_registry::logging::{LoggingConfig, init_logging, parse_log_level};
use tracing::Level;

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("debug").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("info").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("warn").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("ERROR").unwrap(), Level::ERROR);

    assert!(parse_log_level("invalid").is_err());
}

#[test]
fn test_init_logging_rejects_invalid_level() {
    let config = LoggingConfig {
        level: "verbose".to_string(),
        json_format: false,
    };
    assert!(init_logging(&config).is_err());
}

#[test]
fn test_init_logging_twice_is_an_error() {
    let config = LoggingConfig::default();
    // Only this test installs a subscriber; the second attempt must fail
    // instead of panicking.
    let _ = init_logging(&config);
    assert!(init_logging(&config).is_err());
}
