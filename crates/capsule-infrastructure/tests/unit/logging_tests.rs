//! Logging Tests

use capsule_infrastructure::constants::DEFAULT_LOG_LEVEL;
use capsule_infrastructure::logging::{LoggingConfig, init_logging, parse_log_level};
use tracing::Level;

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("debug").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("INFO").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("warn").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);

    assert!(parse_log_level("invalid").is_err());
}

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, DEFAULT_LOG_LEVEL);
    assert!(!config.json_format);
}

#[test]
fn test_init_logging_twice_is_an_error() {
    let config = LoggingConfig::default();
    // Another test may have installed a subscriber already; the second call must fail either way
    let _ = init_logging(&config);
    assert!(init_logging(&config).is_err());
}

#[test]
fn test_init_logging_rejects_bad_level() {
    let config = LoggingConfig {
        level: "chatty".to_string(),
        json_format: false,
    };
    assert!(init_logging(&config).is_err());
}
