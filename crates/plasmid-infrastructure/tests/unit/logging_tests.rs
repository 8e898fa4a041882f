//! Logging Tests

use plasmid_domain::error::Error;
use plasmid_infrastructure::logging::{LoggingConfig, init_logging, parse_log_level};
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
        level: "chatty".to_string(),
        ..LoggingConfig::default()
    };

    let err = init_logging(&config).unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_init_logging_twice_fails_instead_of_panicking() {
    let config = LoggingConfig::default();

    // The first call may lose to another subscriber; the second always does.
    let _ = init_logging(&config);
    let second = init_logging(&config);

    assert!(matches!(second, Err(Error::Configuration { .. })));
}
