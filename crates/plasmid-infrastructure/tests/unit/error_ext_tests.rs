//! Error Extension Tests

use plasmid_domain::error::Error;
use plasmid_infrastructure::error_ext::ErrorContext;
use std::error::Error as _;

fn failing_io() -> std::io::Result<()> {
    Err(std::io::Error::other("permission denied"))
}

#[test]
fn test_config_context_wraps_error() {
    let err = failing_io().config_context("Failed to read config").unwrap_err();

    assert!(matches!(err, Error::Configuration { .. }));
    assert_eq!(
        err.to_string(),
        "Configuration error: Failed to read config: permission denied"
    );
    assert!(err.source().is_some());
}

#[test]
fn test_with_config_context_is_lazy() {
    let mut evaluated = false;
    let ok: std::io::Result<u8> = Ok(1);

    let value = ok
        .with_config_context(|| {
            evaluated = true;
            "never shown"
        })
        .unwrap();

    assert_eq!(value, 1);
    assert!(!evaluated);
}
