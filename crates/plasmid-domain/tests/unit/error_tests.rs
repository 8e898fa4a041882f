//! Error Tests

use plasmid_domain::constants::{INJECTOR_ALREADY_SET_MESSAGE, INJECTOR_NOT_SET_MESSAGE};
use plasmid_domain::error::Error;
use std::error::Error as _;

#[test]
fn test_lifecycle_errors_display_their_message() {
    let not_set = Error::not_configured(INJECTOR_NOT_SET_MESSAGE);
    let already_set = Error::already_configured(INJECTOR_ALREADY_SET_MESSAGE);

    assert_eq!(not_set.to_string(), INJECTOR_NOT_SET_MESSAGE);
    assert_eq!(already_set.to_string(), INJECTOR_ALREADY_SET_MESSAGE);
    assert!(not_set.is_lifecycle());
    assert!(already_set.is_lifecycle());
}

#[test]
fn test_no_binding_available_lists_bound_types() {
    let err = Error::no_binding_available("app::FileLoader", vec!["app::FileSystem", "u32"]);

    let message = err.to_string();
    assert!(message.contains("app::FileLoader"));
    assert!(message.contains("Available: [app::FileSystem, u32]"));
    assert!(!err.is_lifecycle());
}

#[test]
fn test_no_binding_available_with_empty_table() {
    let err = Error::no_binding_available("app::FileLoader", vec![]);
    assert!(err.to_string().ends_with("Available: []"));
}

#[test]
fn test_default_construction_failed_keeps_cause() {
    let cause = std::io::Error::other("mock backend offline");
    let err = Error::default_construction_failed("app::FileLoader", cause);

    assert!(err.to_string().contains("app::FileLoader"));
    assert!(err.to_string().contains("mock backend offline"));
    let source = err.source().expect("source should be preserved");
    assert_eq!(source.to_string(), "mock backend offline");
}

#[test]
fn test_default_construction_failed_from_string() {
    let err = Error::default_construction_failed("u8", "no mock for u8");
    assert!(matches!(err, Error::DefaultConstructionFailed { .. }));
    assert!(err.to_string().contains("u8"));
}

#[test]
fn test_invalid_binding_names_both_types() {
    let err = Error::invalid_binding("alloc::string::String", "u32");
    assert_eq!(
        err.to_string(),
        "Invalid type binding: 'alloc::string::String' is not an instance of u32"
    );
}

#[test]
fn test_configuration_error_with_source() {
    let cause = std::io::Error::other("disk full");
    let err = Error::configuration_with_source("Failed to write config file", cause);

    assert_eq!(
        err.to_string(),
        "Configuration error: Failed to write config file"
    );
    assert!(err.source().is_some());
    assert!(Error::configuration("bad level").source().is_none());
}
