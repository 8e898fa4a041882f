//! `BindingTable` Tests
//!
//! Tables are sealed with `BindingsBuilder::build` and resolved directly,
//! without installing them into an injector.

use crate::test_utils::{ConsoleGreeter, FileSystem, Greeter, stub_for};
use plasmid_domain::TypeKey;
use plasmid_domain::error::Error;
use plasmid_infrastructure::bindings::{BindingTable, Provided};
use plasmid_infrastructure::injector::Injector;
use std::sync::Arc;

#[test]
fn test_empty_table_has_no_bindings() {
    let table = BindingTable::empty();

    assert!(table.is_empty());
    assert_eq!(table.len(), 0);
    assert!(!table.has_default());
    assert!(table.keys().is_empty());
}

#[test]
fn test_resolve_exact_binding() {
    let injector = Injector::new();
    let mut builder = injector.builder();
    builder.bind(|| 17_u16);
    let table = builder.build();

    assert!(table.contains(&TypeKey::of::<u16>()));
    assert_eq!(table.resolve::<u16>().unwrap(), 17);
    assert!(!injector.is_configured(), "build must not install");
}

#[test]
fn test_missing_binding_lists_available_keys() {
    let injector = Injector::new();
    let mut builder = injector.builder();
    builder.bind(|| 1_u8).bind_singleton(Arc::new(FileSystem::new()));
    let table = builder.build();

    let err = table.resolve::<String>().unwrap_err();
    match &err {
        Error::NoBindingAvailable {
            type_name,
            available,
        } => {
            assert_eq!(*type_name, std::any::type_name::<String>());
            assert_eq!(available.len(), 2);
            assert!(available.contains(&std::any::type_name::<u8>()));
            assert!(available.contains(&std::any::type_name::<Arc<FileSystem>>()));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("Available: ["));
}

#[test]
fn test_keys_sorted_by_name() {
    let injector = Injector::new();
    let mut builder = injector.builder();
    builder.bind(|| 'c').bind(|| 2_u64).bind(|| true);
    let table = builder.build();

    let names: Vec<&str> = table.keys().iter().map(TypeKey::name).collect();
    assert_eq!(names, vec!["bool", "char", "u64"]);
}

#[test]
fn test_default_used_for_unbound_type() {
    let injector = Injector::new();
    let mut builder = injector.builder();
    builder.with_default(stub_for);
    let table = builder.build();

    assert!(table.has_default());
    let greeter = table.resolve::<Arc<dyn Greeter>>().unwrap();
    assert_eq!(greeter.greet("anyone"), "");
}

#[test]
fn test_exact_binding_wins_over_default() {
    let injector = Injector::new();
    let mut builder = injector.builder();
    builder
        .bind(|| -> Arc<dyn Greeter> { Arc::new(ConsoleGreeter) })
        .with_default(stub_for);
    let table = builder.build();

    let greeter = table.resolve::<Arc<dyn Greeter>>().unwrap();
    assert_eq!(greeter.greet("plasmid"), "Hello, plasmid!");
}

#[test]
fn test_default_failure_is_wrapped_with_requested_type() {
    let injector = Injector::new();
    let mut builder = injector.builder();
    builder.with_default(stub_for);
    let table = builder.build();

    let err = table.resolve::<FileSystem>().unwrap_err();
    match err {
        Error::DefaultConstructionFailed { type_name, source } => {
            assert_eq!(type_name, std::any::type_name::<FileSystem>());
            assert!(source.to_string().starts_with("no stub available for"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_default_producing_wrong_type_is_invalid_binding() {
    let injector = Injector::new();
    let mut builder = injector.builder();
    builder.with_default(|_| Ok(Provided::new(String::from("not a number"))));
    let table = builder.build();

    let err = table.resolve::<u32>().unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidBinding {
            produced: "alloc::string::String",
            expected: "u32",
        }
    ));
}

#[test]
fn test_debug_lists_bindings() {
    let injector = Injector::new();
    let mut builder = injector.builder();
    builder.bind(|| 0_i8);
    let table = builder.build();

    let debug = format!("{table:?}");
    assert!(debug.contains("i8"));
    assert!(debug.contains("has_default: false"));
}
