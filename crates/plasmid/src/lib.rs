//! # Plasmid
//!
//! A minimal type-keyed dependency injection registry.
//!
//! Bindings are declared once per process (or once per test), then instances
//! are resolved by exact type on demand. Resolution tries an exact binding
//! first, then the default supplier, and fails otherwise.
//!
//! ## Example
//!
//! ```
//! use plasmid::{clear_bindings, configure_bindings, inject};
//! use std::sync::Arc;
//!
//! trait Greeter: Send + Sync {
//!     fn greet(&self, name: &str) -> String;
//! }
//!
//! struct ConsoleGreeter;
//!
//! impl Greeter for ConsoleGreeter {
//!     fn greet(&self, name: &str) -> String {
//!         format!("Hello, {name}!")
//!     }
//! }
//!
//! configure_bindings(|b| {
//!     b.bind_singleton::<dyn Greeter>(Arc::new(ConsoleGreeter));
//! })
//! .unwrap();
//!
//! let greeter = inject::<Arc<dyn Greeter>>().unwrap();
//! assert_eq!(greeter.greet("plasmid"), "Hello, plasmid!");
//!
//! clear_bindings();
//! ```
//!
//! ## Lifecycle
//!
//! The process-wide injector accepts one configuration at a time. Configuring
//! it again fails until [`clear_bindings`] runs; tests should hold a
//! [`BindingsScope`] so bindings never leak between them.
//!
//! ## Architecture
//!
//! - `domain` - Error taxonomy and type identity keys
//! - `infrastructure` - Locked cell, bindings, injector, config and logging

/// Domain layer - error taxonomy and type identity keys
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use plasmid_domain::*;
}

/// Infrastructure layer - injector, bindings, config and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use plasmid_infrastructure::*;
}

// Re-export the core API at the crate root
pub use domain::{BoxError, Error, Result, TypeKey};
pub use infrastructure::{
    BindingTable, BindingsBuilder, BindingsScope, Injector, Provided, clear_bindings,
    configure_bindings, global, inject,
};
