//! # Infrastructure Layer
//!
//! The binding registry and the cross-cutting concerns around it.
//!
//! ## Module Categories
//!
//! ### Registry
//! | Module | Description |
//! |--------|-------------|
//! | [`locked_cell`] | Single-assignment storage with explicit reset |
//! | [`bindings`] | Builder, immutable binding table and resolution |
//! | [`injector`] | Injector lifecycle and the process-wide instance |
//! | [`testing`] | Per-test isolation of injector state |
//!
//! ### Configuration & Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML + environment configuration |
//! | [`logging`] | Structured logging with tracing |
//! | [`constants`] | Centralized configuration constants |

pub mod bindings;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod injector;
pub mod locked_cell;
pub mod logging;
pub mod testing;

// Re-export commonly used types
pub use bindings::{BindingTable, BindingsBuilder, Provided};
pub use error_ext::ErrorContext;
pub use injector::{Injector, clear_bindings, configure_bindings, global, inject};
pub use locked_cell::{LockedCell, LockedCellError};
pub use testing::BindingsScope;
