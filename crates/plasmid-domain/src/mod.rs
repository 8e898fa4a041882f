//! # Domain Layer
//!
//! Core types shared by every Plasmid crate: the error taxonomy and the
//! exact-type identity used to key bindings.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | `Error` / `Result` for configuration and resolution failures |
//! | [`type_key`] | `TypeKey`, the exact runtime type identity |
//! | [`constants`] | Lifecycle guard messages |

pub mod constants;
pub mod error;
pub mod type_key;

pub use error::{BoxError, Error, Result};
pub use type_key::TypeKey;
