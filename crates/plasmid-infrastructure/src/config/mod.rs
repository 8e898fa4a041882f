//! Configuration
//!
//! TOML file plus environment overrides, merged with Figment.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{LoggingConfig, PlasmidConfig};
