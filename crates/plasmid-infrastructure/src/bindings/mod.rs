//! Binding construction and storage
//!
//! - [`builder`] accumulates bindings for one configuration session
//! - [`table`] is the sealed, immutable result and owns the resolution algorithm
//! - [`provided`] is the type-erased value every factory produces

pub mod builder;
pub mod provided;
pub mod table;

pub use builder::BindingsBuilder;
pub use provided::Provided;
pub use table::{BindingTable, DefaultFactory, Factory};
