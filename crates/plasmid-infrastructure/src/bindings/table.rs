//! Immutable binding table and the resolution algorithm
//!
//! ## Resolution
//!
//! ```text
//! TypeKey::of::<T>()
//!        │
//!        ├── exact factory bound? ──► factory()
//!        │
//!        ├── default factory set? ──► default(key)   (Err → DefaultConstructionFailed)
//!        │
//!        └── otherwise ─────────────► NoBindingAvailable
//!
//! produced value ──► downcast::<T>()                 (mismatch → InvalidBinding)
//! ```

use super::provided::Provided;
use plasmid_domain::TypeKey;
use plasmid_domain::error::{BoxError, Error, Result};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Zero-argument producer for one bound type
pub type Factory = Arc<dyn Fn() -> Provided + Send + Sync>;

/// Fallback producer invoked with the requested key when no exact factory exists
pub type DefaultFactory =
    Arc<dyn Fn(TypeKey) -> std::result::Result<Provided, BoxError> + Send + Sync>;

/// Snapshot of every factory plus the optional default for one configuration session
///
/// Never mutated once built; the injector shares it read-only behind an `Arc`.
pub struct BindingTable {
    factories: HashMap<TypeKey, Factory>,
    default: Option<DefaultFactory>,
}

impl BindingTable {
    pub(crate) fn new(
        factories: HashMap<TypeKey, Factory>,
        default: Option<DefaultFactory>,
    ) -> Self {
        Self { factories, default }
    }

    /// Table with no bindings and no default
    pub fn empty() -> Self {
        Self::new(HashMap::new(), None)
    }

    /// Number of exact bindings
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Whether the table has no exact bindings
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Whether `key` has an exact binding
    pub fn contains(&self, key: &TypeKey) -> bool {
        self.factories.contains_key(key)
    }

    /// Whether a default factory is set
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// Bound keys, sorted by type name
    pub fn keys(&self) -> Vec<TypeKey> {
        let mut keys: Vec<TypeKey> = self.factories.keys().copied().collect();
        keys.sort_by_key(TypeKey::name);
        keys
    }

    /// Produce an instance of `T`
    pub fn resolve<T: 'static>(&self) -> Result<T> {
        let key = TypeKey::of::<T>();
        let produced = self.produce(key)?;
        produced
            .downcast::<T>()
            .map_err(|produced| Error::invalid_binding(produced.type_name(), key.name()))
    }

    fn produce(&self, key: TypeKey) -> Result<Provided> {
        if let Some(factory) = self.factories.get(&key) {
            trace!(type_name = key.name(), "Resolving exact binding");
            return Ok(factory());
        }

        if let Some(default) = &self.default {
            trace!(type_name = key.name(), "Resolving through default supplier");
            return default(key).map_err(|e| Error::default_construction_failed(key.name(), e));
        }

        let available = self.keys().iter().map(TypeKey::name).collect();
        Err(Error::no_binding_available(key.name(), available))
    }
}

impl fmt::Debug for BindingTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BindingTable")
            .field("bindings", &self.keys())
            .field("has_default", &self.has_default())
            .finish()
    }
}
