//! Binding builder for one configuration session

use super::provided::Provided;
use super::table::{BindingTable, DefaultFactory, Factory};
use crate::injector::{Injector, global};
use plasmid_domain::TypeKey;
use plasmid_domain::error::{BoxError, Result};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

/// Accumulates bindings, then seals them into an [`Injector`]
///
/// Bindings are keyed by their exact type. Binding the same type twice keeps
/// the last binding.
///
/// # Example
///
/// ```
/// use plasmid_infrastructure::injector::Injector;
/// use std::sync::Arc;
///
/// let injector = Injector::new();
/// let mut builder = injector.builder();
/// builder
///     .bind(|| String::from("fresh"))
///     .bind_singleton(Arc::new(42_u32));
/// builder.done().unwrap();
///
/// assert_eq!(injector.inject::<String>().unwrap(), "fresh");
/// assert_eq!(*injector.inject::<Arc<u32>>().unwrap(), 42);
/// ```
pub struct BindingsBuilder<'a> {
    target: &'a Injector,
    factories: HashMap<TypeKey, Factory>,
    default: Option<DefaultFactory>,
}

impl BindingsBuilder<'static> {
    /// Builder targeting the process-wide injector
    pub fn new() -> Self {
        Self::for_injector(global())
    }
}

impl Default for BindingsBuilder<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> BindingsBuilder<'a> {
    /// Builder targeting `injector`
    pub fn for_injector(injector: &'a Injector) -> Self {
        info!("Configuring bindings");
        Self {
            target: injector,
            factories: HashMap::new(),
            default: None,
        }
    }

    /// Bind `supplier` to `T`; every `inject::<T>()` invokes it again
    pub fn bind<T, F>(&mut self, supplier: F) -> &mut Self
    where
        T: Send + 'static,
        F: Fn() -> T + Send + Sync + 'static,
    {
        let key = TypeKey::of::<T>();
        info!(type_name = key.name(), "Binding");
        self.insert(key, Arc::new(move || Provided::new(supplier())));
        self
    }

    /// Bind a shared instance; every `inject::<Arc<T>>()` returns this same `Arc`
    pub fn bind_singleton<T>(&mut self, instance: Arc<T>) -> &mut Self
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let key = TypeKey::of::<Arc<T>>();
        info!(type_name = key.name(), "Binding to singleton");
        self.insert(key, Arc::new(move || Provided::new(Arc::clone(&instance))));
        self
    }

    /// Set the fallback used for types without an exact binding
    ///
    /// Only one default exists per session; a later call replaces it.
    pub fn with_default<F>(&mut self, factory: F) -> &mut Self
    where
        F: Fn(TypeKey) -> std::result::Result<Provided, BoxError> + Send + Sync + 'static,
    {
        info!("Setting default supplier");
        if self.default.replace(Arc::new(factory)).is_some() {
            debug!("Replaced previous default supplier");
        }
        self
    }

    /// Freeze the session without installing it
    pub fn build(self) -> BindingTable {
        BindingTable::new(self.factories, self.default)
    }

    /// Freeze the session and install it into the target injector
    ///
    /// Fails with `AlreadyConfigured` if the injector already holds bindings.
    pub fn done(self) -> Result<()> {
        info!(bindings = self.factories.len(), "Finished configuring bindings");
        let target = self.target;
        target.install(self.build())
    }

    fn insert(&mut self, key: TypeKey, factory: Factory) {
        if self.factories.insert(key, factory).is_some() {
            debug!(type_name = key.name(), "Replaced previous binding");
        }
    }
}

impl fmt::Debug for BindingsBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.factories.keys().map(TypeKey::name).collect();
        keys.sort_unstable();
        f.debug_struct("BindingsBuilder")
            .field("bindings", &keys)
            .field("has_default", &self.default.is_some())
            .finish()
    }
}
