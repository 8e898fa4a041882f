//! Injector - the binding registry and its lifecycle
//!
//! An [`Injector`] holds at most one [`BindingTable`] in a [`LockedCell`]:
//!
//! ```text
//! configure_bindings(..) ──► LockedCell::write ──► inject::<T>() ──► clear_bindings()
//!                          (AlreadyConfigured      (NotConfigured     (reset)
//!                           if occupied)            if empty)
//! ```
//!
//! Explicit `Injector` values can be threaded through call sites. The
//! process-wide instance behind [`global`] backs the free functions
//! [`configure_bindings`], [`inject`] and [`clear_bindings`].

use crate::bindings::{BindingTable, BindingsBuilder};
use crate::locked_cell::{LockedCell, LockedCellError};
use plasmid_domain::TypeKey;
use plasmid_domain::constants::{INJECTOR_ALREADY_SET_MESSAGE, INJECTOR_NOT_SET_MESSAGE};
use plasmid_domain::error::{Error, Result};
use std::fmt;
use std::sync::{Arc, LazyLock};
use tracing::{info, warn};

static GLOBAL_INJECTOR: LazyLock<Injector> = LazyLock::new(Injector::new);

/// Binding registry with a configure-once, explicit-reset lifecycle
pub struct Injector {
    table: LockedCell<BindingTable>,
}

impl Injector {
    /// Create an injector with no bindings installed
    pub fn new() -> Self {
        Self {
            table: LockedCell::new(INJECTOR_ALREADY_SET_MESSAGE, INJECTOR_NOT_SET_MESSAGE),
        }
    }

    /// Start a configuration session targeting this injector
    pub fn builder(&self) -> BindingsBuilder<'_> {
        BindingsBuilder::for_injector(self)
    }

    /// Run `body` against a fresh builder, then install the result
    pub fn configure_bindings<F>(&self, body: F) -> Result<()>
    where
        F: FnOnce(&mut BindingsBuilder<'_>),
    {
        let mut builder = self.builder();
        body(&mut builder);
        builder.done()
    }

    /// Install a sealed binding table
    pub fn install(&self, table: BindingTable) -> Result<()> {
        self.table.write(table).map_err(|e| lifecycle_error(&e))
    }

    /// Resolve an instance of `T`
    ///
    /// Exact bindings win over the default; the produced value must be a `T`.
    pub fn inject<T: 'static>(&self) -> Result<T> {
        self.table()?.resolve::<T>()
    }

    /// Remove the installed bindings so a new session can be configured
    pub fn clear_bindings(&self) {
        if self.table.reset() {
            info!("Cleared all bindings");
        } else {
            warn!("No bindings have been configured");
        }
    }

    /// Whether a binding table is installed
    pub fn is_configured(&self) -> bool {
        self.table.is_occupied()
    }

    /// Keys bound in the installed table, sorted by type name
    pub fn bound_keys(&self) -> Result<Vec<TypeKey>> {
        Ok(self.table()?.keys())
    }

    // The Arc snapshot lets factories call back into `inject`.
    fn table(&self) -> Result<Arc<BindingTable>> {
        self.table.read().map_err(|e| lifecycle_error(&e))
    }
}

impl Default for Injector {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Injector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Injector")
            .field("table", &self.table.read().ok())
            .finish()
    }
}

fn lifecycle_error(err: &LockedCellError) -> Error {
    match *err {
        LockedCellError::AlreadySet(message) => Error::already_configured(message),
        LockedCellError::NotSet(message) => Error::not_configured(message),
    }
}

/// The process-wide injector
pub fn global() -> &'static Injector {
    &GLOBAL_INJECTOR
}

/// Configure the process-wide injector
///
/// # Example
///
/// ```
/// use plasmid_infrastructure::injector::{clear_bindings, configure_bindings, inject};
///
/// configure_bindings(|b| {
///     b.bind(|| vec![1_u8, 2, 3]);
/// })
/// .unwrap();
///
/// assert_eq!(inject::<Vec<u8>>().unwrap(), vec![1, 2, 3]);
/// clear_bindings();
/// ```
pub fn configure_bindings<F>(body: F) -> Result<()>
where
    F: FnOnce(&mut BindingsBuilder<'_>),
{
    global().configure_bindings(body)
}

/// Resolve `T` from the process-wide injector
pub fn inject<T: 'static>() -> Result<T> {
    global().inject::<T>()
}

/// Clear the process-wide injector
///
/// Intended for test teardown; see [`crate::testing::BindingsScope`].
pub fn clear_bindings() {
    global().clear_bindings();
}
