//! Test isolation for injector state
//!
//! Bindings outlive the test that configured them unless they are cleared.
//! [`BindingsScope`] clears an injector when it is created and again when it
//! is dropped, including when the test panics.
//!
//! ```
//! use plasmid_infrastructure::injector::{configure_bindings, inject};
//! use plasmid_infrastructure::testing::BindingsScope;
//!
//! let _scope = BindingsScope::global();
//! configure_bindings(|b| {
//!     b.bind(|| 7_i64);
//! })
//! .unwrap();
//! assert_eq!(inject::<i64>().unwrap(), 7);
//! ```

use crate::injector::{Injector, global};
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

// Serializes tests that share the process-wide injector.
static GLOBAL_SCOPE_LOCK: Mutex<()> = Mutex::new(());

/// RAII guard giving a test exclusive, clean use of an injector
pub struct BindingsScope<'a> {
    injector: &'a Injector,
    exclusive: Option<MutexGuard<'static, ()>>,
}

impl BindingsScope<'static> {
    /// Exclusive scope over the process-wide injector
    ///
    /// Blocks while another `BindingsScope::global()` is alive in this process.
    pub fn global() -> Self {
        // A panicking test poisons the lock; the scope clears state regardless.
        let guard = GLOBAL_SCOPE_LOCK
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Self::enter(global(), Some(guard))
    }
}

impl<'a> BindingsScope<'a> {
    /// Scope over an explicit injector
    pub fn for_injector(injector: &'a Injector) -> Self {
        Self::enter(injector, None)
    }

    /// The injector this scope cleans up
    pub fn injector(&self) -> &'a Injector {
        self.injector
    }

    fn enter(injector: &'a Injector, exclusive: Option<MutexGuard<'static, ()>>) -> Self {
        if injector.is_configured() {
            injector.clear_bindings();
        }
        Self {
            injector,
            exclusive,
        }
    }
}

impl Drop for BindingsScope<'_> {
    fn drop(&mut self) {
        self.injector.clear_bindings();
    }
}

impl fmt::Debug for BindingsScope<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BindingsScope")
            .field("injector", self.injector)
            .field("exclusive", &self.exclusive.is_some())
            .finish()
    }
}
