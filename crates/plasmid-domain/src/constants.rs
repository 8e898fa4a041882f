//! Domain layer constants
//!
//! Messages raised by the injector's lifecycle guard. Infrastructure-specific
//! constants remain in `plasmid_infrastructure::constants`.

// ============================================================================
// LIFECYCLE MESSAGES
// ============================================================================

/// Raised when bindings are installed while a binding table is already active
pub const INJECTOR_ALREADY_SET_MESSAGE: &str = "Injector instance has already been set";

/// Raised when `inject` runs before any binding table was installed
pub const INJECTOR_NOT_SET_MESSAGE: &str =
    "Bindings have not been configured! Call configure_bindings() to set up your bindings before calling inject()";
