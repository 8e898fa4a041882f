//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error raised by caller-supplied default factories
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for Plasmid
///
/// Every variant describes a programming or configuration mistake rather than
/// an expected runtime condition, so none of them are retried.
#[derive(Error, Debug)]
pub enum Error {
    /// `inject` was called before any bindings were installed
    #[error("{message}")]
    NotConfigured {
        /// Description of the missing configuration
        message: String,
    },

    /// A binding table was installed while another one was still active
    #[error("{message}")]
    AlreadyConfigured {
        /// Description of the conflicting configuration
        message: String,
    },

    /// The requested type has neither an exact binding nor a default
    #[error("No type binding available for {type_name}. Available: [{}]", .available.join(", "))]
    NoBindingAvailable {
        /// Name of the requested type
        type_name: &'static str,
        /// Names of the currently bound types
        available: Vec<&'static str>,
    },

    /// The default factory failed while producing a value
    #[error("Cannot inject default value for {type_name} due to error: {source}")]
    DefaultConstructionFailed {
        /// Name of the requested type
        type_name: &'static str,
        /// Error raised by the default factory
        #[source]
        source: BoxError,
    },

    /// The produced value is not an instance of the requested type
    #[error("Invalid type binding: '{produced}' is not an instance of {expected}")]
    InvalidBinding {
        /// Name of the type that was actually produced
        produced: &'static str,
        /// Name of the requested type
        expected: &'static str,
    },

    /// Configuration-related error (with source)
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },
}

// Lifecycle error creation methods
impl Error {
    /// Create a not-configured error
    pub fn not_configured<S: Into<String>>(message: S) -> Self {
        Self::NotConfigured {
            message: message.into(),
        }
    }

    /// Create an already-configured error
    pub fn already_configured<S: Into<String>>(message: S) -> Self {
        Self::AlreadyConfigured {
            message: message.into(),
        }
    }
}

// Resolution error creation methods
impl Error {
    /// Create a no-binding error listing the available bindings
    pub fn no_binding_available(type_name: &'static str, available: Vec<&'static str>) -> Self {
        Self::NoBindingAvailable {
            type_name,
            available,
        }
    }

    /// Wrap a default factory failure with the requested type
    pub fn default_construction_failed<E: Into<BoxError>>(
        type_name: &'static str,
        source: E,
    ) -> Self {
        Self::DefaultConstructionFailed {
            type_name,
            source: source.into(),
        }
    }

    /// Create an invalid binding error
    pub fn invalid_binding(produced: &'static str, expected: &'static str) -> Self {
        Self::InvalidBinding { produced, expected }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl Error {
    /// Whether this error comes from the configure/clear lifecycle
    pub fn is_lifecycle(&self) -> bool {
        matches!(
            self,
            Self::NotConfigured { .. } | Self::AlreadyConfigured { .. }
        )
    }
}
