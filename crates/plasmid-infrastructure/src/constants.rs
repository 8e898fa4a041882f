//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Lifecycle messages are defined in `plasmid_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "plasmid.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "plasmid";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "PLASMID";

/// Separator between nested keys in configuration environment variables
pub const CONFIG_ENV_NESTING_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_ENV_FILTER_VAR: &str = "PLASMID_LOG";

/// File stem used for rolling log files when none can be derived
pub const DEFAULT_LOG_FILE_STEM: &str = "plasmid";
