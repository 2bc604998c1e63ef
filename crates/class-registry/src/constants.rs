//! Registry constants
//!
//! Defaults shared by the configuration loader and the logging setup.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILENAME: &str = "class-registry.toml";

/// Environment variable prefix for configuration
///
/// Nested keys are separated by a double underscore, e.g.
/// `CLASS_REGISTRY__LOGGING__LEVEL=debug`.
pub const CONFIG_ENV_PREFIX: &str = "CLASS_REGISTRY";

/// Separator between the prefix and nested configuration keys
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV_VAR: &str = "CLASS_REGISTRY_LOG";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";
