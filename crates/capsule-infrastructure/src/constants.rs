//! Infrastructure layer constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "capsule.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "capsule";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "CAPSULE";

/// Separator between the prefix and nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// CONTAINER CONSTANTS
// ============================================================================

/// Whether re-entrant resolution is reported as a typed error by default
pub const DEFAULT_DETECT_CYCLES: bool = true;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "CAPSULE_LOG";
