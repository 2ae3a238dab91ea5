//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `school_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "school.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "school";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "SCHOOL";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "SCHOOL_LOG";

// ============================================================================
// STORAGE CONSTANTS
// ============================================================================

/// In-memory repositories
pub const STORAGE_PROVIDER_MEMORY: &str = "memory";

/// Default storage provider
pub const DEFAULT_STORAGE_PROVIDER: &str = STORAGE_PROVIDER_MEMORY;
