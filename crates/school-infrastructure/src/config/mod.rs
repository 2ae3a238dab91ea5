//! Configuration management
//!
//! Sources, later ones overriding earlier:
//!
//! ```text
//! AppConfig::default() → school.toml → SCHOOL_<SECTION>__<KEY> env vars
//! ```

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, LoggingConfig, PaginationConfig, StorageConfig};
