//! # School Service
//!
//! Domain consistency layer for school administration: schools own
//! classrooms, students enrol in one classroom, teachers are assigned to many.
//!
//! This crate is the public API. It re-exports every layer and offers
//! [`bootstrap`] to go from a configuration file to a wired [`AppContext`].
//!
//! ## Example
//!
//! ```ignore
//! use school::application::dto::SchoolCreateDto;
//!
//! let context = school::bootstrap(None)?;
//! let created = context
//!     .schools()
//!     .create(SchoolCreateDto {
//!         name: Some("Lincoln High".to_string()),
//!         open_date: None,
//!     })
//!     .await?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Aggregates, validation, repository contracts and domain services
//! - `application` - Command and query services, DTOs and paging
//! - `providers` - In-memory repository implementations
//! - `infrastructure` - Configuration, logging and the composition root

use std::path::Path;

/// Domain layer - aggregates, guards and the failure taxonomy
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use school_domain::*;
}

/// Application layer - use cases and DTOs
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use school_application::*;
}

/// Providers - repository implementations
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use school_providers::{
        InMemorySchoolsRepository, InMemoryStudentsRepository, InMemoryTeachersRepository,
    };
}

/// Infrastructure layer - config, logging and DI
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use school_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::{ClassRoom, Error, Page, Result, School, Student, Teacher, TeacherClassroom};

// Re-export the composition root
pub use infrastructure::{AppConfig, AppContext, ConfigLoader, init_app};

/// Load configuration, install logging and wire the application
///
/// `config_path` overrides the default configuration file search.
pub fn bootstrap(config_path: Option<&Path>) -> Result<AppContext> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    let config = loader.load()?;

    school_infrastructure::logging::init_logging(&config.logging)?;
    init_app(config)
}
