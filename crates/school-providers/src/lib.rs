//! # School Service - Provider Implementations
//!
//! Implementations of the repository ports defined in `school-domain`. Only an
//! in-memory store ships today; it is the persistence collaborator used by the
//! default bootstrap and by the test suites of every layer.
//!
//! ## Provider Categories
//!
//! | Port | Implementations |
//! |------|-----------------|
//! | `SchoolsRepository` | InMemory |
//! | `StudentsRepository` | InMemory |
//! | `TeachersRepository` | InMemory |
//!
//! ## Usage
//!
//! ```
//! use school_providers::repositories::InMemorySchoolsRepository;
//! use school_providers::SchoolsRepository;
//! use std::sync::Arc;
//!
//! let repo: Arc<dyn SchoolsRepository> = Arc::new(InMemorySchoolsRepository::new());
//! # let _ = repo;
//! ```

// Re-export school-domain types commonly used with providers
pub use school_domain::error::{Error, Result};
pub use school_domain::repositories::{SchoolsRepository, StudentsRepository, TeachersRepository};

/// Repository implementations
///
/// Implements the domain repository traits over concurrent maps.
pub mod repositories;

/// Shared utilities for provider implementations
pub mod utils;

pub use repositories::{
    InMemorySchoolsRepository, InMemoryStudentsRepository, InMemoryTeachersRepository,
};
