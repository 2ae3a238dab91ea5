//! Repository Interfaces
//!
//! Persistence contracts the aggregates and domain services depend on.
//! Implementations are external collaborators backed by any store; the
//! `school-providers` crate ships in-memory ones.
//!
//! ## Repositories
//!
//! | Repository | Description |
//! |------------|-------------|
//! | [`SchoolsRepository`] | Schools with their classrooms |
//! | [`StudentsRepository`] | Students |
//! | [`TeachersRepository`] | Teachers with their classroom assignments |
//!
//! ## Conventions
//!
//! - `create`/`update` take the aggregate mutably so the store can write back
//!   generated identities (the aggregate's and its unsaved children's).
//! - `update*` returns whether anything was actually written; an update of an
//!   unchanged aggregate reports `false`.
//! - Searches are 1-based and report `total_count` across all pages. Existence
//!   probes call them with page 1, size 1.

/// Schools repository interface
pub mod schools_repository;
/// Students repository interface
pub mod students_repository;
/// Teachers repository interface
pub mod teachers_repository;

pub use schools_repository::{SchoolsRepository, SharedSchoolsRepository};
pub use students_repository::{SharedStudentsRepository, StudentsRepository};
pub use teachers_repository::{SharedTeachersRepository, TeachersRepository};
