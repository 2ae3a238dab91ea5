//! Domain Services
//!
//! Stateless orchestration over several aggregates, enforcing the
//! referential rules no single aggregate can check on its own. These are the
//! only callers of the crate-private aggregate operations (school/classroom
//! deletion, student class moves, teacher assignment changes).
//!
//! ## Domain Services
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`SchoolsDomainService`] | Deletion guards for schools and classrooms |
//! | [`StudentsDomainService`] | Classroom moves for students |
//! | [`TeachersDomainService`] | Classroom assignment for teachers |
//!
//! Guards short-circuit: the first failing check is reported and nothing is
//! written.

/// School and classroom deletion guards
pub mod schools;
/// Student classroom moves
pub mod students;
/// Teacher classroom assignments
pub mod teachers;

pub use schools::{SchoolsDomainService, SchoolsDomainServiceInterface};
pub use students::{StudentsDomainService, StudentsDomainServiceInterface};
pub use teachers::{TeachersDomainService, TeachersDomainServiceInterface};
