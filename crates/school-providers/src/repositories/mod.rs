//! In-memory repository providers
//!
//! Rows live in [`dashmap::DashMap`]s keyed by id, with one [`crate::utils::IdSequence`]
//! per table. Data is not persisted and will be lost on restart.
//!
//! ## Available Providers
//!
//! | Provider | Port | Owned children |
//! |----------|------|----------------|
//! | [`InMemorySchoolsRepository`] | `SchoolsRepository` | classrooms |
//! | [`InMemoryStudentsRepository`] | `StudentsRepository` | none |
//! | [`InMemoryTeachersRepository`] | `TeachersRepository` | classroom assignments |
//!
//! Stored rows are compared with incoming aggregates to report whether an
//! update changed anything.

pub mod schools;
pub mod students;
pub mod teachers;

pub use schools::InMemorySchoolsRepository;
pub use students::InMemoryStudentsRepository;
pub use teachers::InMemoryTeachersRepository;
