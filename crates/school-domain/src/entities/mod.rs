//! Domain Entities
//!
//! Aggregates own their consistency boundary: a [`School`] owns its
//! [`ClassRoom`]s and a [`Teacher`] owns its [`TeacherClassroom`] assignments.
//! Back-relations are plain integer ids, never live references.
//!
//! ## Entities
//!
//! | Entity | Aggregate root | Description |
//! |--------|----------------|-------------|
//! | [`School`] | yes | School with its ordered classrooms |
//! | [`ClassRoom`] | no | Classroom owned by exactly one school |
//! | [`Student`] | yes | Student optionally enrolled in a school classroom |
//! | [`Teacher`] | yes | Teacher with its classroom assignments |
//! | [`TeacherClassroom`] | no | One teacher assigned to one classroom of one school |
//!
//! Setters are idempotent: assigning the current value leaves the entity
//! untouched, so a subsequent update reports no change.

/// Classroom entity
pub mod classroom;
/// School aggregate
pub mod school;
/// Student aggregate
pub mod student;
/// Teacher aggregate
pub mod teacher;
/// Teacher-classroom assignment entity
pub mod teacher_classroom;

pub use classroom::ClassRoom;
pub use school::School;
pub use student::Student;
pub use teacher::Teacher;
pub use teacher_classroom::TeacherClassroom;
