//! # Domain Layer
//!
//! Core consistency rules of the School Service: the School, Student and
//! Teacher aggregates, their declarative rule sets, the repository contracts
//! they persist through, and the domain services that enforce rules spanning
//! more than one aggregate.
//!
//! ## Module Categories
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`entities`] | Aggregates and owned entities (School/ClassRoom, Student, Teacher/TeacherClassroom) |
//! | [`validation`] | Validation engine and per-entity rule sets |
//! | [`repositories`] | Persistence contracts consumed by aggregates and domain services |
//! | [`domain_services`] | Cross-aggregate deletion and assignment guards |
//! | [`value_objects`] | `Page<T>` and `Violation` |
//! | [`error`] | Failure taxonomy shared by every layer |
//!
//! ## Control Flow
//!
//! ```text
//! caller → domain service / aggregate → ValidationEngine
//!                                     → repository probe (page 1, size 1)
//!                                     → repository persist
//! ```

pub mod constants;
pub mod domain_services;
pub mod entities;
pub mod error;
pub mod repositories;
pub mod validation;
pub mod value_objects;

pub use entities::{ClassRoom, School, Student, Teacher, TeacherClassroom};
pub use error::{Error, Result};
pub use value_objects::{Page, Violation};
