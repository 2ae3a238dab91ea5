//! Application Layer - School Service
//!
//! Command and query services over the School, Student and Teacher
//! aggregates. Commands load an aggregate, apply the requested change and
//! persist it through the aggregate or a domain service; queries load and map
//! to DTOs.
//!
//! ## Architecture
//!
//! The application layer:
//! - Contains use case implementations (application services)
//! - Defines service ports the transport layer depends on
//! - Maps aggregates to serializable DTOs
//! - Has no dependencies on infrastructure or concrete repositories
//!
//! ## Use Cases
//!
//! | Service | Port |
//! |---------|------|
//! | [`SchoolsServiceImpl`] | [`SchoolsServiceInterface`] |
//! | [`SchoolsQueryServiceImpl`] | [`SchoolsQueryServiceInterface`] |
//! | [`StudentsServiceImpl`] | [`StudentsServiceInterface`] |
//! | [`StudentsQueryServiceImpl`] | [`StudentsQueryServiceInterface`] |
//! | [`TeachersServiceImpl`] | [`TeachersServiceInterface`] |
//! | [`TeachersQueryServiceImpl`] | [`TeachersQueryServiceInterface`] |
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `school-domain`: For aggregates, domain services, and repository contracts
//! - Pure Rust libraries for async, serialization, etc.

pub mod dto;
pub mod paging;
pub mod ports;
pub mod use_cases;

pub use paging::PagingPolicy;
pub use ports::*;
pub use use_cases::*;
