//! Use Case Implementations
//!
//! Application services implementing the ports in [`crate::ports::services`].

pub mod schools_query_service;
pub mod schools_service;
pub mod students_query_service;
pub mod students_service;
pub mod teachers_query_service;
pub mod teachers_service;

pub use schools_query_service::SchoolsQueryServiceImpl;
pub use schools_service::SchoolsServiceImpl;
pub use students_query_service::StudentsQueryServiceImpl;
pub use students_service::StudentsServiceImpl;
pub use teachers_query_service::TeachersQueryServiceImpl;
pub use teachers_service::TeachersServiceImpl;
