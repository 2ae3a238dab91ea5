//! Application Service Port Interfaces
//!
//! Commands and queries are separate ports so a transport can expose
//! read-only access without the write path.

use crate::dto::{
    ClassRoomAddDto, ClassRoomDeleteDto, ClassRoomUpdateDto, SchoolCreateDto, SchoolDto,
    SchoolSearchDto, SchoolUpdateDto, StudentCreateDto, StudentDto, StudentSearchDto,
    StudentSetClassroomDto, StudentUpdateDto, TeacherAssignClassroomDto, TeacherCreateDto,
    TeacherDto, TeacherSearchDto, TeacherUnassignClassroomDto, TeacherUpdateDto,
};
use async_trait::async_trait;
use school_domain::error::Result;
use school_domain::value_objects::Page;
use std::sync::Arc;

// ============================================================================
// Schools
// ============================================================================

/// School commands
#[async_trait]
pub trait SchoolsServiceInterface: Send + Sync {
    /// Create a school with a unique name
    async fn create(&self, input: SchoolCreateDto) -> Result<SchoolDto>;

    /// Rename and/or reschedule a school
    async fn update(&self, input: SchoolUpdateDto) -> Result<SchoolDto>;

    /// Delete a school with no classes, teachers or students
    async fn delete(&self, id: i32) -> Result<bool>;

    /// Add a classroom to a school
    async fn add_class(&self, input: ClassRoomAddDto) -> Result<SchoolDto>;

    /// Rename a classroom
    async fn update_classroom(&self, input: ClassRoomUpdateDto) -> Result<SchoolDto>;

    /// Delete a classroom with no teachers or students
    async fn delete_class(&self, input: ClassRoomDeleteDto) -> Result<bool>;
}

/// School queries
#[async_trait]
pub trait SchoolsQueryServiceInterface: Send + Sync {
    async fn get_school(&self, id: i32) -> Result<SchoolDto>;

    async fn search_schools(&self, input: SchoolSearchDto) -> Result<Page<SchoolDto>>;
}

// ============================================================================
// Students
// ============================================================================

/// Student commands
#[async_trait]
pub trait StudentsServiceInterface: Send + Sync {
    async fn create(&self, input: StudentCreateDto) -> Result<StudentDto>;

    async fn update(&self, input: StudentUpdateDto) -> Result<StudentDto>;

    /// Move a student into a classroom or out of any
    async fn set_class(&self, input: StudentSetClassroomDto) -> Result<bool>;

    async fn delete(&self, id: i32) -> Result<bool>;
}

/// Student queries
#[async_trait]
pub trait StudentsQueryServiceInterface: Send + Sync {
    async fn get(&self, id: i32) -> Result<StudentDto>;

    async fn search(&self, input: StudentSearchDto) -> Result<Page<StudentDto>>;
}

// ============================================================================
// Teachers
// ============================================================================

/// Teacher commands
#[async_trait]
pub trait TeachersServiceInterface: Send + Sync {
    async fn create(&self, input: TeacherCreateDto) -> Result<TeacherDto>;

    async fn update(&self, input: TeacherUpdateDto) -> Result<TeacherDto>;

    /// Delete a teacher holding no classroom assignments
    async fn delete(&self, id: i32) -> Result<bool>;

    async fn assign_to_classroom(&self, input: TeacherAssignClassroomDto) -> Result<bool>;

    async fn unassign_from_classroom(&self, input: TeacherUnassignClassroomDto) -> Result<bool>;
}

/// Teacher queries
#[async_trait]
pub trait TeachersQueryServiceInterface: Send + Sync {
    async fn get(&self, id: i32) -> Result<TeacherDto>;

    async fn search(&self, input: TeacherSearchDto) -> Result<Page<TeacherDto>>;
}

/// Shared school command service
pub type SharedSchoolsService = Arc<dyn SchoolsServiceInterface>;
/// Shared school query service
pub type SharedSchoolsQueryService = Arc<dyn SchoolsQueryServiceInterface>;
/// Shared student command service
pub type SharedStudentsService = Arc<dyn StudentsServiceInterface>;
/// Shared student query service
pub type SharedStudentsQueryService = Arc<dyn StudentsQueryServiceInterface>;
/// Shared teacher command service
pub type SharedTeachersService = Arc<dyn TeachersServiceInterface>;
/// Shared teacher query service
pub type SharedTeachersQueryService = Arc<dyn TeachersQueryServiceInterface>;
