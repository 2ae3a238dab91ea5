//! Data Transfer Objects
//!
//! Serializable request and response shapes. Response DTOs are built from
//! aggregates with `from_*`; create DTOs build unsaved aggregates with `to_*`.
//!
//! | Module | DTOs |
//! |--------|------|
//! | [`schools`] | School, classroom, and their create/update/search requests |
//! | [`students`] | Student and its create/update/move/search requests |
//! | [`teachers`] | Teacher, assignments, and their requests |

pub mod schools;
pub mod students;
pub mod teachers;

pub use schools::{
    ClassRoomAddDto, ClassRoomDeleteDto, ClassRoomDto, ClassRoomUpdateDto, SchoolCreateDto,
    SchoolDto, SchoolSearchDto, SchoolUpdateDto,
};
pub use students::{
    StudentCreateDto, StudentDto, StudentSearchDto, StudentSetClassroomDto, StudentUpdateDto,
};
pub use teachers::{
    TeacherAssignClassroomDto, TeacherClassroomDto, TeacherCreateDto, TeacherDto,
    TeacherSearchDto, TeacherUnassignClassroomDto, TeacherUpdateDto,
};

/// First page, for serde defaults
pub(crate) fn default_page_number() -> u32 {
    1
}

/// Default page size, for serde defaults
pub(crate) fn default_page_size() -> u32 {
    crate::paging::DEFAULT_PAGE_SIZE
}
