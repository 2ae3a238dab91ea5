//! Teacher DTOs

use super::{default_page_number, default_page_size};
use school_domain::{Teacher, TeacherClassroom};
use serde::{Deserialize, Serialize};

/// One classroom assignment as returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherClassroomDto {
    pub id: i32,
    pub teacher_id: i32,
    pub classroom_id: i32,
    pub school_id: i32,
}

impl TeacherClassroomDto {
    pub fn from_teacher_classroom(assignment: &TeacherClassroom) -> Self {
        Self {
            id: assignment.id(),
            teacher_id: assignment.teacher_id(),
            classroom_id: assignment.classroom_id(),
            school_id: assignment.school_id(),
        }
    }
}

/// Teacher with assignments as returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherDto {
    pub id: i32,
    pub name: Option<String>,
    pub classrooms: Vec<TeacherClassroomDto>,
}

impl TeacherDto {
    pub fn from_teacher(teacher: &Teacher) -> Self {
        Self {
            id: teacher.id(),
            name: teacher.name().map(str::to_owned),
            classrooms: teacher
                .classrooms()
                .iter()
                .map(TeacherClassroomDto::from_teacher_classroom)
                .collect(),
        }
    }
}

/// New teacher request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherCreateDto {
    pub name: Option<String>,
}

impl TeacherCreateDto {
    pub fn to_teacher(&self) -> Teacher {
        Teacher::new(None, self.name.clone())
    }
}

/// Teacher rename request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherUpdateDto {
    pub id: i32,
    pub name: Option<String>,
}

/// Assign a teacher to a classroom of a school
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherAssignClassroomDto {
    pub teacher_id: i32,
    pub classroom_id: i32,
    pub school_id: i32,
}

/// Remove a teacher's classroom assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherUnassignClassroomDto {
    pub teacher_id: i32,
    pub classroom_id: i32,
}

/// Teacher search request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherSearchDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub school_id: Option<i32>,
    #[serde(default)]
    pub classroom_id: Option<i32>,
    #[serde(default = "default_page_number")]
    pub page_number: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for TeacherSearchDto {
    fn default() -> Self {
        Self {
            name: None,
            school_id: None,
            classroom_id: None,
            page_number: default_page_number(),
            page_size: default_page_size(),
        }
    }
}
