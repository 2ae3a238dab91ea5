//! Student DTOs

use super::{default_page_number, default_page_size};
use school_domain::Student;
use serde::{Deserialize, Serialize};

/// Student as returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentDto {
    pub id: i32,
    pub name: Option<String>,
    pub class_room_id: Option<i32>,
    pub school_id: Option<i32>,
}

impl StudentDto {
    pub fn from_student(student: &Student) -> Self {
        Self {
            id: student.id(),
            name: student.name().map(str::to_owned),
            class_room_id: student.class_room_id(),
            school_id: student.school_id(),
        }
    }
}

/// New student request; the enrollment pair is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentCreateDto {
    pub name: Option<String>,
    #[serde(default)]
    pub class_room_id: Option<i32>,
    #[serde(default)]
    pub school_id: Option<i32>,
}

impl StudentCreateDto {
    pub fn to_student(&self) -> Student {
        Student::new(None, self.name.clone(), self.class_room_id, self.school_id)
    }
}

/// Student rename request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentUpdateDto {
    pub id: i32,
    pub name: Option<String>,
}

/// Move a student into a classroom, or out of any when both ids are absent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentSetClassroomDto {
    pub student_id: i32,
    #[serde(default)]
    pub school_id: Option<i32>,
    #[serde(default)]
    pub class_room_id: Option<i32>,
}

/// Student search request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentSearchDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub school_id: Option<i32>,
    #[serde(default)]
    pub class_room_id: Option<i32>,
    #[serde(default = "default_page_number")]
    pub page_number: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for StudentSearchDto {
    fn default() -> Self {
        Self {
            name: None,
            school_id: None,
            class_room_id: None,
            page_number: default_page_number(),
            page_size: default_page_size(),
        }
    }
}
