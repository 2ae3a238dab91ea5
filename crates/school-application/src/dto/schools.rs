//! School and classroom DTOs

use super::{default_page_number, default_page_size};
use chrono::NaiveDate;
use school_domain::{ClassRoom, School};
use serde::{Deserialize, Serialize};

/// Classroom as returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRoomDto {
    pub id: i32,
    pub school_id: i32,
    pub name: Option<String>,
}

impl ClassRoomDto {
    pub fn from_classroom(class_room: &ClassRoom) -> Self {
        Self {
            id: class_room.id(),
            school_id: class_room.school_id(),
            name: class_room.name().map(str::to_owned),
        }
    }
}

/// School with its classrooms as returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolDto {
    pub id: i32,
    pub name: Option<String>,
    pub open_date: Option<NaiveDate>,
    pub classes: Vec<ClassRoomDto>,
}

impl SchoolDto {
    pub fn from_school(school: &School) -> Self {
        Self {
            id: school.id(),
            name: school.name().map(str::to_owned),
            open_date: school.open_date(),
            classes: school
                .classes()
                .iter()
                .map(ClassRoomDto::from_classroom)
                .collect(),
        }
    }
}

/// New school request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolCreateDto {
    pub name: Option<String>,
    pub open_date: Option<NaiveDate>,
}

impl SchoolCreateDto {
    /// Build the unsaved aggregate
    pub fn to_school(&self) -> School {
        School::new(None, self.name.clone(), self.open_date)
    }
}

/// School rename / reschedule request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolUpdateDto {
    pub id: i32,
    pub name: Option<String>,
    pub open_date: Option<NaiveDate>,
}

/// School search request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolSearchDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_page_number")]
    pub page_number: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for SchoolSearchDto {
    fn default() -> Self {
        Self {
            name: None,
            page_number: default_page_number(),
            page_size: default_page_size(),
        }
    }
}

/// New classroom request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRoomAddDto {
    pub school_id: i32,
    pub name: Option<String>,
}

impl ClassRoomAddDto {
    /// Build the unsaved classroom owned by `school_id`
    pub fn to_classroom(&self) -> ClassRoom {
        ClassRoom::new(None, self.name.clone(), Some(self.school_id))
    }
}

/// Classroom rename request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRoomUpdateDto {
    pub school_id: i32,
    pub class_room_id: i32,
    pub name: Option<String>,
}

/// Classroom removal request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRoomDeleteDto {
    pub school_id: i32,
    pub class_room_id: i32,
}
