//! Students Repository Interface

use crate::entities::Student;
use crate::error::Result;
use crate::value_objects::Page;
use async_trait::async_trait;
use std::sync::Arc;

/// Repository: Student aggregate persistence
#[async_trait]
pub trait StudentsRepository: Send + Sync {
    /// Persist a new student; returns the new id
    async fn create(&self, student: &mut Student) -> Result<i32>;

    /// Persist changes; `true` when anything was written
    async fn update(&self, student: &mut Student) -> Result<bool>;

    /// Delete the student row
    async fn delete(&self, student: &Student) -> Result<bool>;

    async fn get(&self, id: i32) -> Result<Option<Student>>;

    /// Search students
    ///
    /// # Arguments
    /// - `name`: Optional substring filter on the name
    /// - `school_id`: Optional exact school filter
    /// - `class_room_id`: Optional exact classroom filter
    /// - `page_number`: 1-based page
    /// - `page_size`: Maximum rows on the page
    async fn search(
        &self,
        name: Option<&str>,
        school_id: Option<i32>,
        class_room_id: Option<i32>,
        page_number: u32,
        page_size: u32,
    ) -> Result<Page<Student>>;
}

/// Shared students repository for dependency injection
pub type SharedStudentsRepository = Arc<dyn StudentsRepository>;
