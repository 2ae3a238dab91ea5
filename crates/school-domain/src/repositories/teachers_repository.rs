//! Teachers Repository Interface

use crate::entities::Teacher;
use crate::error::Result;
use crate::value_objects::Page;
use async_trait::async_trait;
use std::sync::Arc;

/// Repository: Teacher aggregate persistence
#[async_trait]
pub trait TeachersRepository: Send + Sync {
    /// Persist a new teacher; returns the new id
    async fn create(&self, teacher: &mut Teacher) -> Result<i32>;

    /// Persist the teacher row and its assignments
    ///
    /// # Returns
    /// `true` when anything was written
    async fn update(&self, teacher: &mut Teacher) -> Result<bool>;

    /// Delete the teacher row
    async fn delete(&self, teacher: &Teacher) -> Result<bool>;

    /// Load a teacher with its classroom assignments
    async fn get(&self, id: i32) -> Result<Option<Teacher>>;

    /// Load only the teacher row, without assignments
    async fn get_row(&self, id: i32) -> Result<Option<Teacher>>;

    /// Search teachers
    ///
    /// A teacher matches `school_id`/`classroom_id` when any of its
    /// assignments does.
    async fn search(
        &self,
        name: Option<&str>,
        school_id: Option<i32>,
        classroom_id: Option<i32>,
        page_number: u32,
        page_size: u32,
    ) -> Result<Page<Teacher>>;
}

/// Shared teachers repository for dependency injection
pub type SharedTeachersRepository = Arc<dyn TeachersRepository>;
