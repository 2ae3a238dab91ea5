//! Schools Repository Interface

use crate::entities::{ClassRoom, School};
use crate::error::Result;
use crate::value_objects::Page;
use async_trait::async_trait;
use std::sync::Arc;

/// Repository: School aggregate persistence
///
/// # Example
///
/// ```ignore
/// use school_domain::repositories::SchoolsRepository;
///
/// // Existence probe: only total_count matters
/// let probe = repo.search_schools_by_name(Some("Lincoln High"), 1, 1).await?;
/// if probe.has_any() {
///     println!("name already taken");
/// }
///
/// // Load with classrooms
/// if let Some(school) = repo.get_school(3).await? {
///     println!("{} classes", school.classes_count());
/// }
/// ```
#[async_trait]
pub trait SchoolsRepository: Send + Sync {
    /// Load a school with its classrooms
    async fn get_school(&self, id: i32) -> Result<Option<School>>;

    /// Search schools whose name contains `name` (all schools when `None`)
    ///
    /// # Arguments
    /// - `name`: Optional name filter
    /// - `page_number`: 1-based page
    /// - `page_size`: Maximum rows on the page
    async fn search_schools_by_name(
        &self,
        name: Option<&str>,
        page_number: u32,
        page_size: u32,
    ) -> Result<Page<School>>;

    /// Persist a new school and its classrooms; returns the new id
    async fn create_school(&self, school: &mut School) -> Result<i32>;

    /// Persist the school row and its classroom collection
    ///
    /// Classrooms missing from `school` are removed, unsaved ones inserted.
    ///
    /// # Returns
    /// `true` when anything was written
    async fn update_school(&self, school: &mut School) -> Result<bool>;

    /// Delete the school row
    async fn delete_school(&self, school: &School) -> Result<bool>;

    /// Persist a single classroom row
    ///
    /// # Returns
    /// `true` when the classroom changed
    async fn update_class(&self, class_room: &ClassRoom) -> Result<bool>;
}

/// Shared schools repository for dependency injection
pub type SharedSchoolsRepository = Arc<dyn SchoolsRepository>;
