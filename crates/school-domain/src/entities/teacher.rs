//! Teacher aggregate
//!
//! Teachers have no uniqueness rule. Assignment changes go through
//! [`crate::domain_services::TeachersDomainService`], which resolves the
//! school and classroom before the aggregate records the assignment.

use crate::constants::{MSG_TEACHER_HAS_CLASSROOMS, UNSAVED_ID};
use crate::entities::TeacherClassroom;
use crate::error::{Error, Result};
use crate::repositories::TeachersRepository;
use crate::validation::rules::not_blank;
use crate::validation::{ValidationEngineInterface, ValidationTarget};
use crate::value_objects::Page;
use tracing::{debug, warn};
use validator::Validate;

/// Teacher aggregate root
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct Teacher {
    id: i32,

    #[validate(
        required(message = "Name must not be empty"),
        custom(function = "not_blank", message = "Name must not be empty"),
        length(min = 3, max = 100, message = "Name must be between 3 and 100 characters")
    )]
    name: Option<String>,

    classrooms: Vec<TeacherClassroom>,
}

impl Teacher {
    /// Create a teacher; `None` id means not yet persisted
    pub fn new(id: Option<i32>, name: Option<String>) -> Self {
        Self {
            id: id.unwrap_or(UNSAVED_ID),
            name,
            classrooms: Vec::new(),
        }
    }

    /// Rehydrate the owned assignments (used by stores and fixtures)
    #[must_use]
    pub fn with_classrooms(mut self, classrooms: Vec<TeacherClassroom>) -> Self {
        self.classrooms = classrooms;
        self
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn classrooms(&self) -> &[TeacherClassroom] {
        &self.classrooms
    }

    pub fn is_assigned_to(&self, classroom_id: i32) -> bool {
        self.classrooms
            .iter()
            .any(|a| a.classroom_id() == classroom_id)
    }

    pub fn set_name(&mut self, name: Option<String>) {
        if self.name == name {
            return;
        }
        self.name = name;
    }

    pub async fn create(
        &mut self,
        validation_engine: &dyn ValidationEngineInterface,
        repository: &dyn TeachersRepository,
    ) -> Result<i32> {
        validation_engine.ensure_valid(ValidationTarget::Teacher(self))?;

        let id = repository.create(self).await?;
        self.id = id;
        debug!(teacher_id = id, "Teacher created");
        Ok(id)
    }

    pub async fn update(
        &mut self,
        validation_engine: &dyn ValidationEngineInterface,
        repository: &dyn TeachersRepository,
    ) -> Result<bool> {
        validation_engine.ensure_valid(ValidationTarget::Teacher(self))?;

        let changed = repository.update(self).await?;
        debug!(teacher_id = self.id, changed, "Teacher updated");
        Ok(changed)
    }

    /// Record a new classroom assignment and persist it
    pub(crate) async fn assign_teacher_to_class(
        &mut self,
        school_id: i32,
        classroom_id: i32,
        repository: &dyn TeachersRepository,
    ) -> Result<bool> {
        if self.is_assigned_to(classroom_id) {
            warn!(teacher_id = self.id, classroom_id, "Teacher already assigned");
            return Err(Error::data_duplicated());
        }

        self.classrooms.push(TeacherClassroom::new(
            None,
            self.id,
            classroom_id,
            school_id,
        ));
        repository.update(self).await
    }

    /// Drop the assignment to `classroom_id` and persist
    ///
    /// The caller has already checked the assignment exists; a missing one is
    /// not reported here.
    pub(crate) async fn unassign_teacher_from_class(
        &mut self,
        classroom_id: i32,
        repository: &dyn TeachersRepository,
    ) -> Result<bool> {
        self.classrooms.retain(|a| a.classroom_id() != classroom_id);
        repository.update(self).await
    }

    /// Load a teacher with assignments
    pub async fn get(id: i32, repository: &dyn TeachersRepository) -> Result<Teacher> {
        repository.get(id).await?.ok_or_else(Error::data_not_found)
    }

    pub async fn search(
        name: Option<&str>,
        school_id: Option<i32>,
        classroom_id: Option<i32>,
        page_number: u32,
        page_size: u32,
        repository: &dyn TeachersRepository,
    ) -> Result<Page<Teacher>> {
        repository
            .search(name, school_id, classroom_id, page_number, page_size)
            .await
    }

    /// Delete a teacher that holds no classroom assignments
    pub async fn delete(id: i32, repository: &dyn TeachersRepository) -> Result<bool> {
        let teacher = Self::get(id, repository).await?;

        if !teacher.classrooms.is_empty() {
            warn!(
                teacher_id = id,
                assignments = teacher.classrooms.len(),
                "Refusing to delete assigned teacher"
            );
            return Err(Error::business(MSG_TEACHER_HAS_CLASSROOMS));
        }
        repository.delete(&teacher).await
    }

    /// Persistence hook: record the identity assigned by the store
    pub fn assign_id(&mut self, id: i32) {
        self.id = id;
    }

    /// Give every unsaved assignment an identity drawn from `next_id`
    pub fn assign_classroom_ids<F>(&mut self, mut next_id: F) -> Result<()>
    where
        F: FnMut() -> Result<i32>,
    {
        let teacher_id = self.id;
        for assignment in self
            .classrooms
            .iter_mut()
            .filter(|a| a.id() == UNSAVED_ID)
        {
            assignment.assign_identity(next_id()?, teacher_id);
        }
        Ok(())
    }
}
