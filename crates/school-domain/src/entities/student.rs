//! Student aggregate

use crate::constants::{PROBE_PAGE_NUMBER, PROBE_PAGE_SIZE, UNSAVED_ID};
use crate::error::{Error, Result};
use crate::repositories::StudentsRepository;
use crate::validation::rules::not_blank;
use crate::validation::{ValidationEngineInterface, ValidationTarget};
use crate::value_objects::Page;
use tracing::{debug, warn};
use validator::Validate;

/// Student aggregate root
///
/// `school_id` and `class_room_id` are either both absent (not enrolled) or
/// both present and positive; the rule set enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct Student {
    id: i32,

    #[validate(
        required(message = "Name must not be empty"),
        custom(function = "not_blank", message = "Name must not be empty"),
        length(min = 3, max = 100, message = "Name must be between 3 and 100 characters")
    )]
    name: Option<String>,

    class_room_id: Option<i32>,

    school_id: Option<i32>,
}

impl Student {
    /// Create a student; `None` id means not yet persisted
    pub fn new(
        id: Option<i32>,
        name: Option<String>,
        class_room_id: Option<i32>,
        school_id: Option<i32>,
    ) -> Self {
        Self {
            id: id.unwrap_or(UNSAVED_ID),
            name,
            class_room_id,
            school_id,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn class_room_id(&self) -> Option<i32> {
        self.class_room_id
    }

    pub fn school_id(&self) -> Option<i32> {
        self.school_id
    }

    pub fn set_name(&mut self, name: Option<String>) {
        if self.name == name {
            return;
        }
        self.name = name;
    }

    /// Validate, check for a duplicate enrollment and persist a new student
    pub async fn create(
        &mut self,
        repository: &dyn StudentsRepository,
        validation_engine: &dyn ValidationEngineInterface,
    ) -> Result<i32> {
        validation_engine.ensure_valid(ValidationTarget::Student(self))?;
        self.ensure_no_duplicate(repository).await?;

        let id = repository.create(self).await?;
        self.id = id;
        debug!(student_id = id, "Student created");
        Ok(id)
    }

    /// Validate, check for a duplicate enrollment and persist changes
    pub async fn update(
        &mut self,
        repository: &dyn StudentsRepository,
        validation_engine: &dyn ValidationEngineInterface,
    ) -> Result<bool> {
        validation_engine.ensure_valid(ValidationTarget::Student(self))?;
        self.ensure_no_duplicate(repository).await?;

        let changed = repository.update(self).await?;
        debug!(student_id = self.id, changed, "Student updated");
        Ok(changed)
    }

    pub async fn delete(&self, repository: &dyn StudentsRepository) -> Result<bool> {
        repository.delete(self).await
    }

    /// Move the student to another classroom (or out of any)
    ///
    /// Both ids are replaced together before validation. Existence of the
    /// school and classroom is checked by the domain service.
    pub(crate) async fn set_class(
        &mut self,
        class_room_id: Option<i32>,
        school_id: Option<i32>,
        validation_engine: &dyn ValidationEngineInterface,
        repository: &dyn StudentsRepository,
    ) -> Result<bool> {
        self.school_id = school_id;
        self.class_room_id = class_room_id;
        validation_engine.ensure_valid(ValidationTarget::Student(self))?;

        repository.update(self).await
    }

    pub async fn get(id: i32, repository: &dyn StudentsRepository) -> Result<Student> {
        repository.get(id).await?.ok_or_else(Error::data_not_found)
    }

    pub async fn search(
        repository: &dyn StudentsRepository,
        name: Option<&str>,
        school_id: Option<i32>,
        class_room_id: Option<i32>,
        page_number: u32,
        page_size: u32,
    ) -> Result<Page<Student>> {
        repository
            .search(name, school_id, class_room_id, page_number, page_size)
            .await
    }

    /// Existence probe on (name, school, classroom), excluding this student by id
    async fn ensure_no_duplicate(&self, repository: &dyn StudentsRepository) -> Result<()> {
        let probe = repository
            .search(
                self.name(),
                self.school_id,
                self.class_room_id,
                PROBE_PAGE_NUMBER,
                PROBE_PAGE_SIZE,
            )
            .await?;

        let duplicated = if self.id == UNSAVED_ID {
            !probe.data.is_empty()
        } else {
            probe.data.iter().any(|s| s.id != self.id)
        };

        if duplicated {
            warn!(
                student_id = self.id,
                school_id = ?self.school_id,
                class_room_id = ?self.class_room_id,
                "Duplicate student enrollment"
            );
            return Err(Error::data_duplicated());
        }
        Ok(())
    }

    /// Persistence hook: record the identity assigned by the store
    pub fn assign_id(&mut self, id: i32) {
        self.id = id;
    }
}
