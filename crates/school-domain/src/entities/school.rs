//! School aggregate
//!
//! Owns its classrooms and guards two uniqueness rules: school names across
//! the store, and classroom names within the school. Deleting a school or one
//! of its classrooms is only reachable through
//! [`crate::domain_services::SchoolsDomainService`], which checks for
//! dependents first.

use crate::constants::{PROBE_PAGE_NUMBER, PROBE_PAGE_SIZE, UNSAVED_ID};
use crate::entities::ClassRoom;
use crate::error::{Error, Result};
use crate::repositories::SchoolsRepository;
use crate::validation::rules::not_blank;
use crate::validation::{ValidationEngineInterface, ValidationTarget};
use crate::value_objects::Page;
use chrono::NaiveDate;
use tracing::{debug, warn};
use validator::Validate;

/// School aggregate root
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct School {
    id: i32,

    #[validate(
        required(message = "Name must not be empty"),
        custom(function = "not_blank", message = "Name must not be empty"),
        length(min = 3, max = 100, message = "Name must be between 3 and 100 characters")
    )]
    name: Option<String>,

    open_date: Option<NaiveDate>,

    classes: Vec<ClassRoom>,
}

impl School {
    /// Create a school; `None` id means not yet persisted
    pub fn new(id: Option<i32>, name: Option<String>, open_date: Option<NaiveDate>) -> Self {
        Self {
            id: id.unwrap_or(UNSAVED_ID),
            name,
            open_date,
            classes: Vec::new(),
        }
    }

    /// Rehydrate the owned classrooms (used by stores and fixtures)
    #[must_use]
    pub fn with_classes(mut self, classes: Vec<ClassRoom>) -> Self {
        self.classes = classes;
        self
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn open_date(&self) -> Option<NaiveDate> {
        self.open_date
    }

    pub fn classes(&self) -> &[ClassRoom] {
        &self.classes
    }

    pub fn classes_count(&self) -> usize {
        self.classes.len()
    }

    /// Find an owned classroom by id
    pub fn class(&self, class_room_id: i32) -> Option<&ClassRoom> {
        self.classes.iter().find(|c| c.id() == class_room_id)
    }

    pub fn has_class(&self, class_room_id: i32) -> bool {
        self.class(class_room_id).is_some()
    }

    // ------------------------------------------------------------------
    // Setters
    // ------------------------------------------------------------------

    pub fn set_name(&mut self, name: Option<String>) {
        if self.name == name {
            return;
        }
        self.name = name;
    }

    pub fn set_open_date(&mut self, open_date: Option<NaiveDate>) {
        if self.open_date == open_date {
            return;
        }
        self.open_date = open_date;
    }

    /// Rename an owned classroom
    pub fn set_class_name(&mut self, class_room_id: i32, name: Option<String>) -> Result<()> {
        let class_room = self
            .classes
            .iter_mut()
            .find(|c| c.id() == class_room_id)
            .ok_or_else(Error::data_not_found)?;
        class_room.set_name(name);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Persistence orchestration
    // ------------------------------------------------------------------

    /// Validate, check name uniqueness and persist a new school
    pub async fn create(
        &mut self,
        validation_engine: &dyn ValidationEngineInterface,
        repository: &dyn SchoolsRepository,
    ) -> Result<i32> {
        validation_engine.ensure_valid(ValidationTarget::School(self))?;
        self.ensure_no_duplicate(repository).await?;

        let id = repository.create_school(self).await?;
        self.id = id;
        debug!(school_id = id, "School created");
        Ok(id)
    }

    /// Validate, check name uniqueness and persist changes
    ///
    /// Returns `false` when the store reports nothing changed.
    pub async fn update(
        &mut self,
        validation_engine: &dyn ValidationEngineInterface,
        repository: &dyn SchoolsRepository,
    ) -> Result<bool> {
        validation_engine.ensure_valid(ValidationTarget::School(self))?;
        self.ensure_no_duplicate(repository).await?;

        let changed = repository.update_school(self).await?;
        debug!(school_id = self.id, changed, "School updated");
        Ok(changed)
    }

    /// Append a classroom and persist the school; returns the new classroom id
    pub async fn add_class(
        &mut self,
        class_room: ClassRoom,
        repository: &dyn SchoolsRepository,
        validation_engine: &dyn ValidationEngineInterface,
    ) -> Result<i32> {
        validation_engine.ensure_valid(ValidationTarget::ClassRoom(&class_room))?;
        self.ensure_no_classroom_duplicate(&class_room)?;

        let index = self.classes.len();
        self.classes.push(class_room);
        if let Err(err) = repository.update_school(self).await {
            self.classes.truncate(index);
            return Err(err);
        }

        let class_room_id = self.classes[index].id();
        debug!(school_id = self.id, class_room_id, "Classroom added");
        Ok(class_room_id)
    }

    /// Persist a classroom rename
    ///
    /// `class_room` must already belong to this school.
    pub async fn update_class(
        &self,
        class_room: &ClassRoom,
        repository: &dyn SchoolsRepository,
        validation_engine: &dyn ValidationEngineInterface,
    ) -> Result<bool> {
        validation_engine.ensure_valid(ValidationTarget::ClassRoom(class_room))?;
        if !self.has_class(class_room.id()) {
            return Err(Error::data_not_found());
        }
        self.ensure_no_classroom_duplicate(class_room)?;

        repository.update_class(class_room).await
    }

    /// Remove an owned classroom and persist the school
    pub(crate) async fn delete_class(
        &mut self,
        class_room_id: i32,
        repository: &dyn SchoolsRepository,
    ) -> Result<bool> {
        let position = self
            .classes
            .iter()
            .position(|c| c.id() == class_room_id)
            .ok_or_else(Error::data_not_found)?;
        self.classes.remove(position);

        repository.update_school(self).await
    }

    /// Delete without guards; dependents are checked by the domain service
    pub(crate) async fn delete(&self, repository: &dyn SchoolsRepository) -> Result<bool> {
        repository.delete_school(self).await
    }

    // ------------------------------------------------------------------
    // Lookups
    // ------------------------------------------------------------------

    /// Load a school with its classrooms
    pub async fn get(id: i32, repository: &dyn SchoolsRepository) -> Result<School> {
        repository
            .get_school(id)
            .await?
            .ok_or_else(Error::data_not_found)
    }

    /// Search schools by name
    pub async fn search_schools(
        name: Option<&str>,
        page_number: u32,
        page_size: u32,
        repository: &dyn SchoolsRepository,
    ) -> Result<Page<School>> {
        repository
            .search_schools_by_name(name, page_number, page_size)
            .await
    }

    // ------------------------------------------------------------------
    // Invariants
    // ------------------------------------------------------------------

    /// Existence probe on the school name, excluding this school by id
    ///
    /// Only the first page of size one is inspected, so an already duplicated
    /// name may hide behind this school's own row.
    async fn ensure_no_duplicate(&self, repository: &dyn SchoolsRepository) -> Result<()> {
        let probe = repository
            .search_schools_by_name(self.name(), PROBE_PAGE_NUMBER, PROBE_PAGE_SIZE)
            .await?;

        let duplicated = if self.id == UNSAVED_ID {
            !probe.data.is_empty()
        } else {
            probe.data.iter().any(|s| s.id != self.id)
        };

        if duplicated {
            warn!(school_id = self.id, name = ?self.name, "Duplicate school name");
            return Err(Error::data_duplicated());
        }
        Ok(())
    }

    /// No other classroom of this school may carry the same name
    fn ensure_no_classroom_duplicate(&self, class_room: &ClassRoom) -> Result<()> {
        let duplicated = self.classes.iter().any(|existing| {
            existing.name() == class_room.name()
                && (class_room.id() == UNSAVED_ID || existing.id() != class_room.id())
        });

        if duplicated {
            warn!(
                school_id = self.id,
                name = ?class_room.name(),
                "Duplicate classroom name"
            );
            return Err(Error::data_duplicated());
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Persistence hooks
    // ------------------------------------------------------------------

    /// Record the identity assigned by the store
    pub fn assign_id(&mut self, id: i32) {
        self.id = id;
    }

    /// Give every unsaved classroom an identity drawn from `next_id`
    pub fn assign_class_ids<F>(&mut self, mut next_id: F) -> Result<()>
    where
        F: FnMut() -> Result<i32>,
    {
        for class_room in self.classes.iter_mut().filter(|c| c.id() == UNSAVED_ID) {
            class_room.assign_id(next_id()?);
        }
        Ok(())
    }
}
