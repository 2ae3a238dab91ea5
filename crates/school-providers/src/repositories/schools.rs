//! In-memory schools repository

use crate::utils::{IdSequence, name_matches, paginate};
use async_trait::async_trait;
use dashmap::DashMap;
use school_domain::error::Result;
use school_domain::repositories::SchoolsRepository;
use school_domain::{ClassRoom, Page, School};
use std::sync::Arc;

/// In-memory schools repository
///
/// Classrooms are stored inside their school row and draw their ids from a
/// separate sequence.
pub struct InMemorySchoolsRepository {
    schools: Arc<DashMap<i32, School>>,
    school_ids: IdSequence,
    class_ids: IdSequence,
}

impl InMemorySchoolsRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            schools: Arc::new(DashMap::new()),
            school_ids: IdSequence::new(),
            class_ids: IdSequence::new(),
        }
    }

    /// Number of stored schools
    pub fn len(&self) -> usize {
        self.schools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schools.is_empty()
    }
}

impl Default for InMemorySchoolsRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SchoolsRepository for InMemorySchoolsRepository {
    async fn get_school(&self, id: i32) -> Result<Option<School>> {
        Ok(self.schools.get(&id).map(|row| row.clone()))
    }

    async fn search_schools_by_name(
        &self,
        name: Option<&str>,
        page_number: u32,
        page_size: u32,
    ) -> Result<Page<School>> {
        let mut rows: Vec<School> = self
            .schools
            .iter()
            .filter(|row| name_matches(row.name(), name))
            .map(|row| row.clone())
            .collect();
        rows.sort_by_key(School::id);

        Ok(paginate(rows, page_number, page_size))
    }

    async fn create_school(&self, school: &mut School) -> Result<i32> {
        let id = self.school_ids.next_id()?;
        school.assign_id(id);
        school.assign_class_ids(|| self.class_ids.next_id())?;

        self.schools.insert(id, school.clone());
        Ok(id)
    }

    async fn update_school(&self, school: &mut School) -> Result<bool> {
        let Some(mut stored) = self.schools.get_mut(&school.id()) else {
            return Ok(false);
        };

        school.assign_class_ids(|| self.class_ids.next_id())?;
        if *stored == *school {
            return Ok(false);
        }
        *stored = school.clone();
        Ok(true)
    }

    async fn delete_school(&self, school: &School) -> Result<bool> {
        Ok(self.schools.remove(&school.id()).is_some())
    }

    async fn update_class(&self, class_room: &ClassRoom) -> Result<bool> {
        let Some(mut stored) = self.schools.get_mut(&class_room.school_id()) else {
            return Ok(false);
        };

        let changed = matches!(stored.class(class_room.id()), Some(existing) if existing != class_room);
        if !changed {
            return Ok(false);
        }
        stored.set_class_name(class_room.id(), class_room.name().map(str::to_owned))?;
        Ok(true)
    }
}
