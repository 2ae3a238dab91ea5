//! In-memory teachers repository

use crate::utils::{IdSequence, name_matches, paginate};
use async_trait::async_trait;
use dashmap::DashMap;
use school_domain::error::Result;
use school_domain::repositories::TeachersRepository;
use school_domain::{Page, Teacher};
use std::sync::Arc;

/// In-memory teachers repository
///
/// Assignments are stored inside their teacher row and draw their ids from a
/// separate sequence.
pub struct InMemoryTeachersRepository {
    teachers: Arc<DashMap<i32, Teacher>>,
    teacher_ids: IdSequence,
    assignment_ids: IdSequence,
}

impl InMemoryTeachersRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            teachers: Arc::new(DashMap::new()),
            teacher_ids: IdSequence::new(),
            assignment_ids: IdSequence::new(),
        }
    }
}

impl Default for InMemoryTeachersRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// Each filter is checked against the teacher's assignments on its own; the
/// school and classroom may come from different assignments
fn assignment_matches(teacher: &Teacher, school_id: Option<i32>, classroom_id: Option<i32>) -> bool {
    let assignments = teacher.classrooms();
    school_id.is_none_or(|id| assignments.iter().any(|a| a.school_id() == id))
        && classroom_id.is_none_or(|id| assignments.iter().any(|a| a.classroom_id() == id))
}

#[async_trait]
impl TeachersRepository for InMemoryTeachersRepository {
    async fn create(&self, teacher: &mut Teacher) -> Result<i32> {
        let id = self.teacher_ids.next_id()?;
        teacher.assign_id(id);
        teacher.assign_classroom_ids(|| self.assignment_ids.next_id())?;

        self.teachers.insert(id, teacher.clone());
        Ok(id)
    }

    async fn update(&self, teacher: &mut Teacher) -> Result<bool> {
        let Some(mut stored) = self.teachers.get_mut(&teacher.id()) else {
            return Ok(false);
        };

        teacher.assign_classroom_ids(|| self.assignment_ids.next_id())?;
        if *stored == *teacher {
            return Ok(false);
        }
        *stored = teacher.clone();
        Ok(true)
    }

    async fn delete(&self, teacher: &Teacher) -> Result<bool> {
        Ok(self.teachers.remove(&teacher.id()).is_some())
    }

    async fn get(&self, id: i32) -> Result<Option<Teacher>> {
        Ok(self.teachers.get(&id).map(|row| row.clone()))
    }

    async fn get_row(&self, id: i32) -> Result<Option<Teacher>> {
        Ok(self
            .teachers
            .get(&id)
            .map(|row| Teacher::new(Some(row.id()), row.name().map(str::to_owned))))
    }

    async fn search(
        &self,
        name: Option<&str>,
        school_id: Option<i32>,
        classroom_id: Option<i32>,
        page_number: u32,
        page_size: u32,
    ) -> Result<Page<Teacher>> {
        let mut rows: Vec<Teacher> = self
            .teachers
            .iter()
            .filter(|row| name_matches(row.name(), name))
            .filter(|row| assignment_matches(row, school_id, classroom_id))
            .map(|row| row.clone())
            .collect();
        rows.sort_by_key(Teacher::id);

        Ok(paginate(rows, page_number, page_size))
    }
}
