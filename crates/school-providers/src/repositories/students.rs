//! In-memory students repository

use crate::utils::{IdSequence, name_matches, paginate};
use async_trait::async_trait;
use dashmap::DashMap;
use school_domain::error::Result;
use school_domain::repositories::StudentsRepository;
use school_domain::{Page, Student};
use std::sync::Arc;

/// In-memory students repository
pub struct InMemoryStudentsRepository {
    students: Arc<DashMap<i32, Student>>,
    ids: IdSequence,
}

impl InMemoryStudentsRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            students: Arc::new(DashMap::new()),
            ids: IdSequence::new(),
        }
    }
}

impl Default for InMemoryStudentsRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StudentsRepository for InMemoryStudentsRepository {
    async fn create(&self, student: &mut Student) -> Result<i32> {
        let id = self.ids.next_id()?;
        student.assign_id(id);

        self.students.insert(id, student.clone());
        Ok(id)
    }

    async fn update(&self, student: &mut Student) -> Result<bool> {
        let Some(mut stored) = self.students.get_mut(&student.id()) else {
            return Ok(false);
        };

        if *stored == *student {
            return Ok(false);
        }
        *stored = student.clone();
        Ok(true)
    }

    async fn delete(&self, student: &Student) -> Result<bool> {
        Ok(self.students.remove(&student.id()).is_some())
    }

    async fn get(&self, id: i32) -> Result<Option<Student>> {
        Ok(self.students.get(&id).map(|row| row.clone()))
    }

    async fn search(
        &self,
        name: Option<&str>,
        school_id: Option<i32>,
        class_room_id: Option<i32>,
        page_number: u32,
        page_size: u32,
    ) -> Result<Page<Student>> {
        let mut rows: Vec<Student> = self
            .students
            .iter()
            .filter(|row| name_matches(row.name(), name))
            .filter(|row| school_id.is_none_or(|id| row.school_id() == Some(id)))
            .filter(|row| class_room_id.is_none_or(|id| row.class_room_id() == Some(id)))
            .map(|row| row.clone())
            .collect();
        rows.sort_by_key(Student::id);

        Ok(paginate(rows, page_number, page_size))
    }
}
