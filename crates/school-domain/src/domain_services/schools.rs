//! School and classroom deletion guards

use crate::constants::{
    MSG_CLASS_HAS_STUDENTS, MSG_CLASS_HAS_TEACHERS, MSG_SCHOOL_HAS_CLASSES,
    MSG_SCHOOL_HAS_STUDENTS, MSG_SCHOOL_HAS_TEACHERS, PROBE_PAGE_NUMBER, PROBE_PAGE_SIZE,
};
use crate::entities::{School, Student, Teacher};
use crate::error::{Error, Result};
use crate::repositories::{StudentsRepository, SchoolsRepository, TeachersRepository};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

/// Domain Port for school-level deletions
#[async_trait]
pub trait SchoolsDomainServiceInterface: Send + Sync {
    /// Delete a school that has no classes, teachers or students
    ///
    /// Checks run in that order; the first one that fails is reported.
    async fn delete_school(&self, id: i32) -> Result<bool>;

    /// Delete a classroom that has no teachers or students
    async fn delete_class(&self, school_id: i32, class_id: i32) -> Result<bool>;
}

/// Deletion guards over schools, teachers and students
pub struct SchoolsDomainService {
    schools: Arc<dyn SchoolsRepository>,
    teachers: Arc<dyn TeachersRepository>,
    students: Arc<dyn StudentsRepository>,
}

impl SchoolsDomainService {
    /// Create the service with injected repositories
    pub fn new(
        schools: Arc<dyn SchoolsRepository>,
        teachers: Arc<dyn TeachersRepository>,
        students: Arc<dyn StudentsRepository>,
    ) -> Self {
        Self {
            schools,
            teachers,
            students,
        }
    }

    /// Existence probe: does any teacher match the scope?
    async fn any_teacher(&self, school_id: Option<i32>, class_id: Option<i32>) -> Result<bool> {
        let probe = Teacher::search(
            None,
            school_id,
            class_id,
            PROBE_PAGE_NUMBER,
            PROBE_PAGE_SIZE,
            self.teachers.as_ref(),
        )
        .await?;
        Ok(probe.has_any())
    }

    /// Existence probe: does any student match the scope?
    async fn any_student(&self, school_id: Option<i32>, class_id: Option<i32>) -> Result<bool> {
        let probe = Student::search(
            self.students.as_ref(),
            None,
            school_id,
            class_id,
            PROBE_PAGE_NUMBER,
            PROBE_PAGE_SIZE,
        )
        .await?;
        Ok(probe.has_any())
    }
}

#[async_trait]
impl SchoolsDomainServiceInterface for SchoolsDomainService {
    async fn delete_school(&self, id: i32) -> Result<bool> {
        let school = School::get(id, self.schools.as_ref()).await?;

        if !school.classes().is_empty() {
            warn!(school_id = id, "Delete rejected: school has classes");
            return Err(Error::business(MSG_SCHOOL_HAS_CLASSES));
        }
        if self.any_teacher(Some(id), None).await? {
            warn!(school_id = id, "Delete rejected: school has teachers");
            return Err(Error::business(MSG_SCHOOL_HAS_TEACHERS));
        }
        if self.any_student(Some(id), None).await? {
            warn!(school_id = id, "Delete rejected: school has students");
            return Err(Error::business(MSG_SCHOOL_HAS_STUDENTS));
        }

        let deleted = school.delete(self.schools.as_ref()).await?;
        info!(school_id = id, deleted, "School deleted");
        Ok(deleted)
    }

    async fn delete_class(&self, school_id: i32, class_id: i32) -> Result<bool> {
        let mut school = School::get(school_id, self.schools.as_ref()).await?;

        if self.any_teacher(None, Some(class_id)).await? {
            warn!(school_id, class_id, "Delete rejected: class has teachers");
            return Err(Error::business(MSG_CLASS_HAS_TEACHERS));
        }
        if self.any_student(None, Some(class_id)).await? {
            warn!(school_id, class_id, "Delete rejected: class has students");
            return Err(Error::business(MSG_CLASS_HAS_STUDENTS));
        }

        let deleted = school.delete_class(class_id, self.schools.as_ref()).await?;
        info!(school_id, class_id, deleted, "Classroom deleted");
        Ok(deleted)
    }
}
