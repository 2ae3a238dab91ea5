//! Teacher classroom assignments

use crate::constants::{MSG_TEACHER_CLASS_NOT_FOUND, MSG_TEACHER_NOT_ASSIGNED};
use crate::entities::{School, Teacher};
use crate::error::{Error, Result};
use crate::repositories::{SchoolsRepository, TeachersRepository};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

/// Domain Port for teacher classroom assignments
#[async_trait]
pub trait TeachersDomainServiceInterface: Send + Sync {
    /// Assign a teacher to a classroom of a school
    ///
    /// Teacher and school must exist and the classroom must belong to the
    /// school. Assigning the same classroom twice is a duplicate.
    async fn assign_teacher_to_class(
        &self,
        teacher_id: i32,
        classroom_id: i32,
        school_id: i32,
    ) -> Result<bool>;

    /// Remove a teacher's existing assignment to a classroom
    async fn unassign_teacher_from_class(&self, teacher_id: i32, classroom_id: i32)
    -> Result<bool>;
}

/// Assignment orchestration over teachers and schools
pub struct TeachersDomainService {
    teachers: Arc<dyn TeachersRepository>,
    schools: Arc<dyn SchoolsRepository>,
}

impl TeachersDomainService {
    /// Create the service with injected repositories
    pub fn new(teachers: Arc<dyn TeachersRepository>, schools: Arc<dyn SchoolsRepository>) -> Self {
        Self { teachers, schools }
    }
}

#[async_trait]
impl TeachersDomainServiceInterface for TeachersDomainService {
    async fn assign_teacher_to_class(
        &self,
        teacher_id: i32,
        classroom_id: i32,
        school_id: i32,
    ) -> Result<bool> {
        let mut teacher = Teacher::get(teacher_id, self.teachers.as_ref()).await?;
        let school = School::get(school_id, self.schools.as_ref()).await?;

        if !school.has_class(classroom_id) {
            warn!(teacher_id, school_id, classroom_id, "Classroom not in school");
            return Err(Error::not_found(MSG_TEACHER_CLASS_NOT_FOUND));
        }

        let changed = teacher
            .assign_teacher_to_class(school_id, classroom_id, self.teachers.as_ref())
            .await?;
        debug!(teacher_id, school_id, classroom_id, changed, "Teacher assigned");
        Ok(changed)
    }

    async fn unassign_teacher_from_class(
        &self,
        teacher_id: i32,
        classroom_id: i32,
    ) -> Result<bool> {
        let mut teacher = Teacher::get(teacher_id, self.teachers.as_ref()).await?;

        if !teacher.is_assigned_to(classroom_id) {
            warn!(teacher_id, classroom_id, "Teacher not assigned to classroom");
            return Err(Error::not_found(MSG_TEACHER_NOT_ASSIGNED));
        }

        let changed = teacher
            .unassign_teacher_from_class(classroom_id, self.teachers.as_ref())
            .await?;
        debug!(teacher_id, classroom_id, changed, "Teacher unassigned");
        Ok(changed)
    }
}
