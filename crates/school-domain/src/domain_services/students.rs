//! Student classroom moves

use crate::constants::MSG_STUDENT_CLASS_NOT_FOUND;
use crate::entities::{School, Student};
use crate::error::{Error, Result};
use crate::repositories::{SchoolsRepository, StudentsRepository};
use crate::validation::ValidationEngineInterface;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

/// Domain Port for moving students between classrooms
#[async_trait]
pub trait StudentsDomainServiceInterface: Send + Sync {
    /// Enroll a student in `classroom_id` of `school_id`, or clear the enrollment
    ///
    /// When `school_id` is given the school must exist; when `classroom_id`
    /// is given as well it must be one of that school's classrooms. The
    /// student's rule set then decides whether the pair is acceptable.
    async fn set_class(
        &self,
        student_id: i32,
        school_id: Option<i32>,
        classroom_id: Option<i32>,
    ) -> Result<bool>;
}

/// Classroom moves over students and schools
pub struct StudentsDomainService {
    students: Arc<dyn StudentsRepository>,
    schools: Arc<dyn SchoolsRepository>,
    validation_engine: Arc<dyn ValidationEngineInterface>,
}

impl StudentsDomainService {
    /// Create the service with injected dependencies
    pub fn new(
        students: Arc<dyn StudentsRepository>,
        schools: Arc<dyn SchoolsRepository>,
        validation_engine: Arc<dyn ValidationEngineInterface>,
    ) -> Self {
        Self {
            students,
            schools,
            validation_engine,
        }
    }
}

#[async_trait]
impl StudentsDomainServiceInterface for StudentsDomainService {
    async fn set_class(
        &self,
        student_id: i32,
        school_id: Option<i32>,
        classroom_id: Option<i32>,
    ) -> Result<bool> {
        let mut student = Student::get(student_id, self.students.as_ref()).await?;

        if let Some(school_id) = school_id {
            let school = School::get(school_id, self.schools.as_ref()).await?;
            if let Some(classroom_id) = classroom_id {
                if !school.has_class(classroom_id) {
                    warn!(student_id, school_id, classroom_id, "Classroom not in school");
                    return Err(Error::not_found(MSG_STUDENT_CLASS_NOT_FOUND));
                }
            }
        }

        let changed = student
            .set_class(
                classroom_id,
                school_id,
                self.validation_engine.as_ref(),
                self.students.as_ref(),
            )
            .await?;
        debug!(student_id, ?school_id, ?classroom_id, changed, "Student class set");
        Ok(changed)
    }
}
