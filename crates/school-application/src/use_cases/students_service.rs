//! Students Service Use Case

use crate::dto::{StudentCreateDto, StudentDto, StudentSetClassroomDto, StudentUpdateDto};
use crate::ports::services::StudentsServiceInterface;
use async_trait::async_trait;
use school_domain::Student;
use school_domain::domain_services::StudentsDomainServiceInterface;
use school_domain::error::Result;
use school_domain::repositories::StudentsRepository;
use school_domain::validation::ValidationEngineInterface;
use std::sync::Arc;
use tracing::{info, instrument};

/// Student command service implementation
pub struct StudentsServiceImpl {
    students: Arc<dyn StudentsRepository>,
    validation_engine: Arc<dyn ValidationEngineInterface>,
    domain_service: Arc<dyn StudentsDomainServiceInterface>,
}

impl StudentsServiceImpl {
    /// Create new students service with injected dependencies
    pub fn new(
        students: Arc<dyn StudentsRepository>,
        validation_engine: Arc<dyn ValidationEngineInterface>,
        domain_service: Arc<dyn StudentsDomainServiceInterface>,
    ) -> Self {
        Self {
            students,
            validation_engine,
            domain_service,
        }
    }
}

#[async_trait]
impl StudentsServiceInterface for StudentsServiceImpl {
    #[instrument(skip(self, input))]
    async fn create(&self, input: StudentCreateDto) -> Result<StudentDto> {
        let mut student = input.to_student();
        let id = student
            .create(self.students.as_ref(), self.validation_engine.as_ref())
            .await?;

        info!(student_id = id, "Student created");
        Ok(StudentDto::from_student(&student))
    }

    #[instrument(skip(self, input), fields(student_id = input.id))]
    async fn update(&self, input: StudentUpdateDto) -> Result<StudentDto> {
        let mut student = Student::get(input.id, self.students.as_ref()).await?;
        student.set_name(input.name);
        student
            .update(self.students.as_ref(), self.validation_engine.as_ref())
            .await?;

        Ok(StudentDto::from_student(&student))
    }

    #[instrument(skip(self))]
    async fn set_class(&self, input: StudentSetClassroomDto) -> Result<bool> {
        self.domain_service
            .set_class(input.student_id, input.school_id, input.class_room_id)
            .await
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i32) -> Result<bool> {
        let student = Student::get(id, self.students.as_ref()).await?;
        student.delete(self.students.as_ref()).await
    }
}
