//! Teachers Service Use Case

use crate::dto::{
    TeacherAssignClassroomDto, TeacherCreateDto, TeacherDto, TeacherUnassignClassroomDto,
    TeacherUpdateDto,
};
use crate::ports::services::TeachersServiceInterface;
use async_trait::async_trait;
use school_domain::Teacher;
use school_domain::domain_services::TeachersDomainServiceInterface;
use school_domain::error::Result;
use school_domain::repositories::TeachersRepository;
use school_domain::validation::ValidationEngineInterface;
use std::sync::Arc;
use tracing::{info, instrument};

/// Teacher command service implementation
pub struct TeachersServiceImpl {
    teachers: Arc<dyn TeachersRepository>,
    validation_engine: Arc<dyn ValidationEngineInterface>,
    domain_service: Arc<dyn TeachersDomainServiceInterface>,
}

impl TeachersServiceImpl {
    /// Create new teachers service with injected dependencies
    pub fn new(
        teachers: Arc<dyn TeachersRepository>,
        validation_engine: Arc<dyn ValidationEngineInterface>,
        domain_service: Arc<dyn TeachersDomainServiceInterface>,
    ) -> Self {
        Self {
            teachers,
            validation_engine,
            domain_service,
        }
    }
}

#[async_trait]
impl TeachersServiceInterface for TeachersServiceImpl {
    #[instrument(skip(self, input))]
    async fn create(&self, input: TeacherCreateDto) -> Result<TeacherDto> {
        let mut teacher = input.to_teacher();
        let id = teacher
            .create(self.validation_engine.as_ref(), self.teachers.as_ref())
            .await?;

        info!(teacher_id = id, "Teacher created");
        Ok(TeacherDto::from_teacher(&teacher))
    }

    #[instrument(skip(self, input), fields(teacher_id = input.id))]
    async fn update(&self, input: TeacherUpdateDto) -> Result<TeacherDto> {
        let mut teacher = Teacher::get(input.id, self.teachers.as_ref()).await?;
        teacher.set_name(input.name);
        teacher
            .update(self.validation_engine.as_ref(), self.teachers.as_ref())
            .await?;

        Ok(TeacherDto::from_teacher(&teacher))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i32) -> Result<bool> {
        Teacher::delete(id, self.teachers.as_ref()).await
    }

    #[instrument(skip(self))]
    async fn assign_to_classroom(&self, input: TeacherAssignClassroomDto) -> Result<bool> {
        self.domain_service
            .assign_teacher_to_class(input.teacher_id, input.classroom_id, input.school_id)
            .await
    }

    #[instrument(skip(self))]
    async fn unassign_from_classroom(&self, input: TeacherUnassignClassroomDto) -> Result<bool> {
        self.domain_service
            .unassign_teacher_from_class(input.teacher_id, input.classroom_id)
            .await
    }
}
