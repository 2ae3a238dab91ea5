//! Schools Service Use Case
//!
//! School and classroom commands. Deletions go through the schools domain
//! service so dependents are checked first.

use crate::dto::{
    ClassRoomAddDto, ClassRoomDeleteDto, ClassRoomUpdateDto, SchoolCreateDto, SchoolDto,
    SchoolUpdateDto,
};
use crate::ports::services::SchoolsServiceInterface;
use async_trait::async_trait;
use school_domain::School;
use school_domain::domain_services::SchoolsDomainServiceInterface;
use school_domain::error::{Error, Result};
use school_domain::repositories::SchoolsRepository;
use school_domain::validation::ValidationEngineInterface;
use std::sync::Arc;
use tracing::{info, instrument};

/// School command service implementation
pub struct SchoolsServiceImpl {
    schools: Arc<dyn SchoolsRepository>,
    validation_engine: Arc<dyn ValidationEngineInterface>,
    domain_service: Arc<dyn SchoolsDomainServiceInterface>,
}

impl SchoolsServiceImpl {
    /// Create new schools service with injected dependencies
    pub fn new(
        schools: Arc<dyn SchoolsRepository>,
        validation_engine: Arc<dyn ValidationEngineInterface>,
        domain_service: Arc<dyn SchoolsDomainServiceInterface>,
    ) -> Self {
        Self {
            schools,
            validation_engine,
            domain_service,
        }
    }
}

#[async_trait]
impl SchoolsServiceInterface for SchoolsServiceImpl {
    #[instrument(skip(self, input))]
    async fn create(&self, input: SchoolCreateDto) -> Result<SchoolDto> {
        let mut school = input.to_school();
        let id = school
            .create(self.validation_engine.as_ref(), self.schools.as_ref())
            .await?;

        info!(school_id = id, "School created");
        Ok(SchoolDto::from_school(&school))
    }

    #[instrument(skip(self, input), fields(school_id = input.id))]
    async fn update(&self, input: SchoolUpdateDto) -> Result<SchoolDto> {
        let mut school = School::get(input.id, self.schools.as_ref()).await?;
        school.set_name(input.name);
        school.set_open_date(input.open_date);
        school
            .update(self.validation_engine.as_ref(), self.schools.as_ref())
            .await?;

        Ok(SchoolDto::from_school(&school))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i32) -> Result<bool> {
        self.domain_service.delete_school(id).await
    }

    #[instrument(skip(self, input), fields(school_id = input.school_id))]
    async fn add_class(&self, input: ClassRoomAddDto) -> Result<SchoolDto> {
        let mut school = School::get(input.school_id, self.schools.as_ref()).await?;
        let class_room_id = school
            .add_class(
                input.to_classroom(),
                self.schools.as_ref(),
                self.validation_engine.as_ref(),
            )
            .await?;

        info!(class_room_id, "Classroom added");
        Ok(SchoolDto::from_school(&school))
    }

    #[instrument(skip(self, input), fields(school_id = input.school_id, class_room_id = input.class_room_id))]
    async fn update_classroom(&self, input: ClassRoomUpdateDto) -> Result<SchoolDto> {
        let mut school = School::get(input.school_id, self.schools.as_ref()).await?;
        school.set_class_name(input.class_room_id, input.name)?;

        let class_room = school
            .class(input.class_room_id)
            .cloned()
            .ok_or_else(Error::data_not_found)?;
        school
            .update_class(
                &class_room,
                self.schools.as_ref(),
                self.validation_engine.as_ref(),
            )
            .await?;

        Ok(SchoolDto::from_school(&school))
    }

    #[instrument(skip(self))]
    async fn delete_class(&self, input: ClassRoomDeleteDto) -> Result<bool> {
        self.domain_service
            .delete_class(input.school_id, input.class_room_id)
            .await
    }
}
