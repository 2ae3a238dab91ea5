//! Teachers Query Service Use Case

use crate::PagingPolicy;
use crate::dto::{TeacherDto, TeacherSearchDto};
use crate::ports::services::TeachersQueryServiceInterface;
use async_trait::async_trait;
use school_domain::Teacher;
use school_domain::error::Result;
use school_domain::repositories::TeachersRepository;
use school_domain::value_objects::Page;
use std::sync::Arc;
use tracing::instrument;

/// Teacher query service implementation
pub struct TeachersQueryServiceImpl {
    teachers: Arc<dyn TeachersRepository>,
    paging: PagingPolicy,
}

impl TeachersQueryServiceImpl {
    pub fn new(teachers: Arc<dyn TeachersRepository>, paging: PagingPolicy) -> Self {
        Self { teachers, paging }
    }
}

#[async_trait]
impl TeachersQueryServiceInterface for TeachersQueryServiceImpl {
    #[instrument(skip(self))]
    async fn get(&self, id: i32) -> Result<TeacherDto> {
        let teacher = Teacher::get(id, self.teachers.as_ref()).await?;
        Ok(TeacherDto::from_teacher(&teacher))
    }

    #[instrument(skip(self))]
    async fn search(&self, input: TeacherSearchDto) -> Result<Page<TeacherDto>> {
        let (page_number, page_size) = self.paging.normalize(input.page_number, input.page_size);
        let page = Teacher::search(
            input.name.as_deref(),
            input.school_id,
            input.classroom_id,
            page_number,
            page_size,
            self.teachers.as_ref(),
        )
        .await?;

        Ok(page.map(|teacher| TeacherDto::from_teacher(&teacher)))
    }
}
