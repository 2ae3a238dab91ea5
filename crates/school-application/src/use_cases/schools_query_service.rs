//! Schools Query Service Use Case

use crate::PagingPolicy;
use crate::dto::{SchoolDto, SchoolSearchDto};
use crate::ports::services::SchoolsQueryServiceInterface;
use async_trait::async_trait;
use school_domain::School;
use school_domain::error::Result;
use school_domain::repositories::SchoolsRepository;
use school_domain::value_objects::Page;
use std::sync::Arc;
use tracing::instrument;

/// School query service implementation
pub struct SchoolsQueryServiceImpl {
    schools: Arc<dyn SchoolsRepository>,
    paging: PagingPolicy,
}

impl SchoolsQueryServiceImpl {
    pub fn new(schools: Arc<dyn SchoolsRepository>, paging: PagingPolicy) -> Self {
        Self { schools, paging }
    }
}

#[async_trait]
impl SchoolsQueryServiceInterface for SchoolsQueryServiceImpl {
    #[instrument(skip(self))]
    async fn get_school(&self, id: i32) -> Result<SchoolDto> {
        let school = School::get(id, self.schools.as_ref()).await?;
        Ok(SchoolDto::from_school(&school))
    }

    #[instrument(skip(self))]
    async fn search_schools(&self, input: SchoolSearchDto) -> Result<Page<SchoolDto>> {
        let (page_number, page_size) = self.paging.normalize(input.page_number, input.page_size);
        let page = School::search_schools(
            input.name.as_deref(),
            page_number,
            page_size,
            self.schools.as_ref(),
        )
        .await?;

        Ok(page.map(|school| SchoolDto::from_school(&school)))
    }
}
