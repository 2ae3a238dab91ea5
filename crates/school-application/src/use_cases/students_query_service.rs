//! Students Query Service Use Case

use crate::PagingPolicy;
use crate::dto::{StudentDto, StudentSearchDto};
use crate::ports::services::StudentsQueryServiceInterface;
use async_trait::async_trait;
use school_domain::Student;
use school_domain::error::Result;
use school_domain::repositories::StudentsRepository;
use school_domain::value_objects::Page;
use std::sync::Arc;
use tracing::instrument;

/// Student query service implementation
pub struct StudentsQueryServiceImpl {
    students: Arc<dyn StudentsRepository>,
    paging: PagingPolicy,
}

impl StudentsQueryServiceImpl {
    pub fn new(students: Arc<dyn StudentsRepository>, paging: PagingPolicy) -> Self {
        Self { students, paging }
    }
}

#[async_trait]
impl StudentsQueryServiceInterface for StudentsQueryServiceImpl {
    #[instrument(skip(self))]
    async fn get(&self, id: i32) -> Result<StudentDto> {
        let student = Student::get(id, self.students.as_ref()).await?;
        Ok(StudentDto::from_student(&student))
    }

    #[instrument(skip(self))]
    async fn search(&self, input: StudentSearchDto) -> Result<Page<StudentDto>> {
        let (page_number, page_size) = self.paging.normalize(input.page_number, input.page_size);
        let page = Student::search(
            self.students.as_ref(),
            input.name.as_deref(),
            input.school_id,
            input.class_room_id,
            page_number,
            page_size,
        )
        .await?;

        Ok(page.map(|student| StudentDto::from_student(&student)))
    }
}
