//! Composition root
//!
//! Wires the repositories selected by [`StorageConfig`](crate::config::StorageConfig)
//! into the domain services and the application services built on them.
//!
//! ```text
//! AppConfig → repositories (memory) → domain services → application services
//!                     ↑                      ↑
//!              ValidationEngine ─────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let context = init_app(AppConfig::default())?;
//! let school = context.schools().create(input).await?;
//! ```

use crate::config::AppConfig;
use crate::constants::STORAGE_PROVIDER_MEMORY;
use school_application::{
    PagingPolicy, SchoolsQueryServiceImpl, SchoolsServiceImpl, SharedSchoolsQueryService,
    SharedSchoolsService, SharedStudentsQueryService, SharedStudentsService,
    SharedTeachersQueryService, SharedTeachersService, StudentsQueryServiceImpl,
    StudentsServiceImpl, TeachersQueryServiceImpl, TeachersServiceImpl,
};
use school_domain::domain_services::{
    SchoolsDomainService, SchoolsDomainServiceInterface, StudentsDomainService,
    StudentsDomainServiceInterface, TeachersDomainService, TeachersDomainServiceInterface,
};
use school_domain::error::{Error, Result};
use school_domain::repositories::{
    SharedSchoolsRepository, SharedStudentsRepository, SharedTeachersRepository,
};
use school_domain::validation::{ValidationEngine, ValidationEngineInterface};
use school_providers::{
    InMemorySchoolsRepository, InMemoryStudentsRepository, InMemoryTeachersRepository,
};
use std::sync::Arc;
use tracing::info;

/// Repositories backing the three aggregates
struct Repositories {
    schools: SharedSchoolsRepository,
    students: SharedStudentsRepository,
    teachers: SharedTeachersRepository,
}

/// Application context holding every wired service
///
/// Cloning is cheap; all members are shared handles.
#[derive(Clone)]
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,

    validation_engine: Arc<dyn ValidationEngineInterface>,

    schools_repository: SharedSchoolsRepository,
    students_repository: SharedStudentsRepository,
    teachers_repository: SharedTeachersRepository,

    schools_domain: Arc<dyn SchoolsDomainServiceInterface>,
    students_domain: Arc<dyn StudentsDomainServiceInterface>,
    teachers_domain: Arc<dyn TeachersDomainServiceInterface>,

    schools: SharedSchoolsService,
    schools_query: SharedSchoolsQueryService,
    students: SharedStudentsService,
    students_query: SharedStudentsQueryService,
    teachers: SharedTeachersService,
    teachers_query: SharedTeachersQueryService,
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl AppContext {
    // ========================================================================
    // Application services
    // ========================================================================

    pub fn schools(&self) -> SharedSchoolsService {
        Arc::clone(&self.schools)
    }

    pub fn schools_query(&self) -> SharedSchoolsQueryService {
        Arc::clone(&self.schools_query)
    }

    pub fn students(&self) -> SharedStudentsService {
        Arc::clone(&self.students)
    }

    pub fn students_query(&self) -> SharedStudentsQueryService {
        Arc::clone(&self.students_query)
    }

    pub fn teachers(&self) -> SharedTeachersService {
        Arc::clone(&self.teachers)
    }

    pub fn teachers_query(&self) -> SharedTeachersQueryService {
        Arc::clone(&self.teachers_query)
    }

    // ========================================================================
    // Domain collaborators
    // ========================================================================

    pub fn validation_engine(&self) -> Arc<dyn ValidationEngineInterface> {
        Arc::clone(&self.validation_engine)
    }

    pub fn schools_repository(&self) -> SharedSchoolsRepository {
        Arc::clone(&self.schools_repository)
    }

    pub fn students_repository(&self) -> SharedStudentsRepository {
        Arc::clone(&self.students_repository)
    }

    pub fn teachers_repository(&self) -> SharedTeachersRepository {
        Arc::clone(&self.teachers_repository)
    }

    pub fn schools_domain(&self) -> Arc<dyn SchoolsDomainServiceInterface> {
        Arc::clone(&self.schools_domain)
    }

    pub fn students_domain(&self) -> Arc<dyn StudentsDomainServiceInterface> {
        Arc::clone(&self.students_domain)
    }

    pub fn teachers_domain(&self) -> Arc<dyn TeachersDomainServiceInterface> {
        Arc::clone(&self.teachers_domain)
    }
}

/// Initialize the application context from configuration
///
/// Fails with a configuration error when the storage provider is unknown.
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    let repositories = resolve_repositories(&config.storage.provider)?;
    let paging = PagingPolicy::from(config.pagination);
    let validation_engine: Arc<dyn ValidationEngineInterface> = Arc::new(ValidationEngine::new());

    let schools_domain: Arc<dyn SchoolsDomainServiceInterface> =
        Arc::new(SchoolsDomainService::new(
            Arc::clone(&repositories.schools),
            Arc::clone(&repositories.teachers),
            Arc::clone(&repositories.students),
        ));
    let students_domain: Arc<dyn StudentsDomainServiceInterface> =
        Arc::new(StudentsDomainService::new(
            Arc::clone(&repositories.students),
            Arc::clone(&repositories.schools),
            Arc::clone(&validation_engine),
        ));
    let teachers_domain: Arc<dyn TeachersDomainServiceInterface> =
        Arc::new(TeachersDomainService::new(
            Arc::clone(&repositories.teachers),
            Arc::clone(&repositories.schools),
        ));

    let schools: SharedSchoolsService = Arc::new(SchoolsServiceImpl::new(
        Arc::clone(&repositories.schools),
        Arc::clone(&validation_engine),
        Arc::clone(&schools_domain),
    ));
    let schools_query: SharedSchoolsQueryService = Arc::new(SchoolsQueryServiceImpl::new(
        Arc::clone(&repositories.schools),
        paging,
    ));
    let students: SharedStudentsService = Arc::new(StudentsServiceImpl::new(
        Arc::clone(&repositories.students),
        Arc::clone(&validation_engine),
        Arc::clone(&students_domain),
    ));
    let students_query: SharedStudentsQueryService = Arc::new(StudentsQueryServiceImpl::new(
        Arc::clone(&repositories.students),
        paging,
    ));
    let teachers: SharedTeachersService = Arc::new(TeachersServiceImpl::new(
        Arc::clone(&repositories.teachers),
        Arc::clone(&validation_engine),
        Arc::clone(&teachers_domain),
    ));
    let teachers_query: SharedTeachersQueryService = Arc::new(TeachersQueryServiceImpl::new(
        Arc::clone(&repositories.teachers),
        paging,
    ));

    info!(
        storage = %config.storage.provider,
        default_page_size = paging.default_page_size(),
        max_page_size = paging.max_page_size(),
        "Application context initialized"
    );

    Ok(AppContext {
        config: Arc::new(config),
        validation_engine,
        schools_repository: repositories.schools,
        students_repository: repositories.students,
        teachers_repository: repositories.teachers,
        schools_domain,
        students_domain,
        teachers_domain,
        schools,
        schools_query,
        students,
        students_query,
        teachers,
        teachers_query,
    })
}

fn resolve_repositories(provider: &str) -> Result<Repositories> {
    match provider {
        STORAGE_PROVIDER_MEMORY => Ok(Repositories {
            schools: Arc::new(InMemorySchoolsRepository::new()),
            students: Arc::new(InMemoryStudentsRepository::new()),
            teachers: Arc::new(InMemoryTeachersRepository::new()),
        }),
        other => Err(Error::configuration(format!(
            "Unknown storage provider: {other}. Available: {STORAGE_PROVIDER_MEMORY}"
        ))),
    }
}
