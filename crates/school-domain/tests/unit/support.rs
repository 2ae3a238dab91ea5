//! Shared fixtures for the domain test suite

#![allow(dead_code)]

use async_trait::async_trait;
use school_domain::domain_services::{
    SchoolsDomainService, StudentsDomainService, TeachersDomainService,
};
use school_domain::error::{Error, Result};
use school_domain::repositories::{SchoolsRepository, StudentsRepository};
use school_domain::validation::ValidationEngine;
use school_domain::{ClassRoom, Page, School, Student, Teacher};
use school_providers::{
    InMemorySchoolsRepository, InMemoryStudentsRepository, InMemoryTeachersRepository,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Real in-memory collaborators wired together
pub struct Fixture {
    pub engine: ValidationEngine,
    pub schools: Arc<InMemorySchoolsRepository>,
    pub students: Arc<InMemoryStudentsRepository>,
    pub teachers: Arc<InMemoryTeachersRepository>,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            engine: ValidationEngine::new(),
            schools: Arc::new(InMemorySchoolsRepository::new()),
            students: Arc::new(InMemoryStudentsRepository::new()),
            teachers: Arc::new(InMemoryTeachersRepository::new()),
        }
    }

    pub fn schools_service(&self) -> SchoolsDomainService {
        SchoolsDomainService::new(
            self.schools.clone(),
            self.teachers.clone(),
            self.students.clone(),
        )
    }

    pub fn students_service(&self) -> StudentsDomainService {
        StudentsDomainService::new(
            self.students.clone(),
            self.schools.clone(),
            Arc::new(ValidationEngine::new()),
        )
    }

    pub fn teachers_service(&self) -> TeachersDomainService {
        TeachersDomainService::new(self.teachers.clone(), self.schools.clone())
    }

    /// Persist a school, optionally with classrooms; returns it with ids assigned
    pub async fn school_with_classes(&self, name: &str, classes: &[&str]) -> School {
        let mut school = School::new(None, Some(name.to_string()), None);
        school.create(&self.engine, self.schools.as_ref()).await.unwrap();
        for class_name in classes {
            let class_room =
                ClassRoom::new(None, Some((*class_name).to_string()), Some(school.id()));
            school
                .add_class(class_room, self.schools.as_ref(), &self.engine)
                .await
                .unwrap();
        }
        school
    }

    pub async fn student(&self, name: &str, school_id: Option<i32>, class_id: Option<i32>) -> Student {
        let mut student = Student::new(None, Some(name.to_string()), class_id, school_id);
        student.create(self.students.as_ref(), &self.engine).await.unwrap();
        student
    }

    pub async fn teacher(&self, name: &str) -> Teacher {
        let mut teacher = Teacher::new(None, Some(name.to_string()));
        teacher.create(&self.engine, self.teachers.as_ref()).await.unwrap();
        teacher
    }
}

/// Students store that reports a fixed `total_count` on every search and
/// counts writes
pub struct ForcedCountStudents {
    pub total_count: u64,
    pub writes: AtomicUsize,
}

impl ForcedCountStudents {
    pub fn new(total_count: u64) -> Self {
        Self {
            total_count,
            writes: AtomicUsize::new(0),
        }
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StudentsRepository for ForcedCountStudents {
    async fn create(&self, student: &mut Student) -> Result<i32> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        student.assign_id(1);
        Ok(1)
    }

    async fn update(&self, _student: &mut Student) -> Result<bool> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(true)
    }

    async fn delete(&self, _student: &Student) -> Result<bool> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(true)
    }

    async fn get(&self, _id: i32) -> Result<Option<Student>> {
        Ok(None)
    }

    async fn search(
        &self,
        _name: Option<&str>,
        _school_id: Option<i32>,
        _class_room_id: Option<i32>,
        page_number: u32,
        page_size: u32,
    ) -> Result<Page<Student>> {
        Ok(Page::new(Vec::new(), self.total_count, page_number, page_size))
    }
}

/// Schools store whose writes always fail; reads find nothing
pub struct FailingSchoolWrites;

impl FailingSchoolWrites {
    fn refused() -> Error {
        Error::database("write refused")
    }
}

#[async_trait]
impl SchoolsRepository for FailingSchoolWrites {
    async fn get_school(&self, _id: i32) -> Result<Option<School>> {
        Ok(None)
    }

    async fn search_schools_by_name(
        &self,
        _name: Option<&str>,
        page_number: u32,
        page_size: u32,
    ) -> Result<Page<School>> {
        Ok(Page::new(Vec::new(), 0, page_number, page_size))
    }

    async fn create_school(&self, _school: &mut School) -> Result<i32> {
        Err(Self::refused())
    }

    async fn update_school(&self, _school: &mut School) -> Result<bool> {
        Err(Self::refused())
    }

    async fn delete_school(&self, _school: &School) -> Result<bool> {
        Err(Self::refused())
    }

    async fn update_class(&self, _class_room: &ClassRoom) -> Result<bool> {
        Err(Self::refused())
    }
}
