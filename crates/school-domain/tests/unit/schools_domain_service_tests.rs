//! Tests for school and classroom deletion guards

use crate::support::{Fixture, ForcedCountStudents};
use school_domain::constants::{
    MSG_CLASS_HAS_STUDENTS, MSG_CLASS_HAS_TEACHERS, MSG_SCHOOL_HAS_CLASSES,
    MSG_SCHOOL_HAS_STUDENTS, MSG_SCHOOL_HAS_TEACHERS,
};
use school_domain::domain_services::{
    SchoolsDomainService, SchoolsDomainServiceInterface, TeachersDomainServiceInterface,
};
use school_domain::repositories::TeachersRepository;
use school_domain::{Error, School, TeacherClassroom};
use std::sync::Arc;

fn assert_business(err: &Error, message: &str) {
    assert!(matches!(err, Error::Business { .. }), "unexpected {err:?}");
    assert_eq!(err.message(), message);
    assert_eq!(err.status_code(), 405);
}

#[tokio::test]
async fn test_delete_empty_school_succeeds() {
    let fx = Fixture::new();
    let school = fx.school_with_classes("Lincoln High", &[]).await;

    assert!(fx.schools_service().delete_school(school.id()).await.unwrap());
    assert!(School::get(school.id(), fx.schools.as_ref()).await.is_err());
}

#[tokio::test]
async fn test_delete_missing_school_fails_not_found() {
    let fx = Fixture::new();
    let err = fx.schools_service().delete_school(12).await.unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
}

#[tokio::test]
async fn test_delete_school_with_classes_fails() {
    let fx = Fixture::new();
    let school = fx.school_with_classes("Lincoln High", &["Room A"]).await;

    let err = fx.schools_service().delete_school(school.id()).await.unwrap_err();

    assert_business(&err, MSG_SCHOOL_HAS_CLASSES);
    let stored = School::get(school.id(), fx.schools.as_ref()).await.unwrap();
    assert_eq!(stored.classes_count(), 1);
}

#[tokio::test]
async fn test_delete_school_with_teachers_fails() {
    let fx = Fixture::new();
    let school = fx.school_with_classes("Lincoln High", &[]).await;
    // Stored directly: the assignment outlives the classroom it points at
    let smith = fx.teacher("Mr Smith").await;
    let teacher_id = smith.id();
    let mut smith =
        smith.with_classrooms(vec![TeacherClassroom::new(None, teacher_id, 9, school.id())]);
    fx.teachers.update(&mut smith).await.unwrap();

    let err = fx.schools_service().delete_school(school.id()).await.unwrap_err();

    assert_business(&err, MSG_SCHOOL_HAS_TEACHERS);
}

#[tokio::test]
async fn test_delete_school_with_students_fails() {
    let fx = Fixture::new();
    let school = fx.school_with_classes("Lincoln High", &[]).await;
    fx.student("Alice", Some(school.id()), Some(9)).await;

    let err = fx.schools_service().delete_school(school.id()).await.unwrap_err();

    assert_business(&err, MSG_SCHOOL_HAS_STUDENTS);
    assert!(School::get(school.id(), fx.schools.as_ref()).await.is_ok());
}

#[tokio::test]
async fn test_student_probe_reads_total_count_only() {
    let fx = Fixture::new();
    let school = fx.school_with_classes("Lincoln High", &[]).await;
    let service = SchoolsDomainService::new(
        fx.schools.clone(),
        fx.teachers.clone(),
        Arc::new(ForcedCountStudents::new(3)),
    );

    let err = service.delete_school(school.id()).await.unwrap_err();

    assert_business(&err, MSG_SCHOOL_HAS_STUDENTS);
}

#[tokio::test]
async fn test_delete_class_succeeds() {
    let fx = Fixture::new();
    let school = fx.school_with_classes("Lincoln High", &["Room A", "Room B"]).await;
    let class_id = school.classes()[0].id();

    assert!(fx
        .schools_service()
        .delete_class(school.id(), class_id)
        .await
        .unwrap());

    let stored = School::get(school.id(), fx.schools.as_ref()).await.unwrap();
    assert!(!stored.has_class(class_id));
    assert_eq!(stored.classes_count(), 1);
}

#[tokio::test]
async fn test_delete_class_with_teacher_fails() {
    let fx = Fixture::new();
    let school = fx.school_with_classes("Lincoln High", &["Room A"]).await;
    let class_id = school.classes()[0].id();
    let smith = fx.teacher("Mr Smith").await;
    fx.teachers_service()
        .assign_teacher_to_class(smith.id(), class_id, school.id())
        .await
        .unwrap();

    let err = fx
        .schools_service()
        .delete_class(school.id(), class_id)
        .await
        .unwrap_err();

    assert_business(&err, MSG_CLASS_HAS_TEACHERS);
}

#[tokio::test]
async fn test_delete_class_with_student_fails() {
    let fx = Fixture::new();
    let school = fx.school_with_classes("Lincoln High", &["Room A"]).await;
    let class_id = school.classes()[0].id();
    fx.student("Alice", Some(school.id()), Some(class_id)).await;

    let err = fx
        .schools_service()
        .delete_class(school.id(), class_id)
        .await
        .unwrap_err();

    assert_business(&err, MSG_CLASS_HAS_STUDENTS);
    let stored = School::get(school.id(), fx.schools.as_ref()).await.unwrap();
    assert!(stored.has_class(class_id));
}

#[tokio::test]
async fn test_delete_unknown_class_fails_not_found() {
    let fx = Fixture::new();
    let school = fx.school_with_classes("Lincoln High", &["Room A"]).await;

    let err = fx
        .schools_service()
        .delete_class(school.id(), 77)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::NotFound { .. }));
}

#[tokio::test]
async fn test_delete_class_of_missing_school_fails_not_found() {
    let fx = Fixture::new();
    let err = fx.schools_service().delete_class(5, 1).await.unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
}
