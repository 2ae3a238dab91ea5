//! Tests for the Teacher aggregate

use crate::support::Fixture;
use school_domain::constants::MSG_TEACHER_HAS_CLASSROOMS;
use school_domain::domain_services::TeachersDomainServiceInterface;
use school_domain::{Error, Teacher};

#[tokio::test]
async fn test_create_and_get() {
    let fx = Fixture::new();
    let mut smith = Teacher::new(None, Some("Mr Smith".to_string()));

    let id = smith.create(&fx.engine, fx.teachers.as_ref()).await.unwrap();

    let loaded = Teacher::get(id, fx.teachers.as_ref()).await.unwrap();
    assert_eq!(loaded.name(), Some("Mr Smith"));
    assert!(loaded.classrooms().is_empty());
}

#[tokio::test]
async fn test_teachers_may_share_names() {
    let fx = Fixture::new();
    fx.teacher("Mr Smith").await;

    let mut twin = Teacher::new(None, Some("Mr Smith".to_string()));
    assert!(twin.create(&fx.engine, fx.teachers.as_ref()).await.is_ok());
}

#[tokio::test]
async fn test_create_invalid_teacher_fails() {
    let fx = Fixture::new();
    let mut nameless = Teacher::new(None, None);

    let err = nameless.create(&fx.engine, fx.teachers.as_ref()).await.unwrap_err();

    assert!(matches!(err, Error::NotValid { .. }));
}

#[tokio::test]
async fn test_update_renames() {
    let fx = Fixture::new();
    let mut smith = fx.teacher("Mr Smith").await;

    smith.set_name(Some("Mr Smith".to_string()));
    assert!(!smith.update(&fx.engine, fx.teachers.as_ref()).await.unwrap());

    smith.set_name(Some("Dr Smith".to_string()));
    assert!(smith.update(&fx.engine, fx.teachers.as_ref()).await.unwrap());
}

#[tokio::test]
async fn test_delete_unassigned_teacher() {
    let fx = Fixture::new();
    let smith = fx.teacher("Mr Smith").await;

    assert!(Teacher::delete(smith.id(), fx.teachers.as_ref()).await.unwrap());
    assert!(Teacher::get(smith.id(), fx.teachers.as_ref()).await.is_err());
}

#[tokio::test]
async fn test_delete_assigned_teacher_fails_business() {
    let fx = Fixture::new();
    let school = fx.school_with_classes("Lincoln High", &["Room A"]).await;
    let smith = fx.teacher("Mr Smith").await;
    let class_id = school.classes()[0].id();
    fx.teachers_service()
        .assign_teacher_to_class(smith.id(), class_id, school.id())
        .await
        .unwrap();

    let err = Teacher::delete(smith.id(), fx.teachers.as_ref()).await.unwrap_err();

    assert!(matches!(err, Error::Business { .. }));
    assert_eq!(err.message(), MSG_TEACHER_HAS_CLASSROOMS);
    assert!(Teacher::get(smith.id(), fx.teachers.as_ref()).await.is_ok());
}

#[tokio::test]
async fn test_delete_missing_teacher_fails_not_found() {
    let fx = Fixture::new();
    let err = Teacher::delete(8, fx.teachers.as_ref()).await.unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
}

#[tokio::test]
async fn test_search_by_name() {
    let fx = Fixture::new();
    fx.teacher("Mr Smith").await;
    fx.teacher("Ms Jones").await;

    let page = Teacher::search(Some("Smith"), None, None, 1, 10, fx.teachers.as_ref())
        .await
        .unwrap();

    assert_eq!(page.total_count, 1);
}
