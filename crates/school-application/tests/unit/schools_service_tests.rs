//! Tests for the school command and query services

use crate::support::Services;
use chrono::NaiveDate;
use school_application::dto::{
    ClassRoomAddDto, ClassRoomDeleteDto, ClassRoomUpdateDto, SchoolCreateDto, SchoolDto,
    SchoolSearchDto, SchoolUpdateDto,
};
use school_application::{PagingPolicy, SchoolsQueryServiceInterface, SchoolsServiceInterface};
use school_domain::Error;

fn create_dto(name: &str) -> SchoolCreateDto {
    SchoolCreateDto {
        name: Some(name.to_string()),
        open_date: NaiveDate::from_ymd_opt(2020, 1, 1),
    }
}

async fn school_with_class(services: &Services, name: &str, class: &str) -> SchoolDto {
    let school = services.schools.create(create_dto(name)).await.unwrap();
    services
        .schools
        .add_class(ClassRoomAddDto {
            school_id: school.id,
            name: Some(class.to_string()),
        })
        .await
        .unwrap()
}

#[tokio::test]
async fn test_create_then_get() {
    let services = Services::new();

    let created = services.schools.create(create_dto("Lincoln High")).await.unwrap();
    let loaded = services.schools_query.get_school(created.id).await.unwrap();

    assert!(created.id > 0);
    assert_eq!(loaded, created);
    assert_eq!(loaded.open_date, NaiveDate::from_ymd_opt(2020, 1, 1));
}

#[tokio::test]
async fn test_create_duplicate_name_fails() {
    let services = Services::new();
    services.schools.create(create_dto("Lincoln High")).await.unwrap();

    let err = services
        .schools
        .create(create_dto("Lincoln High"))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 409);
}

#[tokio::test]
async fn test_create_invalid_reports_violations() {
    let services = Services::new();

    let err = services
        .schools
        .create(SchoolCreateDto::default())
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 422);
    assert_eq!(err.violations()[0].field, "name");
}

#[tokio::test]
async fn test_update_changes_name_and_date() {
    let services = Services::new();
    let created = services.schools.create(create_dto("Lincoln High")).await.unwrap();

    let updated = services
        .schools
        .update(SchoolUpdateDto {
            id: created.id,
            name: Some("Lincoln Academy".to_string()),
            open_date: NaiveDate::from_ymd_opt(2021, 9, 1),
        })
        .await
        .unwrap();

    assert_eq!(updated.name.as_deref(), Some("Lincoln Academy"));
    let loaded = services.schools_query.get_school(created.id).await.unwrap();
    assert_eq!(loaded.open_date, NaiveDate::from_ymd_opt(2021, 9, 1));
}

#[tokio::test]
async fn test_update_missing_school_fails() {
    let services = Services::new();
    let err = services
        .schools
        .update(SchoolUpdateDto {
            id: 9,
            name: Some("Lincoln High".to_string()),
            open_date: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
}

#[tokio::test]
async fn test_add_class_returns_school_with_class() {
    let services = Services::new();
    let school = school_with_class(&services, "Lincoln High", "Room A").await;

    assert_eq!(school.classes.len(), 1);
    assert_eq!(school.classes[0].name.as_deref(), Some("Room A"));
    assert_eq!(school.classes[0].school_id, school.id);
}

#[tokio::test]
async fn test_add_duplicate_class_fails() {
    let services = Services::new();
    let school = school_with_class(&services, "Lincoln High", "Room A").await;

    let err = services
        .schools
        .add_class(ClassRoomAddDto {
            school_id: school.id,
            name: Some("Room A".to_string()),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Duplicate { .. }));
    let loaded = services.schools_query.get_school(school.id).await.unwrap();
    assert_eq!(loaded.classes.len(), 1);
}

#[tokio::test]
async fn test_update_classroom_renames() {
    let services = Services::new();
    let school = school_with_class(&services, "Lincoln High", "Room A").await;
    let class_room_id = school.classes[0].id;

    let updated = services
        .schools
        .update_classroom(ClassRoomUpdateDto {
            school_id: school.id,
            class_room_id,
            name: Some("Room B".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(updated.classes[0].name.as_deref(), Some("Room B"));
    let loaded = services.schools_query.get_school(school.id).await.unwrap();
    assert_eq!(loaded.classes[0].name.as_deref(), Some("Room B"));
}

#[tokio::test]
async fn test_update_unknown_classroom_fails() {
    let services = Services::new();
    let school = school_with_class(&services, "Lincoln High", "Room A").await;

    let err = services
        .schools
        .update_classroom(ClassRoomUpdateDto {
            school_id: school.id,
            class_room_id: 999,
            name: Some("Room B".to_string()),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, Error::NotFound { .. }));
}

#[tokio::test]
async fn test_delete_class_then_school() {
    let services = Services::new();
    let school = school_with_class(&services, "Lincoln High", "Room A").await;

    let err = services.schools.delete(school.id).await.unwrap_err();
    assert_eq!(err.message(), "School has classes");

    assert!(services
        .schools
        .delete_class(ClassRoomDeleteDto {
            school_id: school.id,
            class_room_id: school.classes[0].id,
        })
        .await
        .unwrap());
    assert!(services.schools.delete(school.id).await.unwrap());
    assert!(services.schools_query.get_school(school.id).await.is_err());
}

#[tokio::test]
async fn test_search_schools_normalises_paging() {
    let services = Services::with_paging(PagingPolicy::new(2, 3));
    for name in ["Lincoln High", "Lincoln Middle", "Lincoln Elementary", "Lincoln Prep"] {
        services.schools.create(create_dto(name)).await.unwrap();
    }

    let defaulted = services
        .schools_query
        .search_schools(SchoolSearchDto {
            name: Some("Lincoln".to_string()),
            page_number: 0,
            page_size: 0,
        })
        .await
        .unwrap();
    assert_eq!(defaulted.total_count, 4);
    assert_eq!(defaulted.page_number, 1);
    assert_eq!(defaulted.data.len(), 2);

    let clamped = services
        .schools_query
        .search_schools(SchoolSearchDto {
            name: None,
            page_number: 1,
            page_size: 50,
        })
        .await
        .unwrap();
    assert_eq!(clamped.page_size, 3);
    assert_eq!(clamped.data.len(), 3);
}
