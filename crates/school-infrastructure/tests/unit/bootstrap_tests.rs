//! Composition root tests
//!
//! Drive the wired application services end to end over the in-memory store.

use school_application::dto::{
    ClassRoomAddDto, ClassRoomDeleteDto, SchoolCreateDto, SchoolSearchDto, StudentCreateDto,
    StudentSetClassroomDto, TeacherAssignClassroomDto, TeacherCreateDto, TeacherSearchDto,
    TeacherUnassignClassroomDto,
};
use school_domain::Error;
use school_infrastructure::config::AppConfig;
use school_infrastructure::di::init_app;

fn context() -> school_infrastructure::AppContext {
    init_app(AppConfig::default()).expect("default config must wire")
}

#[test]
fn test_unknown_storage_provider_rejected() {
    let mut config = AppConfig::default();
    config.storage.provider = "postgres".to_string();

    let err = init_app(config).expect_err("only memory is available");
    assert!(matches!(err, Error::Configuration { .. }));
    assert!(err.message().contains("postgres"));
}

#[test]
fn test_context_keeps_config() {
    let mut config = AppConfig::default();
    config.pagination.default_page_size = 3;

    let ctx = init_app(config).expect("config must wire");
    assert_eq!(ctx.config.pagination.default_page_size, 3);
}

#[tokio::test]
async fn test_configured_page_size_applies_to_searches() {
    let mut config = AppConfig::default();
    config.pagination.default_page_size = 2;
    config.pagination.max_page_size = 2;
    let ctx = init_app(config).expect("config must wire");

    for name in ["Alpha School", "Bravo School", "Charlie School"] {
        ctx.schools()
            .create(SchoolCreateDto {
                name: Some(name.to_string()),
                open_date: None,
            })
            .await
            .expect("school create");
    }

    let page = ctx
        .schools_query()
        .search_schools(SchoolSearchDto {
            name: None,
            page_number: 1,
            page_size: 50,
        })
        .await
        .expect("search");

    assert_eq!(page.total_count, 3);
    assert_eq!(page.data.len(), 2);
    assert_eq!(page.page_size, 2);
}

#[tokio::test]
async fn test_services_share_one_store() {
    let ctx = context();

    let school = ctx
        .schools()
        .create(SchoolCreateDto {
            name: Some("Lincoln High".to_string()),
            open_date: None,
        })
        .await
        .expect("school create");
    let school = ctx
        .schools()
        .add_class(ClassRoomAddDto {
            school_id: school.id,
            name: Some("Room 101".to_string()),
        })
        .await
        .expect("add class");
    let class_id = school.classes[0].id;

    let student = ctx
        .students()
        .create(StudentCreateDto {
            name: Some("Ada Lovelace".to_string()),
            class_room_id: None,
            school_id: None,
        })
        .await
        .expect("student create");
    let moved = ctx
        .students()
        .set_class(StudentSetClassroomDto {
            student_id: student.id,
            school_id: Some(school.id),
            class_room_id: Some(class_id),
        })
        .await
        .expect("set class");
    assert!(moved);

    let teacher = ctx
        .teachers()
        .create(TeacherCreateDto {
            name: Some("Grace Hopper".to_string()),
        })
        .await
        .expect("teacher create");
    ctx.teachers()
        .assign_to_classroom(TeacherAssignClassroomDto {
            teacher_id: teacher.id,
            classroom_id: class_id,
            school_id: school.id,
        })
        .await
        .expect("assign");

    let found = ctx
        .teachers_query()
        .search(TeacherSearchDto {
            name: None,
            school_id: Some(school.id),
            classroom_id: Some(class_id),
            page_number: 1,
            page_size: 10,
        })
        .await
        .expect("teacher search");
    assert_eq!(found.total_count, 1);

    // The classroom still has a teacher and a student
    let blocked = ctx
        .schools()
        .delete_class(ClassRoomDeleteDto {
            school_id: school.id,
            class_room_id: class_id,
        })
        .await;
    assert!(matches!(blocked, Err(Error::Business { .. })));

    ctx.teachers()
        .unassign_from_classroom(TeacherUnassignClassroomDto {
            teacher_id: teacher.id,
            classroom_id: class_id,
        })
        .await
        .expect("unassign");
    ctx.students()
        .set_class(StudentSetClassroomDto {
            student_id: student.id,
            school_id: None,
            class_room_id: None,
        })
        .await
        .expect("clear class");

    let deleted = ctx
        .schools()
        .delete_class(ClassRoomDeleteDto {
            school_id: school.id,
            class_room_id: class_id,
        })
        .await
        .expect("delete class");
    assert!(deleted);
    assert!(ctx.schools().delete(school.id).await.expect("delete school"));
}
