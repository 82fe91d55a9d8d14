use std::sync::Arc;

use chrono::{NaiveDate, TimeZone, Utc};

use super::Services;
use crate::config::DatabaseConfig;
use crate::models::{
    addresses::requests::CreateAddressRequest, courses::requests::CreateCourseRequest,
    students::requests::CreateStudentRequest, teachers::requests::CreateTeacherRequest,
};
use crate::storage::sea_orm_storage::SeaOrmStorage;

async fn setup() -> Services {
    let storage = SeaOrmStorage::connect(&DatabaseConfig::in_memory())
        .await
        .expect("in-memory storage");
    Services::new(Arc::new(storage))
}

fn teacher_request(national_id: &str) -> CreateTeacherRequest {
    CreateTeacherRequest {
        national_id: national_id.to_string(),
        first_name: "Marta".to_string(),
        last_name: "Fuentes".to_string(),
        active: Some(true),
        created_at: None,
        updated_at: None,
        created_by: "admin".to_string(),
    }
}

fn course_request(code: &str, name: &str) -> CreateCourseRequest {
    CreateCourseRequest {
        code: code.to_string(),
        name: name.to_string(),
        version: 1,
    }
}

fn student_request(national_id: &str, first: &str, last: &str) -> CreateStudentRequest {
    CreateStudentRequest {
        national_id: national_id.to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        birth_date: NaiveDate::from_ymd_opt(2002, 7, 21).unwrap(),
        active: None,
        created_at: None,
        updated_at: None,
        created_by: None,
    }
}

fn address_request(student_id: i64) -> CreateAddressRequest {
    CreateAddressRequest {
        street: "Los Aromos".to_string(),
        number: "1550".to_string(),
        unit: None,
        district: "Nunoa".to_string(),
        city: "Santiago".to_string(),
        region: "Metropolitana".to_string(),
        student_id,
    }
}

#[tokio::test]
async fn test_create_teacher_then_lookup() {
    let services = setup().await;

    let created = services
        .teachers
        .create_teacher(teacher_request("12345678-5"))
        .await
        .unwrap();
    let fetched = services.teachers.get_teacher("12345678-5").await.unwrap();

    assert_eq!(created, fetched);
    assert!(fetched.active);
    assert_eq!(fetched.created_by, "admin");
}

#[tokio::test]
async fn test_duplicate_teacher_national_id() {
    let services = setup().await;

    services
        .teachers
        .create_teacher(teacher_request("12345678-5"))
        .await
        .unwrap();
    let err = services
        .teachers
        .create_teacher(teacher_request("12345678-5"))
        .await
        .unwrap_err();

    assert!(err.is_uniqueness_violation(), "unexpected error: {err}");
}

#[tokio::test]
async fn test_duplicate_course_code() {
    let services = setup().await;

    services
        .courses
        .create_course(course_request("MAT101", "Calculo I"))
        .await
        .unwrap();
    let err = services
        .courses
        .create_course(course_request("MAT101", "Calculo II"))
        .await
        .unwrap_err();

    assert!(err.is_uniqueness_violation(), "unexpected error: {err}");
}

#[tokio::test]
async fn test_lookups_not_found() {
    let services = setup().await;

    assert!(services.teachers.get_teacher("1-9").await.unwrap_err().is_not_found());
    assert!(services.students.get_student("1-9").await.unwrap_err().is_not_found());
    assert!(services.courses.get_course("NOPE").await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_student_defaults_applied() {
    let services = setup().await;
    let before = Utc::now().timestamp();

    let student = services
        .students
        .create_student(student_request("11111111-1", "Ana", "Rojas"))
        .await
        .unwrap();

    assert!(!student.active);
    assert!(student.created_by.is_none());
    assert!(student.created_at.timestamp() >= before);
    assert_eq!(student.created_at, student.updated_at);
    assert_eq!(
        student.birth_date,
        NaiveDate::from_ymd_opt(2002, 7, 21).unwrap()
    );
}

#[tokio::test]
async fn test_student_explicit_optional_fields() {
    let services = setup().await;
    let created_at = Utc.with_ymd_and_hms(2023, 3, 1, 9, 0, 0).unwrap();

    let mut request = student_request("11111111-1", "Ana", "Rojas");
    request.active = Some(true);
    request.created_at = Some(created_at);
    request.created_by = Some("secretaria".to_string());

    let student = services.students.create_student(request).await.unwrap();

    assert!(student.active);
    assert_eq!(student.created_at, created_at);
    assert_eq!(student.created_by.as_deref(), Some("secretaria"));
}

#[tokio::test]
async fn test_validation_rejects_blank_and_long_fields() {
    let services = setup().await;

    let err = services
        .teachers
        .create_teacher(teacher_request(""))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E004");

    let err = services
        .courses
        .create_course(course_request("MAT101", &"x".repeat(51)))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E004");
}

#[tokio::test]
async fn test_address_for_missing_student() {
    let services = setup().await;

    let err = services
        .addresses
        .create_address(address_request(4242))
        .await
        .unwrap_err();

    assert!(err.is_not_found(), "unexpected error: {err}");
}

#[tokio::test]
async fn test_student_has_at_most_one_address() {
    let services = setup().await;
    let student = services
        .students
        .create_student(student_request("11111111-1", "Ana", "Rojas"))
        .await
        .unwrap();

    let address = services
        .addresses
        .create_address(address_request(student.id))
        .await
        .unwrap();
    assert_eq!(address.student_id, student.id);
    assert_eq!(
        services.addresses.get_address("11111111-1").await.unwrap(),
        address
    );

    let err = services
        .addresses
        .create_address(address_request(student.id))
        .await
        .unwrap_err();
    assert!(err.is_uniqueness_violation(), "unexpected error: {err}");
}

#[tokio::test]
async fn test_delete_student_cascades_to_address() {
    let services = setup().await;
    let student = services
        .students
        .create_student(student_request("11111111-1", "Ana", "Rojas"))
        .await
        .unwrap();
    services
        .addresses
        .create_address(address_request(student.id))
        .await
        .unwrap();
    services
        .courses
        .create_course(course_request("MAT101", "Calculo I"))
        .await
        .unwrap();
    services
        .students
        .link_course_to_student("MAT101", "11111111-1")
        .await
        .unwrap();

    services.students.delete_student("11111111-1").await.unwrap();

    let storage = services.students.get_storage();
    assert!(
        storage
            .get_address_by_student_id(student.id)
            .await
            .unwrap()
            .is_none()
    );
    assert!(storage.list_student_courses(student.id).await.unwrap().is_empty());
    assert!(
        services
            .students
            .delete_student("11111111-1")
            .await
            .unwrap_err()
            .is_not_found()
    );
    // 课程本身不受影响
    assert!(services.courses.get_course("MAT101").await.is_ok());
}

#[tokio::test]
async fn test_link_teacher_to_course_is_idempotent() {
    let services = setup().await;
    services
        .teachers
        .create_teacher(teacher_request("12345678-5"))
        .await
        .unwrap();
    services
        .courses
        .create_course(course_request("MAT101", "Calculo I"))
        .await
        .unwrap();

    let first = services
        .courses
        .link_teacher_to_course("MAT101", "12345678-5")
        .await
        .unwrap();
    let second = services
        .courses
        .link_teacher_to_course("MAT101", "12345678-5")
        .await
        .unwrap();

    assert_eq!(
        first,
        "Teacher 12345678-5, Fuentes, Marta has been added to course MAT101 - Calculo I."
    );
    assert_eq!(first, second);

    let teachers = services.courses.list_teachers("MAT101").await.unwrap();
    assert_eq!(teachers.len(), 1);
    assert_eq!(teachers[0].national_id, "12345678-5");
}

#[tokio::test]
async fn test_link_with_missing_entities() {
    let services = setup().await;
    services
        .courses
        .create_course(course_request("MAT101", "Calculo I"))
        .await
        .unwrap();

    let err = services
        .courses
        .link_teacher_to_course("MAT101", "99999999-9")
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    let err = services
        .students
        .link_course_to_student("FIS101", "99999999-9")
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_link_course_to_student_message_and_listing() {
    let services = setup().await;
    services
        .students
        .create_student(student_request("11111111-1", "Ana", "Rojas"))
        .await
        .unwrap();
    services
        .courses
        .create_course(course_request("QUI101", "Quimica"))
        .await
        .unwrap();
    services
        .courses
        .create_course(course_request("MAT101", "Calculo I"))
        .await
        .unwrap();

    let message = services
        .students
        .link_course_to_student("QUI101", "11111111-1")
        .await
        .unwrap();
    services
        .students
        .link_course_to_student("MAT101", "11111111-1")
        .await
        .unwrap();
    services
        .students
        .link_course_to_student("MAT101", "11111111-1")
        .await
        .unwrap();

    assert_eq!(
        message,
        "Course QUI101 - Quimica has been added to student 11111111-1, Ana, Rojas."
    );

    let codes: Vec<String> = services
        .students
        .list_courses("11111111-1")
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.code)
        .collect();
    assert_eq!(codes, vec!["MAT101", "QUI101"]);
}

#[tokio::test]
async fn test_default_orderings() {
    let services = setup().await;
    for (id, first, last) in [
        ("3-3", "Pedro", "Soto"),
        ("1-1", "Bea", "Araya"),
        ("2-2", "Ana", "Araya"),
    ] {
        services
            .students
            .create_student(student_request(id, first, last))
            .await
            .unwrap();
    }
    for code in ["QUI101", "BIO101", "MAT101"] {
        services
            .courses
            .create_course(course_request(code, "Curso"))
            .await
            .unwrap();
    }

    let students: Vec<String> = services
        .students
        .list_students()
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.national_id)
        .collect();
    assert_eq!(students, vec!["2-2", "1-1", "3-3"]);

    let courses: Vec<String> = services
        .courses
        .list_courses()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.code)
        .collect();
    assert_eq!(courses, vec!["BIO101", "MAT101", "QUI101"]);
}

#[tokio::test]
async fn test_enrollment_report_lists_linked_course() {
    let services = setup().await;
    services
        .students
        .create_student(student_request("11111111-1", "Ana", "Rojas"))
        .await
        .unwrap();
    services
        .students
        .create_student(student_request("22222222-2", "Luis", "Soto"))
        .await
        .unwrap();
    services
        .courses
        .create_course(course_request("MAT101", "Calculo I"))
        .await
        .unwrap();
    services
        .students
        .link_course_to_student("MAT101", "11111111-1")
        .await
        .unwrap();

    let mut out = Vec::new();
    services
        .reports
        .write_enrollment_report(&mut out)
        .await
        .unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Student: 11111111-1, Rojas, Ana\nCourses:\n    - MAT101 - Calculo I\n\n\
         Student: 22222222-2, Soto, Luis\nCourses:\n\n"
    );
}

#[tokio::test]
async fn test_duplicate_student_national_id() {
    let services = setup().await;

    services
        .students
        .create_student(student_request("11111111-1", "Ana", "Rojas"))
        .await
        .unwrap();
    let err = services
        .students
        .create_student(student_request("11111111-1", "Luis", "Soto"))
        .await
        .unwrap_err();

    assert!(err.is_uniqueness_violation(), "unexpected error: {err}");
}

#[tokio::test]
async fn test_storage_address_foreign_key_maps_to_not_found() {
    let services = setup().await;

    // 绕过服务层的存在性检查，直接由外键约束拒绝
    let err = services
        .addresses
        .get_storage()
        .create_address(address_request(999))
        .await
        .unwrap_err();

    assert!(err.is_not_found(), "unexpected error: {err}");
}

#[tokio::test]
async fn test_record_counts() {
    let services = setup().await;
    let storage = services.students.get_storage();

    assert_eq!(storage.count_teachers().await.unwrap(), 0);
    assert_eq!(storage.count_courses().await.unwrap(), 0);
    assert_eq!(storage.count_students().await.unwrap(), 0);

    services
        .teachers
        .create_teacher(teacher_request("12345678-5"))
        .await
        .unwrap();
    services
        .courses
        .create_course(course_request("MAT101", "Calculo I"))
        .await
        .unwrap();
    services
        .courses
        .create_course(course_request("FIS101", "Fisica I"))
        .await
        .unwrap();
    services
        .students
        .create_student(student_request("11111111-1", "Ana", "Rojas"))
        .await
        .unwrap();

    assert_eq!(storage.count_teachers().await.unwrap(), 1);
    assert_eq!(storage.count_courses().await.unwrap(), 2);
    assert_eq!(storage.count_students().await.unwrap(), 1);
}

#[tokio::test]
async fn test_addresses_ordered_by_region_city_district() {
    let services = setup().await;
    let places = [
        ("1-1", "Valparaiso", "Vina del Mar", "Recreo"),
        ("2-2", "Metropolitana", "Santiago", "Providencia"),
        ("3-3", "Metropolitana", "Santiago", "Nunoa"),
        ("4-4", "Metropolitana", "Puente Alto", "Bajos de Mena"),
    ];
    for (national_id, region, city, district) in places {
        let student = services
            .students
            .create_student(student_request(national_id, "Ana", "Rojas"))
            .await
            .unwrap();
        let mut request = address_request(student.id);
        request.region = region.to_string();
        request.city = city.to_string();
        request.district = district.to_string();
        services.addresses.create_address(request).await.unwrap();
    }

    let districts: Vec<String> = services
        .addresses
        .list_addresses()
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.district)
        .collect();
    assert_eq!(
        districts,
        vec!["Bajos de Mena", "Nunoa", "Providencia", "Recreo"]
    );
}
