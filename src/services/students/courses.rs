use tracing::{debug, info};

use super::StudentService;
use super::get::find_student;
use crate::errors::Result;
use crate::models::courses::entities::Course;
use crate::services::courses::get::find_course;

/// 为学生登记课程，重复登记不产生新的关联
pub async fn link_course_to_student(
    service: &StudentService,
    course_code: &str,
    student_national_id: &str,
) -> Result<String> {
    let storage = service.get_storage();

    let course = find_course(storage, course_code).await?;
    let student = find_student(storage, student_national_id).await?;

    if storage.add_course_to_student(student.id, course.id).await? {
        info!("Course {} linked to student {}", course.code, student.national_id);
    } else {
        debug!(
            "Course {} already linked to student {}",
            course.code, student.national_id
        );
    }

    Ok(format!(
        "Course {} - {} has been added to student {}, {}, {}.",
        course.code, course.name, student.national_id, student.first_name, student.last_name
    ))
}

pub async fn list_student_courses(service: &StudentService, national_id: &str) -> Result<Vec<Course>> {
    let storage = service.get_storage();
    let student = find_student(storage, national_id).await?;
    storage.list_student_courses(student.id).await
}
