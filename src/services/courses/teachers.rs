use tracing::{debug, info};

use super::CourseService;
use super::get::find_course;
use crate::errors::Result;
use crate::models::teachers::entities::Teacher;
use crate::services::teachers::get::find_teacher;

/// 将教师登记到课程，重复登记不产生新的关联
pub async fn link_teacher_to_course(
    service: &CourseService,
    course_code: &str,
    teacher_national_id: &str,
) -> Result<String> {
    let storage = service.get_storage();

    let course = find_course(storage, course_code).await?;
    let teacher = find_teacher(storage, teacher_national_id).await?;

    if storage.add_teacher_to_course(course.id, teacher.id).await? {
        info!("Teacher {} linked to course {}", teacher.national_id, course.code);
    } else {
        debug!(
            "Teacher {} already linked to course {}",
            teacher.national_id, course.code
        );
    }

    Ok(format!(
        "Teacher {}, {}, {} has been added to course {} - {}.",
        teacher.national_id, teacher.last_name, teacher.first_name, course.code, course.name
    ))
}

pub async fn list_course_teachers(service: &CourseService, course_code: &str) -> Result<Vec<Teacher>> {
    let storage = service.get_storage();
    let course = find_course(storage, course_code).await?;
    storage.list_course_teachers(course.id).await
}
