use tracing::{error, info};

use super::CourseService;
use crate::errors::Result;
use crate::models::courses::{entities::Course, requests::CreateCourseRequest};
use crate::utils::validate::{NAME_MAX_LEN, validate_course_code, validate_required};

pub async fn create_course(
    service: &CourseService,
    course_data: CreateCourseRequest,
) -> Result<Course> {
    validate_course_code(&course_data.code)?;
    validate_required("name", &course_data.name, NAME_MAX_LEN)?;

    let storage = service.get_storage();

    match storage.create_course(course_data).await {
        Ok(course) => {
            info!("Course created: {}", course);
            Ok(course)
        }
        Err(e) => {
            error!("Course creation failed: {}", e);
            Err(e)
        }
    }
}
