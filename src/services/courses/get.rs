use std::sync::Arc;

use tracing::debug;

use super::CourseService;
use crate::errors::{RegistroError, Result};
use crate::models::courses::entities::Course;
use crate::storage::Storage;

pub async fn get_course(service: &CourseService, code: &str) -> Result<Course> {
    find_course(service.get_storage(), code).await
}

/// 按课程代码查找课程，不存在时返回 `NotFound`
pub(crate) async fn find_course(storage: &Arc<dyn Storage>, code: &str) -> Result<Course> {
    debug!("Looking up course {}", code);

    storage
        .get_course_by_code(code)
        .await?
        .ok_or_else(|| RegistroError::not_found(format!("Course {code} not found")))
}
