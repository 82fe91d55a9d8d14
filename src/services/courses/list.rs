use super::CourseService;
use crate::errors::Result;
use crate::models::courses::entities::Course;

pub async fn list_courses(service: &CourseService) -> Result<Vec<Course>> {
    service.get_storage().list_courses().await
}
