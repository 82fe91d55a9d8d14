use super::TeacherService;
use crate::errors::Result;
use crate::models::teachers::entities::Teacher;

pub async fn list_teachers(service: &TeacherService) -> Result<Vec<Teacher>> {
    service.get_storage().list_teachers().await
}
