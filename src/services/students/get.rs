use std::sync::Arc;

use tracing::debug;

use super::StudentService;
use crate::errors::{RegistroError, Result};
use crate::models::students::entities::Student;
use crate::storage::Storage;

pub async fn get_student(service: &StudentService, national_id: &str) -> Result<Student> {
    find_student(service.get_storage(), national_id).await
}

pub async fn get_student_by_id(service: &StudentService, student_id: i64) -> Result<Student> {
    find_student_by_id(service.get_storage(), student_id).await
}

/// 按身份证号查找学生，不存在时返回 `NotFound`
pub(crate) async fn find_student(storage: &Arc<dyn Storage>, national_id: &str) -> Result<Student> {
    debug!("Looking up student {}", national_id);

    storage
        .get_student_by_national_id(national_id)
        .await?
        .ok_or_else(|| RegistroError::not_found(format!("Student {national_id} not found")))
}

pub(crate) async fn find_student_by_id(storage: &Arc<dyn Storage>, student_id: i64) -> Result<Student> {
    storage
        .get_student_by_id(student_id)
        .await?
        .ok_or_else(|| RegistroError::not_found(format!("Student with id {student_id} not found")))
}
