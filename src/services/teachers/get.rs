use std::sync::Arc;

use tracing::debug;

use super::TeacherService;
use crate::errors::{RegistroError, Result};
use crate::models::teachers::entities::Teacher;
use crate::storage::Storage;

pub async fn get_teacher(service: &TeacherService, national_id: &str) -> Result<Teacher> {
    find_teacher(service.get_storage(), national_id).await
}

/// 按身份证号查找教师，不存在时返回 `NotFound`
pub(crate) async fn find_teacher(storage: &Arc<dyn Storage>, national_id: &str) -> Result<Teacher> {
    debug!("Looking up teacher {}", national_id);

    storage
        .get_teacher_by_national_id(national_id)
        .await?
        .ok_or_else(|| RegistroError::not_found(format!("Teacher {national_id} not found")))
}
