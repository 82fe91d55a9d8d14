use tracing::info;

use super::StudentService;
use super::get::find_student;
use crate::errors::{RegistroError, Result};

/// 删除学生；地址与选课记录由外键级联删除
pub async fn delete_student(service: &StudentService, national_id: &str) -> Result<()> {
    let storage = service.get_storage();
    let student = find_student(storage, national_id).await?;

    if !storage.delete_student(student.id).await? {
        return Err(RegistroError::not_found(format!(
            "Student {national_id} not found"
        )));
    }

    info!("Student deleted: {}", student);
    Ok(())
}
