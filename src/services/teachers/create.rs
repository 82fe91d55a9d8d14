use tracing::{error, info};

use super::TeacherService;
use crate::errors::Result;
use crate::models::teachers::{entities::Teacher, requests::CreateTeacherRequest};
use crate::utils::validate::{NAME_MAX_LEN, validate_national_id, validate_required};

pub async fn create_teacher(
    service: &TeacherService,
    teacher_data: CreateTeacherRequest,
) -> Result<Teacher> {
    validate_national_id(&teacher_data.national_id)?;
    validate_required("first_name", &teacher_data.first_name, NAME_MAX_LEN)?;
    validate_required("last_name", &teacher_data.last_name, NAME_MAX_LEN)?;
    validate_required("created_by", &teacher_data.created_by, NAME_MAX_LEN)?;

    let storage = service.get_storage();

    match storage.create_teacher(teacher_data).await {
        Ok(teacher) => {
            info!("Teacher created: {}", teacher);
            Ok(teacher)
        }
        Err(e) => {
            error!("Teacher creation failed: {}", e);
            Err(e)
        }
    }
}
