use tracing::{error, info};

use super::StudentService;
use crate::errors::Result;
use crate::models::students::{entities::Student, requests::CreateStudentRequest};
use crate::utils::validate::{NAME_MAX_LEN, validate_national_id, validate_optional, validate_required};

pub async fn create_student(
    service: &StudentService,
    student_data: CreateStudentRequest,
) -> Result<Student> {
    validate_national_id(&student_data.national_id)?;
    validate_required("first_name", &student_data.first_name, NAME_MAX_LEN)?;
    validate_required("last_name", &student_data.last_name, NAME_MAX_LEN)?;
    validate_optional(
        "created_by",
        student_data.created_by.as_deref(),
        NAME_MAX_LEN,
    )?;

    let storage = service.get_storage();

    match storage.create_student(student_data).await {
        Ok(student) => {
            info!("Student created: {}", student);
            Ok(student)
        }
        Err(e) => {
            error!("Student creation failed: {}", e);
            Err(e)
        }
    }
}
