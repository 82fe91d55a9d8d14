use super::AddressService;
use crate::errors::{RegistroError, Result};
use crate::models::addresses::entities::Address;
use crate::services::students::get::find_student;

pub async fn get_address(service: &AddressService, student_national_id: &str) -> Result<Address> {
    let storage = service.get_storage();
    let student = find_student(storage, student_national_id).await?;

    storage
        .get_address_by_student_id(student.id)
        .await?
        .ok_or_else(|| {
            RegistroError::not_found(format!(
                "Student {student_national_id} has no address"
            ))
        })
}
