use tracing::{error, info};

use super::AddressService;
use crate::errors::Result;
use crate::models::addresses::{entities::Address, requests::CreateAddressRequest};
use crate::services::students::get::find_student_by_id;
use crate::utils::validate::{
    ADDRESS_NUMBER_MAX_LEN, NAME_MAX_LEN, validate_optional, validate_required,
};

pub async fn create_address(
    service: &AddressService,
    address_data: CreateAddressRequest,
) -> Result<Address> {
    validate_required("street", &address_data.street, NAME_MAX_LEN)?;
    validate_required("number", &address_data.number, ADDRESS_NUMBER_MAX_LEN)?;
    validate_optional(
        "unit",
        address_data.unit.as_deref(),
        ADDRESS_NUMBER_MAX_LEN,
    )?;
    validate_required("district", &address_data.district, NAME_MAX_LEN)?;
    validate_required("city", &address_data.city, NAME_MAX_LEN)?;
    validate_required("region", &address_data.region, NAME_MAX_LEN)?;

    let storage = service.get_storage();

    // 地址必须挂在已存在的学生上
    let student = find_student_by_id(storage, address_data.student_id).await?;

    match storage.create_address(address_data).await {
        Ok(address) => {
            info!("Address created for student {}: {}", student.national_id, address);
            Ok(address)
        }
        Err(e) => {
            error!("Address creation failed: {}", e);
            Err(e)
        }
    }
}
