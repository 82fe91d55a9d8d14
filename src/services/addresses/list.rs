use super::AddressService;
use crate::errors::Result;
use crate::models::addresses::entities::Address;

pub async fn list_addresses(service: &AddressService) -> Result<Vec<Address>> {
    service.get_storage().list_addresses().await
}
