pub mod create;
pub mod get;
pub mod list;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::addresses::{entities::Address, requests::CreateAddressRequest};
use crate::storage::Storage;

pub struct AddressService {
    storage: Arc<dyn Storage>,
}

impl AddressService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn get_storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    // 为已有学生创建地址
    pub async fn create_address(&self, address_data: CreateAddressRequest) -> Result<Address> {
        create::create_address(self, address_data).await
    }

    // 根据学生身份证号获取地址
    pub async fn get_address(&self, student_national_id: &str) -> Result<Address> {
        get::get_address(self, student_national_id).await
    }

    // 获取地址列表
    pub async fn list_addresses(&self) -> Result<Vec<Address>> {
        list::list_addresses(self).await
    }
}
