//! 地址存储操作

use super::SeaOrmStorage;
use crate::entity::addresses::{ActiveModel, Column, Entity as Addresses};
use crate::errors::{RegistroError, Result};
use crate::models::addresses::{entities::Address, requests::CreateAddressRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建地址
    ///
    /// student_id 唯一：同一学生的第二个地址触发唯一约束冲突。
    pub async fn create_address_impl(&self, req: CreateAddressRequest) -> Result<Address> {
        let model = ActiveModel {
            street: Set(req.street),
            number: Set(req.number),
            unit: Set(req.unit),
            district: Set(req.district),
            city: Set(req.city),
            region: Set(req.region),
            student_id: Set(req.student_id),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| RegistroError::from_db("创建地址失败", e))?;

        Ok(result.into_address())
    }

    /// 获取学生的地址
    pub async fn get_address_by_student_id_impl(&self, student_id: i64) -> Result<Option<Address>> {
        let result = Addresses::find()
            .filter(Column::StudentId.eq(student_id))
            .one(&self.db)
            .await
            .map_err(|e| RegistroError::database_operation(format!("查询地址失败: {e}")))?;

        Ok(result.map(|m| m.into_address()))
    }

    /// 列出全部地址
    pub async fn list_addresses_impl(&self) -> Result<Vec<Address>> {
        let addresses = Addresses::find()
            .order_by_asc(Column::Region)
            .order_by_asc(Column::City)
            .order_by_asc(Column::District)
            .all(&self.db)
            .await
            .map_err(|e| RegistroError::database_operation(format!("查询地址列表失败: {e}")))?;

        Ok(addresses.into_iter().map(|m| m.into_address()).collect())
    }
}
