//! 教师存储操作

use super::SeaOrmStorage;
use crate::entity::teachers::{ActiveModel, Column, Entity as Teachers};
use crate::errors::{RegistroError, Result};
use crate::models::teachers::{entities::Teacher, requests::CreateTeacherRequest};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建教师
    pub async fn create_teacher_impl(&self, req: CreateTeacherRequest) -> Result<Teacher> {
        let now = chrono::Utc::now();

        let model = ActiveModel {
            national_id: Set(req.national_id),
            first_name: Set(req.first_name),
            last_name: Set(req.last_name),
            active: Set(req.active.unwrap_or(false)),
            created_at: Set(req.created_at.unwrap_or(now).timestamp()),
            updated_at: Set(req.updated_at.unwrap_or(now).timestamp()),
            created_by: Set(req.created_by),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| RegistroError::from_db("创建教师失败", e))?;

        Ok(result.into_teacher())
    }

    /// 通过身份证号获取教师
    pub async fn get_teacher_by_national_id_impl(
        &self,
        national_id: &str,
    ) -> Result<Option<Teacher>> {
        let result = Teachers::find()
            .filter(Column::NationalId.eq(national_id))
            .one(&self.db)
            .await
            .map_err(|e| RegistroError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(result.map(|m| m.into_teacher()))
    }

    /// 列出全部教师
    pub async fn list_teachers_impl(&self) -> Result<Vec<Teacher>> {
        let teachers = Teachers::find()
            .order_by_asc(Column::LastName)
            .order_by_asc(Column::FirstName)
            .all(&self.db)
            .await
            .map_err(|e| RegistroError::database_operation(format!("查询教师列表失败: {e}")))?;

        Ok(teachers.into_iter().map(|m| m.into_teacher()).collect())
    }

    /// 统计教师数量
    pub async fn count_teachers_impl(&self) -> Result<u64> {
        let count = Teachers::find()
            .count(&self.db)
            .await
            .map_err(|e| RegistroError::database_operation(format!("统计教师数量失败: {e}")))?;

        Ok(count)
    }
}
