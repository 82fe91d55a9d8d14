//! 学生存储操作

use super::SeaOrmStorage;
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{RegistroError, Result};
use crate::models::students::{entities::Student, requests::CreateStudentRequest};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建学生
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let now = chrono::Utc::now();

        let model = ActiveModel {
            national_id: Set(req.national_id),
            first_name: Set(req.first_name),
            last_name: Set(req.last_name),
            birth_date: Set(req.birth_date),
            active: Set(req.active.unwrap_or(false)),
            created_at: Set(req.created_at.unwrap_or(now).timestamp()),
            updated_at: Set(req.updated_at.unwrap_or(now).timestamp()),
            created_by: Set(req.created_by),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| RegistroError::from_db("创建学生失败", e))?;

        Ok(result.into_student())
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RegistroError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 通过身份证号获取学生
    pub async fn get_student_by_national_id_impl(
        &self,
        national_id: &str,
    ) -> Result<Option<Student>> {
        let result = Students::find()
            .filter(Column::NationalId.eq(national_id))
            .one(&self.db)
            .await
            .map_err(|e| RegistroError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 列出全部学生
    pub async fn list_students_impl(&self) -> Result<Vec<Student>> {
        let students = Students::find()
            .order_by_asc(Column::LastName)
            .order_by_asc(Column::FirstName)
            .all(&self.db)
            .await
            .map_err(|e| RegistroError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(students.into_iter().map(|m| m.into_student()).collect())
    }

    /// 删除学生
    pub async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        let result = Students::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| RegistroError::database_operation(format!("删除学生失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 统计学生数量
    pub async fn count_students_impl(&self) -> Result<u64> {
        let count = Students::find()
            .count(&self.db)
            .await
            .map_err(|e| RegistroError::database_operation(format!("统计学生数量失败: {e}")))?;

        Ok(count)
    }
}
