pub mod create;
pub mod get;
pub mod list;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::teachers::{entities::Teacher, requests::CreateTeacherRequest};
use crate::storage::Storage;

pub struct TeacherService {
    storage: Arc<dyn Storage>,
}

impl TeacherService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn get_storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    // 创建教师
    pub async fn create_teacher(&self, teacher_data: CreateTeacherRequest) -> Result<Teacher> {
        create::create_teacher(self, teacher_data).await
    }

    // 根据身份证号获取教师
    pub async fn get_teacher(&self, national_id: &str) -> Result<Teacher> {
        get::get_teacher(self, national_id).await
    }

    // 获取教师列表
    pub async fn list_teachers(&self) -> Result<Vec<Teacher>> {
        list::list_teachers(self).await
    }
}
