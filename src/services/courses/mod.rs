pub mod create;
pub mod get;
pub mod list;
pub mod teachers;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::{
    courses::{entities::Course, requests::CreateCourseRequest},
    teachers::entities::Teacher,
};
use crate::storage::Storage;

pub struct CourseService {
    storage: Arc<dyn Storage>,
}

impl CourseService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn get_storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    // 创建课程
    pub async fn create_course(&self, course_data: CreateCourseRequest) -> Result<Course> {
        create::create_course(self, course_data).await
    }

    // 根据课程代码获取课程
    pub async fn get_course(&self, code: &str) -> Result<Course> {
        get::get_course(self, code).await
    }

    // 获取课程列表
    pub async fn list_courses(&self) -> Result<Vec<Course>> {
        list::list_courses(self).await
    }

    // 将教师加入课程
    pub async fn link_teacher_to_course(
        &self,
        course_code: &str,
        teacher_national_id: &str,
    ) -> Result<String> {
        teachers::link_teacher_to_course(self, course_code, teacher_national_id).await
    }

    // 获取课程的教师列表
    pub async fn list_teachers(&self, course_code: &str) -> Result<Vec<Teacher>> {
        teachers::list_course_teachers(self, course_code).await
    }
}
