pub mod courses;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::{
    courses::entities::Course,
    students::{entities::Student, requests::CreateStudentRequest},
};
use crate::storage::Storage;

pub struct StudentService {
    storage: Arc<dyn Storage>,
}

impl StudentService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn get_storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    // 创建学生
    pub async fn create_student(&self, student_data: CreateStudentRequest) -> Result<Student> {
        create::create_student(self, student_data).await
    }

    // 根据身份证号获取学生
    pub async fn get_student(&self, national_id: &str) -> Result<Student> {
        get::get_student(self, national_id).await
    }

    // 根据ID获取学生
    pub async fn get_student_by_id(&self, student_id: i64) -> Result<Student> {
        get::get_student_by_id(self, student_id).await
    }

    // 获取学生列表
    pub async fn list_students(&self) -> Result<Vec<Student>> {
        list::list_students(self).await
    }

    // 删除学生
    pub async fn delete_student(&self, national_id: &str) -> Result<()> {
        delete::delete_student(self, national_id).await
    }

    // 为学生添加课程
    pub async fn link_course_to_student(
        &self,
        course_code: &str,
        student_national_id: &str,
    ) -> Result<String> {
        courses::link_course_to_student(self, course_code, student_national_id).await
    }

    // 获取学生所选课程
    pub async fn list_courses(&self, national_id: &str) -> Result<Vec<Course>> {
        courses::list_student_courses(self, national_id).await
    }
}
