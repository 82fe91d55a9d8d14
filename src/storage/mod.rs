use std::sync::Arc;

use crate::models::{
    addresses::{entities::Address, requests::CreateAddressRequest},
    courses::{entities::Course, requests::CreateCourseRequest},
    students::{entities::Student, requests::CreateStudentRequest},
    teachers::{entities::Teacher, requests::CreateTeacherRequest},
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 教师管理方法
    // 创建教师
    async fn create_teacher(&self, teacher: CreateTeacherRequest) -> Result<Teacher>;
    // 通过身份证号获取教师信息
    async fn get_teacher_by_national_id(&self, national_id: &str) -> Result<Option<Teacher>>;
    // 列出教师（按姓、名排序）
    async fn list_teachers(&self) -> Result<Vec<Teacher>>;
    // 统计教师数量
    async fn count_teachers(&self) -> Result<u64>;

    /// 课程管理方法
    // 创建课程
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    // 通过课程代码获取课程信息
    async fn get_course_by_code(&self, code: &str) -> Result<Option<Course>>;
    // 列出课程（按代码、名称、版本排序）
    async fn list_courses(&self) -> Result<Vec<Course>>;
    // 统计课程数量
    async fn count_courses(&self) -> Result<u64>;

    /// 学生管理方法
    // 创建学生
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    // 通过ID获取学生信息
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    // 通过身份证号获取学生信息
    async fn get_student_by_national_id(&self, national_id: &str) -> Result<Option<Student>>;
    // 列出学生（按姓、名排序）
    async fn list_students(&self) -> Result<Vec<Student>>;
    // 统计学生数量
    async fn count_students(&self) -> Result<u64>;
    // 删除学生，地址与选课记录级联删除
    async fn delete_student(&self, id: i64) -> Result<bool>;

    /// 地址管理方法
    // 创建地址
    async fn create_address(&self, address: CreateAddressRequest) -> Result<Address>;
    // 获取学生的地址
    async fn get_address_by_student_id(&self, student_id: i64) -> Result<Option<Address>>;
    // 列出地址（按大区、城市、区排序）
    async fn list_addresses(&self) -> Result<Vec<Address>>;

    /// 课程教师关联方法
    // 将教师加入课程，已存在时返回 false
    async fn add_teacher_to_course(&self, course_id: i64, teacher_id: i64) -> Result<bool>;
    // 列出课程的教师
    async fn list_course_teachers(&self, course_id: i64) -> Result<Vec<Teacher>>;

    /// 学生课程关联方法
    // 为学生添加课程，已存在时返回 false
    async fn add_course_to_student(&self, student_id: i64, course_id: i64) -> Result<bool>;
    // 列出学生所选课程
    async fn list_student_courses(&self, student_id: i64) -> Result<Vec<Course>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
