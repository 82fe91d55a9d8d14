use serde::Deserialize;

// 课程创建请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourseRequest {
    pub code: String,
    pub name: String,
    pub version: i32,
}
