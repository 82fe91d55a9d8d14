use chrono::{DateTime, Utc};
use serde::Deserialize;

// 教师创建请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeacherRequest {
    pub national_id: String,
    pub first_name: String,
    pub last_name: String,
    pub active: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub created_by: String,
}
