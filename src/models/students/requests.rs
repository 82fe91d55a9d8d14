use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

// 学生创建请求，可选字段缺省时使用默认值
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudentRequest {
    pub national_id: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub active: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub created_by: Option<String>,
}
