use serde::Deserialize;

// 地址创建请求，student_id 为学生的内部 ID
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAddressRequest {
    pub street: String,
    pub number: String,
    pub unit: Option<String>,
    pub district: String,
    pub city: String,
    pub region: String,
    pub student_id: i64,
}
