//! 业务逻辑层
//!
//! 每个实体一个服务，负责参数校验、按自然键查找以及把 `None` 转换为 `NotFound`。

pub mod addresses;
pub mod courses;
pub mod reports;
pub mod students;
pub mod teachers;

pub use addresses::AddressService;
pub use courses::CourseService;
pub use reports::ReportService;
pub use students::StudentService;
pub use teachers::TeacherService;

use std::sync::Arc;

use crate::storage::Storage;

/// 共享同一存储的全部服务
pub struct Services {
    pub teachers: TeacherService,
    pub courses: CourseService,
    pub students: StudentService,
    pub addresses: AddressService,
    pub reports: ReportService,
}

impl Services {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            teachers: TeacherService::new(storage.clone()),
            courses: CourseService::new(storage.clone()),
            students: StudentService::new(storage.clone()),
            addresses: AddressService::new(storage.clone()),
            reports: ReportService::new(storage),
        }
    }
}

#[cfg(test)]
mod tests;
