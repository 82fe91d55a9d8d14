pub mod enrollments;

use std::io::Write;
use std::sync::Arc;

use crate::errors::Result;
use crate::models::reports::responses::EnrollmentReport;
use crate::storage::Storage;

pub struct ReportService {
    storage: Arc<dyn Storage>,
}

impl ReportService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn get_storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    // 汇总所有学生及其课程
    pub async fn enrollment_report(&self) -> Result<EnrollmentReport> {
        enrollments::enrollment_report(self).await
    }

    // 将选课报表写入输出流
    pub async fn write_enrollment_report<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        enrollments::write_enrollment_report(self, out).await
    }
}
