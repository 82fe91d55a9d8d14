use std::io::Write;

use tracing::debug;

use super::ReportService;
use crate::errors::Result;
use crate::models::reports::responses::{EnrollmentReport, StudentEnrollments};

pub async fn enrollment_report(service: &ReportService) -> Result<EnrollmentReport> {
    let storage = service.get_storage();
    let students = storage.list_students().await?;

    let mut items = Vec::with_capacity(students.len());
    for student in students {
        let courses = storage.list_student_courses(student.id).await?;
        items.push(StudentEnrollments { student, courses });
    }

    debug!("Enrollment report built for {} student(s)", items.len());
    Ok(EnrollmentReport { items })
}

/// 先查询完整报表再写出，写入期间不持有数据库连接
pub async fn write_enrollment_report<W: Write + ?Sized>(
    service: &ReportService,
    out: &mut W,
) -> Result<()> {
    let report = enrollment_report(service).await?;
    report.render(out)?;
    out.flush()?;
    Ok(())
}
