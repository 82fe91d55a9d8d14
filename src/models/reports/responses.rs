use std::io::Write;

use serde::Serialize;

use crate::models::{courses::entities::Course, students::entities::Student};

/// 单个学生及其所选课程
#[derive(Debug, Clone, Serialize)]
pub struct StudentEnrollments {
    pub student: Student,
    pub courses: Vec<Course>,
}

/// 选课报表
#[derive(Debug, Clone, Default, Serialize)]
pub struct EnrollmentReport {
    pub items: Vec<StudentEnrollments>,
}

impl EnrollmentReport {
    /// 以文本形式写出报表，每个学生一段，段后空行
    pub fn render<W: Write + ?Sized>(&self, out: &mut W) -> std::io::Result<()> {
        for entry in &self.items {
            let student = &entry.student;
            writeln!(
                out,
                "Student: {}, {}, {}",
                student.national_id, student.last_name, student.first_name
            )?;
            writeln!(out, "Courses:")?;
            for course in &entry.courses {
                writeln!(out, "    - {} - {}", course.code, course.name)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn student(national_id: &str, first: &str, last: &str) -> Student {
        Student {
            id: 1,
            national_id: national_id.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            birth_date: NaiveDate::from_ymd_opt(2001, 3, 14).unwrap(),
            active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            created_by: None,
        }
    }

    fn course(code: &str, name: &str) -> Course {
        Course {
            id: 1,
            code: code.to_string(),
            name: name.to_string(),
            version: 1,
        }
    }

    #[test]
    fn test_render_lists_courses_under_student() {
        let report = EnrollmentReport {
            items: vec![StudentEnrollments {
                student: student("11111111-1", "Ana", "Rojas"),
                courses: vec![course("MAT101", "Calculo I"), course("FIS101", "Fisica I")],
            }],
        };

        let mut out = Vec::new();
        report.render(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Student: 11111111-1, Rojas, Ana\n\
             Courses:\n    - MAT101 - Calculo I\n    - FIS101 - Fisica I\n\n"
        );
    }

    #[test]
    fn test_render_student_without_courses() {
        let report = EnrollmentReport {
            items: vec![StudentEnrollments {
                student: student("22222222-2", "Luis", "Soto"),
                courses: vec![],
            }],
        };

        let mut out = Vec::new();
        report.render(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Student: 22222222-2, Soto, Luis\nCourses:\n\n"
        );
    }

    #[test]
    fn test_render_empty_report() {
        let mut out = Vec::new();
        EnrollmentReport::default().render(&mut out).unwrap();
        assert!(out.is_empty());
    }
}
