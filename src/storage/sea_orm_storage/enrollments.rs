//! 多对多关联存储操作（课程-教师、学生-课程）

use super::SeaOrmStorage;
use crate::entity::prelude::{
    CourseTeacherActiveModel, CourseTeachers, Courses, StudentCourseActiveModel, StudentCourses,
    Teachers,
};
use crate::entity::{course_teachers, courses, student_courses, teachers};
use crate::errors::{RegistroError, Result};
use crate::models::{courses::entities::Course, teachers::entities::Teacher};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 将教师加入课程
    pub async fn add_teacher_to_course_impl(&self, course_id: i64, teacher_id: i64) -> Result<bool> {
        let existing = CourseTeachers::find_by_id((course_id, teacher_id))
            .one(&self.db)
            .await
            .map_err(|e| RegistroError::database_operation(format!("查询课程教师关联失败: {e}")))?;

        if existing.is_some() {
            return Ok(false);
        }

        let model = CourseTeacherActiveModel {
            course_id: Set(course_id),
            teacher_id: Set(teacher_id),
        };

        CourseTeachers::insert(model)
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| RegistroError::from_db("添加课程教师失败", e))?;

        Ok(true)
    }

    /// 列出课程的教师
    pub async fn list_course_teachers_impl(&self, course_id: i64) -> Result<Vec<Teacher>> {
        let rows = Teachers::find()
            .inner_join(CourseTeachers)
            .filter(course_teachers::Column::CourseId.eq(course_id))
            .order_by_asc(teachers::Column::LastName)
            .order_by_asc(teachers::Column::FirstName)
            .all(&self.db)
            .await
            .map_err(|e| RegistroError::database_operation(format!("查询课程教师失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_teacher()).collect())
    }

    /// 为学生添加课程
    pub async fn add_course_to_student_impl(&self, student_id: i64, course_id: i64) -> Result<bool> {
        let existing = StudentCourses::find_by_id((student_id, course_id))
            .one(&self.db)
            .await
            .map_err(|e| RegistroError::database_operation(format!("查询学生课程关联失败: {e}")))?;

        if existing.is_some() {
            return Ok(false);
        }

        let model = StudentCourseActiveModel {
            student_id: Set(student_id),
            course_id: Set(course_id),
        };

        StudentCourses::insert(model)
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| RegistroError::from_db("添加学生课程失败", e))?;

        Ok(true)
    }

    /// 列出学生所选课程
    pub async fn list_student_courses_impl(&self, student_id: i64) -> Result<Vec<Course>> {
        let rows = Courses::find()
            .inner_join(StudentCourses)
            .filter(student_courses::Column::StudentId.eq(student_id))
            .order_by_asc(courses::Column::Code)
            .order_by_asc(courses::Column::Name)
            .order_by_asc(courses::Column::Version)
            .all(&self.db)
            .await
            .map_err(|e| RegistroError::database_operation(format!("查询学生课程失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_course()).collect())
    }
}
