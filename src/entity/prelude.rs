//! 预导入模块，方便使用

pub use super::addresses::{
    ActiveModel as AddressActiveModel, Entity as Addresses, Model as AddressModel,
};
pub use super::course_teachers::{
    ActiveModel as CourseTeacherActiveModel, Entity as CourseTeachers,
    Model as CourseTeacherModel,
};
pub use super::courses::{ActiveModel as CourseActiveModel, Entity as Courses, Model as CourseModel};
pub use super::student_courses::{
    ActiveModel as StudentCourseActiveModel, Entity as StudentCourses,
    Model as StudentCourseModel,
};
pub use super::students::{
    ActiveModel as StudentActiveModel, Entity as Students, Model as StudentModel,
};
pub use super::teachers::{
    ActiveModel as TeacherActiveModel, Entity as Teachers, Model as TeacherModel,
};
