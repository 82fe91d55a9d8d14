//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

use sea_orm::{DbErr, SqlErr};

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_registro_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum RegistroError {
            $($variant(String),)*
        }

        impl RegistroError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(RegistroError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(RegistroError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(RegistroError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl RegistroError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        RegistroError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_registro_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Validation("E004", "Validation Error"),
    NotFound("E005", "Resource Not Found"),
    UniquenessViolation("E006", "Uniqueness Violation"),
    Io("E007", "I/O Error"),
}

impl RegistroError {
    /// 按约束类型归类数据库错误
    ///
    /// 唯一约束冲突 -> `UniquenessViolation`，外键约束冲突 -> `NotFound`，
    /// 其余 -> `DatabaseOperation`。`context` 作为消息前缀。
    pub fn from_db(context: &str, err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                RegistroError::UniquenessViolation(format!("{context}: {detail}"))
            }
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                RegistroError::NotFound(format!("{context}: {detail}"))
            }
            _ => RegistroError::DatabaseOperation(format!("{context}: {err}")),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RegistroError::NotFound(_))
    }

    pub fn is_uniqueness_violation(&self) -> bool {
        matches!(self, RegistroError::UniquenessViolation(_))
    }

    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for RegistroError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for RegistroError {}

// 为常见的错误类型实现 From trait
impl From<DbErr> for RegistroError {
    fn from(err: DbErr) -> Self {
        RegistroError::from_db("数据库操作失败", err)
    }
}

impl From<std::io::Error> for RegistroError {
    fn from(err: std::io::Error) -> Self {
        RegistroError::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RegistroError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(RegistroError::database_config("test").code(), "E001");
        assert_eq!(RegistroError::validation("test").code(), "E004");
        assert_eq!(RegistroError::not_found("test").code(), "E005");
        assert_eq!(RegistroError::uniqueness_violation("test").code(), "E006");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            RegistroError::not_found("test").error_type(),
            "Resource Not Found"
        );
        assert_eq!(
            RegistroError::uniqueness_violation("test").error_type(),
            "Uniqueness Violation"
        );
    }

    #[test]
    fn test_error_message() {
        let err = RegistroError::not_found("Course MAT101 not found");
        assert_eq!(err.message(), "Course MAT101 not found");
        assert!(err.is_not_found());
        assert!(!err.is_uniqueness_violation());
    }

    #[test]
    fn test_format_simple() {
        let err = RegistroError::validation("national_id is required");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("national_id is required"));
    }

    #[test]
    fn test_unclassified_db_error_is_operation_error() {
        let err = RegistroError::from(DbErr::Custom("boom".to_string()));
        assert_eq!(err.code(), "E003");
        assert!(err.message().contains("boom"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = RegistroError::from(io);
        assert_eq!(err.code(), "E007");
    }
}
