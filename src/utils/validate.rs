use crate::errors::{RegistroError, Result};

// 字段长度上限
pub const NATIONAL_ID_MAX_LEN: usize = 10;
pub const COURSE_CODE_MAX_LEN: usize = 9;
pub const NAME_MAX_LEN: usize = 50;
pub const ADDRESS_NUMBER_MAX_LEN: usize = 10;

/// 必填字段：去除首尾空白后不能为空，且长度（按字符计）不超过 `max_len`
pub fn validate_required(field: &str, value: &str, max_len: usize) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RegistroError::validation(format!("{field} is required")));
    }
    validate_max_len(field, value, max_len)
}

/// 可选字段：只校验长度
pub fn validate_optional(field: &str, value: Option<&str>, max_len: usize) -> Result<()> {
    match value {
        Some(v) => validate_max_len(field, v, max_len),
        None => Ok(()),
    }
}

fn validate_max_len(field: &str, value: &str, max_len: usize) -> Result<()> {
    let len = value.chars().count();
    if len > max_len {
        return Err(RegistroError::validation(format!(
            "{field} must be at most {max_len} characters (got {len})"
        )));
    }
    Ok(())
}

pub fn validate_national_id(value: &str) -> Result<()> {
    validate_required("national_id", value, NATIONAL_ID_MAX_LEN)
}

pub fn validate_course_code(value: &str) -> Result<()> {
    validate_required("code", value, COURSE_CODE_MAX_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_national_ids() {
        assert!(validate_national_id("11111111-1").is_ok());
        assert!(validate_national_id("9876543-K").is_ok());
    }

    #[test]
    fn test_blank_required_field() {
        let err = validate_national_id("   ").unwrap_err();
        assert_eq!(err.code(), "E004");
        assert_eq!(err.message(), "national_id is required");
    }

    #[test]
    fn test_too_long_course_code() {
        assert!(validate_course_code("MAT101").is_ok());
        let err = validate_course_code("MATEMATICA1").unwrap_err();
        assert!(err.message().contains("at most 9"));
    }

    #[test]
    fn test_length_counts_characters() {
        // 多字节字符按一个字符计
        let name = "ñ".repeat(NAME_MAX_LEN);
        assert!(validate_required("first_name", &name, NAME_MAX_LEN).is_ok());
        let name = "ñ".repeat(NAME_MAX_LEN + 1);
        assert!(validate_required("first_name", &name, NAME_MAX_LEN).is_err());
    }

    #[test]
    fn test_optional_field() {
        assert!(validate_optional("unit", None, ADDRESS_NUMBER_MAX_LEN).is_ok());
        assert!(validate_optional("unit", Some(""), ADDRESS_NUMBER_MAX_LEN).is_ok());
        assert!(validate_optional("unit", Some("12345678901"), ADDRESS_NUMBER_MAX_LEN).is_err());
    }
}
