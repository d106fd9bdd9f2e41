use crate::utils::error::{RegistrarError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(RegistrarError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(RegistrarError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u32, min_value: u32) -> Result<()> {
    if value < min_value {
        return Err(RegistrarError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RegistrarError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 只檢查基本格式：非空且 `@` 兩側都有內容
pub fn validate_email(field_name: &str, value: &str) -> Result<()> {
    let valid = match value.split_once('@') {
        Some((local, domain)) => !local.trim().is_empty() && !domain.trim().is_empty(),
        None => false,
    };

    if !valid {
        return Err(RegistrarError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Email must look like name@domain".to_string(),
        });
    }
    Ok(())
}

pub fn validate_known_code(field_name: &str, code: &str, known: &[&str]) -> Result<()> {
    if !known.contains(&code) {
        return Err(RegistrarError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: code.to_string(),
            reason: format!("Course code is not declared. Known courses: {}", known.join(", ")),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output", "./report.json").is_ok());
        assert!(validate_path("output", "").is_err());
        assert!(validate_path("output", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("credit_hours", 3, 1).is_ok());
        assert!(validate_positive_number("credit_hours", 0, 1).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("email", "alice@uni.com").is_ok());
        assert!(validate_email("email", "alice").is_err());
        assert!(validate_email("email", "@uni.com").is_err());
        assert!(validate_email("email", "alice@").is_err());
    }

    #[test]
    fn test_validate_known_code() {
        let known = ["CS101", "CS201"];
        assert!(validate_known_code("students.courses", "CS101", &known).is_ok());
        assert!(validate_known_code("students.courses", "MA101", &known).is_err());
    }
}
