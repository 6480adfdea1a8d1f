use crate::utils::error::{BundleError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(BundleError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(BundleError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| BundleError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(BundleError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("out", "./build/").is_ok());
        assert!(validate_path("out", "").is_err());
        assert!(validate_path("out", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("Lib".to_string());
        let absent: Option<String> = None;
        assert_eq!(validate_required_field("module_name", &present).unwrap(), "Lib");
        assert!(matches!(
            validate_required_field("module_name", &absent),
            Err(BundleError::MissingConfigError { field }) if field == "module_name"
        ));
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("module_name", "Lib").is_ok());
        assert!(validate_non_empty_string("module_name", "").is_err());
        assert!(validate_non_empty_string("module_name", "   ").is_ok());
    }
}
