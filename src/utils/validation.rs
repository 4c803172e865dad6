use crate::utils::error::{AnalyticsError, Result};
use std::collections::HashSet;

pub const SUPPORTED_OUTPUT_FORMATS: [&str; 2] = ["json", "csv"];

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(AnalyticsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(AnalyticsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AnalyticsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// An empty key list is allowed; blank or repeated keys are not.
pub fn validate_key_list(field_name: &str, keys: &[String]) -> Result<()> {
    let mut seen = HashSet::new();
    for key in keys {
        validate_non_empty_string(field_name, key)?;
        if !seen.insert(key.as_str()) {
            return Err(AnalyticsError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: key.clone(),
                reason: "Duplicate key".to_string(),
            });
        }
    }
    Ok(())
}

pub fn validate_output_formats(field_name: &str, formats: &[String]) -> Result<()> {
    if formats.is_empty() {
        return Err(AnalyticsError::MissingConfigError {
            field: field_name.to_string(),
        });
    }

    for format in formats {
        if !SUPPORTED_OUTPUT_FORMATS.contains(&format.as_str()) {
            return Err(AnalyticsError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: format.clone(),
                reason: format!(
                    "Unsupported format. Valid formats: {}",
                    SUPPORTED_OUTPUT_FORMATS.join(", ")
                ),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("load.output_path", "./output").is_ok());
        assert!(validate_path("load.output_path", "").is_err());
        assert!(validate_path("load.output_path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_key_list() {
        let keys = vec!["category".to_string(), "customer_id".to_string()];
        assert!(validate_key_list("validation.required_keys", &keys).is_ok());
        assert!(validate_key_list("validation.required_keys", &[]).is_ok());

        let blank = vec!["category".to_string(), "  ".to_string()];
        assert!(validate_key_list("validation.required_keys", &blank).is_err());

        let duplicated = vec!["category".to_string(), "category".to_string()];
        assert!(validate_key_list("validation.required_keys", &duplicated).is_err());
    }

    #[test]
    fn test_validate_output_formats() {
        let formats = vec!["json".to_string(), "csv".to_string()];
        assert!(validate_output_formats("load.output_formats", &formats).is_ok());
        assert!(validate_output_formats("load.output_formats", &[]).is_err());
        assert!(validate_output_formats("load.output_formats", &["xml".to_string()]).is_err());
    }
}
