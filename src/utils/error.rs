use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Record {index} is missing required field '{field}'")]
    MissingField { field: String, index: usize },

    #[error("Record {index} has a {kind} value in '{field}', which cannot be used as a group key")]
    UngroupableValue {
        field: String,
        index: usize,
        kind: &'static str,
    },

    #[error("Cannot compute {operation} over an empty record list")]
    EmptyInput { operation: &'static str },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Configuration,
    Validation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AnalyticsError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError(_) => ErrorCategory::Io,
            Self::SerializationError(_) | Self::CsvError(_) => ErrorCategory::Data,
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::ConfigValidationError { .. } => ErrorCategory::Configuration,
            Self::MissingField { .. } | Self::UngroupableValue { .. } | Self::EmptyInput { .. } => {
                ErrorCategory::Data
            }
            Self::ValidationError { .. } => ErrorCategory::Validation,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::EmptyInput { .. } => ErrorSeverity::Medium,
            Self::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("Could not read or write a file: {}", e),
            Self::SerializationError(e) => format!("Ticket data is not valid JSON: {}", e),
            Self::CsvError(e) => format!("Failed to write the CSV summary: {}", e),
            Self::MissingField { field, index } => {
                format!("Ticket #{} has no '{}' field", index, field)
            }
            Self::EmptyInput { .. } => "No tickets to report on".to_string(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the input file exists and the output directory is writable",
            ErrorCategory::Configuration => "Review the configuration file or command line flags",
            ErrorCategory::Validation => {
                "Fix the records missing required keys or run without --strict"
            }
            ErrorCategory::Data => match self {
                Self::EmptyInput { .. } => "Provide at least one ticket record",
                Self::UngroupableValue { .. } => {
                    "Use text, integer, boolean or null values for category and customer_id"
                }
                _ => "Run validation first and repair the reported records",
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalyticsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_is_data_error() {
        let err = AnalyticsError::MissingField {
            field: "category".to_string(),
            index: 3,
        };
        assert_eq!(err.category(), ErrorCategory::Data);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.to_string(), "Record 3 is missing required field 'category'");
    }

    #[test]
    fn test_empty_input_severity() {
        let err = AnalyticsError::EmptyInput {
            operation: "escalation metrics",
        };
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.recovery_suggestion(), "Provide at least one ticket record");
    }

    #[test]
    fn test_io_error_is_critical() {
        let err: AnalyticsError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "tickets.json").into();
        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
