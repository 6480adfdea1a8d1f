use thiserror::Error;

#[derive(Error, Debug)]
pub enum BundleError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Io,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BundleError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BundleError::IoError(_) => ErrorCategory::Io,
            BundleError::MissingConfigError { .. }
            | BundleError::InvalidConfigValueError { .. }
            | BundleError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            BundleError::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Processing => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BundleError::IoError(_) => {
                "Check that the input root exists and the output location is writable"
            }
            BundleError::MissingConfigError { .. } => {
                "Pass --module-name or set module_name in the [bundler] table"
            }
            BundleError::InvalidConfigValueError { .. } => {
                "Fix the offending option and run again"
            }
            BundleError::ConfigValidationError { .. } => {
                "Make sure the configuration file is valid TOML"
            }
            BundleError::ProcessingError { .. } => {
                "Make sure every emitted declaration file is UTF-8 text"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            BundleError::IoError(e) => format!("File operation failed: {}", e),
            BundleError::MissingConfigError { field } => {
                format!("The '{}' option is required", field)
            }
            BundleError::InvalidConfigValueError { field, reason, .. } => {
                format!("Option '{}' is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BundleError>;
