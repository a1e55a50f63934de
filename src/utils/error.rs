use thiserror::Error;

#[derive(Error, Debug)]
pub enum CleanError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Cleaning error: {message}")]
    ProcessingError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

/// 錯誤嚴重程度，決定 CLI 的退出碼
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Processing,
    Configuration,
}

impl CleanError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CleanError::IoError(_) => ErrorSeverity::High,
            CleanError::ProcessingError { .. } => ErrorSeverity::High,
            CleanError::InvalidConfigValueError { .. } => ErrorSeverity::Critical,
            CleanError::MissingConfigError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            CleanError::IoError(_) => ErrorCategory::Io,
            CleanError::ProcessingError { .. } => ErrorCategory::Processing,
            CleanError::InvalidConfigValueError { .. } | CleanError::MissingConfigError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CleanError::IoError(_) => {
                "Check that the stylesheet exists and the path is readable and writable".to_string()
            }
            CleanError::ProcessingError { .. } => {
                "Re-run with --verbose to see what the cleaning steps did".to_string()
            }
            CleanError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' and try again", field)
            }
            CleanError::MissingConfigError { field } => {
                format!("Provide a value for '{}'", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CleanError::IoError(e) => format!("File operation failed: {}", e),
            CleanError::ProcessingError { message } => format!("Cleaning failed: {}", message),
            CleanError::InvalidConfigValueError { field, value, reason } => {
                format!("Configuration problem: {} = '{}' ({})", field, value, reason)
            }
            CleanError::MissingConfigError { field } => {
                format!("Configuration problem: '{}' is missing", field)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CleanError>;
