use thiserror::Error;

pub const MSG_MISSING_FIELDS: &str = "Thiếu thông tin bắt buộc";
pub const MSG_INTERNAL: &str = "Có lỗi xảy ra khi tính toán";
pub const MSG_INVALID_BODY: &str = "Dữ liệu không hợp lệ";
pub const MSG_TIMEOUT: &str = "Yêu cầu xử lý quá thời gian";

#[derive(Error, Debug)]
pub enum LuckyError {
    #[error("Missing required fields: {}", fields.join(", "))]
    MissingFields { fields: Vec<String> },

    #[error("Validation failed for '{field}': {message}")]
    ValidationError { field: String, message: String },

    #[error("Invalid request body: {message}")]
    InvalidBody { message: String },

    #[error("Request timed out after {millis}ms")]
    RequestTimeout { millis: u128 },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Internal error: {message}")]
    InternalError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Timeout,
    Configuration,
    System,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl LuckyError {
    pub fn validation(field: &str, message: &str) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            message: message.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingFields { .. } | Self::ValidationError { .. } | Self::InvalidBody { .. } => {
                ErrorCategory::Validation
            }
            Self::RequestTimeout { .. } => ErrorCategory::Timeout,
            Self::ConfigValidationError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::IoError(_) => ErrorCategory::System,
            Self::SerializationError(_) | Self::InternalError { .. } => ErrorCategory::Internal,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation => ErrorSeverity::Low,
            ErrorCategory::Timeout => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
            ErrorCategory::Internal => ErrorSeverity::High,
        }
    }

    /// HTTP status the API layer answers with.
    pub fn status_code(&self) -> u16 {
        match self.category() {
            ErrorCategory::Validation => 400,
            ErrorCategory::Timeout => 408,
            _ => 500,
        }
    }

    /// Process exit code for the binaries.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low | ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    /// Localized text that is safe to hand back to a caller.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::MissingFields { .. } => MSG_MISSING_FIELDS.to_string(),
            Self::ValidationError { message, .. } => message.clone(),
            Self::InvalidBody { .. } => MSG_INVALID_BODY.to_string(),
            Self::RequestTimeout { .. } => MSG_TIMEOUT.to_string(),
            Self::ConfigValidationError { field, message } => {
                format!("Cấu hình không hợp lệ ({}): {}", field, message)
            }
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Cấu hình không hợp lệ ({}): {}", field, reason)
            }
            Self::IoError(_) | Self::SerializationError(_) | Self::InternalError { .. } => {
                MSG_INTERNAL.to_string()
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::MissingFields { .. } => "Provide fullName, birthDate and gender",
            Self::ValidationError { .. } => "Check the highlighted field and resubmit",
            Self::InvalidBody { .. } => "Send a JSON object of at most 16 KiB",
            Self::RequestTimeout { .. } => "Retry the request later",
            Self::ConfigValidationError { .. } | Self::InvalidConfigValueError { .. } => {
                "Fix the configuration value and restart"
            }
            Self::IoError(_) => "Check file paths and permissions",
            Self::SerializationError(_) | Self::InternalError { .. } => {
                "Retry the request; report the issue if it persists"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, LuckyError>;
