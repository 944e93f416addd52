use thiserror::Error;

#[derive(Error, Debug)]
pub enum SentimentError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error on '{field}': {message}")]
    ValidationError { field: String, message: String },

    #[error("Inference error: {message}")]
    InferenceError { message: String },

    #[error("Classification failed")]
    ClassificationFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Client,
    Inference,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SentimentError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SentimentError::ValidationError { .. } => ErrorCategory::Client,
            SentimentError::HttpError(_)
            | SentimentError::InferenceError { .. }
            | SentimentError::ClassificationFailed => ErrorCategory::Inference,
            SentimentError::ConfigError { .. } | SentimentError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            SentimentError::IoError(_) | SentimentError::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Client => ErrorSeverity::Low,
            ErrorCategory::Inference => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 給使用者看的訊息，不含內部細節
    pub fn user_friendly_message(&self) -> String {
        match self {
            SentimentError::ValidationError { message, .. } => message.clone(),
            SentimentError::ConfigError { message } => format!("Invalid configuration: {}", message),
            SentimentError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid value for '{}': {}", field, reason)
            }
            SentimentError::HttpError(_)
            | SentimentError::InferenceError { .. }
            | SentimentError::ClassificationFailed => "Classification failed".to_string(),
            SentimentError::IoError(_) => "A system I/O error occurred".to_string(),
            SentimentError::SerializationError(_) => "Failed to encode or decode data".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SentimentError::ValidationError { .. } => {
                "Send a non-empty headline that stays under the configured word limit"
            }
            SentimentError::ConfigError { .. } | SentimentError::InvalidConfigValueError { .. } => {
                "Check the command line flags or the TOML configuration file"
            }
            SentimentError::HttpError(_) | SentimentError::InferenceError { .. } => {
                "Check the inference endpoint, model name and API token"
            }
            SentimentError::ClassificationFailed => "Retry the request later",
            SentimentError::IoError(_) => "Check that the address is free and the file is readable",
            SentimentError::SerializationError(_) => "Check the payload format",
        }
    }
}

pub type Result<T> = std::result::Result<T, SentimentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inference_errors_hide_detail_from_users() {
        let err = SentimentError::InferenceError {
            message: "Model error: CUDA out of memory".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Inference);
        assert_eq!(err.user_friendly_message(), "Classification failed");
        assert!(!err.user_friendly_message().contains("CUDA"));
    }

    #[test]
    fn test_severity_follows_category() {
        let validation = SentimentError::ValidationError {
            field: "headline".to_string(),
            message: "headline cannot be empty".to_string(),
        };
        let config = SentimentError::ConfigError {
            message: "bad".to_string(),
        };
        assert_eq!(validation.severity(), ErrorSeverity::Low);
        assert_eq!(config.severity(), ErrorSeverity::High);
        assert!(config.severity() > validation.severity());
    }
}
