use thiserror::Error;

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Payload is not valid UTF-8: {0}")]
    InvalidPayload(#[from] std::string::FromUtf8Error),

    #[error("Lookup of {host} failed: {source}")]
    LookupError {
        host: String,
        #[source]
        source: std::io::Error,
    },

    #[error("No {family} address found for {host}")]
    NoAddress { host: String, family: String },

    #[error("Weather request failed: {0}")]
    ProviderRequestError(#[from] reqwest::Error),

    #[error("request failed ({status})")]
    ProviderStatusError { status: u16 },

    #[error("{message}")]
    ProviderError { message: String },

    #[error("Handler panicked: {message}")]
    Panicked { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Payload,
    Resolution,
    Provider,
    Runtime,
    Configuration,
}

impl HandlerError {
    pub fn provider(message: impl Into<String>) -> Self {
        Self::ProviderError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            HandlerError::InvalidPayload(_) => ErrorCategory::Payload,
            HandlerError::LookupError { .. } | HandlerError::NoAddress { .. } => {
                ErrorCategory::Resolution
            }
            HandlerError::ProviderRequestError(_)
            | HandlerError::ProviderStatusError { .. }
            | HandlerError::ProviderError { .. } => ErrorCategory::Provider,
            HandlerError::Panicked { .. }
            | HandlerError::IoError(_)
            | HandlerError::SerializationError(_) => ErrorCategory::Runtime,
            HandlerError::ConfigError { .. }
            | HandlerError::MissingConfigError { .. }
            | HandlerError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Payload => format!("輸入內容無法解析: {}", self),
            ErrorCategory::Resolution => format!("名稱解析失敗: {}", self),
            ErrorCategory::Provider => format!("天氣服務回應錯誤: {}", self),
            ErrorCategory::Runtime => format!("執行時錯誤: {}", self),
            ErrorCategory::Configuration => format!("配置錯誤: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, HandlerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_lookup_error_keeps_source() {
        let err = HandlerError::LookupError {
            host: "nowhere.invalid".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such host"),
        };

        assert_eq!(err.category(), ErrorCategory::Resolution);
        let source = err.source().expect("lookup error should carry its source");
        assert_eq!(source.to_string(), "no such host");
    }

    #[test]
    fn test_provider_message_is_unmodified() {
        let err = HandlerError::provider("No match found");
        assert_eq!(err.to_string(), "No match found");
        assert_eq!(err.category(), ErrorCategory::Provider);
    }

    #[test]
    fn test_status_error_format() {
        let err = HandlerError::ProviderStatusError { status: 503 };
        assert_eq!(err.to_string(), "request failed (503)");
    }
}
