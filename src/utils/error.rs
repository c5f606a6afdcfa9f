use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Invalid payload field `{field}`: {reason}")]
    InvalidPayload { field: String, reason: String },

    #[error("Unexpected response shape: expected {expected}")]
    UnexpectedShape { expected: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    System,
}

impl ClientError {
    pub fn invalid_field(field: &str, reason: impl Into<String>) -> Self {
        ClientError::InvalidPayload {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ClientError::Http(_) | ClientError::Status { .. } => ErrorCategory::Network,
            ClientError::InvalidPayload { .. }
            | ClientError::UnexpectedShape { .. }
            | ClientError::Serialization(_) => ErrorCategory::Data,
            ClientError::ConfigValidationError { .. }
            | ClientError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ClientError::Io(_) => ErrorCategory::System,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ClientError::Http(e) if e.is_timeout() => "The API did not answer in time".to_string(),
            ClientError::Http(_) => "Could not reach the API".to_string(),
            ClientError::Status { status, .. } => format!("The API answered with {}", status),
            ClientError::InvalidPayload { field, .. } => {
                format!("The API returned a record with an invalid `{}` field", field)
            }
            ClientError::UnexpectedShape { expected } => {
                format!("The API returned something other than {}", expected)
            }
            ClientError::Serialization(_) => "The API returned malformed JSON".to_string(),
            ClientError::Io(e) => format!("File access failed: {}", e),
            ClientError::ConfigValidationError { field, message } => {
                format!("Configuration problem in {}: {}", field, message)
            }
            ClientError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value {} is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check the base URL and your network connection",
            ErrorCategory::Data => "The record may be malformed upstream; try another id",
            ErrorCategory::Configuration => "Fix the configuration file or command-line flags",
            ErrorCategory::System => "Check that the file exists and is readable",
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
