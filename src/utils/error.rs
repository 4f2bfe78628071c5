use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Config file error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Phone number parse error: {message}")]
    ParseError { message: String },

    #[error("No phone number provided")]
    MissingInputError,

    #[error("Missing required config field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Network,
    Processing,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl LookupError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LookupError::ApiError(_) => ErrorCategory::Network,
            LookupError::IoError(_) => ErrorCategory::System,
            LookupError::SerializationError(_) => ErrorCategory::Processing,
            LookupError::TomlError(_) => ErrorCategory::Configuration,
            LookupError::ParseError { .. } => ErrorCategory::Input,
            LookupError::MissingInputError => ErrorCategory::Input,
            LookupError::MissingConfigError { .. } => ErrorCategory::Configuration,
            LookupError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            LookupError::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 外部 API 失敗只影響附加資訊
            LookupError::ApiError(_) => ErrorSeverity::Low,
            LookupError::IoError(_) => ErrorSeverity::Critical,
            LookupError::SerializationError(_) => ErrorSeverity::High,
            LookupError::TomlError(_) => ErrorSeverity::Medium,
            LookupError::ParseError { .. } => ErrorSeverity::Medium,
            LookupError::MissingInputError => ErrorSeverity::Medium,
            LookupError::MissingConfigError { .. } => ErrorSeverity::Medium,
            LookupError::InvalidConfigValueError { .. } => ErrorSeverity::Medium,
            LookupError::ProcessingError { .. } => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            LookupError::ApiError(_) => {
                "Check your network connection and the API endpoint, or retry later".to_string()
            }
            LookupError::IoError(_) => {
                "Check that the input file exists and the output path is writable".to_string()
            }
            LookupError::SerializationError(_) => {
                "The result could not be serialized; please report this".to_string()
            }
            LookupError::TomlError(_) => {
                "Check the TOML config file syntax against the documented [api] section".to_string()
            }
            LookupError::ParseError { .. } => {
                "Provide the number in international format, e.g. +6281234567890".to_string()
            }
            LookupError::MissingInputError => {
                "Pass a phone number as an argument or use --file <path>".to_string()
            }
            LookupError::MissingConfigError { field } => {
                format!("Set the '{}' option on the command line or in the config file", field)
            }
            LookupError::InvalidConfigValueError { field, .. } => {
                format!("Correct the value of '{}' and run again", field)
            }
            LookupError::ProcessingError { .. } => {
                "Re-run with --verbose and inspect the logs".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            LookupError::MissingInputError => {
                "Please provide a phone number or use --file.".to_string()
            }
            LookupError::IoError(e) => format!("File operation failed: {}", e),
            LookupError::TomlError(e) => format!("Could not read the config file: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LookupError>;
