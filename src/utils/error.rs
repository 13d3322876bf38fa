use thiserror::Error;

#[derive(Error, Debug)]
pub enum RxNormError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("RxNorm returned {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Failed to decode JSON response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Network failure or non-success HTTP status.
    Transport,
    /// The response body was not the JSON we expected.
    Decode,
    /// Bad base URL, config file or CLI flag.
    Configuration,
}

impl RxNormError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RxNormError::Transport(e) if e.is_decode() => ErrorCategory::Decode,
            RxNormError::Transport(_) | RxNormError::Status { .. } => ErrorCategory::Transport,
            RxNormError::Decode(_) => ErrorCategory::Decode,
            RxNormError::InvalidUrl(_)
            | RxNormError::Io(_)
            | RxNormError::TomlParse(_)
            | RxNormError::Config { .. }
            | RxNormError::InvalidConfigValue { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn is_transport(&self) -> bool {
        self.category() == ErrorCategory::Transport
    }

    pub fn is_decode(&self) -> bool {
        self.category() == ErrorCategory::Decode
    }

    /// HTTP status of a non-success response, if that is what failed.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            RxNormError::Status { status, .. } => Some(*status),
            RxNormError::Transport(e) => e.status(),
            _ => None,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RxNormError::Transport(e) if e.is_timeout() => {
                "The RxNorm service did not answer in time".to_string()
            }
            RxNormError::Transport(e) if e.is_connect() => {
                "Could not connect to the RxNorm service".to_string()
            }
            RxNormError::Transport(_) => "Request to the RxNorm service failed".to_string(),
            RxNormError::Status { status, .. } => {
                format!("The RxNorm service rejected the request ({})", status)
            }
            RxNormError::Decode(_) => "The RxNorm service sent a response that is not valid JSON".to_string(),
            RxNormError::InvalidUrl(e) => format!("Could not build request URL: {}", e),
            RxNormError::Io(e) => format!("Could not read configuration: {}", e),
            RxNormError::TomlParse(e) => format!("Configuration file is not valid TOML: {}", e),
            RxNormError::Config { message } => message.clone(),
            RxNormError::InvalidConfigValue { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
        }
    }

    /// Process exit code used by the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 1,
            ErrorCategory::Transport => 2,
            ErrorCategory::Decode => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, RxNormError>;
