use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProvisioningError {
    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("API request failed with status {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("Transport error: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("Response parsing error: {0}")]
    ResponseParseError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Api,
    Transport,
    Response,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ProvisioningError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// HTTP status of an upstream rejection, if this error carries one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::TransportError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ValidationError { .. } => ErrorCategory::Validation,
            Self::ApiError { .. } => ErrorCategory::Api,
            Self::TransportError(_) => ErrorCategory::Transport,
            Self::ResponseParseError(_) => ErrorCategory::Response,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ValidationError { .. }
            | Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorSeverity::High,
            Self::ApiError { status, .. } if *status >= 500 => ErrorSeverity::Medium,
            Self::ApiError { .. } => ErrorSeverity::High,
            Self::TransportError(_) => ErrorSeverity::Medium,
            Self::ResponseParseError(_) | Self::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ValidationError { .. } => {
                "Provide a project id, a domain and an API token"
            }
            Self::ApiError { status: 401, .. } | Self::ApiError { status: 403, .. } => {
                "Check that the token is valid and has access to the project and team"
            }
            Self::ApiError { status: 404, .. } => {
                "Check the project id and the team id the project belongs to"
            }
            Self::ApiError { status: 409, .. } => {
                "The domain is already assigned; remove it from the other project first"
            }
            Self::ApiError { status, .. } if *status >= 500 => {
                "The platform reported an internal error; try again later"
            }
            Self::ApiError { .. } => "Inspect the response body returned by the platform",
            Self::TransportError(_) => {
                "Check network connectivity and the configured API base URL"
            }
            Self::ResponseParseError(_) => {
                "The platform returned an unexpected response; check the API base URL"
            }
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line arguments"
            }
            Self::IoError(_) => "Check that the configuration file exists and is readable",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ValidationError { message } => format!("Invalid request: {}", message),
            Self::ApiError { status, body } => {
                format!("The platform rejected the request ({}): {}", status, body)
            }
            Self::TransportError(e) => format!("Could not reach the platform: {}", e),
            Self::ResponseParseError(_) => {
                "The platform answered with a response that is not a JSON object".to_string()
            }
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            Self::IoError(e) => format!("File system error: {}", e),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError { .. })
    }

    pub fn is_api(&self) -> bool {
        matches!(self, Self::ApiError { .. })
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::TransportError(_))
    }
}

pub type Result<T> = std::result::Result<T, ProvisioningError>;
