use std::path::Path;
use serde::Serialize;
use thiserror::Error;
use warp::http::StatusCode;

#[derive(Debug, Clone, Error)]
pub enum ReviewError {
    /// Problems with what the caller sent: no upload, no descriptor.
    #[error("{message}")]
    UserInput {
        message: String,
    },

    #[error("Failed to extract archive '{archive}': {reason}")]
    Extraction {
        archive: String,
        reason: String,
    },

    #[error("Filesystem operation '{operation}' failed for '{path}': {reason}")]
    Filesystem {
        path: String,
        operation: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        suggestion: Option<String>,
    },

    #[error("Pipeline failed during {stage}: {reason}")]
    Pipeline {
        stage: String,
        reason: String,
    },
}

impl ReviewError {
    pub fn user_input(message: &str) -> Self {
        Self::UserInput {
            message: message.to_string(),
        }
    }

    pub fn extraction_error(archive: &Path, reason: &str) -> Self {
        Self::Extraction {
            archive: archive.display().to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn filesystem_error(path: &Path, operation: &str, reason: &str) -> Self {
        Self::Filesystem {
            path: path.display().to_string(),
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn config_error(message: &str, suggestion: Option<&str>) -> Self {
        Self::Configuration {
            message: message.to_string(),
            suggestion: suggestion.map(ToString::to_string),
        }
    }

    pub fn pipeline_error(stage: &str, reason: &str) -> Self {
        Self::Pipeline {
            stage: stage.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::UserInput { .. } => StatusCode::BAD_REQUEST,
            Self::Extraction { .. }
            | Self::Filesystem { .. }
            | Self::Configuration { .. }
            | Self::Pipeline { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UserInput { .. } => ErrorSeverity::Low,
            Self::Configuration { .. } => ErrorSeverity::Medium,
            Self::Extraction { .. } | Self::Pipeline { .. } => ErrorSeverity::High,
            Self::Filesystem { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::UserInput { message } => message.clone(),
            Self::Configuration { message, suggestion } => {
                let mut msg = format!("Configuration Error: {}", message);
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::Extraction { .. } | Self::Filesystem { .. } | Self::Pipeline { .. } => {
                "Failed to analyze project".to_string()
            }
        }
    }

    pub fn technical_details(&self) -> String {
        self.to_string()
    }

    /// JSON body sent back to HTTP callers. User input errors carry no details.
    pub fn to_body(&self) -> ErrorBody {
        let details = match self {
            Self::UserInput { .. } => None,
            _ => Some(self.technical_details()),
        };

        ErrorBody {
            error: self.user_message(),
            details,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorBody {
    pub fn new(error: &str) -> Self {
        Self {
            error: error.to_string(),
            details: None,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for reviewlyzer operations
pub type ReviewResult<T> = Result<T, ReviewError>;

/// Logs an error once at the request boundary.
pub struct ErrorHandler;

impl ErrorHandler {
    pub fn handle_error(error: &ReviewError) {
        let severity = error.severity();
        match severity {
            ErrorSeverity::Low => {
                log::info!("{} [{}] {}", severity.emoji(), severity.name(), error.technical_details());
            }
            _ => {
                log::error!("{} [{}] {}", severity.emoji(), severity.name(), error.technical_details());
            }
        }
    }
}

/// Extension trait for Result to attach the failing operation
pub trait ResultExt<T> {
    fn with_operation(self, path: &Path, operation: &str) -> ReviewResult<T>;
}

impl<T> ResultExt<T> for Result<T, std::io::Error> {
    fn with_operation(self, path: &Path, operation: &str) -> ReviewResult<T> {
        self.map_err(|e| ReviewError::filesystem_error(path, operation, &e.to_string()))
    }
}

impl From<toml::de::Error> for ReviewError {
    fn from(error: toml::de::Error) -> Self {
        Self::Configuration {
            message: error.message().to_string(),
            suggestion: Some("Check the syntax of your config.toml".to_string()),
        }
    }
}

impl From<tokio::task::JoinError> for ReviewError {
    fn from(error: tokio::task::JoinError) -> Self {
        Self::Pipeline {
            stage: "background task".to_string(),
            reason: error.to_string(),
        }
    }
}
