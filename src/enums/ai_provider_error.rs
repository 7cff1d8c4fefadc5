use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AiProviderError {
    #[error("Gemini API Error: {0}")]
    ApiError(String),
    #[error("Network Error: {0}")]
    NetworkError(String),
    #[error("Serialization Error: {0}")]
    SerializationError(String),
    #[error("Authentication Error: {0}")]
    AuthenticationError(String),
}

impl From<reqwest::Error> for AiProviderError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Self::SerializationError(error.to_string())
        } else {
            Self::NetworkError(error.to_string())
        }
    }
}
