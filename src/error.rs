use thiserror::Error;

pub const MISSING_CREDENTIAL_MESSAGE: &str =
    "API key is missing. Set GEMINI_API_KEY in the environment or pass a credential explicitly.";

pub const EMPTY_RESULT_MESSAGE: &str = "Failed to generate image. Please try again.";

pub const TRANSPORT_FALLBACK_MESSAGE: &str = "Image generation service request failed";

#[derive(Debug, Error)]
pub enum StudioError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Transport error{}: {message}", .status.map(|s| format!(" ({})", s)).unwrap_or_default())]
    Transport {
        status: Option<u16>,
        message: String,
    },

    #[error("{}", EMPTY_RESULT_MESSAGE)]
    EmptyResult,

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Decode error: {0}")]
    Decode(String),
}

impl StudioError {
    pub fn missing_credential() -> Self {
        StudioError::Configuration(MISSING_CREDENTIAL_MESSAGE.to_string())
    }

    pub fn transport(status: Option<u16>, message: Option<String>) -> Self {
        let message = message
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| TRANSPORT_FALLBACK_MESSAGE.to_string());
        StudioError::Transport { status, message }
    }

    /// Whether the caller may reasonably re-issue the same request.
    /// Client-side rejections (4xx) and configuration problems are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            StudioError::EmptyResult => true,
            StudioError::Transport { status, .. } => {
                !matches!(status, Some(code) if (400..500).contains(code) && *code != 429)
            }
            _ => false,
        }
    }
}

impl From<serde_json::Error> for StudioError {
    fn from(e: serde_json::Error) -> Self {
        StudioError::Serialization(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, StudioError>;
