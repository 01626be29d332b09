use askmynotes_core::ValidationError;
use thiserror::Error;

/// Failure to get any answer out of the generative backend.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[cfg(feature = "gemini")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },

    #[error("could not decode response envelope: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Every way a notes analysis can fail. None of these are retried.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("API key is missing. Please ensure API_KEY is configured.")]
    Configuration,

    #[error("no response from AI")]
    EmptyResponse,

    #[error("malformed AI response: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    #[error(transparent)]
    Transport(#[from] GenerateError),
}

pub const GENERIC_FAILURE: &str = "System error detected. Re-authentication may be required.";

impl AnalysisError {
    /// The single string shown to the end user.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(_) | Self::Configuration => self.to_string(),
            Self::EmptyResponse | Self::MalformedResponse(_) | Self::Transport(_) => {
                GENERIC_FAILURE.to_string()
            }
        }
    }
}
