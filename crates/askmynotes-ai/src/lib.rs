//! AI layer: prompt construction, the generator seam, and the Gemini backend.

mod analyzer;
mod error;
mod generator;
pub mod prompt;

#[cfg(feature = "gemini")]
mod gemini;

pub use analyzer::Analyzer;
pub use error::{AnalysisError, GENERIC_FAILURE, GenerateError};
pub use generator::{GenerateRequest, GenerateResponse, Generator};
pub use prompt::AnalysisPrompt;

#[cfg(feature = "gemini")]
pub use gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiClient};
