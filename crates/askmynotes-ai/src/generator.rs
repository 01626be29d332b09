//! The seam between analysis logic and a generative backend.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::GenerateError;

/// One structured-output generation request.
#[derive(Debug, Clone, Copy)]
pub struct GenerateRequest<'a> {
    pub api_key: &'a str,
    pub instruction: &'a str,
    /// JSON schema the backend is asked to constrain its output to.
    pub response_schema: &'a Value,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateResponse {
    /// `None` when the backend produced no text at all.
    pub text: Option<String>,
    pub model: String,
    pub tokens_used: u32,
}

/// A backend that turns an instruction plus schema into JSON text.
///
/// Implementations issue exactly one request per call and never retry.
#[async_trait]
pub trait Generator: Send + Sync {
    async fn generate(
        &self,
        request: &GenerateRequest<'_>,
    ) -> Result<GenerateResponse, GenerateError>;
}

#[async_trait]
impl<G: Generator + ?Sized> Generator for &G {
    async fn generate(
        &self,
        request: &GenerateRequest<'_>,
    ) -> Result<GenerateResponse, GenerateError> {
        (**self).generate(request).await
    }
}
