//! Single-shot notes analysis over a [`Generator`].
//!
//! One call to [`Analyzer::analyze`] performs at most one generator request.
//! Nothing is cached, deduplicated, or retried, and concurrent calls are not
//! serialised here.

use std::time::Instant;

use askmynotes_core::{AnalysisRequest, AnalysisResult, TopicId};
use tracing::{error, info, warn};

use crate::error::AnalysisError;
use crate::generator::{GenerateRequest, Generator};
use crate::prompt;

/// Produces explanations, summaries, and exam questions for study notes.
pub struct Analyzer<G> {
    generator: G,
    api_key: Option<String>,
}

impl<G: Generator> Analyzer<G> {
    /// `api_key` may be absent; every analysis then fails with
    /// [`AnalysisError::Configuration`] without touching the generator.
    pub fn new(generator: G, api_key: Option<String>) -> Self {
        Self { generator, api_key }
    }

    fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// Validate raw notes, then analyse them.
    pub async fn analyze_notes(
        &self,
        notes: &str,
        topic: TopicId,
    ) -> Result<AnalysisResult, AnalysisError> {
        let request = AnalysisRequest::new(notes, topic)?;
        self.analyze(&request).await
    }

    /// Run one analysis against the generator.
    pub async fn analyze(
        &self,
        request: &AnalysisRequest,
    ) -> Result<AnalysisResult, AnalysisError> {
        let api_key = self.credential().ok_or(AnalysisError::Configuration)?;

        let prompt = prompt::build(request);
        let start = Instant::now();
        info!(topic = %request.topic(), notes_len = request.notes().len(), "starting analysis");

        let response = self
            .generator
            .generate(&GenerateRequest {
                api_key,
                instruction: &prompt.instruction_text,
                response_schema: &prompt.output_contract,
            })
            .await
            .inspect_err(|e| error!(error = %e, "generation request failed"))?;

        let text = match response.text {
            Some(text) if !text.is_empty() => text,
            _ => {
                warn!(model = %response.model, "generator returned no text");
                return Err(AnalysisError::EmptyResponse);
            }
        };

        let result: AnalysisResult = serde_json::from_str(&text).map_err(|e| {
            error!(
                error = %e,
                raw = %text.chars().take(200).collect::<String>(),
                "could not parse analysis response"
            );
            AnalysisError::MalformedResponse(e)
        })?;

        info!(
            model = %response.model,
            tokens_used = response.tokens_used,
            questions = result.exam_questions.len(),
            elapsed = ?start.elapsed(),
            "analysis complete"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenerateError;
    use crate::generator::GenerateResponse;
    use askmynotes_core::{ValidationError, lookup};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Replays a canned reply and records every request it sees.
    struct FakeGenerator {
        reply: Result<Option<String>, u16>,
        seen: Mutex<Vec<(String, String)>>,
    }

    impl FakeGenerator {
        fn replying(text: Option<&str>) -> Self {
            Self {
                reply: Ok(text.map(String::from)),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                reply: Err(status),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.seen.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl Generator for FakeGenerator {
        async fn generate(
            &self,
            request: &GenerateRequest<'_>,
        ) -> Result<GenerateResponse, GenerateError> {
            self.seen
                .lock()
                .unwrap()
                .push((request.api_key.to_string(), request.instruction.to_string()));
            match &self.reply {
                Ok(text) => Ok(GenerateResponse {
                    text: text.clone(),
                    model: "fake".into(),
                    tokens_used: 7,
                }),
                Err(status) => Err(GenerateError::Server {
                    status: *status,
                    body: "rejected".into(),
                }),
            }
        }
    }

    fn analyzer(fake: &FakeGenerator) -> Analyzer<&FakeGenerator> {
        Analyzer::new(fake, Some("key-123".into()))
    }

    const GOOD: &str = r#"{"explanation":"E","summary":"S1\nS2","examQuestions":["Q1","Q2","Q3"]}"#;

    #[tokio::test]
    async fn returns_parsed_values_unmodified() {
        let fake = FakeGenerator::replying(Some(GOOD));
        let result = analyzer(&fake)
            .analyze_notes("Lists are ordered, mutable sequences.", TopicId::Python)
            .await
            .unwrap();

        assert_eq!(
            result,
            AnalysisResult {
                explanation: "E".into(),
                summary: "S1\nS2".into(),
                exam_questions: vec!["Q1".into(), "Q2".into(), "Q3".into()],
            }
        );
        assert_eq!(fake.calls(), 1);
    }

    #[tokio::test]
    async fn whitespace_is_not_trimmed_from_values() {
        let fake = FakeGenerator::replying(Some(
            r#"{"explanation":"  E ","summary":"\n- a\n","examQuestions":[" Q "]}"#,
        ));
        let result = analyzer(&fake)
            .analyze_notes("notes", TopicId::General)
            .await
            .unwrap();
        assert_eq!(result.explanation, "  E ");
        assert_eq!(result.summary, "\n- a\n");
        assert_eq!(result.exam_questions, vec![" Q "]);
    }

    #[tokio::test]
    async fn question_count_is_not_enforced() {
        let fake = FakeGenerator::replying(Some(
            r#"{"explanation":"E","summary":"S","examQuestions":["only one"]}"#,
        ));
        let result = analyzer(&fake)
            .analyze_notes("notes", TopicId::Dsa)
            .await
            .unwrap();
        assert_eq!(result.exam_questions.len(), 1);
    }

    #[tokio::test]
    async fn sends_built_prompt_and_key() {
        let fake = FakeGenerator::replying(Some(GOOD));
        let notes = "Lists are ordered, mutable sequences.";
        analyzer(&fake)
            .analyze_notes(notes, TopicId::Python)
            .await
            .unwrap();

        let seen = fake.seen.lock().unwrap();
        let (key, instruction) = &seen[0];
        assert_eq!(key, "key-123");
        assert!(instruction.contains(notes));
        assert!(instruction.contains(lookup(TopicId::Python).content));
    }

    #[tokio::test]
    async fn blank_notes_never_reach_generator() {
        let fake = FakeGenerator::replying(Some(GOOD));
        for notes in ["", "  \n\t"] {
            let err = analyzer(&fake)
                .analyze_notes(notes, TopicId::Ml)
                .await
                .unwrap_err();
            assert!(matches!(
                err,
                AnalysisError::Validation(ValidationError::EmptyNotes)
            ));
        }
        assert_eq!(fake.calls(), 0);
    }

    #[tokio::test]
    async fn missing_key_fails_before_generation() {
        let fake = FakeGenerator::replying(Some(GOOD));
        for key in [None, Some(String::new()), Some("   ".to_string())] {
            let analyzer = Analyzer::new(&fake, key);
            let err = analyzer
                .analyze_notes("notes", TopicId::General)
                .await
                .unwrap_err();
            assert!(matches!(err, AnalysisError::Configuration));
        }
        assert_eq!(fake.calls(), 0);
    }

    #[tokio::test]
    async fn empty_text_is_empty_response() {
        for text in [None, Some("")] {
            let fake = FakeGenerator::replying(text);
            let err = analyzer(&fake)
                .analyze_notes("notes", TopicId::General)
                .await
                .unwrap_err();
            assert!(matches!(err, AnalysisError::EmptyResponse));
        }
    }

    #[tokio::test]
    async fn non_json_text_is_malformed_response() {
        let fake = FakeGenerator::replying(Some("not json"));
        let err = analyzer(&fake)
            .analyze_notes("notes", TopicId::General)
            .await
            .unwrap_err();
        assert!(matches!(err, AnalysisError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn contract_violation_is_malformed_response() {
        let fake = FakeGenerator::replying(Some(r#"{"explanation":"E","summary":"S"}"#));
        let err = analyzer(&fake)
            .analyze_notes("notes", TopicId::General)
            .await
            .unwrap_err();
        assert!(matches!(err, AnalysisError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn transport_error_propagates_unchanged() {
        let fake = FakeGenerator::failing(503);
        let err = analyzer(&fake)
            .analyze_notes("notes", TopicId::General)
            .await
            .unwrap_err();
        match err {
            AnalysisError::Transport(GenerateError::Server { status, body }) => {
                assert_eq!(status, 503);
                assert_eq!(body, "rejected");
            }
            other => panic!("expected transport error, got {other:?}"),
        }
        assert_eq!(fake.calls(), 1);
    }
}
