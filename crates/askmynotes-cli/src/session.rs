//! Transient front-end state for one user's analysis loop.

use askmynotes_ai::{Analyzer, Generator};
use askmynotes_core::{AnalysisRequest, AnalysisResult, TopicId};
use tracing::{debug, error};

/// What happened when the user asked for an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A request was already in flight; the trigger did nothing.
    Ignored,
    /// Input was rejected before any request was built.
    Rejected,
    Completed,
    Failed,
}

/// Current notes, selected topic, busy flag, error, and last result.
///
/// At most one result is current. It is cleared before each new request and
/// replaced wholesale once the request finishes.
#[derive(Debug, Default)]
pub struct Session {
    pub notes: String,
    pub topic: TopicId,
    busy: bool,
    error: Option<String>,
    result: Option<AnalysisResult>,
}

impl Session {
    pub fn new(notes: impl Into<String>, topic: TopicId) -> Self {
        Self {
            notes: notes.into(),
            topic,
            ..Self::default()
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    /// Run one analysis of the current notes and topic.
    pub async fn trigger<G: Generator>(&mut self, analyzer: &Analyzer<G>) -> Outcome {
        if self.busy {
            debug!("analysis already in progress, ignoring trigger");
            return Outcome::Ignored;
        }
        let request = match AnalysisRequest::new(self.notes.as_str(), self.topic) {
            Ok(request) => request,
            Err(e) => {
                self.error = Some(e.to_string());
                return Outcome::Rejected;
            }
        };

        self.busy = true;
        self.error = None;
        self.result = None;

        let outcome = match analyzer.analyze(&request).await {
            Ok(result) => {
                self.result = Some(result);
                Outcome::Completed
            }
            Err(e) => {
                error!(error = %e, topic = %self.topic, "analysis failed");
                self.error = Some(e.user_message());
                Outcome::Failed
            }
        };

        self.busy = false;
        outcome
    }
}
