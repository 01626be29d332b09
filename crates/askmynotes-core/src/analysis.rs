//! Request and result types for a single notes analysis.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::topic::TopicId;

/// A validated request to analyse a block of study notes.
///
/// Only constructible through [`AnalysisRequest::new`], so holders of this
/// type always have notes that are non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    notes: String,
    topic: TopicId,
}

impl AnalysisRequest {
    /// Validate `notes` and pair them with a topic.
    ///
    /// The notes are kept verbatim; trimming is only used for the emptiness check.
    pub fn new(notes: impl Into<String>, topic: TopicId) -> Result<Self, ValidationError> {
        let notes = notes.into();
        if notes.trim().is_empty() {
            return Err(ValidationError::EmptyNotes);
        }
        Ok(Self { notes, topic })
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn topic(&self) -> TopicId {
        self.topic
    }
}

/// The three-part study material produced for a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub explanation: String,
    /// Newline-delimited, bullet-style lines.
    pub summary: String,
    #[serde(rename = "examQuestions")]
    pub exam_questions: Vec<String>,
}

impl AnalysisResult {
    /// Non-blank summary lines with one leading bullet marker removed.
    ///
    /// A marker only counts when whitespace follows it, so `**bold**` and
    /// `--flag` lines are left alone.
    pub fn summary_points(&self) -> impl Iterator<Item = &str> {
        self.summary
            .lines()
            .map(|line| {
                let line = line.trim();
                match line.strip_prefix(['-', '*', '•']) {
                    Some(rest) if rest.starts_with(char::is_whitespace) => rest.trim_start(),
                    _ => line,
                }
            })
            .filter(|line| !line.is_empty())
    }
}
