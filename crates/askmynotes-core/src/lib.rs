//! Core types for AskMyNotes: reference topics, analysis requests and results.

pub mod analysis;
pub mod dataset;
mod error;
pub mod topic;

pub use analysis::{AnalysisRequest, AnalysisResult};
pub use dataset::{Topic, lookup, topics};
pub use error::ValidationError;
pub use topic::{ParseTopicError, TopicId};
