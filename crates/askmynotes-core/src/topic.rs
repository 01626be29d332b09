//! Topic identifiers for the reference subject areas.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the four fixed reference subject areas.
///
/// Serialised as the lowercase id (`"python"`, `"dsa"`, `"ml"`, `"general"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicId {
    Python,
    Dsa,
    Ml,
    #[default]
    General,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown topic '{0}' (expected one of: python, dsa, ml, general)")]
pub struct ParseTopicError(pub String);

impl TopicId {
    /// Every topic id, in display order.
    pub const ALL: [TopicId; 4] = [Self::Python, Self::Dsa, Self::Ml, Self::General];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Dsa => "dsa",
            Self::Ml => "ml",
            Self::General => "general",
        }
    }
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TopicId {
    type Err = ParseTopicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ParseTopicError(s.to_string()))
    }
}
