//! Performance recaps ("briefs") shown on the results screen.

mod canned;
mod fallback;
mod llm;

use async_trait::async_trait;

use crate::error::BriefError;

pub use canned::{CannedBriefGenerator, session_flavor};
pub use fallback::FallbackBriefGenerator;
pub use llm::{BriefLlmConfig, LlmBriefGenerator};

/// Produces a short narrative recap for a finished bank.
#[async_trait]
pub trait BriefGenerator: Send + Sync {
    /// Generate a brief for `correct` answers out of ten in `session_title`.
    ///
    /// # Errors
    ///
    /// Returns `BriefError` if the generator is disabled or its backend fails.
    async fn generate_brief(&self, correct: u32, session_title: &str)
    -> Result<String, BriefError>;
}

/// Performance band a brief is written for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BriefTier {
    Excellent,
    Good,
    Poor,
    Terrible,
}

impl BriefTier {
    #[must_use]
    pub fn for_correct(correct: u32) -> Self {
        match correct {
            9.. => Self::Excellent,
            7..=8 => Self::Good,
            4..=6 => Self::Poor,
            _ => Self::Terrible,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Poor => "poor",
            Self::Terrible => "terrible",
        }
    }
}
