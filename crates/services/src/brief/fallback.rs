use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use super::{BriefGenerator, CannedBriefGenerator};
use crate::error::BriefError;

/// Tries `primary` first and falls back to canned copy on any error.
pub struct FallbackBriefGenerator {
    primary: Arc<dyn BriefGenerator>,
    fallback: CannedBriefGenerator,
}

impl FallbackBriefGenerator {
    #[must_use]
    pub fn new(primary: Arc<dyn BriefGenerator>, fallback: CannedBriefGenerator) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl BriefGenerator for FallbackBriefGenerator {
    async fn generate_brief(
        &self,
        correct: u32,
        session_title: &str,
    ) -> Result<String, BriefError> {
        match self.primary.generate_brief(correct, session_title).await {
            Ok(brief) => Ok(brief),
            Err(BriefError::Disabled) => Ok(self.fallback.compose(correct, session_title)),
            Err(err) => {
                warn!(error = %err, "brief backend failed; using canned brief");
                Ok(self.fallback.compose(correct, session_title))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use humbug_core::rng::FixedRandom;

    struct Failing;

    #[async_trait]
    impl BriefGenerator for Failing {
        async fn generate_brief(&self, _: u32, _: &str) -> Result<String, BriefError> {
            Err(BriefError::EmptyResponse)
        }
    }

    struct Fixed(&'static str);

    #[async_trait]
    impl BriefGenerator for Fixed {
        async fn generate_brief(&self, _: u32, _: &str) -> Result<String, BriefError> {
            Ok(self.0.to_string())
        }
    }

    fn canned() -> CannedBriefGenerator {
        CannedBriefGenerator::new(Box::new(FixedRandom(0)))
    }

    #[tokio::test]
    async fn uses_primary_when_it_succeeds() {
        let generator = FallbackBriefGenerator::new(Arc::new(Fixed("Sharp.")), canned());
        assert_eq!(generator.generate_brief(9, "Loyalty").await.unwrap(), "Sharp.");
    }

    #[tokio::test]
    async fn falls_back_on_failure() {
        let generator = FallbackBriefGenerator::new(Arc::new(Failing), canned());
        let brief = generator.generate_brief(9, "Loyalty").await.unwrap();
        assert!(brief.starts_with("Your strategic acumen"));
        assert!(brief.ends_with("Byron Sharp nods approvingly."));
    }
}
