use std::time::Duration;

/// How long transient effects stay on screen.
///
/// The answer channel is closed for the whole time a reaction or insight is
/// visible, so these values double as the input cooldown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EffectTimings {
    pub correct_reaction: Duration,
    pub wrong_reaction: Duration,
    pub insight: Duration,
}

impl EffectTimings {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            correct_reaction: Duration::from_millis(800),
            wrong_reaction: Duration::from_millis(1200),
            insight: Duration::from_millis(3000),
        }
    }

    /// Every effect clears on the next scheduler tick.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            correct_reaction: Duration::ZERO,
            wrong_reaction: Duration::ZERO,
            insight: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn reaction(&self, correct: bool) -> Duration {
        if correct {
            self.correct_reaction
        } else {
            self.wrong_reaction
        }
    }
}

impl Default for EffectTimings {
    fn default() -> Self {
        Self::standard()
    }
}
