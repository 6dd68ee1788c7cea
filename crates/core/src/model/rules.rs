use thiserror::Error;

use crate::model::bank::BANK_SIZE;

/// Highest competence score; a perfect bank pins the meter here.
pub const MAX_SCORE: u32 = 100;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RulesError {
    #[error("starting score must be between 1 and 100")]
    InvalidStartingScore,

    #[error("strike limit must be > 0")]
    InvalidStrikeLimit,

    #[error("pass threshold must be between 1 and 10")]
    InvalidPassThreshold,
}

/// Scoring knobs for the game state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    starting_score: u32,
    correct_bonus: u32,
    wrong_penalty: u32,
    max_strikes: u32,
    pass_threshold: u32,
}

impl GameRules {
    /// The house rules:
    /// - meter starts at 50
    /// - +12 per correct answer, -20 per miss
    /// - 3 strikes and you are out
    /// - 7/10 clears a bank
    #[must_use]
    pub fn standard() -> Self {
        Self {
            starting_score: 50,
            correct_bonus: 12,
            wrong_penalty: 20,
            max_strikes: 3,
            pass_threshold: 7,
        }
    }

    /// # Errors
    ///
    /// Returns `RulesError` when a knob falls outside its valid range.
    pub fn new(
        starting_score: u32,
        correct_bonus: u32,
        wrong_penalty: u32,
        max_strikes: u32,
        pass_threshold: u32,
    ) -> Result<Self, RulesError> {
        if starting_score == 0 || starting_score > MAX_SCORE {
            return Err(RulesError::InvalidStartingScore);
        }
        if max_strikes == 0 {
            return Err(RulesError::InvalidStrikeLimit);
        }
        let bank_size = u32::try_from(BANK_SIZE).unwrap_or(u32::MAX);
        if pass_threshold == 0 || pass_threshold > bank_size {
            return Err(RulesError::InvalidPassThreshold);
        }

        Ok(Self {
            starting_score,
            correct_bonus,
            wrong_penalty,
            max_strikes,
            pass_threshold,
        })
    }

    #[must_use]
    pub fn starting_score(&self) -> u32 {
        self.starting_score
    }

    #[must_use]
    pub fn correct_bonus(&self) -> u32 {
        self.correct_bonus
    }

    #[must_use]
    pub fn wrong_penalty(&self) -> u32 {
        self.wrong_penalty
    }

    #[must_use]
    pub fn max_strikes(&self) -> u32 {
        self.max_strikes
    }

    #[must_use]
    pub fn pass_threshold(&self) -> u32 {
        self.pass_threshold
    }

    /// Score after a correct answer, clamped to `MAX_SCORE`.
    #[must_use]
    pub fn reward(&self, score: u32) -> u32 {
        score.saturating_add(self.correct_bonus).min(MAX_SCORE)
    }

    /// Score after a miss, clamped to 0.
    #[must_use]
    pub fn penalize(&self, score: u32) -> u32 {
        score.saturating_sub(self.wrong_penalty)
    }

    #[must_use]
    pub fn is_pass(&self, total_correct: u32) -> bool {
        total_correct >= self.pass_threshold
    }
}

impl Default for GameRules {
    fn default() -> Self {
        Self::standard()
    }
}
