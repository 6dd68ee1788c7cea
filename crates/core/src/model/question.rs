use thiserror::Error;

use crate::model::ids::QuestionId;

/// Fewest choices a question may offer.
pub const MIN_CHOICES: usize = 2;
/// Most choices a question may offer (rendered as A-D).
pub const MAX_CHOICES: usize = 4;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("question needs 2 to 4 choices, got {count}")]
    ChoiceCount { count: usize },

    #[error("choice {index} is empty")]
    EmptyChoice { index: usize },

    #[error("correct index {index} is out of range for {count} choices")]
    CorrectIndexOutOfRange { index: usize, count: usize },

    #[error("insight cannot be empty")]
    EmptyInsight,
}

/// A single multiple-choice question with the insight shown after a miss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    text: String,
    choices: Vec<String>,
    correct_index: usize,
    insight: String,
}

impl Question {
    /// Build a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt, choices, correct index or insight are invalid.
    pub fn new(
        id: QuestionId,
        text: impl Into<String>,
        choices: Vec<String>,
        correct_index: usize,
        insight: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let text = text.into().trim().to_string();
        if text.is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }

        let count = choices.len();
        if !(MIN_CHOICES..=MAX_CHOICES).contains(&count) {
            return Err(QuestionError::ChoiceCount { count });
        }
        if let Some(index) = choices.iter().position(|choice| choice.trim().is_empty()) {
            return Err(QuestionError::EmptyChoice { index });
        }
        if correct_index >= count {
            return Err(QuestionError::CorrectIndexOutOfRange {
                index: correct_index,
                count,
            });
        }

        let insight = insight.into().trim().to_string();
        if insight.is_empty() {
            return Err(QuestionError::EmptyInsight);
        }

        Ok(Self {
            id,
            text,
            choices,
            correct_index,
            insight,
        })
    }

    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    #[must_use]
    pub fn choice_count(&self) -> usize {
        self.choices.len()
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    #[must_use]
    pub fn insight(&self) -> &str {
        &self.insight
    }

    #[must_use]
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct_index
    }
}
