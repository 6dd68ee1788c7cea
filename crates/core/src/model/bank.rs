use thiserror::Error;

use crate::model::ids::BankNumber;
use crate::model::question::Question;

/// Every bank holds exactly this many questions.
pub const BANK_SIZE: usize = 10;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BankError {
    #[error("bank numbers start at 1")]
    InvalidNumber,

    #[error("bank must contain exactly 10 questions, got {len}")]
    WrongSize { len: usize },
}

/// Fixed sequence of questions played in one sitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bank {
    number: BankNumber,
    questions: Vec<Question>,
}

impl Bank {
    /// # Errors
    ///
    /// Returns `BankError::InvalidNumber` for bank `0` and
    /// `BankError::WrongSize` unless exactly `BANK_SIZE` questions are given.
    pub fn new(number: BankNumber, questions: Vec<Question>) -> Result<Self, BankError> {
        if number.index().is_none() {
            return Err(BankError::InvalidNumber);
        }
        if questions.len() != BANK_SIZE {
            return Err(BankError::WrongSize {
                len: questions.len(),
            });
        }
        Ok(Self { number, questions })
    }

    #[must_use]
    pub fn number(&self) -> BankNumber {
        self.number
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Index of the final question; answering it completes the bank.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.questions.len().saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_question;

    #[test]
    fn requires_exactly_ten_questions() {
        let nine = (0..9).map(|i| sample_question(&format!("q{i}"), 0)).collect();
        let err = Bank::new(BankNumber::first(), nine).unwrap_err();
        assert_eq!(err, BankError::WrongSize { len: 9 });

        let ten = (0..10).map(|i| sample_question(&format!("q{i}"), 0)).collect();
        let bank = Bank::new(BankNumber::first(), ten).unwrap();
        assert_eq!(bank.len(), BANK_SIZE);
        assert_eq!(bank.last_index(), 9);
    }

    #[test]
    fn rejects_bank_zero() {
        let ten = (0..10).map(|i| sample_question(&format!("q{i}"), 0)).collect();
        let err = Bank::new(BankNumber::new(0), ten).unwrap_err();
        assert_eq!(err, BankError::InvalidNumber);
    }
}
