use thiserror::Error;

use crate::model::bank::Bank;
use crate::model::ids::{BankNumber, SessionId};

/// Upper bound on banks per session; also the cap on session progress.
pub const MAX_BANKS: u32 = 3;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("session title cannot be empty")]
    EmptyTitle,

    #[error("session must contain at least one bank")]
    NoBanks,

    #[error("session may contain at most 3 banks, got {count}")]
    TooManyBanks { count: usize },

    #[error("bank {found} is out of order (expected bank {expected})")]
    BankOutOfOrder { expected: u32, found: u32 },
}

/// Themed group of banks sharing a title and description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    id: SessionId,
    title: String,
    description: String,
    tagline: String,
    banks: Vec<Bank>,
}

impl Session {
    /// Build a session. Banks must be numbered 1, 2, 3 in order.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the title is empty or the bank list is
    /// empty, too long or out of order.
    pub fn new(
        id: SessionId,
        title: impl Into<String>,
        description: impl Into<String>,
        tagline: impl Into<String>,
        banks: Vec<Bank>,
    ) -> Result<Self, SessionError> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(SessionError::EmptyTitle);
        }
        if banks.is_empty() {
            return Err(SessionError::NoBanks);
        }
        let max = usize::try_from(MAX_BANKS).unwrap_or(usize::MAX);
        if banks.len() > max {
            return Err(SessionError::TooManyBanks { count: banks.len() });
        }
        for (expected, bank) in (1_u32..).zip(&banks) {
            if bank.number().value() != expected {
                return Err(SessionError::BankOutOfOrder {
                    expected,
                    found: bank.number().value(),
                });
            }
        }

        Ok(Self {
            id,
            title,
            description: description.into(),
            tagline: tagline.into(),
            banks,
        })
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn tagline(&self) -> &str {
        &self.tagline
    }

    #[must_use]
    pub fn banks(&self) -> &[Bank] {
        &self.banks
    }

    #[must_use]
    pub fn bank(&self, number: BankNumber) -> Option<&Bank> {
        self.banks.get(number.index()?)
    }

    #[must_use]
    pub fn bank_count(&self) -> usize {
        self.banks.len()
    }

    /// Bank to play once `cleared` banks are done, or `None` when every bank
    /// of this session has been cleared.
    #[must_use]
    pub fn next_bank(&self, cleared: u32) -> Option<BankNumber> {
        let count = u32::try_from(self.banks.len()).unwrap_or(MAX_BANKS);
        (cleared < count.min(MAX_BANKS)).then(|| BankNumber::new(cleared + 1))
    }
}
