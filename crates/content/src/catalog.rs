//! JSON catalog format.
//!
//! Records mirror the domain types one-to-one so the file stays readable by
//! hand; every record is validated on the way in.

use std::collections::BTreeSet;

use humbug_core::model::{
    Bank, BankError, BankNumber, Question, QuestionError, QuestionId, Session, SessionError,
    SessionId,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while parsing or validating a catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog is not valid JSON: {0}")]
    Parse(String),

    #[error("catalog contains no sessions")]
    Empty,

    #[error("duplicate session id {0}")]
    DuplicateSession(SessionId),

    #[error("session {session} bank {bank} question {index}: {source}")]
    Question {
        session: SessionId,
        bank: u32,
        index: usize,
        #[source]
        source: QuestionError,
    },

    #[error("session {session} bank {bank}: {source}")]
    Bank {
        session: SessionId,
        bank: u32,
        #[source]
        source: BankError,
    },

    #[error("session {session}: {source}")]
    Session {
        session: SessionId,
        #[source]
        source: SessionError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFile {
    pub sessions: Vec<SessionRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: u64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tagline: String,
    pub banks: Vec<BankRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankRecord {
    pub questions: Vec<QuestionRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub id: String,
    pub text: String,
    pub choices: Vec<String>,
    pub correct_index: usize,
    pub insight: String,
}

impl CatalogFile {
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` when `raw` is not a catalog document.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(raw).map_err(|e| CatalogError::Parse(e.to_string()))
    }

    /// Validate every record into domain sessions, keeping file order.
    ///
    /// # Errors
    ///
    /// Returns the first `CatalogError` found.
    pub fn into_sessions(self) -> Result<Vec<Session>, CatalogError> {
        if self.sessions.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = BTreeSet::new();
        let mut sessions = Vec::with_capacity(self.sessions.len());
        for record in self.sessions {
            let id = SessionId::new(record.id);
            if !seen.insert(id) {
                return Err(CatalogError::DuplicateSession(id));
            }
            sessions.push(record.into_session()?);
        }
        Ok(sessions)
    }
}

impl SessionRecord {
    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        Self {
            id: session.id().value(),
            title: session.title().to_owned(),
            description: session.description().to_owned(),
            tagline: session.tagline().to_owned(),
            banks: session.banks().iter().map(BankRecord::from_bank).collect(),
        }
    }

    /// # Errors
    ///
    /// Returns `CatalogError` naming the session, bank and question that
    /// failed validation.
    pub fn into_session(self) -> Result<Session, CatalogError> {
        let session = SessionId::new(self.id);
        let mut banks = Vec::with_capacity(self.banks.len());
        for (number, bank) in (1_u32..).zip(self.banks) {
            banks.push(bank.into_bank(session, number)?);
        }
        Session::new(session, self.title, self.description, self.tagline, banks)
            .map_err(|source| CatalogError::Session { session, source })
    }
}

impl BankRecord {
    #[must_use]
    pub fn from_bank(bank: &Bank) -> Self {
        Self {
            questions: bank
                .questions()
                .iter()
                .map(QuestionRecord::from_question)
                .collect(),
        }
    }

    fn into_bank(self, session: SessionId, number: u32) -> Result<Bank, CatalogError> {
        let mut questions = Vec::with_capacity(self.questions.len());
        for (index, question) in self.questions.into_iter().enumerate() {
            let question = question
                .into_question()
                .map_err(|source| CatalogError::Question {
                    session,
                    bank: number,
                    index,
                    source,
                })?;
            questions.push(question);
        }
        Bank::new(BankNumber::new(number), questions).map_err(|source| CatalogError::Bank {
            session,
            bank: number,
            source,
        })
    }
}

impl QuestionRecord {
    #[must_use]
    pub fn from_question(question: &Question) -> Self {
        Self {
            id: question.id().as_str().to_owned(),
            text: question.text().to_owned(),
            choices: question.choices().to_vec(),
            correct_index: question.correct_index(),
            insight: question.insight().to_owned(),
        }
    }

    /// # Errors
    ///
    /// Returns `QuestionError` if the record fails domain validation.
    pub fn into_question(self) -> Result<Question, QuestionError> {
        Question::new(
            QuestionId::new(self.id),
            self.text,
            self.choices,
            self.correct_index,
            self.insight,
        )
    }
}
