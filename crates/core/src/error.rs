use thiserror::Error;

use crate::game::GameError;
use crate::model::{BankError, QuestionError, RulesError, SessionError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Bank(#[from] BankError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Rules(#[from] RulesError),
    #[error(transparent)]
    Game(#[from] GameError),
}
