mod bank;
mod ids;
mod question;
mod reaction;
mod rules;
mod session;

pub use ids::{BankNumber, QuestionId, SessionId};

pub use bank::{BANK_SIZE, Bank, BankError};
pub use question::{MAX_CHOICES, MIN_CHOICES, Question, QuestionError};
pub use reaction::{CELEBRATORY, PUNITIVE, Reaction, ReactionEffect, ReactionTone};
pub use rules::{GameRules, MAX_SCORE, RulesError};
pub use session::{MAX_BANKS, Session, SessionError};
