//! Deterministic fixtures for tests and doc examples.
//!
//! Every sample question has four choices; the correct one sits at the index
//! passed in, so tests can answer "right" or "wrong" without peeking.

use crate::model::{Bank, BankNumber, Question, QuestionId, Session, SessionId};

/// # Panics
///
/// Panics if `correct_index` is not in `0..4`.
#[must_use]
pub fn sample_question(id: &str, correct_index: usize) -> Question {
    Question::new(
        QuestionId::new(id),
        format!("Prompt for {id}?"),
        vec![
            "Choice A".to_string(),
            "Choice B".to_string(),
            "Choice C".to_string(),
            "Choice D".to_string(),
        ],
        correct_index,
        format!("Insight for {id}."),
    )
    .expect("sample question should be valid")
}

/// A full bank whose every question is answered correctly by `correct_index`.
///
/// # Panics
///
/// Panics if `number` is `0` or `correct_index` is not in `0..4`.
#[must_use]
pub fn sample_bank(number: u32, correct_index: usize) -> Bank {
    let questions = (0..10)
        .map(|i| sample_question(&format!("b{number}-q{}", i + 1), correct_index))
        .collect();
    Bank::new(BankNumber::new(number), questions).expect("sample bank should be valid")
}

/// Session with three banks; the correct answer is always choice `0`.
///
/// # Panics
///
/// Panics if `title` is blank.
#[must_use]
pub fn sample_session(id: u64, title: &str) -> Session {
    Session::new(
        SessionId::new(id),
        title,
        format!("{title} description"),
        format!("{title} tagline"),
        (1..=3).map(|n| sample_bank(n, 0)).collect(),
    )
    .expect("sample session should be valid")
}

/// Choice index that answers every sample question correctly.
pub const RIGHT: usize = 0;
/// Choice index that misses every sample question.
pub const WRONG: usize = 1;
