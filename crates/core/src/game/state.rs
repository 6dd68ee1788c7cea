use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{BankNumber, GameRules, Reaction, SessionId};

/// Lifecycle of one play session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    Lobby,
    Playing,
    Results,
    Wasted,
    Ipo,
}

impl GameStatus {
    /// `Wasted` and `Ipo` end the play outright.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Wasted | Self::Ipo)
    }
}

/// Observable game state, re-emitted after every transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub status: GameStatus,
    pub current_session_id: Option<SessionId>,
    pub current_bank: Option<BankNumber>,
    pub current_question_index: usize,
    pub competence_score: u32,
    pub consecutive_wrong: u32,
    pub total_correct: u32,
    pub total_wrong: u32,
    /// Banks cleared per session; lives for the whole process.
    pub session_progress: BTreeMap<SessionId, u32>,
    pub last_brief: Option<String>,
    pub show_insight: Option<String>,
    pub overlay: Option<Reaction>,
}

impl GameState {
    #[must_use]
    pub fn lobby(rules: &GameRules) -> Self {
        Self {
            status: GameStatus::Lobby,
            current_session_id: None,
            current_bank: None,
            current_question_index: 0,
            competence_score: rules.starting_score(),
            consecutive_wrong: 0,
            total_correct: 0,
            total_wrong: 0,
            session_progress: BTreeMap::new(),
            last_brief: None,
            show_insight: None,
            overlay: None,
        }
    }

    /// Answers are accepted only while playing with nothing on screen.
    #[must_use]
    pub fn is_input_open(&self) -> bool {
        self.status == GameStatus::Playing && self.overlay.is_none() && self.show_insight.is_none()
    }

    #[must_use]
    pub fn progress_for(&self, session_id: SessionId) -> u32 {
        self.session_progress.get(&session_id).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lobby_defaults() {
        let state = GameState::lobby(&GameRules::standard());
        assert_eq!(state.status, GameStatus::Lobby);
        assert_eq!(state.competence_score, 50);
        assert!(state.current_session_id.is_none());
        assert!(!state.is_input_open());
        assert_eq!(state.progress_for(SessionId::new(1)), 0);
    }

    #[test]
    fn status_classification() {
        assert!(GameStatus::Wasted.is_terminal());
        assert!(GameStatus::Ipo.is_terminal());
        assert!(!GameStatus::Results.is_terminal());
        assert!(!GameStatus::Playing.is_terminal());
    }
}
