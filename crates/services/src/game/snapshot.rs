use humbug_core::game::{GameMachine, GameState};
use humbug_core::model::Question;

/// Lifecycle of the results-screen brief.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum BriefStatus {
    #[default]
    Idle,
    Pending,
    Ready(String),
    Unavailable,
}

/// Everything a renderer needs, published after every transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSnapshot {
    pub state: GameState,
    pub input_open: bool,
    /// Whether the current correct count meets the pass threshold.
    pub passed: bool,
    pub max_strikes: u32,
    pub brief: BriefStatus,
    pub session_title: Option<String>,
    pub question: Option<Question>,
}

impl GameSnapshot {
    #[must_use]
    pub fn capture(machine: &GameMachine, brief: &BriefStatus) -> Self {
        Self {
            state: machine.state().clone(),
            input_open: machine.is_input_open(),
            passed: machine.passed(),
            max_strikes: machine.rules().max_strikes(),
            brief: brief.clone(),
            session_title: machine.current_session_title().map(str::to_owned),
            question: machine.current_question().cloned(),
        }
    }
}
