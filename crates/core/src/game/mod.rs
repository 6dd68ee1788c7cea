mod machine;
mod state;
mod timing;

pub use machine::{
    AnswerReport, GameError, GameMachine, LobbyReport, OverlayDismissal, PlayEpoch, Transition,
};
pub use state::{GameState, GameStatus};
pub use timing::EffectTimings;
