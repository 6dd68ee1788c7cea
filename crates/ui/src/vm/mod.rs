mod lobby_vm;
mod outcome_vm;
mod play_vm;

pub use lobby_vm::{LobbyCardVm, map_lobby_cards};
pub use outcome_vm::{
    BRIEF_FALLBACK, BRIEF_LOADING, BriefVm, OverlayVm, ResultsVm, map_overlay, map_results,
};
pub use play_vm::{ChoiceVm, MeterMood, PlayVm, map_play};
