use humbug_core::game::GameStatus;
use humbug_core::model::{Reaction, ReactionEffect};
use services::{BriefStatus, GameSnapshot};

pub const BRIEF_LOADING: &str = "Analyzing your strategic competence";
pub const BRIEF_FALLBACK: &str = "The board is still deliberating. No brief today.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BriefVm {
    Loading,
    Text(String),
}

impl BriefVm {
    fn from_status(status: &BriefStatus) -> Self {
        match status {
            BriefStatus::Idle | BriefStatus::Pending => Self::Loading,
            BriefStatus::Ready(text) => Self::Text(format!("\"{text}\"")),
            BriefStatus::Unavailable => Self::Text(BRIEF_FALLBACK.to_string()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub correct: u32,
    pub passed: bool,
    pub verdict: &'static str,
    pub brief: BriefVm,
}

#[must_use]
pub fn map_results(snapshot: &GameSnapshot) -> Option<ResultsVm> {
    if snapshot.state.status != GameStatus::Results {
        return None;
    }
    let passed = snapshot.passed;
    Some(ResultsVm {
        correct: snapshot.state.total_correct,
        passed,
        verdict: if passed { "✓ CLEARANCE" } else { "✕ FAILED" },
        brief: BriefVm::from_status(&snapshot.brief),
    })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverlayVm {
    pub headline: &'static str,
    pub subtext: &'static str,
    pub emoji: &'static str,
    pub class: String,
}

impl From<&Reaction> for OverlayVm {
    fn from(reaction: &Reaction) -> Self {
        let effect = match reaction.effect {
            ReactionEffect::RainbowSplash => "rainbow-splash",
            ReactionEffect::PsychBurst => "psych-burst",
            ReactionEffect::Shake => "shake",
        };
        Self {
            headline: reaction.headline,
            subtext: reaction.subtext,
            emoji: reaction.emoji,
            class: format!("overlay palette-{} effect-{effect}", reaction.palette),
        }
    }
}

/// The reaction overlay, hidden on the full-screen WASTED and IPO pages.
#[must_use]
pub fn map_overlay(snapshot: &GameSnapshot) -> Option<OverlayVm> {
    if snapshot.state.status.is_terminal() {
        return None;
    }
    snapshot.state.overlay.as_ref().map(OverlayVm::from)
}
