use humbug_core::game::GameState;
use humbug_core::model::{BankNumber, Session, SessionId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LobbyCardVm {
    pub id: SessionId,
    pub title: String,
    pub description: String,
    pub tagline: String,
    pub progress: u32,
    /// One entry per bank; `true` once that bank is cleared.
    pub pips: Vec<bool>,
    pub next_bank: Option<BankNumber>,
    pub button_label: String,
}

impl LobbyCardVm {
    #[must_use]
    pub fn new(session: &Session, state: &GameState) -> Self {
        let progress = state.progress_for(session.id());
        let next_bank = session.next_bank(progress);
        let button_label = match next_bank {
            Some(bank) => format!("BANK {bank}"),
            None => "✓ DONE".to_string(),
        };

        Self {
            id: session.id(),
            title: session.title().to_string(),
            description: session.description().to_string(),
            tagline: session.tagline().to_string(),
            progress,
            pips: (1..=session.bank_count())
                .map(|bank| u32::try_from(bank).is_ok_and(|bank| bank <= progress))
                .collect(),
            next_bank,
            button_label,
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.next_bank.is_none()
    }
}

#[must_use]
pub fn map_lobby_cards(sessions: &[Session], state: &GameState) -> Vec<LobbyCardVm> {
    sessions
        .iter()
        .map(|session| LobbyCardVm::new(session, state))
        .collect()
}
