use std::fmt;

use thiserror::Error;

use crate::model::{
    Bank, BankNumber, GameRules, MAX_BANKS, MAX_SCORE, Question, QuestionId, Reaction,
    ReactionTone, Session, SessionId,
};
use crate::rng::RandomSource;

use super::state::{GameState, GameStatus};

// ─── ERRORS ────────────────────────────────────────────────────────────────────

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("session {session} has no bank {bank}")]
    BankNotFound { session: SessionId, bank: BankNumber },

    #[error("answers are only accepted while playing")]
    NotPlaying,

    #[error("answer input is locked while a reaction or insight is showing")]
    InputLocked,

    #[error("choice {choice} is out of range for {count} choices")]
    ChoiceOutOfRange { choice: usize, count: usize },

    #[error("no question at index {index}")]
    NoQuestion { index: usize },

    #[error("already in the lobby")]
    NotInPlay,

    #[error("a session can only be started from the lobby")]
    NotInLobby,
}

// ─── REPORTS ───────────────────────────────────────────────────────────────────

/// Generation counter for a play session.
///
/// Bumped by `start_session` and `return_to_lobby`. Delayed effects carry the
/// epoch they were scheduled under and are ignored once it is stale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayEpoch(u64);

impl PlayEpoch {
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }

    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for PlayEpoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a single answer moved the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Advanced,
    Wasted,
    Ipo,
    Results,
}

impl Transition {
    #[must_use]
    pub fn status(self) -> GameStatus {
        match self {
            Self::Advanced => GameStatus::Playing,
            Self::Wasted => GameStatus::Wasted,
            Self::Ipo => GameStatus::Ipo,
            Self::Results => GameStatus::Results,
        }
    }
}

/// Outcome of `GameMachine::submit_answer`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerReport {
    pub epoch: PlayEpoch,
    pub question_id: QuestionId,
    pub correct: bool,
    pub reaction: Reaction,
    /// Insight queued to appear once the reaction is dismissed.
    pub insight: Option<String>,
    pub transition: Transition,
    pub competence_score: u32,
}

/// Outcome of `GameMachine::dismiss_overlay`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OverlayDismissal {
    Stale,
    Cleared { insight: Option<String> },
}

/// Outcome of `GameMachine::return_to_lobby`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LobbyReport {
    pub session_id: Option<SessionId>,
    pub passed: bool,
    pub progress: u32,
    pub epoch: PlayEpoch,
}

// ─── MACHINE ───────────────────────────────────────────────────────────────────

struct ActivePlay {
    session_title: String,
    /// Progress cap for this session: its bank count, at most `MAX_BANKS`.
    bank_cap: u32,
    bank: Bank,
    pending_insight: Option<String>,
}

/// The game state machine.
///
/// Owns the single `GameState` plus the bank currently being played. All
/// transitions are synchronous; anything timed is expressed as an
/// epoch-checked operation that a scheduler calls later.
pub struct GameMachine {
    rules: GameRules,
    state: GameState,
    active: Option<ActivePlay>,
    epoch: PlayEpoch,
}

impl GameMachine {
    #[must_use]
    pub fn new(rules: GameRules) -> Self {
        Self {
            state: GameState::lobby(&rules),
            rules,
            active: None,
            epoch: PlayEpoch::default(),
        }
    }

    #[must_use]
    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn epoch(&self) -> PlayEpoch {
        self.epoch
    }

    #[must_use]
    pub fn is_input_open(&self) -> bool {
        self.state.is_input_open()
    }

    /// The question awaiting an answer, if a bank is in play.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.state.status != GameStatus::Playing {
            return None;
        }
        self.active
            .as_ref()
            .and_then(|active| active.bank.question(self.state.current_question_index))
    }

    #[must_use]
    pub fn current_session_title(&self) -> Option<&str> {
        self.active.as_ref().map(|active| active.session_title.as_str())
    }

    #[must_use]
    pub fn progress_for(&self, session_id: SessionId) -> u32 {
        self.state.progress_for(session_id)
    }

    #[must_use]
    pub fn passed(&self) -> bool {
        self.rules.is_pass(self.state.total_correct)
    }

    /// Begin playing `bank` of `session`. Resets per-play counters and the
    /// meter; session progress is kept.
    ///
    /// # Errors
    ///
    /// Returns `GameError::NotInLobby` unless the previous play was left with
    /// `return_to_lobby`, and `GameError::BankNotFound` if the session has no
    /// such bank.
    pub fn start_session(
        &mut self,
        session: &Session,
        bank: BankNumber,
    ) -> Result<PlayEpoch, GameError> {
        if self.state.status != GameStatus::Lobby {
            return Err(GameError::NotInLobby);
        }
        let chosen = session.bank(bank).ok_or(GameError::BankNotFound {
            session: session.id(),
            bank,
        })?;

        self.epoch = self.epoch.next();
        self.active = Some(ActivePlay {
            session_title: session.title().to_string(),
            bank_cap: u32::try_from(session.bank_count())
                .unwrap_or(MAX_BANKS)
                .min(MAX_BANKS),
            bank: chosen.clone(),
            pending_insight: None,
        });

        let state = &mut self.state;
        state.status = GameStatus::Playing;
        state.current_session_id = Some(session.id());
        state.current_bank = Some(bank);
        state.current_question_index = 0;
        state.competence_score = self.rules.starting_score();
        state.consecutive_wrong = 0;
        state.total_correct = 0;
        state.total_wrong = 0;
        state.show_insight = None;
        state.overlay = None;

        Ok(self.epoch)
    }

    /// Answer the current question.
    ///
    /// Failure (strike limit or empty meter) is checked before completion, so
    /// a miss on the last question that is also the final strike is `Wasted`.
    ///
    /// # Errors
    ///
    /// Returns `GameError::NotPlaying` outside `Playing`, `GameError::InputLocked`
    /// while a reaction or insight is showing, and `GameError::ChoiceOutOfRange`
    /// for a choice the question does not have. State is untouched on error.
    pub fn submit_answer(
        &mut self,
        choice: usize,
        rng: &mut dyn RandomSource,
    ) -> Result<AnswerReport, GameError> {
        if self.state.status != GameStatus::Playing {
            return Err(GameError::NotPlaying);
        }
        if !self.state.is_input_open() {
            return Err(GameError::InputLocked);
        }
        let Some(active) = self.active.as_mut() else {
            return Err(GameError::NotPlaying);
        };

        let index = self.state.current_question_index;
        let question = active
            .bank
            .question(index)
            .ok_or(GameError::NoQuestion { index })?;
        if choice >= question.choice_count() {
            return Err(GameError::ChoiceOutOfRange {
                choice,
                count: question.choice_count(),
            });
        }

        let correct = question.is_correct(choice);
        let reaction = Reaction::pick(ReactionTone::for_answer(correct), rng);

        let prev = &self.state;
        let (score, total_correct, total_wrong, consecutive_wrong) = if correct {
            (
                self.rules.reward(prev.competence_score),
                prev.total_correct + 1,
                prev.total_wrong,
                0,
            )
        } else {
            (
                self.rules.penalize(prev.competence_score),
                prev.total_correct,
                prev.total_wrong + 1,
                prev.consecutive_wrong + 1,
            )
        };

        let bank_len = u32::try_from(active.bank.len()).unwrap_or(u32::MAX);
        let transition = if total_wrong >= self.rules.max_strikes() || score == 0 {
            Transition::Wasted
        } else if index >= active.bank.last_index() {
            if total_correct == bank_len {
                Transition::Ipo
            } else {
                Transition::Results
            }
        } else {
            Transition::Advanced
        };

        let insight = (!correct && transition == Transition::Advanced)
            .then(|| question.insight().to_string());
        let question_id = question.id().clone();
        active.pending_insight = insight.clone();

        let state = &mut self.state;
        state.total_correct = total_correct;
        state.total_wrong = total_wrong;
        state.consecutive_wrong = consecutive_wrong;
        state.overlay = Some(reaction);
        state.status = transition.status();
        state.competence_score = match transition {
            Transition::Wasted => 0,
            Transition::Ipo => MAX_SCORE,
            Transition::Results | Transition::Advanced => score,
        };
        if transition == Transition::Advanced {
            state.current_question_index = index + 1;
        }

        Ok(AnswerReport {
            epoch: self.epoch,
            question_id,
            correct,
            reaction,
            insight,
            transition,
            competence_score: state.competence_score,
        })
    }

    /// Clear the reaction overlay; a queued insight takes its place.
    pub fn dismiss_overlay(&mut self, epoch: PlayEpoch) -> OverlayDismissal {
        if epoch != self.epoch || self.state.overlay.is_none() {
            return OverlayDismissal::Stale;
        }
        self.state.overlay = None;
        let insight = self
            .active
            .as_mut()
            .and_then(|active| active.pending_insight.take());
        if insight.is_some() {
            self.state.show_insight.clone_from(&insight);
        }
        OverlayDismissal::Cleared { insight }
    }

    /// Hide the insight panel. Returns `false` when there was nothing to clear.
    pub fn clear_insight(&mut self, epoch: PlayEpoch) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.state.show_insight.take().is_some()
    }

    /// Store a generated brief. Ignored unless the same play is still on the
    /// results screen.
    pub fn record_brief(&mut self, epoch: PlayEpoch, brief: String) -> bool {
        if epoch != self.epoch || self.state.status != GameStatus::Results {
            return false;
        }
        self.state.last_brief = Some(brief);
        true
    }

    /// Leave the current play. Counts the bank as cleared when the pass
    /// threshold was met, capped at the session's bank count.
    ///
    /// # Errors
    ///
    /// Returns `GameError::NotInPlay` when already in the lobby.
    pub fn return_to_lobby(&mut self) -> Result<LobbyReport, GameError> {
        if self.state.status == GameStatus::Lobby {
            return Err(GameError::NotInPlay);
        }

        let passed = self.passed();
        let session_id = self.state.current_session_id;
        let cap = self
            .active
            .as_ref()
            .map_or(MAX_BANKS, |active| active.bank_cap);
        let mut progress = 0;
        if let Some(id) = session_id {
            let entry = self.state.session_progress.entry(id).or_insert(0);
            if passed {
                *entry = (*entry + 1).min(cap);
            }
            progress = *entry;
        }

        self.state.status = GameStatus::Lobby;
        self.state.last_brief = None;
        self.state.show_insight = None;
        self.state.overlay = None;
        self.active = None;
        self.epoch = self.epoch.next();

        Ok(LobbyReport {
            session_id,
            passed,
            progress,
            epoch: self.epoch,
        })
    }
}

impl Default for GameMachine {
    fn default() -> Self {
        Self::new(GameRules::standard())
    }
}

impl fmt::Debug for GameMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameMachine")
            .field("status", &self.state.status)
            .field("session", &self.state.current_session_id)
            .field("bank", &self.state.current_bank)
            .field("question", &self.state.current_question_index)
            .field("score", &self.state.competence_score)
            .field("epoch", &self.epoch)
            .finish_non_exhaustive()
    }
}

// ─── TESTS ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::FixedRandom;
    use crate::testing::{RIGHT, WRONG, sample_session};

    fn playing() -> GameMachine {
        let mut machine = GameMachine::default();
        machine
            .start_session(&sample_session(1, "Value Creation"), BankNumber::first())
            .unwrap();
        machine
    }

    /// Answer and immediately clear any overlay/insight so the next answer is accepted.
    fn answer(machine: &mut GameMachine, choice: usize) -> AnswerReport {
        let report = machine.submit_answer(choice, &mut FixedRandom(0)).unwrap();
        machine.dismiss_overlay(report.epoch);
        machine.clear_insight(report.epoch);
        report
    }

    #[test]
    fn start_session_resets_counters_and_keeps_progress() {
        let mut machine = playing();
        for _ in 0..7 {
            answer(&mut machine, RIGHT);
        }
        machine.return_to_lobby().unwrap();

        let epoch = machine
            .start_session(&sample_session(1, "Value Creation"), BankNumber::new(2))
            .unwrap();
        let state = machine.state();
        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.competence_score, 50);
        assert_eq!(state.total_correct, 0);
        assert_eq!(state.current_question_index, 0);
        assert_eq!(state.current_bank, Some(BankNumber::new(2)));
        assert_eq!(state.progress_for(SessionId::new(1)), 1);
        assert_eq!(epoch, machine.epoch());
    }

    #[test]
    fn start_session_rejects_missing_bank() {
        let mut machine = GameMachine::default();
        let err = machine
            .start_session(&sample_session(1, "Loyalty"), BankNumber::new(4))
            .unwrap_err();
        assert!(matches!(err, GameError::BankNotFound { .. }));
        assert_eq!(machine.state().status, GameStatus::Lobby);
    }

    #[test]
    fn correct_answer_advances_and_rewards() {
        let mut machine = playing();
        let report = answer(&mut machine, RIGHT);
        assert!(report.correct);
        assert_eq!(report.transition, Transition::Advanced);
        assert_eq!(report.reaction.tone, ReactionTone::Celebratory);
        assert!(report.insight.is_none());

        let state = machine.state();
        assert_eq!(state.competence_score, 62);
        assert_eq!(state.total_correct, 1);
        assert_eq!(state.current_question_index, 1);
    }

    #[test]
    fn wrong_answer_penalizes_and_queues_insight() {
        let mut machine = playing();
        let report = machine.submit_answer(WRONG, &mut FixedRandom(0)).unwrap();
        assert!(!report.correct);
        assert_eq!(report.insight.as_deref(), Some("Insight for b1-q1."));
        assert_eq!(report.reaction.tone, ReactionTone::Punitive);

        let state = machine.state();
        assert_eq!(state.competence_score, 30);
        assert_eq!(state.total_wrong, 1);
        assert_eq!(state.consecutive_wrong, 1);
        assert_eq!(state.current_question_index, 1);
        assert!(state.show_insight.is_none());
        assert!(state.overlay.is_some());

        let dismissal = machine.dismiss_overlay(report.epoch);
        assert_eq!(
            dismissal,
            OverlayDismissal::Cleared {
                insight: Some("Insight for b1-q1.".to_string())
            }
        );
        assert_eq!(
            machine.state().show_insight.as_deref(),
            Some("Insight for b1-q1.")
        );
        assert!(!machine.is_input_open());

        assert!(machine.clear_insight(report.epoch));
        assert!(machine.is_input_open());
    }

    #[test]
    fn input_is_locked_while_overlay_or_insight_shows() {
        let mut machine = playing();
        let report = machine.submit_answer(WRONG, &mut FixedRandom(0)).unwrap();
        let before = machine.state().clone();

        let err = machine.submit_answer(RIGHT, &mut FixedRandom(0)).unwrap_err();
        assert_eq!(err, GameError::InputLocked);
        assert_eq!(machine.state(), &before);

        machine.dismiss_overlay(report.epoch);
        let err = machine.submit_answer(RIGHT, &mut FixedRandom(0)).unwrap_err();
        assert_eq!(err, GameError::InputLocked);
    }

    #[test]
    fn three_wrong_in_a_row_is_wasted() {
        let mut machine = playing();
        answer(&mut machine, WRONG);
        answer(&mut machine, WRONG);
        let report = answer(&mut machine, WRONG);

        assert_eq!(report.transition, Transition::Wasted);
        assert!(report.insight.is_none());
        let state = machine.state();
        assert_eq!(state.status, GameStatus::Wasted);
        assert_eq!(state.total_wrong, 3);
        assert_eq!(state.competence_score, 0);
        assert_eq!(state.current_question_index, 2);
    }

    #[test]
    fn third_strike_wastes_even_with_high_score() {
        let mut machine = playing();
        for _ in 0..5 {
            answer(&mut machine, RIGHT);
        }
        answer(&mut machine, WRONG);
        answer(&mut machine, WRONG);
        assert!(machine.state().competence_score > 20);
        answer(&mut machine, WRONG);
        assert_eq!(machine.state().status, GameStatus::Wasted);
        assert_eq!(machine.state().competence_score, 0);
    }

    #[test]
    fn empty_meter_wastes_before_strike_limit() {
        let rules = GameRules::new(50, 12, 30, 3, 7).unwrap();
        let mut machine = GameMachine::new(rules);
        machine
            .start_session(&sample_session(1, "Performance"), BankNumber::first())
            .unwrap();
        answer(&mut machine, WRONG);
        assert_eq!(machine.state().competence_score, 20);
        let report = answer(&mut machine, WRONG);

        assert_eq!(report.transition, Transition::Wasted);
        assert_eq!(machine.state().total_wrong, 2);
        assert_eq!(machine.state().competence_score, 0);
    }

    #[test]
    fn perfect_bank_is_ipo() {
        let mut machine = playing();
        for _ in 0..9 {
            assert_eq!(answer(&mut machine, RIGHT).transition, Transition::Advanced);
        }
        let report = answer(&mut machine, RIGHT);
        assert_eq!(report.transition, Transition::Ipo);
        assert_eq!(machine.state().total_correct, 10);
        assert_eq!(machine.state().competence_score, 100);
        assert_eq!(machine.state().status, GameStatus::Ipo);
    }

    #[test]
    fn nine_right_then_miss_is_results() {
        let mut machine = playing();
        for _ in 0..9 {
            answer(&mut machine, RIGHT);
        }
        let report = answer(&mut machine, WRONG);

        assert_eq!(report.transition, Transition::Results);
        let state = machine.state();
        assert_eq!(state.status, GameStatus::Results);
        assert_eq!(state.total_correct, 9);
        assert_eq!(state.total_wrong, 1);
        assert_eq!(state.competence_score, 80);
        assert_eq!(state.current_question_index, 9);
    }

    #[test]
    fn final_answer_third_strike_is_wasted_not_results() {
        let mut machine = playing();
        answer(&mut machine, WRONG);
        answer(&mut machine, WRONG);
        for _ in 0..7 {
            answer(&mut machine, RIGHT);
        }
        assert_eq!(machine.state().current_question_index, 9);
        let report = answer(&mut machine, WRONG);
        assert_eq!(report.transition, Transition::Wasted);
        assert_eq!(machine.state().status, GameStatus::Wasted);
    }

    #[test]
    fn answers_rejected_outside_play() {
        let mut machine = GameMachine::default();
        let err = machine.submit_answer(RIGHT, &mut FixedRandom(0)).unwrap_err();
        assert_eq!(err, GameError::NotPlaying);

        let mut machine = playing();
        let err = machine.submit_answer(9, &mut FixedRandom(0)).unwrap_err();
        assert_eq!(err, GameError::ChoiceOutOfRange { choice: 9, count: 4 });
    }

    #[test]
    fn return_to_lobby_counts_passing_banks_only() {
        let mut machine = playing();
        for _ in 0..9 {
            answer(&mut machine, RIGHT);
        }
        answer(&mut machine, WRONG);
        let report = machine.return_to_lobby().unwrap();
        assert!(report.passed);
        assert_eq!(report.progress, 1);
        assert_eq!(machine.state().status, GameStatus::Lobby);
        assert_eq!(machine.state().current_session_id, Some(SessionId::new(1)));

        machine
            .start_session(&sample_session(1, "Value Creation"), BankNumber::new(2))
            .unwrap();
        answer(&mut machine, WRONG);
        answer(&mut machine, WRONG);
        answer(&mut machine, WRONG);
        let report = machine.return_to_lobby().unwrap();
        assert!(!report.passed);
        assert_eq!(report.progress, 1);
    }

    #[test]
    fn progress_caps_at_three() {
        let mut machine = GameMachine::default();
        let session = sample_session(4, "Brand Soul");
        for bank in [1, 2, 3, 3] {
            machine.start_session(&session, BankNumber::new(bank)).unwrap();
            for _ in 0..10 {
                answer(&mut machine, RIGHT);
            }
            machine.return_to_lobby().unwrap();
        }
        assert_eq!(machine.progress_for(session.id()), 3);
        assert_eq!(session.next_bank(machine.progress_for(session.id())), None);
    }

    #[test]
    fn return_to_lobby_clears_transients_and_rejects_double_return() {
        let mut machine = playing();
        let report = machine.submit_answer(WRONG, &mut FixedRandom(0)).unwrap();
        machine.dismiss_overlay(report.epoch);
        assert!(machine.state().show_insight.is_some());

        machine.return_to_lobby().unwrap();
        assert!(machine.state().show_insight.is_none());
        assert!(machine.state().overlay.is_none());
        assert_eq!(machine.return_to_lobby().unwrap_err(), GameError::NotInPlay);
    }

    #[test]
    fn stale_epochs_are_ignored() {
        let mut machine = playing();
        let report = machine.submit_answer(WRONG, &mut FixedRandom(0)).unwrap();
        machine.return_to_lobby().unwrap();
        machine
            .start_session(&sample_session(1, "Value Creation"), BankNumber::first())
            .unwrap();
        let fresh = machine.submit_answer(RIGHT, &mut FixedRandom(0)).unwrap();

        assert_eq!(machine.dismiss_overlay(report.epoch), OverlayDismissal::Stale);
        assert!(machine.state().overlay.is_some());
        assert!(!machine.clear_insight(report.epoch));
        assert!(matches!(
            machine.dismiss_overlay(fresh.epoch),
            OverlayDismissal::Cleared { insight: None }
        ));
    }

    #[test]
    fn brief_only_recorded_on_results_of_same_play() {
        let mut machine = playing();
        for _ in 0..9 {
            answer(&mut machine, RIGHT);
        }
        let report = answer(&mut machine, WRONG);
        assert!(machine.record_brief(report.epoch, "Acceptable.".into()));
        assert_eq!(machine.state().last_brief.as_deref(), Some("Acceptable."));

        machine.return_to_lobby().unwrap();
        assert!(machine.state().last_brief.is_none());
        assert!(!machine.record_brief(report.epoch, "Late.".into()));
        assert!(machine.state().last_brief.is_none());
    }

    #[test]
    fn abort_mid_bank_returns_to_lobby() {
        let mut machine = playing();
        answer(&mut machine, RIGHT);
        let report = machine.return_to_lobby().unwrap();
        assert!(!report.passed);
        assert_eq!(report.progress, 0);
        assert!(machine.current_question().is_none());
        assert_eq!(machine.progress_for(SessionId::new(1)), 0);
    }

    #[test]
    fn start_session_requires_the_lobby() {
        let session = sample_session(1, "Value Creation");
        let mut machine = playing();
        for _ in 0..9 {
            answer(&mut machine, RIGHT);
        }
        answer(&mut machine, WRONG);
        assert_eq!(machine.state().status, GameStatus::Results);
        let epoch = machine.epoch();

        let err = machine
            .start_session(&session, BankNumber::new(2))
            .unwrap_err();
        assert_eq!(err, GameError::NotInLobby);
        assert_eq!(machine.state().status, GameStatus::Results);
        assert_eq!(machine.epoch(), epoch);

        let err = playing()
            .start_session(&session, BankNumber::new(2))
            .unwrap_err();
        assert_eq!(err, GameError::NotInLobby);

        let report = machine.return_to_lobby().unwrap();
        assert_eq!(report.progress, 1);
        machine.start_session(&session, BankNumber::new(2)).unwrap();
        assert_eq!(machine.progress_for(session.id()), 1);
    }

    #[test]
    fn single_bank_session_finishes_after_one_pass() {
        let bank = crate::testing::sample_bank(1, RIGHT);
        let session = Session::new(SessionId::new(9), "Pricing", "", "", vec![bank]).unwrap();
        let mut machine = GameMachine::default();
        machine.start_session(&session, BankNumber::first()).unwrap();
        for _ in 0..10 {
            answer(&mut machine, RIGHT);
        }
        let report = machine.return_to_lobby().unwrap();
        assert_eq!(report.progress, 1);
        assert_eq!(session.next_bank(report.progress), None);

        machine.start_session(&session, BankNumber::first()).unwrap();
        for _ in 0..10 {
            answer(&mut machine, RIGHT);
        }
        assert_eq!(machine.return_to_lobby().unwrap().progress, 1);
        assert!(matches!(
            machine.start_session(&session, BankNumber::new(2)),
            Err(GameError::BankNotFound { .. })
        ));
    }
}
