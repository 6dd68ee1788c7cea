use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use content::CatalogRepository;
use humbug_core::game::{
    AnswerReport, EffectTimings, GameMachine, LobbyReport, OverlayDismissal, PlayEpoch,
    Transition,
};
use humbug_core::model::{BankNumber, GameRules, Session, SessionId};
use humbug_core::rng::RandomSource;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::snapshot::{BriefStatus, GameSnapshot};
use crate::brief::BriefGenerator;
use crate::error::GameServiceError;

/// Tunables that are fixed for the lifetime of a controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameSettings {
    pub rules: GameRules,
    pub timings: EffectTimings,
}

struct Board {
    machine: GameMachine,
    brief: BriefStatus,
    effects: Vec<JoinHandle<()>>,
}

impl Board {
    fn cancel_effects(&mut self) {
        for handle in self.effects.drain(..) {
            handle.abort();
        }
    }

    fn track(&mut self, handle: JoinHandle<()>) {
        self.effects.retain(|effect| !effect.is_finished());
        self.effects.push(handle);
    }
}

struct Shared {
    board: Mutex<Board>,
    rng: Mutex<Box<dyn RandomSource>>,
    catalog: Arc<dyn CatalogRepository>,
    briefs: Arc<dyn BriefGenerator>,
    timings: EffectTimings,
    runtime: Handle,
    snapshots: watch::Sender<GameSnapshot>,
}

/// Drives the game machine for one player.
///
/// Every input is applied under a single lock, so transitions never
/// interleave. Reaction and insight timers run as tokio tasks on `runtime`
/// and are aborted whenever a new play starts or the player returns to the
/// lobby. A fresh `GameSnapshot` is published after every change.
#[derive(Clone)]
pub struct GameController {
    shared: Arc<Shared>,
}

impl GameController {
    #[must_use]
    pub fn new(
        catalog: Arc<dyn CatalogRepository>,
        briefs: Arc<dyn BriefGenerator>,
        rng: Box<dyn RandomSource>,
        settings: GameSettings,
        runtime: Handle,
    ) -> Self {
        let machine = GameMachine::new(settings.rules);
        let brief = BriefStatus::Idle;
        let (snapshots, _) = watch::channel(GameSnapshot::capture(&machine, &brief));

        Self {
            shared: Arc::new(Shared {
                board: Mutex::new(Board {
                    machine,
                    brief,
                    effects: Vec::new(),
                }),
                rng: Mutex::new(rng),
                catalog,
                briefs,
                timings: settings.timings,
                runtime,
                snapshots,
            }),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        self.shared.snapshots.borrow().clone()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<GameSnapshot> {
        self.shared.snapshots.subscribe()
    }

    /// Sessions available in the lobby.
    ///
    /// # Errors
    ///
    /// Returns `GameServiceError::Content` if the catalog cannot be read.
    pub async fn sessions(&self) -> Result<Vec<Session>, GameServiceError> {
        Ok(self.shared.catalog.list_sessions().await?)
    }

    /// Start playing `bank` of session `session_id`. Cancels any pending
    /// reaction or insight timers from the previous play.
    ///
    /// # Errors
    ///
    /// Returns `GameServiceError::Content` if the session is missing and
    /// `GameServiceError::Game` if it has no such bank or the previous play
    /// has not returned to the lobby.
    pub async fn start_session(
        &self,
        session_id: SessionId,
        bank: BankNumber,
    ) -> Result<PlayEpoch, GameServiceError> {
        let session = self.shared.catalog.get_session(session_id).await?;

        let mut board = self.shared.board();
        let epoch = board.machine.start_session(&session, bank)?;
        board.cancel_effects();
        board.brief = BriefStatus::Idle;
        self.shared.publish(&board);

        info!(session = %session_id, bank = %bank, epoch = %epoch, "session started");
        Ok(epoch)
    }

    /// Answer the current question and schedule its reaction timers.
    ///
    /// # Errors
    ///
    /// Returns `GameServiceError::Game` when the machine rejects the answer
    /// (not playing, input locked, or choice out of range).
    pub fn submit_answer(&self, choice: usize) -> Result<AnswerReport, GameServiceError> {
        let mut board = self.shared.board();
        let report = {
            let mut rng = self.shared.rng.lock().unwrap_or_else(PoisonError::into_inner);
            board.machine.submit_answer(choice, rng.as_mut())?
        };

        info!(
            question = %report.question_id,
            correct = report.correct,
            score = report.competence_score,
            transition = ?report.transition,
            "answer submitted"
        );

        let delay = self.shared.timings.reaction(report.correct);
        let handle = Shared::schedule_overlay_dismissal(&self.shared, report.epoch, delay);
        board.track(handle);

        match report.transition {
            Transition::Results => {
                board.brief = BriefStatus::Pending;
                let state = board.machine.state();
                let title = board
                    .machine
                    .current_session_title()
                    .unwrap_or_default()
                    .to_string();
                info!(
                    correct = state.total_correct,
                    wrong = state.total_wrong,
                    "bank finished"
                );
                Shared::request_brief(&self.shared, report.epoch, state.total_correct, title);
            }
            Transition::Wasted => info!("career wasted"),
            Transition::Ipo => info!("perfect bank"),
            Transition::Advanced => {}
        }

        self.shared.publish(&board);
        Ok(report)
    }

    /// Leave the current play and credit the bank if it passed.
    ///
    /// # Errors
    ///
    /// Returns `GameServiceError::Game` when already in the lobby.
    pub fn return_to_lobby(&self) -> Result<LobbyReport, GameServiceError> {
        let mut board = self.shared.board();
        let report = board.machine.return_to_lobby()?;
        board.cancel_effects();
        board.brief = BriefStatus::Idle;
        self.shared.publish(&board);

        info!(
            passed = report.passed,
            progress = report.progress,
            "returned to lobby"
        );
        Ok(report)
    }
}

impl Shared {
    fn board(&self) -> MutexGuard<'_, Board> {
        self.board.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, board: &Board) {
        self.snapshots
            .send_replace(GameSnapshot::capture(&board.machine, &board.brief));
    }

    fn schedule_overlay_dismissal(
        shared: &Arc<Self>,
        epoch: PlayEpoch,
        delay: Duration,
    ) -> JoinHandle<()> {
        let shared = Arc::clone(shared);
        let runtime = shared.runtime.clone();
        runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            shared.dismiss_overlay(epoch);
        })
    }

    fn dismiss_overlay(self: &Arc<Self>, epoch: PlayEpoch) {
        let mut board = self.board();
        match board.machine.dismiss_overlay(epoch) {
            OverlayDismissal::Stale => {
                debug!(epoch = %epoch, "dropped stale reaction timer");
            }
            OverlayDismissal::Cleared { insight } => {
                if insight.is_some() {
                    let handle = Self::schedule_insight_clear(self, epoch, self.timings.insight);
                    board.track(handle);
                }
                self.publish(&board);
            }
        }
    }

    fn schedule_insight_clear(
        shared: &Arc<Self>,
        epoch: PlayEpoch,
        delay: Duration,
    ) -> JoinHandle<()> {
        let shared = Arc::clone(shared);
        let runtime = shared.runtime.clone();
        runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            let mut board = shared.board();
            if board.machine.clear_insight(epoch) {
                shared.publish(&board);
            } else {
                debug!(epoch = %epoch, "dropped stale insight timer");
            }
        })
    }

    fn request_brief(shared: &Arc<Self>, epoch: PlayEpoch, correct: u32, title: String) {
        let shared = Arc::clone(shared);
        let runtime = shared.runtime.clone();
        runtime.spawn(async move {
            let outcome = shared.briefs.generate_brief(correct, &title).await;

            let mut board = shared.board();
            let status = match outcome {
                Ok(text) => {
                    if !board.machine.record_brief(epoch, text.clone()) {
                        debug!(epoch = %epoch, "dropped brief for finished play");
                        return;
                    }
                    BriefStatus::Ready(text)
                }
                Err(err) => {
                    warn!(error = %err, session = %title, "brief generation failed");
                    if board.machine.epoch() != epoch {
                        return;
                    }
                    BriefStatus::Unavailable
                }
            };
            board.brief = status;
            shared.publish(&board);
        });
    }
}
