use std::sync::Arc;

use dioxus::prelude::*;

use humbug_core::game::{GameError, GameStatus};
use humbug_core::model::{BankNumber, SessionId};
use services::{GameController, GameServiceError, GameSnapshot};

use crate::context::AppContext;
use crate::views::ViewError;
use crate::views::lobby::LobbyScreen;
use crate::views::overlay::ReactionOverlay;
use crate::views::play::PlayScreen;
use crate::views::results::ResultsScreen;
use crate::views::terminal::{IpoScreen, WastedScreen};
use crate::vm::{map_overlay, map_play, map_results};

/// Error to show for a rejected answer. A locked input is already visible as
/// disabled buttons, so it stays silent.
fn answer_error(err: &GameServiceError) -> Option<ViewError> {
    match err {
        GameServiceError::Game(GameError::InputLocked) => None,
        _ => Some(ViewError::Unknown),
    }
}

/// Mirror the controller's snapshot channel into a signal.
fn use_snapshot(game: &Arc<GameController>) -> Signal<GameSnapshot> {
    let snapshot = use_signal({
        let game = Arc::clone(game);
        move || game.snapshot()
    });

    let game = Arc::clone(game);
    use_future(move || {
        let game = Arc::clone(&game);
        let mut snapshot = snapshot;
        async move {
            let mut rx = game.subscribe();
            snapshot.set(rx.borrow_and_update().clone());
            while rx.changed().await.is_ok() {
                let next = rx.borrow_and_update().clone();
                snapshot.set(next);
            }
        }
    });

    snapshot
}

#[component]
pub fn GameView() -> Element {
    let ctx = use_context::<AppContext>();
    let game = ctx.game();
    let snapshot = use_snapshot(&game);
    let error = use_signal(|| None::<ViewError>);

    let on_start = {
        let game = Arc::clone(&game);
        use_callback(move |(session, bank): (SessionId, BankNumber)| {
            let game = Arc::clone(&game);
            let mut error = error;
            spawn(async move {
                match game.start_session(session, bank).await {
                    Ok(_) => error.set(None),
                    Err(_) => error.set(Some(ViewError::Unknown)),
                }
            });
        })
    };

    let on_answer = {
        let game = Arc::clone(&game);
        use_callback(move |choice: usize| {
            let mut error = error;
            match game.submit_answer(choice) {
                Ok(_) => error.set(None),
                Err(err) => {
                    if let Some(view_error) = answer_error(&err) {
                        error.set(Some(view_error));
                    }
                }
            }
        })
    };

    let on_leave = {
        let game = Arc::clone(&game);
        use_callback(move |()| {
            let mut error = error;
            if game.return_to_lobby().is_err() {
                error.set(Some(ViewError::Unknown));
            }
        })
    };

    let snap = snapshot.read().clone();
    let overlay = map_overlay(&snap);

    rsx! {
        div { class: "game",
            if let Some(err) = error() {
                p { class: "error", "{err.message()}" }
            }

            match snap.state.status {
                GameStatus::Lobby => rsx! {
                    LobbyScreen { state: snap.state.clone(), on_start }
                },
                GameStatus::Playing => match map_play(&snap) {
                    Some(vm) => rsx! {
                        PlayScreen { vm, on_answer, on_abort: on_leave }
                    },
                    None => rsx! {},
                },
                GameStatus::Results => match map_results(&snap) {
                    Some(vm) => rsx! {
                        ResultsScreen { vm, on_exit: on_leave }
                    },
                    None => rsx! {},
                },
                GameStatus::Wasted => rsx! {
                    WastedScreen { on_exit: on_leave }
                },
                GameStatus::Ipo => rsx! {
                    IpoScreen { on_exit: on_leave }
                },
            }

            if let Some(vm) = overlay {
                ReactionOverlay { vm }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use content::ContentError;

    #[test]
    fn only_locked_input_is_silent() {
        let locked = GameServiceError::Game(GameError::InputLocked);
        assert_eq!(answer_error(&locked), None);

        for err in [
            GameServiceError::Game(GameError::NotPlaying),
            GameServiceError::Game(GameError::ChoiceOutOfRange { choice: 7, count: 4 }),
            GameServiceError::Content(ContentError::NotFound),
        ] {
            assert_eq!(answer_error(&err), Some(ViewError::Unknown));
        }
    }
}
