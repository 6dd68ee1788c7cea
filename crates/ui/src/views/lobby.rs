use dioxus::prelude::*;

use humbug_core::game::GameState;
use humbug_core::model::{BankNumber, SessionId};

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{LobbyCardVm, map_lobby_cards};

#[component]
pub fn LobbyScreen(state: GameState, on_start: Callback<(SessionId, BankNumber)>) -> Element {
    let ctx = use_context::<AppContext>();
    let game = ctx.game();

    let mut resource = use_resource(move || {
        let game = game.clone();
        async move {
            game.sessions()
                .await
                .map_err(|_| ViewError::Unknown)
        }
    });
    let view_state = view_state_from_resource(&resource);

    rsx! {
        div { class: "lobby",
            header { class: "lobby-header",
                div { class: "kicker", "STRATEGIC AUDIT DEPOT" }
                h1 { class: "title", "HOPELAIN'S HUMBUG" }
                p { class: "lede",
                    "Prove you aren't just an expensive PowerPoint generator. "
                    span { class: "rules", "7/10 to pass. 3 strikes = fail. NO MERCY." }
                }
            }

            match view_state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(sessions) => rsx! {
                    div { class: "session-grid",
                        for card in map_lobby_cards(&sessions, &state) {
                            SessionCard { key: "{card.id}", card, on_start }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    button {
                        class: "btn",
                        onclick: move |_| resource.restart(),
                        "Retry"
                    }
                },
            }
        }
    }
}

#[component]
fn SessionCard(card: LobbyCardVm, on_start: Callback<(SessionId, BankNumber)>) -> Element {
    let class = if card.is_complete() {
        "session-card complete"
    } else {
        "session-card"
    };
    let id = card.id;
    let next_bank = card.next_bank;

    rsx! {
        div { class,
            div { class: "pips",
                for (i, filled) in card.pips.iter().copied().enumerate() {
                    div {
                        key: "{i}",
                        class: if filled { "pip filled" } else { "pip" },
                    }
                }
            }
            div { class: "session-info",
                div { class: "session-number", "SESSION {card.id}" }
                h3 { "{card.title}" }
                p { class: "description", "{card.description}" }
                if !card.tagline.is_empty() {
                    p { class: "tagline", "{card.tagline}" }
                }
            }
            button {
                class: "btn play",
                disabled: card.is_complete(),
                onclick: move |_| {
                    if let Some(bank) = next_bank {
                        on_start.call((id, bank));
                    }
                },
                "{card.button_label}"
            }
        }
    }
}
