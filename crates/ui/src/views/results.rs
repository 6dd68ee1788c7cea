use dioxus::prelude::*;

use crate::vm::{BRIEF_LOADING, BriefVm, ResultsVm};

#[component]
pub fn ResultsScreen(vm: ResultsVm, on_exit: Callback<()>) -> Element {
    rsx! {
        div { class: "results",
            h2 { "VERDICT" }
            div { class: "results-grid",
                div { class: "score-card",
                    h4 { "ACCURACY" }
                    div { class: "accuracy",
                        "{vm.correct}"
                        span { "/10" }
                    }
                    div { class: if vm.passed { "verdict pass" } else { "verdict fail" },
                        "{vm.verdict}"
                    }
                }
                div { class: "brief",
                    h5 { "The Private Brief" }
                    match vm.brief.clone() {
                        BriefVm::Loading => rsx! {
                            span { class: "brief-loading", "{BRIEF_LOADING}" }
                        },
                        BriefVm::Text(text) => rsx! {
                            p { class: "brief-text", "{text}" }
                        },
                    }
                }
            }
            button {
                class: "btn exit",
                onclick: move |_| on_exit.call(()),
                "EXIT TO LOBBY"
            }
        }
    }
}
