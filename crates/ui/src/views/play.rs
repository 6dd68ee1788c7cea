use dioxus::prelude::*;

use crate::vm::{ChoiceVm, PlayVm};

#[component]
pub fn PlayScreen(vm: PlayVm, on_answer: Callback<usize>, on_abort: Callback<()>) -> Element {
    rsx! {
        CompetenceMeter { vm: vm.clone() }

        div { class: "play",
            div { class: "play-header",
                div { class: "session-label", "{vm.session_label}" }
                button {
                    class: "btn abort",
                    onclick: move |_| on_abort.call(()),
                    "ABORT"
                }
            }

            h3 { class: "prompt", "{vm.prompt}" }

            if let Some(insight) = vm.insight.as_ref() {
                div { class: "insight",
                    div { class: "insight-label", "STRATEGIC INSIGHT" }
                    p { "\"{insight}\"" }
                }
            }

            div { class: "choices",
                for (i, choice) in vm.choices.iter().cloned().enumerate() {
                    ChoiceButton { key: "{i}", choice, open: vm.input_open, on_answer }
                }
            }
        }
    }
}

#[component]
fn ChoiceButton(choice: ChoiceVm, open: bool, on_answer: Callback<usize>) -> Element {
    let index = choice.index;
    rsx! {
        button {
            class: "choice",
            disabled: !open,
            onclick: move |_| on_answer.call(index),
            span { class: "letter", "{choice.letter}" }
            span { class: "choice-text", "{choice.text}" }
        }
    }
}

#[component]
fn CompetenceMeter(vm: PlayVm) -> Element {
    rsx! {
        div { class: vm.mood.class(),
            div { class: "meter-labels",
                div { class: "meter-end inferno",
                    span { class: "caption", "Incompetence" }
                    span { class: "label", "INFERNO" }
                }
                div { class: "strikes",
                    span { class: "caption", "Strikes" }
                    div { class: "strike-row",
                        for (i, struck) in vm.strikes.iter().copied().enumerate() {
                            div {
                                key: "{i}",
                                class: if struck { "strike struck" } else { "strike" },
                                "✕"
                            }
                        }
                    }
                }
                div { class: "meter-end nirvana",
                    span { class: "caption", "Competence" }
                    span { class: "label", "NIRVANA" }
                }
            }
            div { class: "meter-bar",
                div { class: "meter-fill", style: "width: {vm.score}%" }
                div { class: "meter-needle", style: "left: {vm.score}%" }
            }
            div { class: "meter-footer",
                span { "{vm.question_label}" }
                span { class: if vm.score > 50 { "tally good" } else { "tally bad" },
                    "{vm.correct_label}"
                }
            }
        }
    }
}
