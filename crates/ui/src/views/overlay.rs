use dioxus::prelude::*;

use crate::vm::OverlayVm;

#[component]
pub fn ReactionOverlay(vm: OverlayVm) -> Element {
    rsx! {
        div { class: "{vm.class}",
            div { class: "overlay-body",
                span { class: "overlay-emoji", "{vm.emoji}" }
                h1 { "{vm.headline}" }
                p { "{vm.subtext}" }
            }
        }
    }
}
