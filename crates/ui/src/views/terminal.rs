use dioxus::prelude::*;

#[component]
pub fn WastedScreen(on_exit: Callback<()>) -> Element {
    rsx! {
        div { class: "terminal wasted",
            h1 { "WASTED" }
            p { class: "headline", "3 STRIKES. YOUR CAREER HAS BEEN STRATEGICALLY LIQUIDATED." }
            p { class: "quote", "\"The Value Wedge doesn't reward the incompetent.\"" }
            button {
                class: "btn",
                onclick: move |_| on_exit.call(()),
                "EXIT IN SHAME"
            }
        }
    }
}

#[component]
pub fn IpoScreen(on_exit: Callback<()>) -> Element {
    rsx! {
        div { class: "terminal ipo",
            div { class: "emoji", "🎉" }
            h1 { "YOU IPO'D" }
            h2 { "STRATEGIC ASCENSION COMPLETE" }
            p { "10/10. Perfect execution. The board has approved your golden parachute." }
            button {
                class: "btn",
                onclick: move |_| on_exit.call(()),
                "RETIRE TO NAPA"
            }
        }
    }
}
