use std::sync::Arc;
use std::time::Duration;

use content::InMemoryCatalog;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use humbug_core::game::EffectTimings;
use humbug_core::model::GameRules;
use humbug_core::rng::FixedRandom;
use humbug_core::testing::sample_session;
use services::{CannedBriefGenerator, GameController, GameSettings};
use tokio::runtime::Handle;

use crate::context::{UiApp, build_app_context};
use crate::views::GameView;

#[derive(Clone)]
struct TestApp {
    game: Arc<GameController>,
}

impl UiApp for TestApp {
    fn app_name(&self) -> &str {
        "Humbug (test)"
    }

    fn game(&self) -> Arc<GameController> {
        Arc::clone(&self.game)
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    rsx! { GameView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub game: Arc<GameController>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        for _ in 0..3 {
            let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
            self.dom.render_immediate(&mut NoOpMutations);
            self.dom.process_events();
        }
    }

    /// Let zero-delay reaction timers fire, then re-render.
    pub async fn settle(&mut self) {
        tokio::time::sleep(Duration::from_millis(5)).await;
        self.drive_async().await;
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Harness over two sample sessions with instant effects and a fixed RNG.
pub fn setup_view_harness() -> ViewHarness {
    setup_view_harness_with_timings(EffectTimings::instant())
}

pub fn setup_view_harness_with_timings(timings: EffectTimings) -> ViewHarness {
    let catalog = InMemoryCatalog::new(vec![
        sample_session(1, "Value Creation"),
        sample_session(2, "Positioning"),
    ]);
    let briefs = CannedBriefGenerator::new(Box::new(FixedRandom(0)));
    let game = Arc::new(GameController::new(
        Arc::new(catalog),
        Arc::new(briefs),
        Box::new(FixedRandom(0)),
        GameSettings {
            rules: GameRules::standard(),
            timings,
        },
        Handle::current(),
    ));

    let app = Arc::new(TestApp {
        game: Arc::clone(&game),
    });
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app });

    ViewHarness { dom, game }
}
