use std::sync::Arc;

use services::GameController;

pub trait UiApp: Send + Sync {
    fn app_name(&self) -> &str;
    fn game(&self) -> Arc<GameController>;
}

#[derive(Clone)]
pub struct AppContext {
    app_name: String,
    game: Arc<GameController>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            app_name: app.app_name().to_string(),
            game: app.game(),
        }
    }

    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    #[must_use]
    pub fn game(&self) -> Arc<GameController> {
        Arc::clone(&self.game)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
