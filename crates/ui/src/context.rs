use std::sync::Arc;

use services::QuizSession;

pub trait UiApp: Send + Sync {
    fn quiz_session(&self) -> Arc<QuizSession>;
}

#[derive(Clone)]
pub struct AppContext {
    quiz_session: Arc<QuizSession>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz_session: app.quiz_session(),
        }
    }

    #[must_use]
    pub fn quiz_session(&self) -> Arc<QuizSession> {
        Arc::clone(&self.quiz_session)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
