use crate::data::read_questions_embedded;
use crate::model::AppState;
use crate::session::QuizSession;
use crate::view_models::ResultsView;

pub mod actions;

pub struct QuizApp {
    pub session: QuizSession,
    pub state: AppState,
    /// Transient per-answer feedback line shown under the question list.
    pub message: String,
    /// Radio-button display state, one slot per question. Presentation only;
    /// scoring never reads it.
    pub selections: Vec<Option<usize>>,
    pub results: Option<ResultsView>,
}

impl QuizApp {
    pub fn new() -> Self {
        let mut session = QuizSession::new(read_questions_embedded());
        session.on_complete(|snap| {
            log::info!("attempt complete: {} ({}%)", snap.formatted, snap.percentage);
        });
        let selections = vec![None; session.total_questions()];
        Self {
            session,
            state: AppState::Quiz,
            message: String::new(),
            selections,
            results: None,
        }
    }
}

impl Default for QuizApp {
    fn default() -> Self {
        Self::new()
    }
}
