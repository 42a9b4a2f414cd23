use super::*;
use crate::session::Feedback;

impl QuizApp {
    /// Handles one answer-radio click: scores it through the session, then
    /// updates the display state and the transient feedback line.
    pub fn answer_clicked(&mut self, question_idx: usize, answer_idx: usize) {
        let question_id = self.session.questions()[question_idx].id;
        let feedback = self.session.select_answer(question_id, answer_idx);
        self.selections[question_idx] = Some(answer_idx);
        self.message = match feedback {
            Feedback::Correct => "✅ You are correct!",
            Feedback::Incorrect => "❌ Sorry - not correct",
        }
        .to_owned();
    }

    /// Finalizes the attempt and switches to the results screen.
    pub fn submit_quiz(&mut self) {
        let snapshot = self.session.submit();
        self.results = Some(ResultsView::new(snapshot));
        self.message.clear();
        self.state = AppState::Results;
    }

    /// Discards the whole attempt and rebuilds the app from the static
    /// question catalog, so no stale per-question state survives.
    pub fn restart_quiz(&mut self) {
        *self = QuizApp::new();
    }
}
