use crate::model::Question;
use crate::score::{ScoreAccumulator, ScoreSnapshot};

/// One attempt at the fixed question set, from construction until
/// submission. A restart builds a brand-new session rather than rewinding
/// this one, so no per-question state can leak between attempts.
pub struct QuizSession {
    questions: Vec<Question>,
    score: ScoreAccumulator,
    state: SessionState,
    on_complete: Option<Box<dyn FnMut(&ScoreSnapshot)>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    InProgress,
    Completed,
}

/// Transient per-answer signal for the presentation layer. Emitted only
/// after the counter mutation has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Incorrect,
}

impl QuizSession {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            score: ScoreAccumulator::new(),
            state: SessionState::InProgress,
            on_complete: None,
        }
    }

    /// Injects the hook invoked exactly once with the final snapshot when
    /// the attempt is submitted.
    pub fn on_complete(&mut self, hook: impl FnMut(&ScoreSnapshot) + 'static) {
        self.on_complete = Some(Box::new(hook));
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Progress counter: selection events processed so far, regardless of
    /// correctness.
    pub fn attempted(&self) -> u32 {
        self.score.attempted()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Scores one answer-selection click. Selections are deliberately
    /// ungated: the same question may be answered any number of times and
    /// every click increments the accumulator independently.
    ///
    /// Calling this on a completed session, with an unknown question id, or
    /// with an answer index the question does not have is a contract
    /// violation and panics.
    pub fn select_answer(&mut self, question_id: u32, answer_idx: usize) -> Feedback {
        assert_eq!(
            self.state,
            SessionState::InProgress,
            "select_answer called on a completed session"
        );
        let question = self
            .questions
            .iter()
            .find(|q| q.id == question_id)
            .expect("select_answer: unknown question id");
        let answer = question
            .answers
            .get(answer_idx)
            .expect("select_answer: answer index out of range for question");

        // Mutate first, signal after, so feedback can never observe a
        // not-yet-applied count.
        let feedback = if answer.is_correct {
            self.score.record_correct();
            Feedback::Correct
        } else {
            self.score.record_incorrect();
            Feedback::Incorrect
        };
        log::debug!(
            "question {} answered ({:?}), score now {}",
            question_id,
            feedback,
            self.score.formatted()
        );
        feedback
    }

    /// Finalizes the attempt. Valid once per session instance: transitions
    /// to `Completed`, fires the completion hook with the final snapshot and
    /// returns it. Submitting twice is a contract violation and panics.
    pub fn submit(&mut self) -> ScoreSnapshot {
        assert_eq!(
            self.state,
            SessionState::InProgress,
            "submit called on a completed session"
        );
        self.state = SessionState::Completed;
        let snapshot = self.score.snapshot();
        log::info!(
            "quiz submitted: {} ({}%)",
            snapshot.formatted,
            snapshot.percentage
        );
        if let Some(hook) = self.on_complete.as_mut() {
            hook(&snapshot);
        }
        snapshot
    }

    /// Builds a fresh `InProgress` session over the same question catalog.
    /// The completion hook is not carried over; the caller re-injects it.
    pub fn restart(&self) -> QuizSession {
        QuizSession::new(self.questions.clone())
    }
}
