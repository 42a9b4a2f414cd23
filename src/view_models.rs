// src/view_models.rs

use crate::score::ScoreSnapshot;

/// Data the results screen renders. Owns the snapshot for the lifetime of
/// the view; discarded on restart together with the session.
#[derive(Clone, Debug)]
pub struct ResultsView {
    pub snapshot: ScoreSnapshot,
}

impl ResultsView {
    pub fn new(snapshot: ScoreSnapshot) -> Self {
        Self { snapshot }
    }

    /// Qualitative tier for the final percentage.
    pub fn verdict(&self) -> &'static str {
        match self.snapshot.percentage {
            100 => "🎉 Perfect Score! Outstanding!",
            80..=99 => "👏 Great Job!",
            60..=79 => "✔ Good effort!",
            _ => "Keep practicing!",
        }
    }

    pub fn detail(&self) -> String {
        format!(
            "You answered {} out of {} questions correctly.",
            self.snapshot.correct, self.snapshot.attempted
        )
    }
}
