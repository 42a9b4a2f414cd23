use serde::{Deserialize, Serialize};

/// Running tally for one quiz attempt. Counters only ever grow, except
/// through an explicit `reset`; `correct <= attempted` always holds.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreAccumulator {
    correct: u32,
    attempted: u32,
}

/// Immutable point-in-time view of the score, produced at submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSnapshot {
    pub correct: u32,
    pub attempted: u32,
    pub percentage: u32,
    pub formatted: String,
}

impl ScoreAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a correct selection: both counters advance.
    pub fn record_correct(&mut self) {
        self.correct += 1;
        self.attempted += 1;
    }

    /// Records an incorrect selection: only the attempt counter advances.
    pub fn record_incorrect(&mut self) {
        self.attempted += 1;
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    pub fn attempted(&self) -> u32 {
        self.attempted
    }

    /// Rounded percentage of correct selections. Zero attempts yield 0.
    pub fn percentage(&self) -> u32 {
        if self.attempted == 0 {
            return 0;
        }
        (f64::from(self.correct) / f64::from(self.attempted) * 100.0).round() as u32
    }

    pub fn formatted(&self) -> String {
        format!("{}/{}", self.correct, self.attempted)
    }

    pub fn snapshot(&self) -> ScoreSnapshot {
        ScoreSnapshot {
            correct: self.correct,
            attempted: self.attempted,
            percentage: self.percentage(),
            formatted: self.formatted(),
        }
    }

    pub fn reset(&mut self) {
        self.correct = 0;
        self.attempted = 0;
    }
}
