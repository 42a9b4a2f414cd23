use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Answer {
    pub text: String,
    pub is_correct: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Question {
    pub id: u32,
    pub prompt: String,
    // Scoring assumes exactly one answer has is_correct = true.
    pub answers: Vec<Answer>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Quiz,
    Results,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Quiz
    }
}
