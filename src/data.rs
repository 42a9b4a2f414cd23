// src/data.rs

use crate::model::Question;

/// Loads the question catalog from the embedded YAML
pub fn read_questions_embedded() -> Vec<Question> {
    let file_content = include_str!("data/quiz_questions.yaml");
    serde_yaml::from_str(file_content).expect("failed to parse embedded question catalog YAML")
}
