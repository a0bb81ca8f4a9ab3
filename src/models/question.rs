// src/models/question.rs

use serde::{Deserialize, Serialize};

use crate::models::{destination::CityOption, user::UserView};

/// A generated multiple-choice question. Not persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// One or two clues about the correct destination.
    pub clues: Vec<String>,

    /// Shuffled options; exactly one matches `correct_answer`.
    pub options: Vec<CityOption>,

    /// City name of the correct destination.
    /// Sent to the client, which echoes it back on submission.
    pub correct_answer: String,
}

/// DTO for submitting an answer.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnswerSubmission {
    pub selected_city: String,
    pub correct_city: String,
}

/// Query string of the answer endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct AnswerParams {
    pub username: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerResult {
    pub correct: bool,

    /// Empty when the destination has no fun facts.
    pub fun_fact: String,

    /// Updated counters, `None` for anonymous play.
    pub user: Option<UserView>,
}
