// src/quiz/mod.rs

//! Question generation and answer scoring.
//!
//! Every operation is a function of its inputs plus store state. Randomness is
//! injected by the caller so tests can seed it.

pub mod evaluator;
pub mod generator;
pub mod score;

pub use evaluator::{evaluate_answer, pick_fun_fact};
pub use generator::{DEFAULT_OPTION_COUNT, generate_question};
pub use score::{fetch_player, increment_score, register_player};

use crate::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    #[error("No destinations found")]
    EmptyCorpus,

    /// The correct city of a generated question does not resolve.
    #[error("Destination {0} not found")]
    DestinationNotFound(String),

    #[error("User {0} not found")]
    UserNotFound(String),

    #[error("Username '{0}' already exists")]
    DuplicateUsername(String),

    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for QuizError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateUsername(username) => QuizError::DuplicateUsername(username),
            other => QuizError::Store(other),
        }
    }
}
