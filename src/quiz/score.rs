// src/quiz/score.rs

use super::QuizError;
use crate::{
    models::user::{User, UserView},
    store::{QuizStore, ScoreDelta},
};

/// Records one answer for `username`.
///
/// `total_answers` always grows by one, `score` and `correct_answers` only when the
/// answer was correct. The store applies the increment atomically; the returned view
/// is re-read afterwards and reflects it.
pub async fn increment_score(
    store: &dyn QuizStore,
    username: &str,
    was_correct: bool,
) -> Result<UserView, QuizError> {
    let applied = store
        .increment_user(username, ScoreDelta::for_answer(was_correct))
        .await?;

    if !applied {
        return Err(QuizError::UserNotFound(username.to_string()));
    }

    // The user may have been deleted between the update and this read.
    let user = fetch_player(store, username).await?;

    tracing::debug!(
        username,
        was_correct,
        score = user.score,
        total_answers = user.total_answers,
        "score updated"
    );

    Ok(UserView::from(user))
}

/// Creates a player with zeroed counters. Existing usernames are never overwritten.
pub async fn register_player(store: &dyn QuizStore, username: &str) -> Result<User, QuizError> {
    let user = store.insert_user(username).await?;
    tracing::info!("Registered player: {}", username);
    Ok(user)
}

pub async fn fetch_player(store: &dyn QuizStore, username: &str) -> Result<User, QuizError> {
    store
        .fetch_user(username)
        .await?
        .ok_or_else(|| QuizError::UserNotFound(username.to_string()))
}
