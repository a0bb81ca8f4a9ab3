// src/quiz/evaluator.rs

use rand::{Rng, seq::SliceRandom};

use super::{QuizError, score::increment_score};
use crate::{
    models::{
        destination::Destination,
        question::{AnswerResult, AnswerSubmission},
    },
    store::QuizStore,
};

/// Evaluates a submitted answer.
///
/// Correctness is a case-sensitive comparison of the two cities in the submission;
/// the correct city is trusted as echoed back from the question. A fun fact about the
/// correct destination is returned either way. The score is only updated when a
/// username is given.
pub async fn evaluate_answer<R>(
    store: &dyn QuizStore,
    submission: &AnswerSubmission,
    username: Option<&str>,
    rng: &mut R,
) -> Result<AnswerResult, QuizError>
where
    R: Rng + Send,
{
    let correct = submission.selected_city == submission.correct_city;

    let destination = store
        .fetch_destination_by_city(&submission.correct_city)
        .await?
        .ok_or_else(|| QuizError::DestinationNotFound(submission.correct_city.clone()))?;

    let fun_fact = pick_fun_fact(&destination, rng);

    let user = match username {
        Some(username) => Some(increment_score(store, username, correct).await?),
        None => None,
    };

    Ok(AnswerResult {
        correct,
        fun_fact,
        user,
    })
}

/// Uniformly chosen fun fact, or an empty string when there are none.
pub fn pick_fun_fact<R: Rng>(destination: &Destination, rng: &mut R) -> String {
    destination
        .fun_facts
        .choose(rng)
        .cloned()
        .unwrap_or_default()
}
