// src/handlers/game.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    config::Config,
    error::AppError,
    models::{
        question::{AnswerParams, AnswerSubmission},
        user::UserView,
    },
    quiz::{evaluate_answer, fetch_player, generate_question},
    store::SharedStore,
};

/// Generates a random question from the full destination corpus.
///
/// Returns 404 while the corpus is empty.
pub async fn get_question(
    State(store): State<SharedStore>,
    State(config): State<Config>,
) -> Result<impl IntoResponse, AppError> {
    let corpus = store.fetch_all_destinations().await?;

    let mut rng = StdRng::from_entropy();
    let question = generate_question(&corpus, config.question_options, &mut rng)?;

    Ok(Json(question))
}

/// Checks a submitted answer and returns a fun fact about the correct destination.
///
/// * `?username=` is optional; without it the answer is not scored.
/// * An empty username counts as absent.
pub async fn submit_answer(
    State(store): State<SharedStore>,
    Query(params): Query<AnswerParams>,
    Json(submission): Json<AnswerSubmission>,
) -> Result<impl IntoResponse, AppError> {
    let username = params.username.as_deref().filter(|name| !name.is_empty());

    let mut rng = StdRng::from_entropy();
    let result = evaluate_answer(store.as_ref(), &submission, username, &mut rng).await?;

    Ok(Json(result))
}

/// Score summary of the player who sent a challenge link.
pub async fn get_challenge_info(
    State(store): State<SharedStore>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = fetch_player(store.as_ref(), &username).await?;
    Ok(Json(UserView::from(user)))
}
