// src/handlers/users.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use validator::Validate;

use crate::{
    config::Config,
    error::AppError,
    models::user::{CreateUserRequest, TokenResponse},
    quiz::{fetch_player, register_player},
    store::SharedStore,
    utils::jwt::sign_jwt,
};

/// Registers a new player.
///
/// Returns 201 Created with an access token; 409 if the username is taken.
pub async fn create_user(
    State(store): State<SharedStore>,
    State(config): State<Config>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let user = register_player(store.as_ref(), &payload.username).await?;

    let access_token = sign_jwt(&user.username, &config.jwt_secret, config.jwt_expiration)?;

    Ok((
        StatusCode::CREATED,
        Json(TokenResponse {
            access_token,
            token_type: "bearer".to_string(),
            username: user.username,
        }),
    ))
}

/// Retrieves a single player record.
pub async fn get_user(
    State(store): State<SharedStore>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = fetch_player(store.as_ref(), &username).await?;
    Ok(Json(user))
}

pub async fn delete_user(
    State(store): State<SharedStore>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !store.delete_user(&username).await? {
        return Err(AppError::NotFound(format!("User {} not found", username)));
    }

    tracing::info!("Deleted player: {}", username);

    Ok(Json(json!({
        "message": format!("User {} deleted", username)
    })))
}
