// src/models/user.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents the 'users' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    /// Unique username, immutable after creation.
    pub username: String,

    /// One point per correct answer.
    pub score: i64,

    pub correct_answers: i64,

    /// Every submitted answer, right or wrong.
    pub total_answers: i64,

    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl User {
    /// A freshly registered user with all counters at zero.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            score: 0,
            correct_answers: 0,
            total_answers: 0,
            created_at: Some(chrono::Utc::now()),
        }
    }
}

/// Externally visible projection of a user's score counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserView {
    pub username: String,
    pub score: i64,
    pub correct_answers: i64,
    pub total_answers: i64,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            score: user.score,
            correct_answers: user.correct_answers,
            total_answers: user.total_answers,
        }
    }
}

/// DTO for registering a new player.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(
        min = 3,
        max = 50,
        message = "Username length must be between 3 and 50 characters."
    ))]
    pub username: String,
}

/// Returned on registration.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub username: String,
}
