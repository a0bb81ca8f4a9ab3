// src/store/mod.rs

//! Persistence boundary for destinations and players.

use std::sync::Arc;

use async_trait::async_trait;

use crate::models::{destination::Destination, user::User};

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Shared handle injected into the application state.
pub type SharedStore = Arc<dyn QuizStore>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("username '{0}' already exists")]
    DuplicateUsername(String),

    #[error("store query failed: {0}")]
    Query(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Query(err.to_string())
    }
}

/// Counter increments applied by one answer submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreDelta {
    pub total: i64,
    pub score: i64,
    pub correct_answers: i64,
}

impl ScoreDelta {
    pub fn for_answer(correct: bool) -> Self {
        let gained = i64::from(correct);
        Self {
            total: 1,
            score: gained,
            correct_answers: gained,
        }
    }
}

#[async_trait]
pub trait QuizStore: Send + Sync {
    /// Full corpus scan.
    async fn fetch_all_destinations(&self) -> Result<Vec<Destination>, StoreError>;

    async fn fetch_destination_by_city(&self, city: &str)
    -> Result<Option<Destination>, StoreError>;

    /// Also serves as the liveness probe for `/health`.
    async fn count_destinations(&self) -> Result<i64, StoreError>;

    /// Inserts destinations, skipping cities already present. Returns the number inserted.
    async fn insert_destinations(&self, destinations: &[Destination]) -> Result<u64, StoreError>;

    async fn fetch_user(&self, username: &str) -> Result<Option<User>, StoreError>;

    /// Fails with [`StoreError::DuplicateUsername`] rather than overwriting.
    async fn insert_user(&self, username: &str) -> Result<User, StoreError>;

    /// Applies `delta` as a single atomic update.
    /// Returns `false` when no such user exists, in which case nothing changed.
    async fn increment_user(&self, username: &str, delta: ScoreDelta) -> Result<bool, StoreError>;

    async fn delete_user(&self, username: &str) -> Result<bool, StoreError>;
}
