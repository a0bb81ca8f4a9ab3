// src/store/memory.rs

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{QuizStore, ScoreDelta, StoreError};
use crate::models::{destination::Destination, user::User};

/// In-process store. Used by tests and when no `DATABASE_URL` is configured.
///
/// Destinations keep insertion order so corpus scans are stable.
#[derive(Debug, Default)]
pub struct MemoryStore {
    destinations: RwLock<Vec<Destination>>,
    users: RwLock<HashMap<String, User>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_destinations(destinations: Vec<Destination>) -> Self {
        Self {
            destinations: RwLock::new(destinations),
            users: RwLock::default(),
        }
    }
}

#[async_trait]
impl QuizStore for MemoryStore {
    async fn fetch_all_destinations(&self) -> Result<Vec<Destination>, StoreError> {
        Ok(self.destinations.read().await.clone())
    }

    async fn fetch_destination_by_city(
        &self,
        city: &str,
    ) -> Result<Option<Destination>, StoreError> {
        let destinations = self.destinations.read().await;
        Ok(destinations.iter().find(|d| d.city == city).cloned())
    }

    async fn count_destinations(&self) -> Result<i64, StoreError> {
        let count = self.destinations.read().await.len();
        i64::try_from(count).map_err(|e| StoreError::Query(e.to_string()))
    }

    async fn insert_destinations(&self, destinations: &[Destination]) -> Result<u64, StoreError> {
        let mut stored = self.destinations.write().await;
        let mut inserted = 0;
        for destination in destinations {
            if stored.iter().any(|d| d.city == destination.city) {
                continue;
            }
            stored.push(destination.clone());
            inserted += 1;
        }
        Ok(inserted)
    }

    async fn fetch_user(&self, username: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().await.get(username).cloned())
    }

    async fn insert_user(&self, username: &str) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(username) {
            return Err(StoreError::DuplicateUsername(username.to_string()));
        }
        let user = User::new(username);
        users.insert(username.to_string(), user.clone());
        Ok(user)
    }

    async fn increment_user(&self, username: &str, delta: ScoreDelta) -> Result<bool, StoreError> {
        let mut users = self.users.write().await;
        let Some(user) = users.get_mut(username) else {
            return Ok(false);
        };
        user.total_answers += delta.total;
        user.score += delta.score;
        user.correct_answers += delta.correct_answers;
        Ok(true)
    }

    async fn delete_user(&self, username: &str) -> Result<bool, StoreError> {
        Ok(self.users.write().await.remove(username).is_some())
    }
}
