// src/store/postgres.rs

use async_trait::async_trait;
use sqlx::{FromRow, PgPool, types::Json};

use super::{QuizStore, ScoreDelta, StoreError};
use crate::models::{destination::Destination, user::User};

/// Row of the 'destinations' table. List columns are stored as JSONB arrays.
#[derive(Debug, FromRow)]
struct DestinationRow {
    city: String,
    country: String,
    clues: Json<Vec<String>>,
    fun_fact: Json<Vec<String>>,
    trivia: Json<Vec<String>>,
}

impl From<DestinationRow> for Destination {
    fn from(row: DestinationRow) -> Self {
        Self {
            city: row.city,
            country: row.country,
            clues: row.clues.0,
            fun_facts: row.fun_fact.0,
            trivia: row.trivia.0,
        }
    }
}

/// PostgreSQL-backed store.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl QuizStore for PgStore {
    async fn fetch_all_destinations(&self) -> Result<Vec<Destination>, StoreError> {
        let rows = sqlx::query_as::<_, DestinationRow>(
            r#"
            SELECT city, country, clues, fun_fact, trivia
            FROM destinations
            ORDER BY city
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Destination::from).collect())
    }

    async fn fetch_destination_by_city(
        &self,
        city: &str,
    ) -> Result<Option<Destination>, StoreError> {
        let row = sqlx::query_as::<_, DestinationRow>(
            r#"
            SELECT city, country, clues, fun_fact, trivia
            FROM destinations
            WHERE city = $1
            "#,
        )
        .bind(city)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Destination::from))
    }

    async fn count_destinations(&self) -> Result<i64, StoreError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM destinations")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn insert_destinations(&self, destinations: &[Destination]) -> Result<u64, StoreError> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;

        for destination in destinations {
            let result = sqlx::query(
                r#"
                INSERT INTO destinations (city, country, clues, fun_fact, trivia)
                VALUES ($1, $2, $3, $4, $5)
                ON CONFLICT (city) DO NOTHING
                "#,
            )
            .bind(&destination.city)
            .bind(&destination.country)
            .bind(Json(&destination.clues))
            .bind(Json(&destination.fun_facts))
            .bind(Json(&destination.trivia))
            .execute(&mut *tx)
            .await?;
            inserted += result.rows_affected();
        }

        tx.commit().await?;
        Ok(inserted)
    }

    async fn fetch_user(&self, username: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT username, score, correct_answers, total_answers, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn insert_user(&self, username: &str) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username)
            VALUES ($1)
            RETURNING username, score, correct_answers, total_answers, created_at
            "#,
        )
        .bind(username)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                StoreError::DuplicateUsername(username.to_string())
            }
            other => StoreError::from(other),
        })
    }

    async fn increment_user(&self, username: &str, delta: ScoreDelta) -> Result<bool, StoreError> {
        // Single compound update: concurrent submissions cannot lose increments.
        let result = sqlx::query(
            r#"
            UPDATE users
            SET total_answers = total_answers + $2,
                score = score + $3,
                correct_answers = correct_answers + $4
            WHERE username = $1
            "#,
        )
        .bind(username)
        .bind(delta.total)
        .bind(delta.score)
        .bind(delta.correct_answers)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_user(&self, username: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM users WHERE username = $1")
            .bind(username)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
