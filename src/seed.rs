// src/seed.rs

//! Loads the destination corpus from its JSON data file into the store.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::{
    models::destination::Destination,
    store::{QuizStore, StoreError},
};

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Reads the corpus file: a JSON array of `{city, country, clues, fun_fact, trivia}`.
pub fn load_corpus(path: &Path) -> Result<Vec<Destination>, SeedError> {
    let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_corpus(&raw).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses the corpus, dropping destinations that cannot be asked about
/// (no clues) and repeated cities.
pub fn parse_corpus(raw: &str) -> Result<Vec<Destination>, serde_json::Error> {
    let parsed: Vec<Destination> = serde_json::from_str(raw)?;

    let mut seen = HashSet::new();
    let corpus = parsed
        .into_iter()
        .filter(|destination| {
            if destination.clues.is_empty() {
                tracing::warn!("Skipping destination {}: no clues", destination.city);
                return false;
            }
            if !seen.insert(destination.city.clone()) {
                tracing::warn!("Skipping duplicate destination {}", destination.city);
                return false;
            }
            true
        })
        .collect();

    Ok(corpus)
}

/// Inserts the corpus from `path` when the store holds no destinations yet.
/// Returns the number of destinations inserted.
pub async fn seed_if_empty(store: &dyn QuizStore, path: &Path) -> Result<u64, SeedError> {
    let existing = store.count_destinations().await?;
    if existing > 0 {
        tracing::info!("Store already holds {} destinations, skipping seed", existing);
        return Ok(0);
    }

    let corpus = load_corpus(path)?;
    let inserted = store.insert_destinations(&corpus).await?;
    tracing::info!("Seeded {} destinations from {}", inserted, path.display());
    Ok(inserted)
}
