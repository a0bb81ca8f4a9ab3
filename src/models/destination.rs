// src/models/destination.rs

use serde::{Deserialize, Serialize};

/// A destination of the corpus. `city` is the natural key.
///
/// The serialized form matches the data file: `city, country, clues[], fun_fact[], trivia[]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub city: String,
    pub country: String,

    /// Never empty for destinations accepted into the corpus.
    pub clues: Vec<String>,

    #[serde(rename = "fun_fact", default)]
    pub fun_facts: Vec<String>,

    /// Carried through for API completeness; not used by question generation.
    #[serde(default)]
    pub trivia: Vec<String>,
}

/// Projection of a destination offered as a multiple-choice option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityOption {
    pub city: String,
    pub country: String,
}

impl From<&Destination> for CityOption {
    fn from(destination: &Destination) -> Self {
        Self {
            city: destination.city.clone(),
            country: destination.country.clone(),
        }
    }
}
