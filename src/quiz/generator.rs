// src/quiz/generator.rs

use rand::{Rng, seq::SliceRandom};

use super::QuizError;
use crate::models::{
    destination::{CityOption, Destination},
    question::Question,
};

pub const DEFAULT_OPTION_COUNT: usize = 4;

/// Upper bound of the clue count drawn per question.
const MAX_CLUES: usize = 2;

/// Builds one randomized question from the corpus.
///
/// * Picks the correct destination uniformly.
/// * Draws 1 or 2 of its clues without replacement (all of them if it has fewer).
/// * Samples `option_count - 1` distractors without replacement from destinations with a
///   different city, clamped to however many exist, then shuffles the correct answer in.
///
/// Only an empty corpus is an error; every other size mismatch is clamped.
pub fn generate_question<R>(
    corpus: &[Destination],
    option_count: usize,
    rng: &mut R,
) -> Result<Question, QuizError>
where
    R: Rng,
{
    let correct = corpus.choose(rng).ok_or(QuizError::EmptyCorpus)?;

    let clue_count = rng.gen_range(1..=MAX_CLUES);
    let clues: Vec<String> = correct
        .clues
        .choose_multiple(rng, clue_count)
        .cloned()
        .collect();

    let distractor_pool: Vec<&Destination> = corpus
        .iter()
        .filter(|d| d.city != correct.city)
        .collect();

    let distractor_count = option_count
        .saturating_sub(1)
        .min(distractor_pool.len());

    let mut picked: Vec<&Destination> = distractor_pool
        .choose_multiple(rng, distractor_count)
        .copied()
        .collect();
    picked.push(correct);
    // Without this the correct answer would always sit last.
    picked.shuffle(rng);

    Ok(Question {
        clues,
        options: picked.into_iter().map(CityOption::from).collect(),
        correct_answer: correct.city.clone(),
    })
}
