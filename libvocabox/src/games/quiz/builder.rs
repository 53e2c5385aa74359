//! Builds quiz questions from a word pool
//!
//! Each question asks for the meaning of one word. Distractors are other
//! words' meanings, taken from the same category first. Small pools give
//! fewer questions or fewer options instead of failing.

use std::collections::HashSet;

use rand::Rng;

use super::state::{QuizOption, QuizQuestion};
use crate::random::{base36_suffix, sample, shuffle};
use crate::types::NormalizedWord;

pub const DEFAULT_OPTIONS_PER_QUESTION: usize = 4;

const QUESTION_ID_SUFFIX_LEN: usize = 9;

#[derive(Debug, Clone, Copy)]
pub struct QuestionRequest<'a> {
    pub words_pool: &'a [NormalizedWord],
    /// Only ask about words of this category; distractors may still come from any
    pub category: Option<&'a str>,
    pub count: usize,
    pub options_per_question: usize,
}

impl<'a> QuestionRequest<'a> {
    pub fn new(words_pool: &'a [NormalizedWord], count: usize) -> Self {
        Self {
            words_pool,
            category: None,
            count,
            options_per_question: DEFAULT_OPTIONS_PER_QUESTION,
        }
    }
}

/// Up to `count` questions, one per distinct sampled word
pub fn build_questions<R: Rng + ?Sized>(request: QuestionRequest<'_>, rng: &mut R) -> Vec<QuizQuestion> {
    let filtered: Vec<NormalizedWord> = match request.category {
        Some(category) => request
            .words_pool
            .iter()
            .filter(|w| w.category == category)
            .cloned()
            .collect(),
        None => request.words_pool.to_vec(),
    };

    let selected = sample(&filtered, request.count, rng);
    let needed = request.options_per_question.saturating_sub(1);

    selected
        .into_iter()
        .map(|correct| {
            let distractors = build_distractors(&correct, request.words_pool, needed, rng);

            let mut options = Vec::with_capacity(distractors.len() + 1);
            options.push(QuizOption {
                id: format!("{}-correct", correct.id),
                text: correct.meaning.clone(),
                is_correct: true,
            });
            options.extend(distractors.into_iter().enumerate().map(|(i, word)| QuizOption {
                id: format!("{}-distractor-{}", correct.id, i),
                text: word.meaning,
                is_correct: false,
            }));

            QuizQuestion {
                id: format!("{}#{}", correct.id, base36_suffix(rng, QUESTION_ID_SUFFIX_LEN)),
                word_id: correct.id,
                word: correct.word,
                correct_meaning: correct.meaning,
                options: shuffle(&options, rng),
                category: correct.category,
                example: correct.example,
            }
        })
        .collect()
}

/// Words whose meanings can stand next to `correct` without looking alike
///
/// No returned meaning equals the correct one or another returned one,
/// ignoring case.
fn build_distractors<R: Rng + ?Sized>(
    correct: &NormalizedWord,
    pool: &[NormalizedWord],
    needed: usize,
    rng: &mut R,
) -> Vec<NormalizedWord> {
    if needed == 0 {
        return Vec::new();
    }

    let correct_meaning = correct.meaning.to_lowercase();
    let (same_category, other_category): (Vec<&NormalizedWord>, Vec<&NormalizedWord>) = pool
        .iter()
        .filter(|w| w.id != correct.id && w.meaning.to_lowercase() != correct_meaning)
        .partition(|w| w.category == correct.category);

    let mut seen: HashSet<String> = HashSet::new();
    seen.insert(correct_meaning);

    let mut picked = Vec::with_capacity(needed);
    for group in [same_category, other_category] {
        for word in shuffle(&group, rng) {
            if picked.len() == needed {
                return picked;
            }
            if seen.insert(word.meaning.to_lowercase()) {
                picked.push(word.clone());
            }
        }
    }
    picked
}
