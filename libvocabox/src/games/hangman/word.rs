//! Word selection and letter normalization for hangman
//!
//! Letters compare in a folded form: uppercase, diacritics stripped, with
//! `Ñ` kept as its own letter. Spaces and hyphens are shown but never guessed.

use std::collections::BTreeSet;

use rand::Rng;
use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::types::{word_id, Word};
use crate::words::WordPool;

pub const DEFAULT_MIN_LEN: usize = 5;
pub const DEFAULT_MAX_LEN: usize = 14;

/// The word being guessed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HangmanWord {
    pub id: String,
    pub palabra: String,
    pub significado: String,
    pub ejemplo: Option<String>,
    pub category: String,
    /// Shown to the player, accents included
    pub display: String,
    /// Folded form used for matching guesses
    pub normalized: String,
}

impl HangmanWord {
    /// Distinct guessable letters
    pub fn letters(&self) -> BTreeSet<char> {
        self.normalized.chars().filter(|c| is_letter(*c)).collect()
    }

    /// Letter count, spaces and hyphens excluded
    pub fn letter_count(&self) -> usize {
        self.normalized.chars().filter(|c| is_letter(*c)).count()
    }

    pub fn contains(&self, letter: char) -> bool {
        self.normalized.contains(letter)
    }
}

/// Folded letter or `None` for anything that is not a letter after folding
fn fold(c: char) -> Option<char> {
    if c == 'ñ' || c == 'Ñ' {
        return Some('Ñ');
    }
    std::iter::once(c)
        .nfd()
        .find(|d| !is_combining_mark(*d))
        .filter(char::is_ascii_alphabetic)
        .map(|d| d.to_ascii_uppercase())
}

pub(crate) fn is_letter(c: char) -> bool {
    c.is_ascii_uppercase() || c == 'Ñ'
}

/// Uppercase, strip diacritics, keep only letters, whitespace and hyphens
pub fn normalize_word(word: &str) -> String {
    word.chars()
        .filter_map(|c| {
            if c.is_whitespace() || c == '-' {
                Some(c)
            } else {
                fold(c)
            }
        })
        .collect::<String>()
        .trim()
        .to_string()
}

/// First letter of `input` in folded form; `None` when it has no letters
pub fn normalize_letter(input: &str) -> Option<char> {
    input.chars().find_map(fold)
}

/// Folded form of one displayed character, if it is a letter
pub fn fold_display_char(c: char) -> Option<char> {
    fold(c)
}

fn is_valid_for_hangman(normalized: &str, min_len: usize, max_len: usize) -> bool {
    let length = normalized.chars().filter(|c| is_letter(*c)).count();
    if length < min_len || length > max_len {
        return false;
    }
    !normalized.is_empty()
        && normalized
            .chars()
            .all(|c| is_letter(c) || c.is_whitespace() || c == '-')
}

/// What to pick a word from
#[derive(Debug, Clone)]
pub struct WordRequest<'a, S: AsRef<str>> {
    pub categories: &'a [S],
    pub min_len: usize,
    pub max_len: usize,
    /// Any string with digits, normally `YYYY-MM-DD`; same seed, same word
    pub daily_seed: Option<&'a str>,
}

impl<'a, S: AsRef<str>> WordRequest<'a, S> {
    pub fn new(categories: &'a [S]) -> Self {
        Self {
            categories,
            min_len: DEFAULT_MIN_LEN,
            max_len: DEFAULT_MAX_LEN,
            daily_seed: None,
        }
    }
}

/// Pick one playable word, or `None` if no word of the categories qualifies
pub fn build_hangman_word<S, R>(pool: &WordPool, request: &WordRequest<'_, S>, rng: &mut R) -> Option<HangmanWord>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let candidates: Vec<(&str, &Word, String)> = request
        .categories
        .iter()
        .flat_map(|category| {
            let category = category.as_ref();
            pool.words_for_category(category)
                .iter()
                .map(move |word| (category, word, normalize_word(&word.palabra)))
        })
        .filter(|(_, _, normalized)| is_valid_for_hangman(normalized, request.min_len, request.max_len))
        .collect();

    if candidates.is_empty() {
        return None;
    }

    let index = match request.daily_seed {
        Some(seed) => daily_index(seed, candidates.len()),
        None => rng.gen_range(0..candidates.len()),
    };

    let (category, word, normalized) = candidates.into_iter().nth(index)?;
    Some(HangmanWord {
        id: word_id(category, &word.palabra),
        palabra: word.palabra.clone(),
        significado: word.significado.clone(),
        ejemplo: word.ejemplo.clone(),
        category: category.to_string(),
        display: word.palabra.clone(),
        normalized,
    })
}

/// Digits of `seed` read as one decimal number, modulo `len`
///
/// The modulo is taken digit by digit so long seeds cannot overflow.
fn daily_index(seed: &str, len: usize) -> usize {
    let len = len as u64;
    seed.chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0u64, |acc, d| (acc * 10 + u64::from(d)) % len) as usize
}
