//! Pair selection and card dealing

use rand::Rng;
use serde::Serialize;

use super::state::{Card, CardKind, Pair};
use crate::random::{sample, shuffle};
use crate::types::NormalizedWord;

pub const DEFAULT_PAIR_COUNT: usize = 10;
/// Smallest board worth playing when the pool allows it
pub const MIN_COMFORTABLE_PAIRS: usize = 6;
/// Board size offered instead of a too-small request
pub const MAX_SUGGESTED_PAIRS: usize = 8;

/// Outcome of [`build_pairs_with_validation`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairsBuild {
    pub pairs: Vec<Pair>,
    pub actual_count: usize,
    /// The pool held fewer words than were asked for
    pub has_insufficient_words: bool,
}

fn to_pair(word: NormalizedWord) -> Pair {
    Pair {
        id: word.id,
        word: word.word,
        meaning: word.meaning,
        category: word.category,
    }
}

/// Up to `count` pairs sampled from `pool`
pub fn build_pairs<R: Rng + ?Sized>(pool: &[NormalizedWord], count: usize, rng: &mut R) -> Vec<Pair> {
    sample(pool, count, rng).into_iter().map(to_pair).collect()
}

/// Pairs sized for a playable board
///
/// Requests larger than the pool are clamped to it. A board that would end
/// up smaller than six pairs is grown to `min(available, 8)` when the pool
/// has at least six words.
pub fn build_pairs_with_validation<R: Rng + ?Sized>(
    pool: &[NormalizedWord],
    count: usize,
    rng: &mut R,
) -> PairsBuild {
    let available = pool.len();
    let clamped = count.min(available);
    let adjusted = if clamped < MIN_COMFORTABLE_PAIRS && available >= MIN_COMFORTABLE_PAIRS {
        available.min(MAX_SUGGESTED_PAIRS)
    } else {
        clamped
    };

    let pairs = build_pairs(pool, adjusted, rng);
    PairsBuild {
        actual_count: pairs.len(),
        pairs,
        has_insufficient_words: available < count,
    }
}

/// One word card and one meaning card per pair, each deck shuffled on its own
pub fn deal_cards<R: Rng + ?Sized>(pairs: &[Pair], rng: &mut R) -> (Vec<Card>, Vec<Card>) {
    let word_cards: Vec<Card> = pairs
        .iter()
        .map(|pair| Card::new(CardKind::Word, pair))
        .collect();
    let meaning_cards: Vec<Card> = pairs
        .iter()
        .map(|pair| Card::new(CardKind::Meaning, pair))
        .collect();

    (shuffle(&word_cards, rng), shuffle(&meaning_cards, rng))
}
