//! Actions for the memorandum reducer

use super::state::{Card, Pair};

#[derive(Debug, Clone, PartialEq)]
pub enum MemorandumAction {
    /// Start with already shuffled decks
    Init {
        pairs: Vec<Pair>,
        word_cards: Vec<Card>,
        meaning_cards: Vec<Card>,
    },
    SelectWord(String),
    SelectMeaning(String),
    /// Turn a mismatched pair face down again and unlock input
    ClearSelections,
    ClearJustMatched,
    Reset,
}
