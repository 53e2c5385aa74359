//! Pure reducer for memorandum
//!
//! A word and a meaning face up at the same time are evaluated at once,
//! whichever was picked first. A mismatch locks input until
//! [`MemorandumAction::ClearSelections`] arrives; the caller decides how long
//! the pair stays visible.

use super::actions::MemorandumAction;
use super::state::{Card, CardKind, MemorandumState, MemorandumStatus};

/// Transition table: which actions apply in which status
pub fn admits(status: MemorandumStatus, action: &MemorandumAction) -> bool {
    use MemorandumAction::*;
    use MemorandumStatus::*;

    match (status, action) {
        (_, Init { .. } | Reset | ClearSelections | ClearJustMatched) => true,
        (Running, SelectWord(_) | SelectMeaning(_)) => true,
        _ => false,
    }
}

pub fn reduce(state: MemorandumState, action: MemorandumAction) -> MemorandumState {
    if !admits(state.status, &action) {
        tracing::trace!(status = ?state.status, ?action, "memorandum action ignored");
        return state;
    }

    match action {
        MemorandumAction::Init {
            pairs,
            word_cards,
            meaning_cards,
        } => MemorandumState {
            status: MemorandumStatus::Running,
            pairs,
            word_cards,
            meaning_cards,
            ..MemorandumState::default()
        },

        MemorandumAction::SelectWord(card_id) => select(state, CardKind::Word, &card_id),
        MemorandumAction::SelectMeaning(card_id) => select(state, CardKind::Meaning, &card_id),

        MemorandumAction::ClearSelections => {
            let word_cards = face_down(state.word_cards, state.selected_word_id.as_deref());
            let meaning_cards = face_down(state.meaning_cards, state.selected_meaning_id.as_deref());
            MemorandumState {
                word_cards,
                meaning_cards,
                selected_word_id: None,
                selected_meaning_id: None,
                lock_input: false,
                ..state
            }
        }

        MemorandumAction::ClearJustMatched => MemorandumState {
            just_matched_card_ids: Vec::new(),
            ..state
        },

        MemorandumAction::Reset => MemorandumState::default(),
    }
}

/// Unflip the card with `id` unless it is matched
fn face_down(mut cards: Vec<Card>, id: Option<&str>) -> Vec<Card> {
    if let Some(card) = id.and_then(|id| cards.iter_mut().find(|c| c.id == id)) {
        if !card.matched {
            card.flipped = false;
        }
    }
    cards
}

fn select(state: MemorandumState, kind: CardKind, card_id: &str) -> MemorandumState {
    if state.lock_input {
        return state;
    }

    let (deck, selected) = match kind {
        CardKind::Word => (&state.word_cards, &state.selected_word_id),
        CardKind::Meaning => (&state.meaning_cards, &state.selected_meaning_id),
    };
    let Some(card) = deck.iter().find(|c| c.id == card_id) else {
        return state;
    };
    if card.matched {
        return state;
    }

    let previous = selected.clone().filter(|id| id != card_id);
    let mut deck = face_down(deck.clone(), previous.as_deref());
    if let Some(card) = deck.iter_mut().find(|c| c.id == card_id) {
        card.flipped = true;
    }

    let state = match kind {
        CardKind::Word => MemorandumState {
            word_cards: deck,
            selected_word_id: Some(card_id.to_string()),
            ..state
        },
        CardKind::Meaning => MemorandumState {
            meaning_cards: deck,
            selected_meaning_id: Some(card_id.to_string()),
            ..state
        },
    };

    // Word-after-meaning is evaluated too, so a pair can be opened from either column
    evaluate(state)
}

/// Compare the selected word and meaning, if both are set
fn evaluate(state: MemorandumState) -> MemorandumState {
    let (Some(word_id), Some(meaning_id)) = (&state.selected_word_id, &state.selected_meaning_id) else {
        return state;
    };
    let (Some(word), Some(meaning)) = (state.word_card(word_id), state.meaning_card(meaning_id)) else {
        return state;
    };

    if word.pair_id != meaning.pair_id {
        return MemorandumState {
            lock_input: true,
            ..state
        };
    }

    let just_matched_card_ids = vec![word_id.clone(), meaning_id.clone()];
    let word_cards = mark_matched(state.word_cards.clone(), word_id);
    let meaning_cards = mark_matched(state.meaning_cards.clone(), meaning_id);
    let status = if word_cards.iter().all(|c| c.matched) {
        MemorandumStatus::Finished
    } else {
        state.status
    };

    MemorandumState {
        status,
        word_cards,
        meaning_cards,
        selected_word_id: None,
        selected_meaning_id: None,
        lock_input: false,
        just_matched_card_ids,
        ..state
    }
}

fn mark_matched(mut cards: Vec<Card>, id: &str) -> Vec<Card> {
    if let Some(card) = cards.iter_mut().find(|c| c.id == id) {
        card.matched = true;
        card.flipped = true;
    }
    cards
}
