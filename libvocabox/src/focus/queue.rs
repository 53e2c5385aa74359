//! Building the slide queue of a focus session

use rand::Rng;

use super::state::{FocusOrder, FocusSource, FocusState, FocusWordItem};
use crate::random::shuffle;
use crate::types::NormalizedWord;
use crate::words::{display_name, WordPool};

/// Inputs of [`build_focus_queue`]
#[derive(Debug, Clone, Copy)]
pub struct QueueRequest<'a> {
    pub source: FocusSource,
    pub category_ids: &'a [String],
    pub selected_word_ids: &'a [String],
    pub order: FocusOrder,
}

impl<'a> QueueRequest<'a> {
    /// The request described by a session in the selecting phase
    pub fn from_state(state: &'a FocusState) -> Self {
        Self {
            source: state.source,
            category_ids: &state.category_ids,
            selected_word_ids: &state.selected_word_ids,
            order: state.settings.order,
        }
    }
}

impl From<NormalizedWord> for FocusWordItem {
    fn from(word: NormalizedWord) -> Self {
        Self {
            category: display_name(&word.category).to_string(),
            id: word.id,
            word: word.word,
            meaning: word.meaning,
        }
    }
}

/// Slides for whole categories or for hand-picked word ids
///
/// Manual selections keep pool order unless the order is random.
pub fn build_focus_queue<R: Rng + ?Sized>(
    pool: &WordPool,
    request: QueueRequest<'_>,
    rng: &mut R,
) -> Vec<FocusWordItem> {
    let words = match request.source {
        FocusSource::Category => pool.pool_from_categories(request.category_ids),
        FocusSource::Manual => pool.words_by_ids(request.selected_word_ids),
    };
    let queue: Vec<FocusWordItem> = words.into_iter().map(FocusWordItem::from).collect();

    match request.order {
        FocusOrder::Random => shuffle(&queue, rng),
        FocusOrder::Fixed => queue,
    }
}
