//! Free-form notes attached to a single word
//!
//! Notes are keyed by the word id (`<category>::<word>`), so they survive
//! reloading the pool.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalNote {
    pub id: String,
    pub word_id: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalNotesState {
    pub notes: Vec<PersonalNote>,
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum PersonalNotesAction {
    Add { word_id: String, body: String },
    Update { id: String, body: String },
    Delete(String),
    ClearAll,
    ClearError,
}

impl PersonalNotesState {
    /// Notes for one word, oldest first
    pub fn for_word<'a>(&'a self, word_id: &'a str) -> impl Iterator<Item = &'a PersonalNote> + 'a {
        self.notes.iter().filter(move |n| n.word_id == word_id)
    }

    pub fn has_notes(&self, word_id: &str) -> bool {
        self.for_word(word_id).next().is_some()
    }
}

pub fn reduce(state: PersonalNotesState, action: PersonalNotesAction) -> PersonalNotesState {
    let now = Utc::now();
    match action {
        PersonalNotesAction::Add { word_id, body } => {
            let mut notes = state.notes;
            notes.push(PersonalNote {
                id: Uuid::new_v4().to_string(),
                word_id,
                body,
                created_at: now,
                updated_at: now,
            });
            PersonalNotesState { notes, error: None }
        }

        PersonalNotesAction::Update { id, body } => {
            let Some(pos) = state.notes.iter().position(|n| n.id == id) else {
                return PersonalNotesState {
                    error: Some("note not found".to_string()),
                    ..state
                };
            };
            let mut notes = state.notes;
            notes[pos].body = body;
            notes[pos].updated_at = now;
            PersonalNotesState { notes, error: None }
        }

        PersonalNotesAction::Delete(id) => PersonalNotesState {
            notes: state.notes.into_iter().filter(|n| n.id != id).collect(),
            error: None,
        },

        PersonalNotesAction::ClearAll => PersonalNotesState::default(),

        PersonalNotesAction::ClearError => PersonalNotesState { error: None, ..state },
    }
}
