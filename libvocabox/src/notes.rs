//! Saved word notes grouped in collections
//!
//! There is always a default collection. It cannot be deleted, and notes of
//! a deleted collection move into it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_COLLECTION_ID: &str = "default";
pub const DEFAULT_COLLECTION_NAME: &str = "General";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub id: String,
    pub name: String,
    pub color: String,
    pub emoji: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub palabra: String,
    pub significado: String,
    pub ejemplo: Option<String>,
    pub collection_id: String,
    pub is_favorite: bool,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotesState {
    pub notes: Vec<Note>,
    pub collections: Vec<Collection>,
    pub error: Option<String>,
}

impl Default for NotesState {
    fn default() -> Self {
        Self {
            notes: Vec::new(),
            collections: vec![default_collection()],
            error: None,
        }
    }
}

fn default_collection() -> Collection {
    let now = Utc::now();
    Collection {
        id: DEFAULT_COLLECTION_ID.to_string(),
        name: DEFAULT_COLLECTION_NAME.to_string(),
        color: "#45B7D1".to_string(),
        emoji: "📚".to_string(),
        created_at: now,
        updated_at: now,
    }
}

#[derive(Debug, Clone)]
pub enum NotesAction {
    AddCollection {
        name: String,
        color: String,
        emoji: String,
    },
    UpdateCollection {
        id: String,
        name: Option<String>,
        color: Option<String>,
        emoji: Option<String>,
    },
    DeleteCollection(String),
    AddNote {
        palabra: String,
        significado: String,
        ejemplo: Option<String>,
        collection_id: String,
    },
    /// Fields left as `None` keep their current value
    UpdateNote {
        id: String,
        palabra: Option<String>,
        significado: Option<String>,
        ejemplo: Option<String>,
        tags: Option<Vec<String>>,
    },
    MoveNote {
        note_id: String,
        collection_id: String,
    },
    DeleteNote(String),
    ToggleFavorite(String),
    /// Remove every note; collections stay
    ClearAll,
    /// Drop every collection except the default and move all notes into it
    ClearAllCollections,
    ClearError,
}

impl NotesState {
    pub fn has_collection(&self, id: &str) -> bool {
        self.collections.iter().any(|c| c.id == id)
    }

    pub fn note(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn notes_in_collection<'a>(&'a self, collection_id: &'a str) -> impl Iterator<Item = &'a Note> + 'a {
        self.notes.iter().filter(move |n| n.collection_id == collection_id)
    }

    pub fn favorites(&self) -> impl Iterator<Item = &Note> {
        self.notes.iter().filter(|n| n.is_favorite)
    }

    /// Case-insensitive match on word, meaning, example or tags
    pub fn search(&self, query: &str) -> Vec<&Note> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        self.notes
            .iter()
            .filter(|n| {
                n.palabra.to_lowercase().contains(&query)
                    || n.significado.to_lowercase().contains(&query)
                    || n.ejemplo
                        .as_deref()
                        .is_some_and(|e| e.to_lowercase().contains(&query))
                    || n.tags.iter().any(|t| t.to_lowercase().contains(&query))
            })
            .collect()
    }

    /// Each collection with how many notes it holds
    pub fn collections_with_count(&self) -> Vec<(&Collection, usize)> {
        self.collections
            .iter()
            .map(|c| (c, self.notes_in_collection(&c.id).count()))
            .collect()
    }
}

fn not_found(state: NotesState, what: &str) -> NotesState {
    NotesState {
        error: Some(format!("{} not found", what)),
        ..state
    }
}

pub fn reduce(state: NotesState, action: NotesAction) -> NotesState {
    let now = Utc::now();
    match action {
        NotesAction::AddCollection { name, color, emoji } => {
            let mut collections = state.collections;
            collections.push(Collection {
                id: Uuid::new_v4().to_string(),
                name,
                color,
                emoji,
                created_at: now,
                updated_at: now,
            });
            NotesState {
                collections,
                error: None,
                ..state
            }
        }

        NotesAction::UpdateCollection {
            id,
            name,
            color,
            emoji,
        } => {
            let Some(pos) = state.collections.iter().position(|c| c.id == id) else {
                return not_found(state, "collection");
            };
            let mut collections = state.collections;
            let collection = &mut collections[pos];
            if let Some(name) = name {
                collection.name = name;
            }
            if let Some(color) = color {
                collection.color = color;
            }
            if let Some(emoji) = emoji {
                collection.emoji = emoji;
            }
            collection.updated_at = now;
            NotesState {
                collections,
                error: None,
                ..state
            }
        }

        NotesAction::DeleteCollection(id) => {
            if id == DEFAULT_COLLECTION_ID {
                return NotesState {
                    error: Some("the default collection cannot be deleted".to_string()),
                    ..state
                };
            }
            if !state.has_collection(&id) {
                return not_found(state, "collection");
            }
            let notes = state
                .notes
                .into_iter()
                .map(|note| {
                    if note.collection_id == id {
                        Note {
                            collection_id: DEFAULT_COLLECTION_ID.to_string(),
                            updated_at: now,
                            ..note
                        }
                    } else {
                        note
                    }
                })
                .collect();
            NotesState {
                notes,
                collections: state.collections.into_iter().filter(|c| c.id != id).collect(),
                error: None,
            }
        }

        NotesAction::AddNote {
            palabra,
            significado,
            ejemplo,
            collection_id,
        } => {
            if !state.has_collection(&collection_id) {
                return not_found(state, "collection");
            }
            let mut notes = state.notes;
            notes.push(Note {
                id: Uuid::new_v4().to_string(),
                palabra,
                significado,
                ejemplo,
                collection_id,
                is_favorite: false,
                tags: Vec::new(),
                created_at: now,
                updated_at: now,
            });
            NotesState {
                notes,
                error: None,
                ..state
            }
        }

        NotesAction::UpdateNote {
            id,
            palabra,
            significado,
            ejemplo,
            tags,
        } => {
            let Some(pos) = state.notes.iter().position(|n| n.id == id) else {
                return not_found(state, "note");
            };
            let mut notes = state.notes;
            let note = &mut notes[pos];
            if let Some(palabra) = palabra {
                note.palabra = palabra;
            }
            if let Some(significado) = significado {
                note.significado = significado;
            }
            if ejemplo.is_some() {
                note.ejemplo = ejemplo;
            }
            if let Some(tags) = tags {
                note.tags = tags;
            }
            note.updated_at = now;
            NotesState {
                notes,
                error: None,
                ..state
            }
        }

        NotesAction::MoveNote {
            note_id,
            collection_id,
        } => {
            if !state.has_collection(&collection_id) {
                return not_found(state, "collection");
            }
            let Some(pos) = state.notes.iter().position(|n| n.id == note_id) else {
                return not_found(state, "note");
            };
            let mut notes = state.notes;
            notes[pos].collection_id = collection_id;
            notes[pos].updated_at = now;
            NotesState {
                notes,
                error: None,
                ..state
            }
        }

        NotesAction::DeleteNote(id) => NotesState {
            notes: state.notes.into_iter().filter(|n| n.id != id).collect(),
            error: None,
            ..state
        },

        NotesAction::ToggleFavorite(id) => {
            let Some(pos) = state.notes.iter().position(|n| n.id == id) else {
                return not_found(state, "note");
            };
            let mut notes = state.notes;
            notes[pos].is_favorite = !notes[pos].is_favorite;
            notes[pos].updated_at = now;
            NotesState {
                notes,
                error: None,
                ..state
            }
        }

        NotesAction::ClearAll => NotesState {
            notes: Vec::new(),
            error: None,
            ..state
        },

        NotesAction::ClearAllCollections => {
            let collections = state
                .collections
                .into_iter()
                .filter(|c| c.id == DEFAULT_COLLECTION_ID)
                .collect::<Vec<_>>();
            let collections = if collections.is_empty() {
                vec![default_collection()]
            } else {
                collections
            };
            let notes = state
                .notes
                .into_iter()
                .map(|note| Note {
                    collection_id: DEFAULT_COLLECTION_ID.to_string(),
                    updated_at: now,
                    ..note
                })
                .collect();
            NotesState {
                notes,
                collections,
                error: None,
            }
        }

        NotesAction::ClearError => NotesState { error: None, ..state },
    }
}
