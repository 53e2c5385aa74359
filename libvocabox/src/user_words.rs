//! Words added by the user
//!
//! A small reducer over the user's own vocabulary list. When enabled, the
//! list joins the game pools as the `user` category (see
//! [`WordPool::with_user_words`](crate::words::WordPool::with_user_words)).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::Word;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserWord {
    pub id: String,
    pub palabra: String,
    pub significado: String,
    pub ejemplo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserWord {
    pub fn to_word(&self) -> Word {
        Word {
            palabra: self.palabra.clone(),
            significado: self.significado.clone(),
            ejemplo: self.ejemplo.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserWordsState {
    pub words: Vec<UserWord>,
    pub enabled: bool,
    pub error: Option<String>,
}

impl Default for UserWordsState {
    fn default() -> Self {
        Self {
            words: Vec::new(),
            enabled: true,
            error: None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum UserWordsAction {
    Add {
        palabra: String,
        significado: String,
        ejemplo: Option<String>,
    },
    /// Fields left as `None` keep their current value
    Update {
        id: String,
        palabra: Option<String>,
        significado: Option<String>,
        ejemplo: Option<String>,
    },
    Delete(String),
    ToggleEnabled,
    SetEnabled(bool),
    ClearError,
}

/// Apply one action to the user word list
pub fn reduce(state: UserWordsState, action: UserWordsAction) -> UserWordsState {
    match action {
        UserWordsAction::Add {
            palabra,
            significado,
            ejemplo,
        } => {
            let now = Utc::now();
            let mut words = state.words;
            words.push(UserWord {
                id: Uuid::new_v4().to_string(),
                palabra,
                significado,
                ejemplo,
                created_at: now,
                updated_at: now,
            });
            UserWordsState {
                words,
                error: None,
                ..state
            }
        }

        UserWordsAction::Update {
            id,
            palabra,
            significado,
            ejemplo,
        } => {
            let mut words = state.words;
            let Some(pos) = words.iter().position(|w| w.id == id) else {
                return UserWordsState {
                    words,
                    error: Some("word not found".to_string()),
                    ..state
                };
            };
            let word = &mut words[pos];

            if let Some(palabra) = palabra {
                word.palabra = palabra;
            }
            if let Some(significado) = significado {
                word.significado = significado;
            }
            if ejemplo.is_some() {
                word.ejemplo = ejemplo;
            }
            word.updated_at = Utc::now();

            UserWordsState {
                words,
                error: None,
                ..state
            }
        }

        UserWordsAction::Delete(id) => UserWordsState {
            words: state.words.into_iter().filter(|w| w.id != id).collect(),
            error: None,
            ..state
        },

        UserWordsAction::ToggleEnabled => UserWordsState {
            enabled: !state.enabled,
            ..state
        },

        UserWordsAction::SetEnabled(enabled) => UserWordsState { enabled, ..state },

        UserWordsAction::ClearError => UserWordsState {
            error: None,
            ..state
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(state: UserWordsState, palabra: &str) -> UserWordsState {
        reduce(
            state,
            UserWordsAction::Add {
                palabra: palabra.to_string(),
                significado: format!("significado de {}", palabra),
                ejemplo: None,
            },
        )
    }

    #[test]
    fn test_add_and_delete() {
        let state = add(add(UserWordsState::default(), "Sobremesa"), "Madrugar");
        assert_eq!(state.words.len(), 2);
        assert_ne!(state.words[0].id, state.words[1].id);

        let id = state.words[0].id.clone();
        let state = reduce(state, UserWordsAction::Delete(id));
        assert_eq!(state.words.len(), 1);
        assert_eq!(state.words[0].palabra, "Madrugar");
    }

    #[test]
    fn test_update_changes_only_given_fields() {
        let state = add(UserWordsState::default(), "Sobremesa");
        let id = state.words[0].id.clone();

        let state = reduce(
            state,
            UserWordsAction::Update {
                id,
                palabra: None,
                significado: Some("Charla tras comer".to_string()),
                ejemplo: Some("Nos quedamos de sobremesa".to_string()),
            },
        );

        let word = &state.words[0];
        assert_eq!(word.palabra, "Sobremesa");
        assert_eq!(word.significado, "Charla tras comer");
        assert!(word.updated_at >= word.created_at);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_update_unknown_sets_error() {
        let state = reduce(
            UserWordsState::default(),
            UserWordsAction::Update {
                id: "nope".to_string(),
                palabra: Some("x".to_string()),
                significado: None,
                ejemplo: None,
            },
        );
        assert_eq!(state.error.as_deref(), Some("word not found"));

        let state = reduce(state, UserWordsAction::ClearError);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_toggle_enabled() {
        let state = UserWordsState::default();
        assert!(state.enabled);
        let state = reduce(state, UserWordsAction::ToggleEnabled);
        assert!(!state.enabled);
        let state = reduce(state, UserWordsAction::SetEnabled(true));
        assert!(state.enabled);
    }
}
