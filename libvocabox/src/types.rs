//! Core word types shared by every game

use serde::{Deserialize, Serialize};

/// One entry of a category word list, as stored in the JSON datasets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub palabra: String,
    pub significado: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ejemplo: Option<String>,
}

impl Word {
    pub fn new(palabra: impl Into<String>, significado: impl Into<String>) -> Self {
        Self {
            palabra: palabra.into(),
            significado: significado.into(),
            ejemplo: None,
        }
    }

    pub fn with_example(mut self, ejemplo: impl Into<String>) -> Self {
        self.ejemplo = Some(ejemplo.into());
        self
    }
}

/// A word tagged with its category and a stable id
///
/// Built once when a game pool is assembled; read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedWord {
    pub id: String,
    pub word: String,
    pub meaning: String,
    pub example: Option<String>,
    pub category: String,
}

impl NormalizedWord {
    pub fn from_word(category: &str, word: &Word) -> Self {
        Self {
            id: word_id(category, &word.palabra),
            word: word.palabra.clone(),
            meaning: word.significado.clone(),
            example: word.ejemplo.clone(),
            category: category.to_string(),
        }
    }
}

/// Structural id of a word: `<category>::<word>`
pub fn word_id(category: &str, palabra: &str) -> String {
    format!("{}::{}", category, palabra.trim())
}
