//! Word pool provider
//!
//! A [`WordPool`] is built explicitly (built-in lists, a directory of JSON
//! files, or in-memory lists) and handed to the sessions that need it.
//! Unknown categories are not an error; they simply contribute no words.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

use crate::config::Config;
use crate::error::{DataError, Result};
use crate::types::{NormalizedWord, Word};
use crate::user_words::UserWordsState;

/// Category id under which enabled user words appear
pub const USER_CATEGORY: &str = "user";

const BUILTIN: &[(&str, &str, &str)] = &[
    ("technology", "Tecnología", include_str!("../data/technology.json")),
    ("science", "Ciencia", include_str!("../data/science.json")),
    ("business", "Negocios", include_str!("../data/business.json")),
    ("arts", "Arte", include_str!("../data/arts.json")),
    ("food", "Comida", include_str!("../data/food.json")),
    ("travel", "Viaje", include_str!("../data/travel.json")),
    ("sports", "Deportes", include_str!("../data/sports.json")),
    ("medicine", "Medicina", include_str!("../data/medicine.json")),
    ("law", "Derecho", include_str!("../data/law.json")),
    ("engineering", "Ingeniería", include_str!("../data/engineering.json")),
];

/// Word count for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryStats {
    pub id: String,
    pub name: String,
    pub total: usize,
}

/// Categorized word lists
#[derive(Debug, Clone, Default)]
pub struct WordPool {
    categories: BTreeMap<String, Vec<Word>>,
}

impl WordPool {
    /// Word lists compiled into the crate
    pub fn builtin() -> Result<Self> {
        let mut categories = BTreeMap::new();
        for (id, _, json) in BUILTIN {
            let words: Vec<Word> = serde_json::from_str(json).map_err(|source| DataError::Parse {
                path: format!("<builtin>/{}.json", id),
                source,
            })?;
            categories.insert(id.to_string(), words);
        }
        Ok(Self { categories })
    }

    /// Load every `<category>.json` file in `dir`
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let display = dir.display().to_string();
        let entries = std::fs::read_dir(dir).map_err(|source| DataError::Read {
            path: display.clone(),
            source,
        })?;

        let mut categories = BTreeMap::new();
        for entry in entries {
            let path = entry
                .map_err(|source| DataError::Read {
                    path: display.clone(),
                    source,
                })?
                .path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(category) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let path_str = path.display().to_string();
            let content = std::fs::read_to_string(&path).map_err(|source| DataError::Read {
                path: path_str.clone(),
                source,
            })?;
            let words: Vec<Word> = serde_json::from_str(&content).map_err(|source| {
                DataError::Parse {
                    path: path_str.clone(),
                    source,
                }
            })?;

            tracing::debug!(category, count = words.len(), "loaded word file");
            categories.insert(category.to_string(), words);
        }

        if categories.is_empty() {
            return Err(DataError::Empty(display).into());
        }
        Ok(Self { categories })
    }

    /// Pool from in-memory lists
    pub fn from_categories<I, S>(lists: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<Word>)>,
        S: Into<String>,
    {
        Self {
            categories: lists
                .into_iter()
                .map(|(id, words)| (id.into(), words))
                .collect(),
        }
    }

    /// Pool selected by configuration: a words directory or the built-in lists
    pub fn load(config: &Config) -> Result<Self> {
        match config.words_dir() {
            Some(dir) => Self::from_dir(&dir),
            None => Self::builtin(),
        }
    }

    /// Category ids in sorted order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    /// Raw list for a category; empty for unknown ids
    pub fn words_for_category(&self, category: &str) -> &[Word] {
        self.categories
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn normalized_for_category(&self, category: &str) -> Vec<NormalizedWord> {
        self.words_for_category(category)
            .iter()
            .map(|word| NormalizedWord::from_word(category, word))
            .collect()
    }

    /// Concatenated, normalized words of the given categories, in request order
    pub fn pool_from_categories<S: AsRef<str>>(&self, categories: &[S]) -> Vec<NormalizedWord> {
        categories
            .iter()
            .flat_map(|category| self.normalized_for_category(category.as_ref()))
            .collect()
    }

    pub fn all_words(&self) -> Vec<NormalizedWord> {
        self.categories
            .keys()
            .flat_map(|category| self.normalized_for_category(category))
            .collect()
    }

    pub fn category_stats(&self) -> Vec<CategoryStats> {
        self.categories
            .iter()
            .map(|(id, words)| CategoryStats {
                id: id.clone(),
                name: display_name(id).to_string(),
                total: words.len(),
            })
            .collect()
    }

    /// Case-insensitive substring search over words and meanings
    ///
    /// A blank query matches nothing. `categories` narrows the search.
    pub fn search<S: AsRef<str>>(&self, query: &str, categories: Option<&[S]>) -> Vec<NormalizedWord> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        let candidates = match categories {
            Some(categories) => self.pool_from_categories(categories),
            None => self.all_words(),
        };

        candidates
            .into_iter()
            .filter(|w| {
                w.word.to_lowercase().contains(&query) || w.meaning.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Words whose id is listed, in pool order
    pub fn words_by_ids<S: AsRef<str>>(&self, ids: &[S]) -> Vec<NormalizedWord> {
        self.all_words()
            .into_iter()
            .filter(|w| ids.iter().any(|id| id.as_ref() == w.id))
            .collect()
    }

    /// Copy of this pool with the user's own words as the `user` category
    ///
    /// Disabled or empty user lists leave the pool as it is.
    pub fn with_user_words(&self, user_words: &UserWordsState) -> WordPool {
        let mut pool = self.clone();
        if user_words.enabled && !user_words.words.is_empty() {
            let words = user_words.words.iter().map(|w| w.to_word()).collect();
            pool.categories.insert(USER_CATEGORY.to_string(), words);
        }
        pool
    }
}

/// Human-readable name for a category id
pub fn display_name(category: &str) -> &str {
    if category == USER_CATEGORY {
        return "Mis palabras";
    }
    BUILTIN
        .iter()
        .find(|(id, _, _)| *id == category)
        .map(|(_, name, _)| *name)
        .unwrap_or(category)
}
