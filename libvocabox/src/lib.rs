//! Vocabox - vocabulary games over categorized word lists
//!
//! This library holds the engine behind the Vocabox front ends: word pools,
//! the quiz, hangman and memorandum state machines, the focus slideshow
//! sequencer, saved notes, per-word notes and user-defined words.

pub mod config;
pub mod error;
pub mod focus;
pub mod games;
pub mod logging;
pub mod notes;
pub mod personal_notes;
pub mod random;
pub mod types;
pub mod user_words;
pub mod words;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, VocaboxError};
pub use random::{game_rng, GameRng};
pub use types::{NormalizedWord, Word};
pub use words::{CategoryStats, WordPool};
