//! Hangman: guess a word letter by letter before running out of lives

pub mod actions;
pub mod difficulty;
pub mod reducer;
pub mod scoring;
pub mod session;
pub mod state;
pub mod word;

pub use actions::HangmanAction;
pub use difficulty::{Difficulty, DifficultyConfig};
pub use reducer::reduce;
pub use scoring::{calculate_score, time_bonus, ScoreParams};
pub use session::HangmanSession;
pub use state::{HangmanState, HangmanStats, HangmanStatus, HintAvailability};
pub use word::{build_hangman_word, normalize_letter, normalize_word, HangmanWord, WordRequest};
