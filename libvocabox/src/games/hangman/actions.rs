//! Actions for the hangman reducer

use super::difficulty::DifficultyConfig;
use super::word::HangmanWord;

#[derive(Debug, Clone, PartialEq)]
pub enum HangmanAction {
    /// Start a round with an already chosen word
    Init {
        word: HangmanWord,
        config: DifficultyConfig,
        daily_seed: Option<String>,
    },

    /// Raw player input; only its first letter counts
    Guess(String),

    UseHintMeaning,
    UseHintExample,
    /// `letter` is the unguessed letter picked by the caller, if any is left
    UseHintReveal { letter: Option<char> },

    Pause,
    Resume,
    GiveUp,

    /// One second elapsed on a timed round
    TickTimer,

    /// Settle the score of a finished or abandoned round
    CalculateFinalScore,

    Reset,
}
