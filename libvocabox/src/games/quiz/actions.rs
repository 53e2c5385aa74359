//! Actions for the quiz reducer

use super::state::QuizQuestion;

/// Everything that can happen during a quiz
#[derive(Debug, Clone, PartialEq)]
pub enum QuizAction {
    /// Start a new quiz over already-built questions
    Init {
        questions: Vec<QuizQuestion>,
        seconds_per_question: u32,
    },

    /// One second elapsed on the current question
    Tick,

    /// The player picked an option of the current question
    Answer { option_id: String },

    /// Move on without answering; also what a timeout does
    SkipOrTimeout,

    Pause,
    Resume,

    /// Back to an idle, empty quiz
    Reset,
}
