//! FlashQuiz: multiple-choice "which meaning fits this word" rounds
//!
//! Questions come from [`builder::build_questions`], points from
//! [`scoring::calc_score`]. [`QuizSession`] ties both to the reducer.

pub mod actions;
pub mod builder;
pub mod reducer;
pub mod scoring;
pub mod session;
pub mod state;

pub use actions::QuizAction;
pub use builder::{build_questions, QuestionRequest};
pub use reducer::reduce;
pub use scoring::{calc_score, ScoreInput};
pub use session::{QuizSession, QuizSetup};
pub use state::{Progress, QuizOption, QuizQuestion, QuizState, QuizStatus, UserAnswer};
