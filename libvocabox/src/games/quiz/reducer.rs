//! Pure reducer for the quiz
//!
//! `(QuizState, QuizAction) -> QuizState`. Timestamps are left to the
//! session; everything else about a transition happens here.

use std::collections::HashMap;

use super::actions::QuizAction;
use super::scoring::{calc_score, ScoreInput};
use super::state::{QuizState, QuizStatus, UserAnswer};

/// Transition table: which actions apply in which status
pub fn admits(status: QuizStatus, action: &QuizAction) -> bool {
    use QuizAction::*;
    use QuizStatus::*;

    match (status, action) {
        (_, Init { .. } | Reset) => true,
        (Running, Tick | Answer { .. } | SkipOrTimeout | Pause) => true,
        (Paused, Resume) => true,
        _ => false,
    }
}

pub fn reduce(state: QuizState, action: QuizAction) -> QuizState {
    if !admits(state.status, &action) {
        tracing::trace!(status = ?state.status, ?action, "quiz action ignored");
        return state;
    }

    match action {
        QuizAction::Init {
            questions,
            seconds_per_question,
        } => QuizState {
            status: QuizStatus::Running,
            questions,
            current_index: 0,
            seconds_per_question,
            time_left: seconds_per_question,
            answers: HashMap::new(),
            score: 0,
            started_at: None,
            finished_at: None,
        },

        QuizAction::Tick => {
            let time_left = state.time_left.saturating_sub(1);
            if time_left == 0 {
                skip_or_timeout(QuizState { time_left, ..state })
            } else {
                QuizState { time_left, ..state }
            }
        }

        QuizAction::Answer { option_id } => answer(state, &option_id),

        QuizAction::SkipOrTimeout => skip_or_timeout(state),

        QuizAction::Pause => QuizState {
            status: QuizStatus::Paused,
            ..state
        },

        QuizAction::Resume => QuizState {
            status: QuizStatus::Running,
            ..state
        },

        QuizAction::Reset => QuizState::default(),
    }
}

fn answer(state: QuizState, option_id: &str) -> QuizState {
    let Some(question) = state.current_question() else {
        return state;
    };
    let Some(option) = question.options.iter().find(|o| o.id == option_id) else {
        return state;
    };

    let is_correct = option.is_correct;
    let points = calc_score(ScoreInput::new(
        is_correct,
        state.time_left,
        state.seconds_per_question,
    ));
    let record = UserAnswer {
        question_id: question.id.clone(),
        selected_option_id: option_id.to_string(),
        is_correct,
        time_left: state.time_left,
    };

    let score = state.score + points;
    advance(QuizState { score, ..state }, record)
}

fn skip_or_timeout(state: QuizState) -> QuizState {
    let Some(question) = state.current_question() else {
        return state;
    };

    let record = UserAnswer {
        question_id: question.id.clone(),
        selected_option_id: String::new(),
        is_correct: false,
        time_left: 0,
    };
    advance(state, record)
}

fn advance(state: QuizState, record: UserAnswer) -> QuizState {
    let mut answers = state.answers;
    answers.insert(record.question_id.clone(), record);

    let current_index = state.current_index + 1;
    if current_index >= state.questions.len() {
        QuizState {
            status: QuizStatus::Finished,
            answers,
            current_index,
            ..state
        }
    } else {
        QuizState {
            answers,
            current_index,
            time_left: state.seconds_per_question,
            ..state
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::quiz::state::{QuizOption, QuizQuestion};

    fn question(n: usize) -> QuizQuestion {
        let word_id = format!("technology::W{}", n);
        QuizQuestion {
            id: format!("{}#q", word_id),
            word: format!("W{}", n),
            correct_meaning: format!("meaning {}", n),
            options: vec![
                QuizOption {
                    id: format!("{}-distractor-0", word_id),
                    text: "other".to_string(),
                    is_correct: false,
                },
                QuizOption {
                    id: format!("{}-correct", word_id),
                    text: format!("meaning {}", n),
                    is_correct: true,
                },
            ],
            category: "technology".to_string(),
            example: None,
            word_id,
        }
    }

    fn running(n: usize) -> QuizState {
        reduce(
            QuizState::default(),
            QuizAction::Init {
                questions: (0..n).map(question).collect(),
                seconds_per_question: 10,
            },
        )
    }

    fn correct_id(state: &QuizState) -> String {
        state.current_question().unwrap().correct_option().unwrap().id.clone()
    }

    #[test]
    fn test_init_resets_everything() {
        let state = running(3);
        assert_eq!(state.status, QuizStatus::Running);
        assert_eq!(state.current_index, 0);
        assert_eq!(state.time_left, 10);
        assert_eq!(state.score, 0);
        assert!(state.answers.is_empty());
        assert_eq!(state.progress().current, 1);
        assert_eq!(state.progress().total, 3);
    }

    #[test]
    fn test_correct_answer_scores_and_advances() {
        let state = running(2);
        let option_id = correct_id(&state);
        let state = reduce(state, QuizAction::Answer { option_id: option_id.clone() });

        assert_eq!(state.score, 15);
        assert_eq!(state.current_index, 1);
        assert_eq!(state.time_left, 10);
        let record = state.answer_for("technology::W0#q").unwrap();
        assert!(record.is_correct);
        assert_eq!(record.selected_option_id, option_id);
    }

    #[test]
    fn test_wrong_answer_scores_zero() {
        let state = running(2);
        let state = reduce(
            state,
            QuizAction::Answer {
                option_id: "technology::W0-distractor-0".to_string(),
            },
        );
        assert_eq!(state.score, 0);
        assert_eq!(state.current_index, 1);
        assert_eq!(state.correct_count(), 0);
    }

    #[test]
    fn test_unknown_option_is_noop() {
        let state = running(2);
        let after = reduce(
            state.clone(),
            QuizAction::Answer {
                option_id: "nope".to_string(),
            },
        );
        assert_eq!(after, state);
    }

    #[test]
    fn test_last_answer_finishes() {
        let mut state = running(3);
        for _ in 0..3 {
            let option_id = correct_id(&state);
            state = reduce(state, QuizAction::Answer { option_id });
        }
        assert_eq!(state.status, QuizStatus::Finished);
        assert_eq!(state.correct_count(), 3);
        assert_eq!(state.score, 45);
        assert_eq!(state.progress().current, 3);
        assert!(state.current_question().is_none());
    }

    #[test]
    fn test_tick_counts_down_then_times_out() {
        let mut state = running(2);
        for expected in (1..10).rev() {
            state = reduce(state, QuizAction::Tick);
            assert_eq!(state.time_left, expected);
        }

        state = reduce(state, QuizAction::Tick);
        assert_eq!(state.current_index, 1);
        assert_eq!(state.time_left, 10);
        let record = state.answer_for("technology::W0#q").unwrap();
        assert!(!record.is_correct);
        assert_eq!(record.selected_option_id, "");
        assert_eq!(record.time_left, 0);
    }

    #[test]
    fn test_skip_records_empty_answer() {
        let state = reduce(running(1), QuizAction::SkipOrTimeout);
        assert_eq!(state.status, QuizStatus::Finished);
        assert_eq!(state.answers.len(), 1);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_pause_blocks_play() {
        let state = reduce(running(2), QuizAction::Pause);
        assert_eq!(state.status, QuizStatus::Paused);

        let ticked = reduce(state.clone(), QuizAction::Tick);
        assert_eq!(ticked, state);
        let option_id = correct_id(&state);
        let answered = reduce(state.clone(), QuizAction::Answer { option_id });
        assert_eq!(answered, state);
        assert_eq!(reduce(state.clone(), QuizAction::Pause), state);

        let resumed = reduce(state, QuizAction::Resume);
        assert_eq!(resumed.status, QuizStatus::Running);
    }

    #[test]
    fn test_actions_ignored_when_idle_or_finished() {
        let idle = QuizState::default();
        for action in [QuizAction::Tick, QuizAction::SkipOrTimeout, QuizAction::Pause, QuizAction::Resume] {
            assert_eq!(reduce(idle.clone(), action), idle);
        }

        let finished = reduce(running(1), QuizAction::SkipOrTimeout);
        assert_eq!(reduce(finished.clone(), QuizAction::Tick), finished);
        assert_eq!(reduce(finished.clone(), QuizAction::SkipOrTimeout), finished);
    }

    #[test]
    fn test_reset() {
        let state = reduce(running(2), QuizAction::Reset);
        assert_eq!(state, QuizState::default());
    }

    #[test]
    fn test_empty_quiz_is_not_playable() {
        let state = running(0);
        assert_eq!(state.status, QuizStatus::Running);
        assert!(!state.is_playable());
        assert_eq!(reduce(state.clone(), QuizAction::SkipOrTimeout), state);
    }

    #[test]
    fn test_transition_table() {
        assert!(admits(QuizStatus::Idle, &QuizAction::Reset));
        assert!(admits(QuizStatus::Running, &QuizAction::Tick));
        assert!(!admits(QuizStatus::Running, &QuizAction::Resume));
        assert!(!admits(QuizStatus::Paused, &QuizAction::Tick));
        assert!(!admits(QuizStatus::Finished, &QuizAction::Pause));
    }
}
