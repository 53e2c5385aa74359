//! Pure reducer for hangman

use super::actions::HangmanAction;
use super::scoring::{calculate_score, time_bonus, ScoreParams};
use super::state::{HangmanState, HangmanStatus};
use super::word::normalize_letter;

/// Transition table: which actions apply in which status
pub fn admits(status: HangmanStatus, action: &HangmanAction) -> bool {
    use HangmanAction::*;
    use HangmanStatus::*;

    match (status, action) {
        (_, Init { .. } | Reset) => true,
        (
            Running,
            Guess(_)
            | UseHintMeaning
            | UseHintExample
            | UseHintReveal { .. }
            | Pause
            | GiveUp
            | TickTimer,
        ) => true,
        (Paused, Resume) => true,
        (Finished | GivenUp, CalculateFinalScore) => true,
        _ => false,
    }
}

pub fn reduce(state: HangmanState, action: HangmanAction) -> HangmanState {
    if !admits(state.status, &action) {
        tracing::trace!(status = ?state.status, ?action, "hangman action ignored");
        return state;
    }

    match action {
        HangmanAction::Init {
            word,
            config,
            daily_seed,
        } => HangmanState {
            status: HangmanStatus::Running,
            word: Some(word),
            max_lives: config.max_lives,
            lives_left: config.max_lives,
            hints_enabled: config.hints_enabled,
            timer_enabled: config.timer_enabled,
            seconds_left: config.seconds_per_word.filter(|_| config.timer_enabled),
            seconds_per_word: config.seconds_per_word.filter(|_| config.timer_enabled),
            daily_seed,
            ..HangmanState::default()
        },

        HangmanAction::Guess(input) => guess(state, &input),

        HangmanAction::UseHintMeaning => {
            if !state.hints_enabled || state.used_hint_meaning {
                return state;
            }
            HangmanState {
                used_hint_meaning: true,
                ..state
            }
        }

        HangmanAction::UseHintExample => {
            if !state.hints_enabled || state.used_hint_example {
                return state;
            }
            HangmanState {
                used_hint_example: true,
                ..state
            }
        }

        HangmanAction::UseHintReveal { letter } => {
            if !state.hints_enabled || state.used_hint_reveal {
                return state;
            }
            let mut guessed_letters = state.guessed_letters.clone();
            if let Some(letter) = letter {
                let in_word = state.word.as_ref().is_some_and(|w| w.contains(letter));
                if in_word && !guessed_letters.contains(&letter) {
                    guessed_letters.push(letter);
                }
            }
            settle(HangmanState {
                used_hint_reveal: true,
                guessed_letters,
                ..state
            })
        }

        HangmanAction::Pause => HangmanState {
            status: HangmanStatus::Paused,
            ..state
        },

        HangmanAction::Resume => HangmanState {
            status: HangmanStatus::Running,
            ..state
        },

        HangmanAction::GiveUp => HangmanState {
            status: HangmanStatus::GivenUp,
            ..state
        },

        HangmanAction::TickTimer => {
            if !state.timer_enabled {
                return state;
            }
            let Some(seconds) = state.seconds_left else {
                return state;
            };
            let seconds_left = seconds.saturating_sub(1);
            let status = if seconds_left == 0 {
                HangmanStatus::Finished
            } else {
                state.status
            };
            HangmanState {
                seconds_left: Some(seconds_left),
                status,
                ..state
            }
        }

        HangmanAction::CalculateFinalScore => {
            let Some(word) = &state.word else {
                return state;
            };
            let bonus = match (state.timer_enabled, state.seconds_left, state.seconds_per_word) {
                (true, Some(left), Some(max)) => time_bonus(left, max),
                _ => 0,
            };
            let score = calculate_score(ScoreParams {
                word_length: word.letter_count(),
                lives_left: state.lives_left,
                max_lives: state.max_lives,
                hints_used: state.hints_used(),
                time_bonus: bonus,
            });
            HangmanState { score, ..state }
        }

        HangmanAction::Reset => HangmanState::default(),
    }
}

fn guess(state: HangmanState, input: &str) -> HangmanState {
    let Some(letter) = normalize_letter(input) else {
        return state;
    };
    let Some(word) = &state.word else {
        return state;
    };
    if state.guessed_letters.contains(&letter) || state.wrong_letters.contains(&letter) {
        return state;
    }

    if word.contains(letter) {
        let mut guessed_letters = state.guessed_letters.clone();
        guessed_letters.push(letter);
        settle(HangmanState {
            guessed_letters,
            ..state
        })
    } else {
        let mut wrong_letters = state.wrong_letters.clone();
        wrong_letters.push(letter);
        settle(HangmanState {
            wrong_letters,
            lives_left: state.lives_left.saturating_sub(1),
            ..state
        })
    }
}

/// Win is checked before loss
fn settle(state: HangmanState) -> HangmanState {
    if state.is_win() || state.lives_left == 0 {
        HangmanState {
            status: HangmanStatus::Finished,
            ..state
        }
    } else {
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::hangman::difficulty::Difficulty;
    use crate::games::hangman::state::HintAvailability;
    use crate::games::hangman::word::{normalize_word, HangmanWord};

    fn word(display: &str) -> HangmanWord {
        HangmanWord {
            id: format!("science::{}", display),
            palabra: display.to_string(),
            significado: "significado".to_string(),
            ejemplo: Some("ejemplo".to_string()),
            category: "science".to_string(),
            display: display.to_string(),
            normalized: normalize_word(display),
        }
    }

    fn start(display: &str, difficulty: Difficulty) -> HangmanState {
        reduce(
            HangmanState::default(),
            HangmanAction::Init {
                word: word(display),
                config: difficulty.config(),
                daily_seed: None,
            },
        )
    }

    fn guess_all(mut state: HangmanState, letters: &str) -> HangmanState {
        for c in letters.chars() {
            state = reduce(state, HangmanAction::Guess(c.to_string()));
        }
        state
    }

    #[test]
    fn test_init_uses_difficulty() {
        let state = start("Neurona", Difficulty::Easy);
        assert_eq!(state.status, HangmanStatus::Running);
        assert_eq!(state.max_lives, 8);
        assert_eq!(state.lives_left, 8);
        assert!(!state.timer_enabled);
        assert_eq!(state.seconds_left, None);

        let hard = start("Neurona", Difficulty::Hard);
        assert_eq!(hard.seconds_left, Some(120));
        assert!(!hard.hints_enabled);
    }

    #[test]
    fn test_hit_and_miss() {
        let state = start("Neurona", Difficulty::Medium);
        let state = reduce(state, HangmanAction::Guess("n".to_string()));
        assert_eq!(state.guessed_letters, vec!['N']);
        assert_eq!(state.masked_word(), "N____n_");

        let state = reduce(state, HangmanAction::Guess("z".to_string()));
        assert_eq!(state.wrong_letters, vec!['Z']);
        assert_eq!(state.lives_left, 5);
    }

    #[test]
    fn test_repeat_guess_is_noop() {
        let state = guess_all(start("Neurona", Difficulty::Medium), "nz");
        assert_eq!(guess_all(state.clone(), "NZz"), state);
    }

    #[test]
    fn test_accented_input_matches_plain_letter() {
        let a = guess_all(start("Órbita", Difficulty::Medium), "á");
        let b = guess_all(start("Órbita", Difficulty::Medium), "A");
        assert_eq!(a, b);
        assert_eq!(a.masked_word(), "_____a");
    }

    #[test]
    fn test_masked_word_keeps_accents_and_spaces() {
        let state = guess_all(start("Año nuevo", Difficulty::Medium), "ño");
        assert_eq!(state.masked_word(), "_ño ____o");
    }

    #[test]
    fn test_malformed_input_is_noop() {
        let state = start("Neurona", Difficulty::Medium);
        assert_eq!(guess_all(state.clone(), "3?! "), state);
    }

    #[test]
    fn test_win_with_wrong_guesses() {
        let state = guess_all(start("Neurona", Difficulty::Medium), "xyNEURoa");
        assert_eq!(state.status, HangmanStatus::Finished);
        assert!(state.is_win());
        assert!(!state.is_loss());
        assert_eq!(state.lives_left, 4);
        assert_eq!(state.progress_percentage(), 100);
    }

    #[test]
    fn test_loss_after_max_wrong_guesses() {
        let state = guess_all(start("Neurona", Difficulty::Hard), "bcdf");
        assert_eq!(state.status, HangmanStatus::Finished);
        assert_eq!(state.lives_left, 0);
        assert!(state.is_loss());
        assert!(!state.is_win());

        let after = guess_all(state.clone(), "neura");
        assert_eq!(after, state);
    }

    #[test]
    fn test_hints_are_one_shot() {
        let state = start("Neurona", Difficulty::Medium);
        let state = reduce(state, HangmanAction::UseHintMeaning);
        assert!(state.used_hint_meaning);
        assert!(!state.available_hints().meaning);
        assert!(state.available_hints().example);
        assert_eq!(reduce(state.clone(), HangmanAction::UseHintMeaning), state);
        assert_eq!(state.hints_used(), 1);
    }

    #[test]
    fn test_hints_refused_when_disabled() {
        let state = start("Neurona", Difficulty::Hard);
        assert_eq!(state.available_hints(), HintAvailability::default());
        for action in [
            HangmanAction::UseHintMeaning,
            HangmanAction::UseHintExample,
            HangmanAction::UseHintReveal { letter: Some('N') },
        ] {
            assert_eq!(reduce(state.clone(), action), state);
        }
    }

    #[test]
    fn test_reveal_can_win() {
        let state = guess_all(start("Neurona", Difficulty::Medium), "neuro");
        assert_eq!(state.status, HangmanStatus::Running);
        let state = reduce(state, HangmanAction::UseHintReveal { letter: Some('A') });
        assert!(state.used_hint_reveal);
        assert_eq!(state.status, HangmanStatus::Finished);
        assert!(state.is_win());
    }

    #[test]
    fn test_reveal_ignores_foreign_letter() {
        let state = start("Neurona", Difficulty::Medium);
        let state = reduce(state, HangmanAction::UseHintReveal { letter: Some('Z') });
        assert!(state.used_hint_reveal);
        assert!(state.guessed_letters.is_empty());
    }

    #[test]
    fn test_give_up() {
        let state = reduce(start("Neurona", Difficulty::Medium), HangmanAction::GiveUp);
        assert_eq!(state.status, HangmanStatus::GivenUp);
        assert!(state.is_loss());
        assert!(state.is_game_finished());
        assert_eq!(reduce(state.clone(), HangmanAction::Guess("n".into())), state);
    }

    #[test]
    fn test_timer_runs_out() {
        let mut state = start("Neurona", Difficulty::Hard);
        for _ in 0..119 {
            state = reduce(state, HangmanAction::TickTimer);
        }
        assert_eq!(state.seconds_left, Some(1));
        assert_eq!(state.status, HangmanStatus::Running);

        state = reduce(state, HangmanAction::TickTimer);
        assert_eq!(state.seconds_left, Some(0));
        assert_eq!(state.status, HangmanStatus::Finished);
        assert!(state.is_loss());
    }

    #[test]
    fn test_tick_without_timer_is_noop() {
        let state = start("Neurona", Difficulty::Easy);
        assert_eq!(reduce(state.clone(), HangmanAction::TickTimer), state);
    }

    #[test]
    fn test_pause_and_resume() {
        let state = reduce(start("Neurona", Difficulty::Hard), HangmanAction::Pause);
        assert_eq!(reduce(state.clone(), HangmanAction::TickTimer), state);
        assert_eq!(reduce(state.clone(), HangmanAction::Guess("n".into())), state);
        let state = reduce(state, HangmanAction::Resume);
        assert_eq!(state.status, HangmanStatus::Running);
    }

    #[test]
    fn test_final_score_only_when_done() {
        let running = guess_all(start("Neurona", Difficulty::Medium), "n");
        assert_eq!(reduce(running.clone(), HangmanAction::CalculateFinalScore), running);

        let won = guess_all(running, "euroa");
        let scored = reduce(won, HangmanAction::CalculateFinalScore);
        // 70 + floor(6/6 * 70 * 0.5)
        assert_eq!(scored.score, 105);
    }

    #[test]
    fn test_final_score_with_time_bonus() {
        let mut state = start("Neurona", Difficulty::Hard);
        for _ in 0..60 {
            state = reduce(state, HangmanAction::TickTimer);
        }
        let state = guess_all(state, "neuroa");
        let state = reduce(state, HangmanAction::CalculateFinalScore);
        // 70 + 35 + floor(60/120 * 20)
        assert_eq!(state.score, 115);
    }

    #[test]
    fn test_reset() {
        let state = reduce(start("Neurona", Difficulty::Easy), HangmanAction::Reset);
        assert_eq!(state, HangmanState::default());
    }

    #[test]
    fn test_transition_table() {
        assert!(admits(HangmanStatus::GivenUp, &HangmanAction::CalculateFinalScore));
        assert!(!admits(HangmanStatus::Running, &HangmanAction::CalculateFinalScore));
        assert!(!admits(HangmanStatus::Idle, &HangmanAction::GiveUp));
        assert!(!admits(HangmanStatus::Finished, &HangmanAction::Resume));
    }
}
