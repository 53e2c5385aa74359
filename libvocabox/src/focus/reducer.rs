//! Pure reducer for focus sessions
//!
//! Only the status machine lives here. Timers belong to
//! [`FocusSequencer`](super::FocusSequencer), which dispatches
//! `StartPlayback` and `Next` when they fire.

use super::actions::FocusAction;
use super::state::{FocusSettings, FocusState, FocusStatus};

/// Transition table: which actions apply in which status
pub fn admits(status: FocusStatus, action: &FocusAction) -> bool {
    use FocusAction::*;
    use FocusStatus::*;

    match (status, action) {
        (_, InitSession { .. } | Stop | ResetSession | UpdateSettings(_)) => true,
        (Idle | Selecting, SetQueue(_)) => true,
        (Selecting, StartCountdown) => true,
        (Countdown, StartPlayback) => true,
        (Playing, Next) => true,
        (Countdown | Playing, Pause) => true,
        (Paused, Resume) => true,
        _ => false,
    }
}

pub fn reduce(state: FocusState, action: FocusAction) -> FocusState {
    if !admits(state.status, &action) {
        tracing::trace!(status = ?state.status, ?action, "focus action ignored");
        return state;
    }

    match action {
        FocusAction::InitSession {
            source,
            category_ids,
            selected_word_ids,
            order,
        } => FocusState {
            status: FocusStatus::Selecting,
            source,
            category_ids,
            selected_word_ids,
            settings: FocusSettings {
                order: order.unwrap_or(state.settings.order),
                ..state.settings
            },
            ..FocusState::default()
        },

        FocusAction::SetQueue(queue) => FocusState {
            queue,
            current_index: 0,
            ..state
        },

        FocusAction::StartCountdown => {
            if state.queue.is_empty() {
                return state;
            }
            FocusState {
                status: FocusStatus::Countdown,
                ..state
            }
        }

        FocusAction::StartPlayback => FocusState {
            status: FocusStatus::Playing,
            ..state
        },

        FocusAction::Next => {
            if state.current_index + 1 < state.queue.len() {
                FocusState {
                    current_index: state.current_index + 1,
                    ..state
                }
            } else {
                FocusState {
                    status: FocusStatus::Finished,
                    ..state
                }
            }
        }

        FocusAction::Pause => FocusState {
            status: FocusStatus::Paused,
            resume_to: Some(state.status),
            ..state
        },

        FocusAction::Resume => FocusState {
            status: state.resume_to.unwrap_or(FocusStatus::Playing),
            resume_to: None,
            ..state
        },

        FocusAction::Stop => FocusState {
            source: state.source,
            ..FocusState::with_settings(state.settings)
        },

        FocusAction::ResetSession => FocusState::with_settings(state.settings),

        FocusAction::UpdateSettings(patch) => {
            let current = &state.settings;
            let settings = FocusSettings {
                order: patch.order.unwrap_or(current.order),
                countdown_seconds: patch.countdown_seconds.unwrap_or(current.countdown_seconds),
                per_word_seconds: patch.per_word_seconds.unwrap_or(current.per_word_seconds),
                fade_out_ms: patch.fade_out_ms.unwrap_or(current.fade_out_ms),
            };
            FocusState { settings, ..state }
        }
    }
}
