//! Actions for the focus reducer

use super::state::{FocusOrder, FocusSettingsPatch, FocusSource, FocusWordItem};

#[derive(Debug, Clone, PartialEq)]
pub enum FocusAction {
    /// Begin choosing words for a new session
    InitSession {
        source: FocusSource,
        category_ids: Vec<String>,
        selected_word_ids: Vec<String>,
        order: Option<FocusOrder>,
    },
    SetQueue(Vec<FocusWordItem>),
    StartCountdown,
    StartPlayback,
    /// Advance one slide; past the last one the session finishes
    Next,
    Pause,
    Resume,
    /// Abandon the session, keeping settings
    Stop,
    /// Back to the initial state, keeping settings
    ResetSession,
    UpdateSettings(FocusSettingsPatch),
}
