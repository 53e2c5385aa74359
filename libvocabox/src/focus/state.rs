//! Focus session state

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::FocusConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusStatus {
    Idle,
    Selecting,
    Countdown,
    Playing,
    Paused,
    Finished,
}

/// Where the queue comes from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusSource {
    #[default]
    Category,
    Manual,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusOrder {
    #[default]
    Random,
    Fixed,
}

/// One slide of the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusWordItem {
    pub id: String,
    pub word: String,
    pub meaning: String,
    /// Display name of the word's category
    pub category: String,
}

/// Survives [`FocusAction::ResetSession`](super::FocusAction::ResetSession)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusSettings {
    pub order: FocusOrder,
    pub countdown_seconds: u64,
    pub per_word_seconds: u64,
    pub fade_out_ms: u64,
}

impl Default for FocusSettings {
    fn default() -> Self {
        Self::from(&FocusConfig::default())
    }
}

impl From<&FocusConfig> for FocusSettings {
    fn from(config: &FocusConfig) -> Self {
        Self {
            order: config.order,
            countdown_seconds: config.countdown_seconds,
            per_word_seconds: config.per_word_seconds,
            fade_out_ms: config.fade_out_ms,
        }
    }
}

/// Partial settings update; `None` keeps the current value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusSettingsPatch {
    pub order: Option<FocusOrder>,
    pub countdown_seconds: Option<u64>,
    pub per_word_seconds: Option<u64>,
    pub fade_out_ms: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FocusProgress {
    pub current: usize,
    pub total: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FocusState {
    pub status: FocusStatus,
    pub source: FocusSource,
    pub category_ids: Vec<String>,
    pub selected_word_ids: Vec<String>,
    pub queue: Vec<FocusWordItem>,
    pub current_index: usize,
    pub settings: FocusSettings,
    /// Status to go back to when a paused session resumes
    pub resume_to: Option<FocusStatus>,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl Default for FocusState {
    fn default() -> Self {
        Self::with_settings(FocusSettings::default())
    }
}

impl FocusState {
    pub fn with_settings(settings: FocusSettings) -> Self {
        Self {
            status: FocusStatus::Idle,
            source: FocusSource::Category,
            category_ids: Vec::new(),
            selected_word_ids: Vec::new(),
            queue: Vec::new(),
            current_index: 0,
            settings,
            resume_to: None,
            started_at: None,
            finished_at: None,
        }
    }

    pub fn current_item(&self) -> Option<&FocusWordItem> {
        self.queue.get(self.current_index)
    }

    pub fn progress(&self) -> FocusProgress {
        let total = self.queue.len();
        let current = self.current_index + 1;
        let percentage = if total > 0 {
            current as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        FocusProgress {
            current,
            total,
            percentage,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.status == FocusStatus::Finished
    }

    /// Counting down, playing or paused
    pub fn is_active(&self) -> bool {
        matches!(
            self.status,
            FocusStatus::Countdown | FocusStatus::Playing | FocusStatus::Paused
        )
    }

    /// Paused while still counting down
    pub fn is_paused_in_countdown(&self) -> bool {
        self.status == FocusStatus::Paused && self.resume_to == Some(FocusStatus::Countdown)
    }
}
