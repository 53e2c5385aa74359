//! Focus: a timed slideshow of words
//!
//! [`reduce`] is the pure status machine; [`FocusSequencer`] drives it with
//! timers from an injected [`Scheduler`].

pub mod actions;
pub mod events;
pub mod queue;
pub mod reducer;
pub mod scheduler;
pub mod sequencer;
pub mod state;

pub use actions::FocusAction;
pub use events::{EventBus, FocusEvent, FocusEventReceiver};
pub use queue::{build_focus_queue, QueueRequest};
pub use reducer::reduce;
pub use scheduler::{ManualScheduler, Scheduler, TimerHandle, TimerTask, TokioScheduler};
pub use sequencer::FocusSequencer;
pub use state::{
    FocusOrder, FocusProgress, FocusSettings, FocusSettingsPatch, FocusSource, FocusState, FocusStatus,
    FocusWordItem,
};
