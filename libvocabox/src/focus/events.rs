//! Progress events of a focus session
//!
//! The bus uses `tokio::sync::broadcast`: any number of subscribers, and
//! emitting never blocks. With nobody listening, events are dropped.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

pub type FocusEventReceiver = broadcast::Receiver<FocusEvent>;

#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<FocusEvent>,
}

impl EventBus {
    /// `capacity` is how many events a lagging subscriber may fall behind
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> FocusEventReceiver {
        self.sender.subscribe()
    }

    pub fn emit(&self, event: FocusEvent) {
        // Err only means there are no subscribers
        let _ = self.sender.send(event);
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(100)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FocusEvent {
    CountdownStarted { seconds: u64 },
    /// A slide is now on screen
    SlideShown { index: usize, total: usize, word_id: String },
    /// The current slide's time is up; the next one follows after the fade-out gap
    SlideEnded { index: usize },
    Paused,
    Resumed { in_countdown: bool },
    Stopped,
    Finished { total: usize },
}
