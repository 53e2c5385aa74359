//! Timer-driven playback of a focus session
//!
//! The sequencer owns the session state and at most one pending timer.
//! Every transition cancels that timer before anything else happens, and
//! each timer carries the generation it was armed in; a timer from an older
//! generation that still fires does nothing. Dropping the last clone of a
//! sequencer cancels its timer.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use chrono::Utc;
use rand::Rng;

use super::actions::FocusAction;
use super::events::{EventBus, FocusEvent, FocusEventReceiver};
use super::queue::{build_focus_queue, QueueRequest};
use super::reducer::reduce;
use super::scheduler::{Scheduler, TimerHandle};
use super::state::{FocusOrder, FocusSettings, FocusSettingsPatch, FocusSource, FocusState, FocusStatus, FocusWordItem};
use crate::words::WordPool;

#[derive(Debug, Clone, Copy)]
enum Step {
    CountdownDone,
    SlideEnded,
    Advance,
}

struct Core {
    state: FocusState,
    generation: u64,
    timer: Option<TimerHandle>,
}

impl Core {
    fn apply(&mut self, action: FocusAction) {
        let before = self.state.status;
        let starts_countdown = action == FocusAction::StartCountdown;

        self.state = reduce(std::mem::take(&mut self.state), action);

        let after = self.state.status;
        if starts_countdown && after == FocusStatus::Countdown {
            self.state.started_at = Some(Utc::now());
            self.state.finished_at = None;
        }
        if after == FocusStatus::Finished && before != FocusStatus::Finished {
            self.state.finished_at = Some(Utc::now());
        }
        if after != before {
            tracing::debug!(from = ?before, to = ?after, "focus status changed");
        }
    }

    /// Cancel the pending timer and invalidate any callback already in flight
    fn disarm(&mut self, scheduler: &dyn Scheduler) {
        self.generation += 1;
        if let Some(handle) = self.timer.take() {
            scheduler.cancel(handle);
        }
    }

    fn countdown(&self) -> Duration {
        Duration::from_secs(self.state.settings.countdown_seconds)
    }

    fn slide(&self) -> Duration {
        Duration::from_secs(self.state.settings.per_word_seconds)
    }

    fn fade_out(&self) -> Duration {
        Duration::from_millis(self.state.settings.fade_out_ms)
    }
}

struct Inner {
    scheduler: Arc<dyn Scheduler>,
    core: Mutex<Core>,
    events: EventBus,
}

impl Inner {
    fn core(&self) -> MutexGuard<'_, Core> {
        self.core.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        self.core().disarm(self.scheduler.as_ref());
    }
}

/// Focus session with its timers
#[derive(Clone)]
pub struct FocusSequencer {
    inner: Arc<Inner>,
}

impl FocusSequencer {
    pub fn new(scheduler: Arc<dyn Scheduler>) -> Self {
        Self::with_settings(scheduler, FocusSettings::default())
    }

    pub fn with_settings(scheduler: Arc<dyn Scheduler>, settings: FocusSettings) -> Self {
        Self {
            inner: Arc::new(Inner {
                scheduler,
                core: Mutex::new(Core {
                    state: FocusState::with_settings(settings),
                    generation: 0,
                    timer: None,
                }),
                events: EventBus::default(),
            }),
        }
    }

    /// Snapshot of the session
    pub fn state(&self) -> FocusState {
        self.inner.core().state.clone()
    }

    pub fn status(&self) -> FocusStatus {
        self.inner.core().state.status
    }

    pub fn subscribe(&self) -> FocusEventReceiver {
        self.inner.events.subscribe()
    }

    /// Whether a timer is armed
    pub fn has_pending_timer(&self) -> bool {
        self.inner.core().timer.is_some()
    }

    /// Begin a new session in the selecting phase, abandoning any current one
    pub fn init_session(
        &self,
        source: FocusSource,
        category_ids: Vec<String>,
        selected_word_ids: Vec<String>,
        order: Option<FocusOrder>,
    ) {
        let mut core = self.inner.core();
        core.disarm(self.inner.scheduler.as_ref());
        core.apply(FocusAction::InitSession {
            source,
            category_ids,
            selected_word_ids,
            order,
        });
    }

    pub fn set_queue(&self, queue: Vec<FocusWordItem>) {
        self.inner.core().apply(FocusAction::SetQueue(queue));
    }

    /// Build the queue the session asks for; returns its length
    pub fn prepare_queue<R: Rng + ?Sized>(&self, pool: &WordPool, rng: &mut R) -> usize {
        let mut core = self.inner.core();
        let queue = build_focus_queue(pool, QueueRequest::from_state(&core.state), rng);
        let len = queue.len();
        if len == 0 {
            tracing::warn!("focus queue is empty");
        }
        core.apply(FocusAction::SetQueue(queue));
        len
    }

    /// Start the countdown; `false` unless a non-empty queue is waiting
    pub fn start(&self) -> bool {
        let mut core = self.inner.core();
        if core.state.status != FocusStatus::Selecting || core.state.queue.is_empty() {
            return false;
        }
        core.disarm(self.inner.scheduler.as_ref());
        core.apply(FocusAction::StartCountdown);
        self.inner.events.emit(FocusEvent::CountdownStarted {
            seconds: core.state.settings.countdown_seconds,
        });
        let after = core.countdown();
        arm(&self.inner, &mut core, after, Step::CountdownDone);
        true
    }

    /// Freeze the session; pending timers are cancelled
    pub fn pause(&self) {
        let mut core = self.inner.core();
        if !matches!(core.state.status, FocusStatus::Countdown | FocusStatus::Playing) {
            return;
        }
        core.disarm(self.inner.scheduler.as_ref());
        core.apply(FocusAction::Pause);
        self.inner.events.emit(FocusEvent::Paused);
    }

    /// Continue a paused session with a full countdown or a full slide
    pub fn resume(&self) {
        let mut core = self.inner.core();
        if core.state.status != FocusStatus::Paused {
            return;
        }
        core.disarm(self.inner.scheduler.as_ref());
        core.apply(FocusAction::Resume);

        match core.state.status {
            FocusStatus::Countdown => {
                self.inner.events.emit(FocusEvent::Resumed { in_countdown: true });
                let after = core.countdown();
                arm(&self.inner, &mut core, after, Step::CountdownDone);
            }
            FocusStatus::Playing => {
                self.inner.events.emit(FocusEvent::Resumed { in_countdown: false });
                let after = core.slide();
                arm(&self.inner, &mut core, after, Step::SlideEnded);
            }
            _ => {}
        }
    }

    /// Abandon the session
    pub fn stop(&self) {
        let mut core = self.inner.core();
        core.disarm(self.inner.scheduler.as_ref());
        core.apply(FocusAction::Stop);
        self.inner.events.emit(FocusEvent::Stopped);
    }

    /// Back to the initial state, keeping settings
    pub fn reset(&self) {
        let mut core = self.inner.core();
        core.disarm(self.inner.scheduler.as_ref());
        core.apply(FocusAction::ResetSession);
    }

    /// New timings apply from the next timer on
    pub fn update_settings(&self, patch: FocusSettingsPatch) {
        self.inner.core().apply(FocusAction::UpdateSettings(patch));
    }
}

fn arm(inner: &Arc<Inner>, core: &mut Core, after: Duration, step: Step) {
    let weak: Weak<Inner> = Arc::downgrade(inner);
    let generation = core.generation;
    let handle = inner.scheduler.schedule(
        after,
        Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                fire(&inner, generation, step);
            }
        }),
    );
    core.timer = Some(handle);
}

fn fire(inner: &Arc<Inner>, generation: u64, step: Step) {
    let mut core = inner.core();
    if core.generation != generation {
        tracing::trace!(?step, "stale focus timer ignored");
        return;
    }
    core.timer = None;

    match step {
        Step::CountdownDone => {
            core.apply(FocusAction::StartPlayback);
            if core.state.status == FocusStatus::Playing {
                show_slide(inner, &mut core);
            }
        }
        Step::SlideEnded => {
            inner.events.emit(FocusEvent::SlideEnded {
                index: core.state.current_index,
            });
            let fade = core.fade_out();
            if fade.is_zero() {
                advance(inner, &mut core);
            } else {
                arm(inner, &mut core, fade, Step::Advance);
            }
        }
        Step::Advance => advance(inner, &mut core),
    }
}

fn advance(inner: &Arc<Inner>, core: &mut Core) {
    core.apply(FocusAction::Next);
    match core.state.status {
        FocusStatus::Playing => show_slide(inner, core),
        FocusStatus::Finished => {
            tracing::debug!(total = core.state.queue.len(), "focus session finished");
            inner.events.emit(FocusEvent::Finished {
                total: core.state.queue.len(),
            });
        }
        _ => {}
    }
}

fn show_slide(inner: &Arc<Inner>, core: &mut Core) {
    if let Some(item) = core.state.current_item() {
        inner.events.emit(FocusEvent::SlideShown {
            index: core.state.current_index,
            total: core.state.queue.len(),
            word_id: item.id.clone(),
        });
    }
    let after = core.slide();
    arm(inner, core, after, Step::SlideEnded);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::focus::scheduler::ManualScheduler;

    fn item(n: usize) -> FocusWordItem {
        FocusWordItem {
            id: format!("travel::W{}", n),
            word: format!("W{}", n),
            meaning: format!("M{}", n),
            category: "Viaje".to_string(),
        }
    }

    fn ready(n: usize) -> (ManualScheduler, FocusSequencer) {
        let clock = ManualScheduler::new();
        let sequencer = FocusSequencer::new(Arc::new(clock.clone()));
        sequencer.init_session(FocusSource::Category, vec!["travel".into()], Vec::new(), Some(FocusOrder::Fixed));
        sequencer.set_queue((0..n).map(item).collect());
        (clock, sequencer)
    }

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    #[test]
    fn test_countdown_then_slides_then_finish() {
        let (clock, seq) = ready(3);
        assert!(seq.start());
        assert_eq!(seq.status(), FocusStatus::Countdown);
        assert!(seq.state().started_at.is_some());

        clock.advance(secs(4));
        assert_eq!(seq.status(), FocusStatus::Countdown);
        clock.advance(secs(1));
        assert_eq!(seq.status(), FocusStatus::Playing);
        assert_eq!(seq.state().current_index, 0);

        clock.advance(secs(10));
        assert_eq!(seq.state().current_index, 1);
        clock.advance(secs(10));
        assert_eq!(seq.state().current_index, 2);
        clock.advance(secs(10));

        let state = seq.state();
        assert_eq!(state.status, FocusStatus::Finished);
        assert!(state.finished_at.is_some());
        assert!(!seq.has_pending_timer());
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn test_start_requires_queue() {
        let (_clock, seq) = ready(0);
        assert!(!seq.start());
        assert_eq!(seq.status(), FocusStatus::Selecting);
    }

    #[test]
    fn test_pause_cancels_pending_timer() {
        let (clock, seq) = ready(3);
        seq.start();
        clock.advance(secs(5));
        clock.advance(secs(3));
        seq.pause();

        assert_eq!(clock.pending(), 0);
        clock.advance(secs(60));
        let state = seq.state();
        assert_eq!(state.status, FocusStatus::Paused);
        assert_eq!(state.current_index, 0);
    }

    #[test]
    fn test_resume_restarts_full_slide() {
        let (clock, seq) = ready(3);
        seq.start();
        clock.advance(secs(5 + 7));
        seq.pause();
        seq.resume();
        assert_eq!(seq.status(), FocusStatus::Playing);

        clock.advance(secs(9));
        assert_eq!(seq.state().current_index, 0);
        clock.advance(secs(1));
        assert_eq!(seq.state().current_index, 1);
    }

    #[test]
    fn test_pause_during_countdown() {
        let (clock, seq) = ready(2);
        seq.start();
        clock.advance(secs(2));
        seq.pause();
        assert!(seq.state().is_paused_in_countdown());
        clock.advance(secs(30));
        assert_eq!(seq.status(), FocusStatus::Paused);

        seq.resume();
        assert_eq!(seq.status(), FocusStatus::Countdown);
        clock.advance(secs(5));
        assert_eq!(seq.status(), FocusStatus::Playing);
    }

    #[test]
    fn test_stop_cancels_and_resets() {
        let (clock, seq) = ready(2);
        seq.start();
        clock.advance(secs(6));
        seq.stop();

        assert_eq!(clock.pending(), 0);
        clock.advance(secs(60));
        let state = seq.state();
        assert_eq!(state.status, FocusStatus::Idle);
        assert!(state.queue.is_empty());
    }

    #[test]
    fn test_restart_ignores_old_timers() {
        let (clock, seq) = ready(2);
        seq.start();
        clock.advance(secs(3));

        seq.init_session(FocusSource::Category, vec!["travel".into()], Vec::new(), None);
        seq.set_queue(vec![item(7)]);
        seq.start();

        // The first countdown would have ended here
        clock.advance(secs(2));
        assert_eq!(seq.status(), FocusStatus::Countdown);
        clock.advance(secs(3));
        assert_eq!(seq.status(), FocusStatus::Playing);
        assert_eq!(seq.state().current_item().unwrap().id, "travel::W7");
    }

    #[test]
    fn test_drop_cancels_timer() {
        let (clock, seq) = ready(2);
        seq.start();
        assert_eq!(clock.pending(), 1);
        drop(seq);
        assert_eq!(clock.pending(), 0);
        clock.advance(secs(60));
    }

    #[test]
    fn test_fade_out_gap() {
        let (clock, seq) = ready(2);
        seq.update_settings(FocusSettingsPatch {
            fade_out_ms: Some(300),
            ..FocusSettingsPatch::default()
        });
        let mut events = seq.subscribe();
        seq.start();
        clock.advance(secs(15));

        assert_eq!(seq.state().current_index, 0);
        clock.advance(Duration::from_millis(300));
        assert_eq!(seq.state().current_index, 1);

        let mut seen = Vec::new();
        while let Ok(event) = events.try_recv() {
            seen.push(event);
        }
        assert_eq!(
            seen,
            vec![
                FocusEvent::CountdownStarted { seconds: 5 },
                FocusEvent::SlideShown { index: 0, total: 2, word_id: "travel::W0".into() },
                FocusEvent::SlideEnded { index: 0 },
                FocusEvent::SlideShown { index: 1, total: 2, word_id: "travel::W1".into() },
            ]
        );
    }

    #[test]
    fn test_custom_timings() {
        let clock = ManualScheduler::new();
        let settings = FocusSettings {
            countdown_seconds: 1,
            per_word_seconds: 2,
            ..FocusSettings::default()
        };
        let seq = FocusSequencer::with_settings(Arc::new(clock.clone()), settings);
        seq.init_session(FocusSource::Category, Vec::new(), Vec::new(), Some(FocusOrder::Fixed));
        seq.set_queue(vec![item(0)]);
        seq.start();

        clock.advance(secs(3));
        assert!(seq.state().is_finished());
    }
}
