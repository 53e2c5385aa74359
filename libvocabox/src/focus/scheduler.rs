//! Delayed callbacks behind a small trait
//!
//! [`TokioScheduler`] runs tasks on a tokio runtime. [`ManualScheduler`]
//! keeps a virtual clock that only moves when [`ManualScheduler::advance`]
//! is called, which makes timer behavior testable without sleeping.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::AbortHandle;

pub type TimerTask = Box<dyn FnOnce() + Send + 'static>;

/// Identifies one scheduled task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

pub trait Scheduler: Send + Sync {
    /// Run `task` once after `after` has elapsed
    fn schedule(&self, after: Duration, task: TimerTask) -> TimerHandle;

    /// Drop a task that has not run yet. Unknown or spent handles are ignored.
    fn cancel(&self, handle: TimerHandle);
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Scheduler backed by `tokio::time::sleep`
pub struct TokioScheduler {
    runtime: Handle,
    next_id: AtomicU64,
    tasks: Arc<Mutex<HashMap<u64, AbortHandle>>>,
}

impl TokioScheduler {
    pub fn new(runtime: Handle) -> Self {
        Self {
            runtime,
            next_id: AtomicU64::new(0),
            tasks: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Tasks scheduled and not yet run or cancelled
    pub fn pending(&self) -> usize {
        lock(&self.tasks).len()
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, after: Duration, task: TimerTask) -> TimerHandle {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let tasks = Arc::clone(&self.tasks);

        // Held until the abort handle is stored, so the task cannot finish first
        let mut registry = lock(&self.tasks);
        let join = self.runtime.spawn(async move {
            tokio::time::sleep(after).await;
            let still_scheduled = lock(&tasks).remove(&id).is_some();
            if still_scheduled {
                task();
            }
        });
        registry.insert(id, join.abort_handle());

        TimerHandle(id)
    }

    fn cancel(&self, handle: TimerHandle) {
        if let Some(abort) = lock(&self.tasks).remove(&handle.0) {
            abort.abort();
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        for (_, abort) in lock(&self.tasks).drain() {
            abort.abort();
        }
    }
}

#[derive(Default)]
struct ManualClock {
    now: Duration,
    next_id: u64,
    /// Ordered by due time, then by scheduling order
    queue: BTreeMap<(Duration, u64), TimerTask>,
    due: HashMap<u64, Duration>,
}

/// Virtual-time scheduler
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Arc<Mutex<ManualClock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation
    pub fn now(&self) -> Duration {
        lock(&self.clock).now
    }

    pub fn pending(&self) -> usize {
        lock(&self.clock).queue.len()
    }

    /// Move the clock forward, running every task that falls due, in order
    ///
    /// Tasks scheduled while advancing run too if they fall inside the window.
    pub fn advance(&self, by: Duration) {
        let target = lock(&self.clock).now + by;
        loop {
            let task = {
                let mut clock = lock(&self.clock);
                let next = clock.queue.keys().next().copied();
                match next {
                    Some(key @ (due, id)) if due <= target => {
                        clock.now = due;
                        clock.due.remove(&id);
                        clock.queue.remove(&key)
                    }
                    _ => {
                        clock.now = target;
                        None
                    }
                }
            };
            match task {
                Some(task) => task(),
                None => break,
            }
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, after: Duration, task: TimerTask) -> TimerHandle {
        let mut clock = lock(&self.clock);
        let id = clock.next_id;
        clock.next_id += 1;
        let due = clock.now + after;
        clock.queue.insert((due, id), task);
        clock.due.insert(id, due);
        TimerHandle(id)
    }

    fn cancel(&self, handle: TimerHandle) {
        let mut clock = lock(&self.clock);
        if let Some(due) = clock.due.remove(&handle.0) {
            clock.queue.remove(&(due, handle.0));
        }
    }
}
