//! Deterministic time layer for the interaction engine.
//!
//! All delayed behavior — simulated submission latency, notification
//! auto-dismiss, typing ticks, reveal staggering, debounced resizes —
//! goes through one [`Scheduler`]. The engine never reads the clock
//! itself: embedders pass the current `Instant` into `dispatch` and
//! `advance`, which makes every timer fully deterministic under test.
//!
//! [`Debounce`] and [`Throttle`] implement the two rate policies the
//! scroll and resize handlers need: trailing-edge settle (last event
//! wins) and leading-edge suppression windows.

use std::time::{Duration, Instant};

/// Handle to a scheduled task, usable for exact cancellation.
///
/// Ids are never reused, so cancelling a timer that already fired is a
/// harmless no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

#[derive(Debug)]
struct Entry<T> {
    id: TimerId,
    due: Instant,
    task: T,
}

/// Pending timers keyed by monotonic deadline.
///
/// `due` drains everything whose deadline has passed, ordered by
/// `(deadline, scheduling order)` — two tasks due at the same instant
/// fire in the order they were scheduled.
#[derive(Debug)]
pub struct Scheduler<T> {
    next_id: u64,
    entries: Vec<Entry<T>>,
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Schedule `task` to fire at `due`.
    pub fn schedule(&mut self, due: Instant, task: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, due, task });
        id
    }

    /// Schedule `task` to fire `delay` after `now`.
    pub fn schedule_in(&mut self, now: Instant, delay: Duration, task: T) -> TimerId {
        self.schedule(now + delay, task)
    }

    /// Cancel a pending timer. Returns whether it was still pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Drain every task whose deadline is at or before `now`.
    pub fn due(&mut self, now: Instant) -> Vec<T> {
        let (mut ready, rest): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.entries).into_iter().partition(|e| e.due <= now);
        self.entries = rest;
        ready.sort_by(|a, b| a.due.cmp(&b.due).then(a.id.cmp(&b.id)));
        ready.into_iter().map(|e| e.task).collect()
    }

    /// The earliest pending deadline, for embedders that sleep between
    /// `advance` calls.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|e| e.due).min()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Trailing-edge debounce: the action runs once a quiet period has
/// elapsed with no further triggers, and a newer trigger cancels the
/// pending one (last write wins).
#[derive(Debug)]
pub struct Debounce {
    quiet: Duration,
    pending: Option<TimerId>,
}

impl Debounce {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// Record a trigger: cancel any pending task and schedule `task` for
    /// one quiet period from `now`.
    pub fn trigger<T>(&mut self, scheduler: &mut Scheduler<T>, now: Instant, task: T) -> TimerId {
        if let Some(previous) = self.pending.take() {
            scheduler.cancel(previous);
        }
        let id = scheduler.schedule_in(now, self.quiet, task);
        self.pending = Some(id);
        id
    }
}

/// Leading-edge throttle: the first event in a window is admitted,
/// everything else inside the window is dropped.
#[derive(Debug)]
pub struct Throttle {
    window: Duration,
    open_at: Option<Instant>,
}

impl Throttle {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            open_at: None,
        }
    }

    /// Whether an event arriving at `now` passes the throttle.
    pub fn admit(&mut self, now: Instant) -> bool {
        match self.open_at {
            Some(open) if now < open => false,
            _ => {
                self.open_at = Some(now + self.window);
                true
            }
        }
    }
}
