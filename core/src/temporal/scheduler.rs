//! Cancellable tick timers for playback
//!
//! The playback controller never sleeps itself. It asks a [`TickScheduler`]
//! for a one-shot timer and later receives the fired [`TimerId`] back.
//! Cancelling a timer guarantees its id is never delivered; the controller
//! additionally rejects ids it is not waiting for.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::time::Duration;

use log::trace;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Identifier of one scheduled tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerId(pub u64);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// One-shot timer source used by the playback controller
pub trait TickScheduler {
    /// Arms a timer that fires once after `delay`
    fn schedule(&mut self, delay: Duration) -> TimerId;

    /// Disarms a timer; unknown or already fired ids are ignored
    fn cancel(&mut self, id: TimerId);
}

/// Virtual-clock scheduler.
///
/// Time only moves when [`ManualScheduler::advance`] is called, which makes
/// playback fully deterministic for tests and headless replays.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_id: u64,
    pending: BTreeMap<TimerId, Duration>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elapsed virtual time
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Earliest armed deadline
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.values().min().copied()
    }

    /// Moves the clock forward and returns the timers that came due,
    /// ordered by deadline then by arming order
    pub fn advance(&mut self, by: Duration) -> Vec<TimerId> {
        self.now += by;
        let now = self.now;

        let mut due: Vec<(Duration, TimerId)> = self
            .pending
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(id, deadline)| (*deadline, *id))
            .collect();
        due.sort();

        for (_, id) in &due {
            self.pending.remove(id);
        }
        due.into_iter().map(|(_, id)| id).collect()
    }

    /// Jumps straight to the next deadline, if any
    pub fn advance_to_next(&mut self) -> Vec<TimerId> {
        match self.next_deadline() {
            Some(deadline) => self.advance(deadline.saturating_sub(self.now)),
            None => Vec::new(),
        }
    }
}

impl TickScheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.insert(id, self.now + delay);
        trace!("armed {} for {:?}", id, delay);
        id
    }

    fn cancel(&mut self, id: TimerId) {
        if self.pending.remove(&id).is_some() {
            trace!("cancelled {}", id);
        }
    }
}

/// Scheduler backed by the tokio timer.
///
/// Each armed timer is a task that sleeps and then posts its id on the
/// channel returned by [`TokioScheduler::new`]. Cancelling aborts the task.
/// Must be used from within a tokio runtime.
#[derive(Debug)]
pub struct TokioScheduler {
    sender: mpsc::UnboundedSender<TimerId>,
    next_id: u64,
    tasks: HashMap<TimerId, JoinHandle<()>>,
}

impl TokioScheduler {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<TimerId>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let scheduler = Self {
            sender,
            next_id: 0,
            tasks: HashMap::new(),
        };
        (scheduler, receiver)
    }

    /// Number of timers still armed
    pub fn armed(&self) -> usize {
        self.tasks.values().filter(|task| !task.is_finished()).count()
    }
}

impl TickScheduler for TokioScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        self.tasks.retain(|_, task| !task.is_finished());

        let id = TimerId(self.next_id);
        self.next_id += 1;
        let sender = self.sender.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the session was torn down
            let _ = sender.send(id);
        });
        self.tasks.insert(id, task);
        trace!("armed {} for {:?}", id, delay);
        id
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(task) = self.tasks.remove(&id) {
            task.abort();
            trace!("cancelled {}", id);
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.abort();
        }
    }
}
