//! Playback state machine
//!
//! [`PlaybackState`] is a plain value with a pure transition function,
//! [`PlaybackState::reduce`]. [`PlaybackController`] wraps it together
//! with a [`TickScheduler`] and keeps the timer in lockstep with the state:
//! a tick is pending exactly when playback is running.
//!
//! # Invariants
//! - `current_index` is always within `[0, len-1]` (0 for an empty trace)
//! - `speed` is always within `[MIN_SPEED, MAX_SPEED]`
//! - at most one tick is pending, and only while running
//! - a tick that is not the pending one is discarded
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::time::Duration;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::temporal::scheduler::{ManualScheduler, TickScheduler, TimerId};

pub const MIN_SPEED: u8 = 1;
pub const MAX_SPEED: u8 = 10;
pub const DEFAULT_SPEED: u8 = 5;

/// Delay between ticks: `1000 - speed * 9` milliseconds (991ms down to 910ms)
pub fn tick_delay(speed: u8) -> Duration {
    let speed = u64::from(speed.clamp(MIN_SPEED, MAX_SPEED));
    Duration::from_millis(1000 - speed * 9)
}

/// Coarse playback state derived from [`PlaybackState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackPhase {
    /// No trace, or an empty one
    Idle,
    /// Stopped before the last step
    Paused,
    /// Advancing on ticks
    Running,
    /// Stopped on the last step
    Completed,
}

/// Inputs to the playback state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackEvent {
    Play,
    Pause,
    StepForward,
    StepBack,
    Reset,
    SetSpeed(u8),
    /// The trace was regenerated with `len` steps
    TraceReplaced { len: usize },
    /// The pending timer fired
    Tick,
}

/// Position, run flag and speed for one trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlaybackState {
    current_index: usize,
    running: bool,
    speed: u8,
    len: usize,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new(0, DEFAULT_SPEED)
    }
}

impl PlaybackState {
    /// Fresh state at the start of a trace of `len` steps
    pub fn new(len: usize, speed: u8) -> Self {
        Self {
            current_index: 0,
            running: false,
            speed: speed.clamp(MIN_SPEED, MAX_SPEED),
            len,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn speed(&self) -> u8 {
        self.speed
    }

    /// Length of the trace being played
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn last_index(&self) -> usize {
        self.len.saturating_sub(1)
    }

    fn at_end(&self) -> bool {
        self.current_index >= self.last_index()
    }

    pub fn phase(&self) -> PlaybackPhase {
        if self.len == 0 {
            PlaybackPhase::Idle
        } else if self.running {
            PlaybackPhase::Running
        } else if self.at_end() {
            PlaybackPhase::Completed
        } else {
            PlaybackPhase::Paused
        }
    }

    /// Delay of the tick that should be pending in this state
    pub fn next_tick(&self) -> Option<Duration> {
        self.running.then(|| tick_delay(self.speed))
    }

    /// Pure transition function. Never fails: out-of-range requests clamp,
    /// requests that are not permitted in the current phase are no-ops.
    pub fn reduce(self, event: PlaybackEvent) -> Self {
        let mut next = self;
        match event {
            PlaybackEvent::Play => {
                if self.len == 0 || self.running {
                    return self;
                }
                if self.at_end() {
                    next.current_index = 0;
                }
                // A single-step trace has nowhere to go
                next.running = !next.at_end();
            }
            PlaybackEvent::Pause => {
                next.running = false;
            }
            PlaybackEvent::StepForward => {
                if self.running || self.len == 0 {
                    return self;
                }
                next.current_index = (self.current_index + 1).min(self.last_index());
            }
            PlaybackEvent::StepBack => {
                if self.running {
                    return self;
                }
                next.current_index = self.current_index.saturating_sub(1);
            }
            PlaybackEvent::Reset => {
                next.current_index = 0;
                next.running = false;
            }
            PlaybackEvent::SetSpeed(speed) => {
                next.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
            }
            PlaybackEvent::TraceReplaced { len } => {
                next = Self::new(len, self.speed);
            }
            PlaybackEvent::Tick => {
                if !self.running {
                    return self;
                }
                if !self.at_end() {
                    next.current_index += 1;
                }
                if next.at_end() {
                    next.running = false;
                }
            }
        }
        next
    }
}

/// Playback state plus the single timer that drives it
#[derive(Debug)]
pub struct PlaybackController<S: TickScheduler> {
    state: PlaybackState,
    scheduler: S,
    pending: Option<TimerId>,
}

impl<S: TickScheduler> PlaybackController<S> {
    pub fn new(scheduler: S, speed: u8) -> Self {
        Self {
            state: PlaybackState::new(0, speed),
            scheduler,
            pending: None,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn phase(&self) -> PlaybackPhase {
        self.state.phase()
    }

    /// Timer the controller is currently waiting for
    pub fn pending(&self) -> Option<TimerId> {
        self.pending
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn play(&mut self) {
        self.dispatch(PlaybackEvent::Play);
    }

    pub fn pause(&mut self) {
        self.dispatch(PlaybackEvent::Pause);
    }

    pub fn step_forward(&mut self) {
        self.dispatch(PlaybackEvent::StepForward);
    }

    pub fn step_back(&mut self) {
        self.dispatch(PlaybackEvent::StepBack);
    }

    pub fn reset(&mut self) {
        self.dispatch(PlaybackEvent::Reset);
    }

    pub fn set_speed(&mut self, speed: u8) {
        self.dispatch(PlaybackEvent::SetSpeed(speed));
    }

    /// Restarts playback for a regenerated trace
    pub fn replace_trace(&mut self, len: usize) {
        self.dispatch(PlaybackEvent::TraceReplaced { len });
    }

    /// Applies a user-facing event.
    ///
    /// Any event that changes the state cancels the pending tick before
    /// the new state is installed; a fresh tick is armed if the new state
    /// is running. Events that leave the state untouched leave the timer
    /// untouched too.
    pub fn dispatch(&mut self, event: PlaybackEvent) {
        if event == PlaybackEvent::Tick {
            // Ticks only arrive through `on_tick` with their id
            return;
        }
        let next = self.state.reduce(event);
        if next == self.state {
            trace!("playback event {:?} ignored in {:?}", event, self.state.phase());
            return;
        }
        self.cancel_pending();
        self.install(next);
        debug!(
            "playback {:?} -> {:?} at step {}",
            event,
            self.state.phase(),
            self.state.current_index
        );
    }

    /// Delivers a fired timer. Returns `true` if it advanced playback;
    /// stale or unknown ids are discarded.
    pub fn on_tick(&mut self, id: TimerId) -> bool {
        if self.pending != Some(id) {
            trace!("discarding stale {}", id);
            return false;
        }
        self.pending = None;
        let next = self.state.reduce(PlaybackEvent::Tick);
        self.install(next);
        trace!("tick -> step {}", self.state.current_index);
        true
    }

    fn install(&mut self, next: PlaybackState) {
        self.state = next;
        if let Some(delay) = next.next_tick() {
            self.pending = Some(self.scheduler.schedule(delay));
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(id) = self.pending.take() {
            self.scheduler.cancel(id);
        }
    }
}

impl PlaybackController<ManualScheduler> {
    /// Moves the virtual clock forward, delivering every timer that comes
    /// due. Returns the number of ticks that advanced playback.
    pub fn advance(&mut self, by: Duration) -> usize {
        let target = self.scheduler.now() + by;
        let mut ticks = 0;
        // Ticks armed while delivering may also fall due before `target`
        while let Some(deadline) = self.scheduler.next_deadline().filter(|d| *d <= target) {
            let fired = self.scheduler.advance(deadline.saturating_sub(self.scheduler.now()));
            ticks += self.deliver(fired);
        }
        self.scheduler.advance(target.saturating_sub(self.scheduler.now()));
        ticks
    }

    /// Jumps the virtual clock to the next armed deadline, if any
    pub fn advance_to_next(&mut self) -> usize {
        let fired = self.scheduler.advance_to_next();
        self.deliver(fired)
    }

    fn deliver(&mut self, fired: Vec<TimerId>) -> usize {
        fired.into_iter().filter(|id| self.on_tick(*id)).count()
    }
}

impl<S: TickScheduler> Drop for PlaybackController<S> {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
