//! Time-driven playback of traces
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod scheduler;
pub mod playback;
pub mod session;

pub use self::playback::{
    tick_delay, PlaybackController, PlaybackEvent, PlaybackPhase, PlaybackState, DEFAULT_SPEED,
    MAX_SPEED, MIN_SPEED,
};
pub use self::scheduler::{ManualScheduler, TickScheduler, TimerId, TokioScheduler};
pub use self::session::Session;
