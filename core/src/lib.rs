//! Algoscope core
//!
//! The algorithm execution-trace engine: datasets, step-recording
//! algorithms, the trace generator, and the playback controller that turns
//! a trace into a navigable, timer-driven animation.
//!
//! ```
//! use algoscope_core::{generate, AlgorithmKind, Dataset, TraceParams, Variant};
//!
//! let dataset = Dataset::parse_numeric("5,3,8,1");
//! let trace = generate(AlgorithmKind::Sorting, Variant::Bubble, &dataset, &TraceParams::default());
//! assert_eq!(trace.get(0).unwrap().comparing.len(), 2);
//! ```
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod execution;
pub mod temporal;

pub use crate::algorithm::{AlgorithmError, AlgorithmInfo, AlgorithmKind, Step, TraceParams, Variant};
pub use crate::config::{CanvasConfig, ConfigError, SessionConfig};
pub use crate::data_structures::{Dataset, Edge, EdgeId, Graph, NodeId};
pub use crate::execution::{generate, Trace};
pub use crate::temporal::{
    ManualScheduler, PlaybackController, PlaybackEvent, PlaybackPhase, PlaybackState, Session,
    TickScheduler, TimerId, TokioScheduler,
};
