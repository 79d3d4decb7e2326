//! Algoscope algorithm framework
//! Step-recording implementations of the classic sorting, searching and
//! graph traversal algorithms
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod traits;
pub mod state;
pub mod sorting;
pub mod searching;
pub mod graph;

pub use self::traits::*;
pub use self::state::Step;
