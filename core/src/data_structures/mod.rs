//! Input data structures
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod graph;
pub mod dataset;

pub use self::dataset::Dataset;
pub use self::graph::{Edge, EdgeId, Graph, NodeId};
