//! Graph traversal algorithms with step recording
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod traversal;

pub use self::traversal::{BreadthFirstSearch, DepthFirstSearch};
