//! Trace generation
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod trace;

pub use self::trace::{generate, Trace};
