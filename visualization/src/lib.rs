//! Algoscope visualization
//!
//! Pure mapping from the active trace step to declarative draw commands,
//! plus trivial renderers that paint those commands as text or JSON.
//!
//! ```
//! use algoscope_core::{AlgorithmKind, CanvasConfig, Dataset, Step};
//! use algoscope_visualization::{map_step_to_draw_commands, ColorState};
//!
//! let dataset = Dataset::parse_numeric("3,1");
//! let step = Step::new().comparing([0, 1]).sorted([1]);
//! let commands = map_step_to_draw_commands(
//!     AlgorithmKind::Sorting,
//!     &dataset,
//!     Some(&step),
//!     &CanvasConfig::default(),
//! );
//! assert_eq!(commands[1].state(), Some(ColorState::Comparing));
//! ```
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod engine;
pub mod view;

pub use crate::engine::{format_frame, JsonRenderer, RenderError, Renderer, TextRenderer};
pub use crate::view::{
    map_step_to_draw_commands, ColorState, DrawCommand, Point, Rect, RenderMapper,
};
