//! Renderers consuming draw commands
//!
//! A renderer paints exactly what the render mapper produced. It never
//! inspects steps or decides colours.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod text;

use std::io;

use thiserror::Error;

use crate::view::DrawCommand;

pub use self::text::{format_frame, JsonRenderer, TextRenderer};

/// Renderer errors
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to write frame: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to encode frame: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Surface that consumes one frame of draw commands at a time
pub trait Renderer {
    fn render(&mut self, commands: &[DrawCommand]) -> Result<(), RenderError>;

    /// Number of frames rendered so far
    fn frames(&self) -> usize;
}
