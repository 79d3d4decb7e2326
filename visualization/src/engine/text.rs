//! Terminal and JSON-lines renderers
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::fmt::Write as _;
use std::io::Write;

use log::trace;

use crate::engine::{RenderError, Renderer};
use crate::view::DrawCommand;

/// Formats one frame, one line per element followed by the message.
/// Connectors are decorative and produce no line.
pub fn format_frame(commands: &[DrawCommand]) -> String {
    let mut frame = String::new();
    for command in commands {
        // Writing into a String cannot fail
        let _ = match command {
            DrawCommand::Bar { index, label, state, .. } => {
                writeln!(frame, "bar  [{:>3}] {:>6}  {}", index, label, state.tag())
            }
            DrawCommand::Cell { index, label, state, .. } => {
                writeln!(frame, "cell [{:>3}] {:>6}  {}", index, label, state.tag())
            }
            DrawCommand::Edge { id, source, target, state, .. } => {
                writeln!(frame, "edge [{:>3}] {:>3} - {:<3} {}", id.0, source, target, state.tag())
            }
            DrawCommand::Node { label, state, .. } => {
                writeln!(frame, "node       {:>6}  {}", label, state.tag())
            }
            DrawCommand::Message { text, .. } => writeln!(frame, "> {}", text),
            DrawCommand::Connector { .. } => Ok(()),
        };
    }
    frame
}

/// Writes human-readable frames separated by a blank line
#[derive(Debug)]
pub struct TextRenderer<W: Write> {
    out: W,
    frames: usize,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, frames: 0 }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, commands: &[DrawCommand]) -> Result<(), RenderError> {
        if self.frames > 0 {
            writeln!(self.out)?;
        }
        self.out.write_all(format_frame(commands).as_bytes())?;
        self.out.flush()?;
        self.frames += 1;
        trace!("rendered text frame {} ({} commands)", self.frames, commands.len());
        Ok(())
    }

    fn frames(&self) -> usize {
        self.frames
    }
}

/// Writes each frame as one JSON array per line
#[derive(Debug)]
pub struct JsonRenderer<W: Write> {
    out: W,
    frames: usize,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, frames: 0 }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn render(&mut self, commands: &[DrawCommand]) -> Result<(), RenderError> {
        serde_json::to_writer(&mut self.out, commands)?;
        writeln!(self.out)?;
        self.out.flush()?;
        self.frames += 1;
        Ok(())
    }

    fn frames(&self) -> usize {
        self.frames
    }
}
