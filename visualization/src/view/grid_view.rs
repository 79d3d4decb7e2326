//! Cell row layout for searching traces
//!
//! Elements are drawn as a horizontally centred row of rounded boxes joined
//! by short connector lines.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use algoscope_core::{CanvasConfig, Step};

use crate::view::draw::{ColorState, DrawCommand, Point, Rect};

/// Configuration for cell visualization
#[derive(Debug, Clone)]
pub struct GridViewConfig {
    /// Horizontal margin used when sizing cells
    pub margin: f64,

    /// Upper bound on the cell side
    pub max_cell_size: f64,

    /// Gap between neighbouring cells
    pub spacing: f64,

    pub corner_radius: f64,
}

impl Default for GridViewConfig {
    fn default() -> Self {
        Self {
            margin: 50.0,
            max_cell_size: 60.0,
            spacing: 10.0,
            corner_radius: 10.0,
        }
    }
}

/// Sequence rendered as a row of cells
#[derive(Debug, Clone, Default)]
pub struct GridView {
    config: GridViewConfig,
}

impl GridView {
    pub fn new(config: GridViewConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GridViewConfig {
        &self.config
    }

    /// Side length of one cell for `count` elements
    pub fn cell_size(&self, count: usize, canvas: &CanvasConfig) -> f64 {
        if count == 0 {
            return 0.0;
        }
        ((canvas.width - 2.0 * self.config.margin) / count as f64)
            .min(self.config.max_cell_size)
            .max(0.0)
    }

    pub fn draw(&self, values: &[i64], step: Option<&Step>, canvas: &CanvasConfig) -> Vec<DrawCommand> {
        let n = values.len();
        let size = self.cell_size(n, canvas);
        let spacing = self.config.spacing;
        let start_x = (canvas.width - n as f64 * (size + spacing)) / 2.0;
        let y = canvas.height / 2.0 - size / 2.0;

        let mut commands = Vec::with_capacity(n * 2);
        for (index, value) in values.iter().enumerate() {
            let x = start_x + index as f64 * (size + spacing);
            if index + 1 < n {
                commands.push(DrawCommand::Connector {
                    from: Point::new(x + size, y + size / 2.0),
                    to: Point::new(x + size + spacing, y + size / 2.0),
                });
            }
            commands.push(DrawCommand::Cell {
                index,
                rect: Rect::new(x, y, size, size),
                corner_radius: self.config.corner_radius,
                state: ColorState::for_cell(step, index),
                label: value.to_string(),
            });
        }
        commands
    }
}
