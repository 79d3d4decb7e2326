//! Bar chart layout for sorting traces
//!
//! Each element becomes a vertical bar standing on a common baseline, with
//! height proportional to its magnitude relative to the largest one.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use algoscope_core::{CanvasConfig, Step};

use crate::view::draw::{ColorState, DrawCommand, Rect};

/// Configuration for bar visualization
#[derive(Debug, Clone)]
pub struct BarViewConfig {
    /// Horizontal margin on each side
    pub margin: f64,

    /// Gap between neighbouring bars
    pub spacing: f64,

    /// Distance from the canvas bottom to the baseline
    pub baseline_offset: f64,

    /// Vertical space reserved outside the tallest bar
    pub headroom: f64,
}

impl Default for BarViewConfig {
    fn default() -> Self {
        Self {
            margin: 50.0,
            spacing: 2.0,
            baseline_offset: 50.0,
            headroom: 100.0,
        }
    }
}

/// Sequence rendered as bars
#[derive(Debug, Clone, Default)]
pub struct BarView {
    config: BarViewConfig,
}

impl BarView {
    pub fn new(config: BarViewConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BarViewConfig {
        &self.config
    }

    pub fn draw(&self, values: &[i64], step: Option<&Step>, canvas: &CanvasConfig) -> Vec<DrawCommand> {
        if values.is_empty() {
            return Vec::new();
        }

        let n = values.len() as f64;
        let width = ((canvas.width - 2.0 * self.config.margin) / n).max(0.0);
        let baseline = canvas.height - self.config.baseline_offset;
        let usable = (canvas.height - self.config.headroom).max(0.0);
        let max = values.iter().map(|v| v.unsigned_abs()).max().unwrap_or(0);

        values
            .iter()
            .enumerate()
            .map(|(index, value)| {
                let height = if max == 0 {
                    0.0
                } else {
                    value.unsigned_abs() as f64 / max as f64 * usable
                };
                let x = self.config.margin + index as f64 * (width + self.config.spacing);
                DrawCommand::Bar {
                    index,
                    rect: Rect::new(x, baseline - height, width, height),
                    state: ColorState::for_bar(step, index),
                    label: value.to_string(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rects(commands: &[DrawCommand]) -> Vec<Rect> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Bar { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_bar_geometry() {
        let view = BarView::default();
        let canvas = CanvasConfig::default();
        let commands = view.draw(&[5, 10], None, &canvas);
        let rects = rects(&commands);

        // (800 - 100) / 2
        assert_eq!(rects[0].width, 350.0);
        assert_eq!(rects[0].x, 50.0);
        assert_eq!(rects[1].x, 50.0 + 352.0);
        assert_eq!(rects[1].height, 300.0);
        assert_eq!(rects[0].height, 150.0);
        assert_eq!(rects[0].y + rects[0].height, 350.0);
        assert_eq!(commands[1].label(), Some("10"));
    }

    #[test]
    fn test_all_zero_values_have_flat_bars() {
        let view = BarView::default();
        let commands = view.draw(&[0, 0, 0], None, &CanvasConfig::default());
        assert_eq!(commands.len(), 3);
        assert!(rects(&commands).iter().all(|r| r.height == 0.0));
    }

    #[test]
    fn test_negative_values_use_magnitude() {
        let view = BarView::default();
        let commands = view.draw(&[-4, 2], None, &CanvasConfig::default());
        let rects = rects(&commands);
        assert_eq!(rects[0].height, 300.0);
        assert_eq!(rects[1].height, 150.0);
    }

    #[test]
    fn test_states_follow_step() {
        let view = BarView::default();
        let step = Step::new().comparing([0, 1]).sorted([1, 2]);
        let states: Vec<_> = view
            .draw(&[3, 2, 1], Some(&step), &CanvasConfig::default())
            .iter()
            .filter_map(DrawCommand::state)
            .collect();
        assert_eq!(
            states,
            vec![ColorState::Comparing, ColorState::Comparing, ColorState::Sorted]
        );
    }
}
