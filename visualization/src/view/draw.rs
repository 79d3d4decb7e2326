//! Declarative draw commands
//!
//! The render mapper emits these; a renderer consumes them without making
//! any display decisions of its own. Coordinates are in canvas units with
//! the origin at the top-left corner.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use serde::{Deserialize, Serialize};

use algoscope_core::{EdgeId, NodeId, Step};

/// Point on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[inline]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Semantic colour state of one drawn element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorState {
    Default,
    Comparing,
    Sorted,
    Current,
    Found,
    Eliminated,
    Visited,
    Active,
}

impl ColorState {
    /// Bars: `comparing` > `sorted` > default
    pub fn for_bar(step: Option<&Step>, index: usize) -> Self {
        match step {
            Some(step) if step.comparing.contains(&index) => ColorState::Comparing,
            Some(step) if step.sorted.contains(&index) => ColorState::Sorted,
            _ => ColorState::Default,
        }
    }

    /// Search cells: `current` > `found` > `eliminated` > default
    pub fn for_cell(step: Option<&Step>, index: usize) -> Self {
        match step {
            Some(step) if step.current == Some(index) => ColorState::Current,
            Some(step) if step.found == Some(index) => ColorState::Found,
            Some(step) if step.eliminated.contains(&index) => ColorState::Eliminated,
            _ => ColorState::Default,
        }
    }

    /// Graph nodes: current node > visited > default
    pub fn for_node(step: Option<&Step>, node: NodeId) -> Self {
        match step {
            Some(step) if step.current_node == Some(node) => ColorState::Current,
            Some(step) if step.visited_nodes.contains(&node) => ColorState::Visited,
            _ => ColorState::Default,
        }
    }

    /// Graph edges: active > default
    pub fn for_edge(step: Option<&Step>, edge: EdgeId) -> Self {
        match step {
            Some(step) if step.active_edge == Some(edge) => ColorState::Active,
            _ => ColorState::Default,
        }
    }

    /// Gradient stops (top, bottom) conventionally used for this state
    pub fn gradient(self) -> (&'static str, &'static str) {
        match self {
            ColorState::Comparing | ColorState::Current | ColorState::Active => {
                ("#FFD700", "#FFA500")
            }
            ColorState::Sorted | ColorState::Found | ColorState::Visited => ("#4CAF50", "#45A049"),
            ColorState::Eliminated => ("#FF6B6B", "#FF4949"),
            ColorState::Default => ("#800000", "#4A0404"),
        }
    }

    /// Lower-case tag used by text output
    pub fn tag(self) -> &'static str {
        match self {
            ColorState::Default => "default",
            ColorState::Comparing => "comparing",
            ColorState::Sorted => "sorted",
            ColorState::Current => "current",
            ColorState::Found => "found",
            ColorState::Eliminated => "eliminated",
            ColorState::Visited => "visited",
            ColorState::Active => "active",
        }
    }
}

/// One visual primitive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "element", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Sequence element drawn as a vertical bar
    Bar {
        index: usize,
        rect: Rect,
        state: ColorState,
        label: String,
    },
    /// Sequence element drawn as a rounded box
    Cell {
        index: usize,
        rect: Rect,
        corner_radius: f64,
        state: ColorState,
        label: String,
    },
    /// Decorative line between neighbouring cells
    Connector { from: Point, to: Point },
    /// Graph edge between two node centres
    Edge {
        id: EdgeId,
        source: NodeId,
        target: NodeId,
        from: Point,
        to: Point,
        state: ColorState,
    },
    /// Graph node drawn as a circle
    Node {
        id: NodeId,
        center: Point,
        radius: f64,
        state: ColorState,
        label: String,
    },
    /// Global narration overlay
    Message { anchor: Point, text: String },
}

impl DrawCommand {
    /// Colour state carried by this command, if it has one
    pub fn state(&self) -> Option<ColorState> {
        match self {
            DrawCommand::Bar { state, .. }
            | DrawCommand::Cell { state, .. }
            | DrawCommand::Edge { state, .. }
            | DrawCommand::Node { state, .. } => Some(*state),
            DrawCommand::Connector { .. } | DrawCommand::Message { .. } => None,
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            DrawCommand::Bar { label, .. }
            | DrawCommand::Cell { label, .. }
            | DrawCommand::Node { label, .. } => Some(label),
            DrawCommand::Message { text, .. } => Some(text),
            DrawCommand::Connector { .. } | DrawCommand::Edge { .. } => None,
        }
    }

    pub fn is_message(&self) -> bool {
        matches!(self, DrawCommand::Message { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_precedence_prefers_comparing() {
        let step = Step::new().comparing([1, 2]).sorted([2, 3]);
        assert_eq!(ColorState::for_bar(Some(&step), 2), ColorState::Comparing);
        assert_eq!(ColorState::for_bar(Some(&step), 3), ColorState::Sorted);
        assert_eq!(ColorState::for_bar(Some(&step), 0), ColorState::Default);
        assert_eq!(ColorState::for_bar(None, 2), ColorState::Default);
    }

    #[test]
    fn test_cell_precedence_order() {
        let mut step = Step::new().current(1).found(1).eliminated([1, 2]);
        assert_eq!(ColorState::for_cell(Some(&step), 1), ColorState::Current);
        step.current = None;
        assert_eq!(ColorState::for_cell(Some(&step), 1), ColorState::Found);
        assert_eq!(ColorState::for_cell(Some(&step), 2), ColorState::Eliminated);
        assert_eq!(ColorState::for_cell(Some(&step), 0), ColorState::Default);
    }

    #[test]
    fn test_node_and_edge_precedence() {
        let step = Step::new()
            .current_node(NodeId(2))
            .visited([NodeId(1), NodeId(2)])
            .active_edge(EdgeId(0));
        assert_eq!(ColorState::for_node(Some(&step), NodeId(2)), ColorState::Current);
        assert_eq!(ColorState::for_node(Some(&step), NodeId(1)), ColorState::Visited);
        assert_eq!(ColorState::for_node(Some(&step), NodeId(3)), ColorState::Default);
        assert_eq!(ColorState::for_edge(Some(&step), EdgeId(0)), ColorState::Active);
        assert_eq!(ColorState::for_edge(Some(&step), EdgeId(1)), ColorState::Default);
    }

    #[test]
    fn test_command_accessors() {
        let message = DrawCommand::Message {
            anchor: Point::new(400.0, 368.0),
            text: "Comparing 5 and 3".into(),
        };
        assert!(message.is_message());
        assert_eq!(message.state(), None);
        assert_eq!(message.label(), Some("Comparing 5 and 3"));
        assert_eq!(Rect::new(0.0, 0.0, 10.0, 20.0).center(), Point::new(5.0, 10.0));
    }
}
