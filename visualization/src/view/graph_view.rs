//! Circular layout for graph traversal traces
//!
//! Nodes are placed evenly on a circle around the canvas centre in
//! ascending id order. Edges are emitted before nodes so that a painter
//! drawing in order puts the circles on top.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::BTreeMap;
use std::f64::consts::TAU;

use algoscope_core::{CanvasConfig, Graph, NodeId, Step};

use crate::view::draw::{ColorState, DrawCommand, Point};

/// Configuration for graph visualization
#[derive(Debug, Clone)]
pub struct GraphViewConfig {
    /// Circle radius as a fraction of the smaller canvas side
    pub layout_fraction: f64,

    /// Radius of each node circle
    pub node_radius: f64,
}

impl Default for GraphViewConfig {
    fn default() -> Self {
        Self {
            layout_fraction: 1.0 / 3.0,
            node_radius: 25.0,
        }
    }
}

/// Graph rendered as a ring of nodes
#[derive(Debug, Clone, Default)]
pub struct GraphView {
    config: GraphViewConfig,
}

impl GraphView {
    pub fn new(config: GraphViewConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GraphViewConfig {
        &self.config
    }

    /// Centre of every node on the layout circle
    pub fn layout(&self, graph: &Graph, canvas: &CanvasConfig) -> BTreeMap<NodeId, Point> {
        let count = graph.node_count();
        let center = Point::new(canvas.width / 2.0, canvas.height / 2.0);
        let radius = canvas.width.min(canvas.height) * self.config.layout_fraction;

        graph
            .nodes()
            .enumerate()
            .map(|(i, node)| {
                let angle = i as f64 * TAU / count as f64;
                let position = Point::new(
                    center.x + radius * angle.cos(),
                    center.y + radius * angle.sin(),
                );
                (node, position)
            })
            .collect()
    }

    pub fn draw(&self, graph: &Graph, step: Option<&Step>, canvas: &CanvasConfig) -> Vec<DrawCommand> {
        let positions = self.layout(graph, canvas);
        let mut commands = Vec::with_capacity(graph.edge_count() + graph.node_count());

        for (id, edge) in graph.edges() {
            if let (Some(from), Some(to)) = (positions.get(&edge.source), positions.get(&edge.target)) {
                commands.push(DrawCommand::Edge {
                    id,
                    source: edge.source,
                    target: edge.target,
                    from: *from,
                    to: *to,
                    state: ColorState::for_edge(step, id),
                });
            }
        }

        for (node, center) in &positions {
            commands.push(DrawCommand::Node {
                id: *node,
                center: *center,
                radius: self.config.node_radius,
                state: ColorState::for_node(step, *node),
                label: node.to_string(),
            });
        }
        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algoscope_core::EdgeId;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_layout_on_circle() {
        let view = GraphView::default();
        let canvas = CanvasConfig::default();
        let graph = Graph::from_edges([(1, 2), (2, 3), (3, 4)], false);
        let layout = view.layout(&graph, &canvas);
        let center = Point::new(400.0, 200.0);

        assert_eq!(layout.len(), 4);
        for position in layout.values() {
            assert!(close(position.distance_to(&center), 400.0 / 3.0));
        }
        // First node sits at angle zero
        let first = layout[&NodeId(1)];
        assert!(close(first.x, 400.0 + 400.0 / 3.0));
        assert!(close(first.y, 200.0));
    }

    #[test]
    fn test_edges_precede_nodes() {
        let view = GraphView::default();
        let graph = Graph::from_edges([(1, 2), (2, 3)], false);
        let commands = view.draw(&graph, None, &CanvasConfig::default());

        assert_eq!(commands.len(), 5);
        assert!(matches!(commands[0], DrawCommand::Edge { .. }));
        assert!(matches!(commands[1], DrawCommand::Edge { .. }));
        assert!(commands[2..].iter().all(|c| matches!(c, DrawCommand::Node { .. })));
        assert_eq!(commands[2].label(), Some("1"));
    }

    #[test]
    fn test_edge_endpoints_match_node_centres() {
        let view = GraphView::default();
        let canvas = CanvasConfig::default();
        let graph = Graph::from_edges([(3, 1)], true);
        let layout = view.layout(&graph, &canvas);

        match &view.draw(&graph, None, &canvas)[0] {
            DrawCommand::Edge { from, to, .. } => {
                assert_eq!(*from, layout[&NodeId(3)]);
                assert_eq!(*to, layout[&NodeId(1)]);
            }
            other => panic!("expected edge, got {:?}", other),
        }
    }

    #[test]
    fn test_traversal_states() {
        let view = GraphView::default();
        let graph = Graph::from_edges([(1, 2), (2, 3)], false);
        let step = Step::new()
            .current_node(NodeId(2))
            .visited([NodeId(1), NodeId(2)])
            .active_edge(EdgeId(1));
        let states: Vec<_> = view
            .draw(&graph, Some(&step), &CanvasConfig::default())
            .iter()
            .filter_map(DrawCommand::state)
            .collect();

        assert_eq!(
            states,
            vec![
                ColorState::Default,
                ColorState::Active,
                ColorState::Visited,
                ColorState::Current,
                ColorState::Default,
            ]
        );
    }
}
