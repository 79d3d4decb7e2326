//! Render mapper
//!
//! Turns the active step of a trace into an ordered list of
//! [`DrawCommand`]s. All colour precedence decisions live here; renderers
//! only paint what they are given.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod bar_view;
pub mod draw;
pub mod graph_view;
pub mod grid_view;

use algoscope_core::{AlgorithmKind, CanvasConfig, Dataset, Step};

pub use self::bar_view::{BarView, BarViewConfig};
pub use self::draw::{ColorState, DrawCommand, Point, Rect};
pub use self::graph_view::{GraphView, GraphViewConfig};
pub use self::grid_view::{GridView, GridViewConfig};

/// Distance of the message overlay above the canvas bottom
const MESSAGE_OFFSET: f64 = 32.0;

/// Layout set used by [`map_step_to_draw_commands`]
#[derive(Debug, Clone, Default)]
pub struct RenderMapper {
    bars: BarView,
    cells: GridView,
    graph: GraphView,
}

impl RenderMapper {
    pub fn new(bars: BarViewConfig, cells: GridViewConfig, graph: GraphViewConfig) -> Self {
        Self {
            bars: BarView::new(bars),
            cells: GridView::new(cells),
            graph: GraphView::new(graph),
        }
    }

    /// Maps one step onto draw commands.
    ///
    /// A dataset whose shape does not fit `kind` is drawn by its own shape
    /// in the default state. The message overlay, when present, is always
    /// the last command.
    pub fn map(
        &self,
        kind: AlgorithmKind,
        dataset: &Dataset,
        step: Option<&Step>,
        canvas: &CanvasConfig,
    ) -> Vec<DrawCommand> {
        let step = step.filter(|_| dataset.fits(kind));

        let mut commands = match (kind, dataset) {
            (AlgorithmKind::Searching, Dataset::Numeric(values)) => {
                self.cells.draw(values, step, canvas)
            }
            (_, Dataset::Numeric(values)) => self.bars.draw(values, step, canvas),
            (_, Dataset::Graph(graph)) => self.graph.draw(graph, step, canvas),
        };

        if let Some(text) = step.and_then(|s| s.message.as_ref()) {
            commands.push(DrawCommand::Message {
                anchor: Point::new(canvas.width / 2.0, canvas.height - MESSAGE_OFFSET),
                text: text.clone(),
            });
        }
        commands
    }
}

/// Maps a step with the default layouts
pub fn map_step_to_draw_commands(
    kind: AlgorithmKind,
    dataset: &Dataset,
    step: Option<&Step>,
    canvas: &CanvasConfig,
) -> Vec<DrawCommand> {
    RenderMapper::default().map(kind, dataset, step, canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use algoscope_core::{generate, Graph, NodeId, TraceParams, Variant};
    use proptest::prelude::*;

    fn canvas() -> CanvasConfig {
        CanvasConfig::default()
    }

    #[test]
    fn test_empty_trace_draws_default_state() {
        let dataset = Dataset::parse_numeric("5,3,8");
        let commands = map_step_to_draw_commands(AlgorithmKind::Sorting, &dataset, None, &canvas());
        assert_eq!(commands.len(), 3);
        assert!(commands.iter().all(|c| c.state() == Some(ColorState::Default)));
    }

    #[test]
    fn test_comparing_wins_over_sorted() {
        let dataset = Dataset::parse_numeric("4,1,3");
        let step = Step::new().comparing([0, 1]).sorted([1, 2]);
        let commands =
            map_step_to_draw_commands(AlgorithmKind::Sorting, &dataset, Some(&step), &canvas());
        assert_eq!(commands[1].state(), Some(ColorState::Comparing));
        assert_eq!(commands[2].state(), Some(ColorState::Sorted));
    }

    #[test]
    fn test_message_overlay_is_last() {
        let dataset = Dataset::parse_numeric("5,3");
        let trace = generate(
            AlgorithmKind::Sorting,
            Variant::Bubble,
            &dataset,
            &TraceParams::default(),
        );
        let commands =
            map_step_to_draw_commands(AlgorithmKind::Sorting, &dataset, trace.get(0), &canvas());

        assert_eq!(commands.iter().filter(|c| c.is_message()).count(), 1);
        match commands.last() {
            Some(DrawCommand::Message { anchor, text }) => {
                assert_eq!(text, "Comparing 5 and 3");
                assert_eq!(*anchor, Point::new(400.0, 368.0));
            }
            other => panic!("expected message overlay, got {:?}", other),
        }
    }

    #[test]
    fn test_searching_uses_cells() {
        let dataset = Dataset::parse_numeric("1,3,5");
        let step = Step::new().found(1);
        let commands =
            map_step_to_draw_commands(AlgorithmKind::Searching, &dataset, Some(&step), &canvas());
        let cells: Vec<_> = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Cell { .. }))
            .collect();
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[1].state(), Some(ColorState::Found));
    }

    #[test]
    fn test_mismatched_dataset_draws_default_shape() {
        let graph = Dataset::Graph(Graph::from_edges([(1, 2)], false));
        let step = Step::new().comparing([0]).message("ignored");
        let commands =
            map_step_to_draw_commands(AlgorithmKind::Sorting, &graph, Some(&step), &canvas());

        assert_eq!(commands.len(), 3);
        assert!(commands.iter().all(|c| !c.is_message()));
        assert!(commands.iter().all(|c| c.state() == Some(ColorState::Default)));
    }

    #[test]
    fn test_graph_trace_highlights_current_node() {
        let dataset = Dataset::parse_edges("1-2,2-3", false);
        let trace = generate(
            AlgorithmKind::Graph,
            Variant::Bfs,
            &dataset,
            &TraceParams::with_start(NodeId(1)),
        );
        let commands =
            map_step_to_draw_commands(AlgorithmKind::Graph, &dataset, trace.get(0), &canvas());
        let current: Vec<_> = commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Node { id, state: ColorState::Current, .. } => Some(*id),
                _ => None,
            })
            .collect();
        assert_eq!(current, vec![NodeId(1)]);
    }

    #[test]
    fn test_empty_dataset_draws_nothing() {
        let commands = map_step_to_draw_commands(
            AlgorithmKind::Graph,
            &Dataset::empty_for(AlgorithmKind::Graph),
            None,
            &canvas(),
        );
        assert!(commands.is_empty());
    }

    proptest! {
        #[test]
        fn prop_one_command_per_bar(values in prop::collection::vec(-500i64..500, 1..40)) {
            let dataset = Dataset::Numeric(values.clone());
            let trace = generate(AlgorithmKind::Sorting, Variant::Quick, &dataset, &TraceParams::default());
            for step in &trace {
                let commands = map_step_to_draw_commands(AlgorithmKind::Sorting, &dataset, Some(step), &canvas());
                let bars = commands.iter().filter(|c| matches!(c, DrawCommand::Bar { .. })).count();
                prop_assert_eq!(bars, values.len());
                for index in &step.comparing {
                    prop_assert_eq!(commands[*index].state(), Some(ColorState::Comparing));
                }
            }
        }
    }
}
