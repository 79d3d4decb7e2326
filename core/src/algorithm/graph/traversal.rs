//! Breadth-first and depth-first traversal
//!
//! Both traversals mark a node visited when it is discovered and follow
//! edges in edge-list order. Once the component of the start node is
//! exhausted they continue from the smallest unvisited node, so the final
//! step of a trace always has every node visited.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::{BTreeSet, VecDeque};

use log::debug;

use crate::algorithm::state::Step;
use crate::algorithm::traits::{StepGenerator, TraceParams, Variant};
use crate::data_structures::graph::{EdgeId, Graph, NodeId};

/// Level-order traversal driven by a FIFO queue
#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthFirstSearch;

/// Preorder traversal driven by an explicit stack
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirstSearch;

/// Requested start node if it exists in the graph, else the smallest node
fn resolve_start(graph: &Graph, params: &TraceParams) -> Option<NodeId> {
    match params.start {
        Some(start) if graph.contains_node(start) => Some(start),
        Some(start) => {
            debug!("start node {} not in graph, using smallest node", start);
            graph.first_node()
        }
        None => graph.first_node(),
    }
}

/// Start node followed by every node in ascending order
fn roots(graph: &Graph, start: NodeId) -> impl Iterator<Item = NodeId> + '_ {
    std::iter::once(start).chain(graph.nodes())
}

fn visit_step(node: NodeId, visited: &BTreeSet<NodeId>) -> Step {
    Step {
        current_node: Some(node),
        visited_nodes: visited.clone(),
        message: Some(format!("Visiting node {}", node)),
        ..Step::default()
    }
}

fn edge_step(
    node: NodeId,
    edge: EdgeId,
    neighbor: NodeId,
    visited: &BTreeSet<NodeId>,
) -> Step {
    let message = if visited.contains(&neighbor) {
        format!("Edge {}-{} leads to visited node {}", node, neighbor, neighbor)
    } else {
        format!("Traversing edge {}-{}", node, neighbor)
    };
    Step {
        current_node: Some(node),
        visited_nodes: visited.clone(),
        active_edge: Some(edge),
        message: Some(message),
        ..Step::default()
    }
}

impl StepGenerator for BreadthFirstSearch {
    type Input = Graph;
    const VARIANT: Variant = Variant::Bfs;

    /// One step per dequeue and one per edge relaxation
    fn steps(&self, graph: &Graph, params: &TraceParams) -> Vec<Step> {
        let mut steps = Vec::new();
        let Some(start) = resolve_start(graph, params) else {
            return steps;
        };

        let mut visited = BTreeSet::new();
        let mut queue = VecDeque::new();

        for root in roots(graph, start) {
            if !visited.insert(root) {
                continue;
            }
            queue.push_back(root);

            while let Some(node) = queue.pop_front() {
                steps.push(visit_step(node, &visited));

                for (edge, neighbor) in graph.neighbors(node) {
                    steps.push(edge_step(node, edge, neighbor, &visited));
                    if visited.insert(neighbor) {
                        queue.push_back(neighbor);
                    }
                }
            }
        }

        steps
    }
}

struct Frame {
    node: NodeId,
    neighbors: Vec<(EdgeId, NodeId)>,
    cursor: usize,
}

impl Frame {
    fn new(graph: &Graph, node: NodeId) -> Self {
        Self {
            node,
            neighbors: graph.neighbors(node),
            cursor: 0,
        }
    }
}

impl StepGenerator for DepthFirstSearch {
    type Input = Graph;
    const VARIANT: Variant = Variant::Dfs;

    /// One step per visit and one per edge examined
    fn steps(&self, graph: &Graph, params: &TraceParams) -> Vec<Step> {
        let mut steps = Vec::new();
        let Some(start) = resolve_start(graph, params) else {
            return steps;
        };

        let mut visited = BTreeSet::new();
        let mut stack: Vec<Frame> = Vec::new();

        for root in roots(graph, start) {
            if !visited.insert(root) {
                continue;
            }
            steps.push(visit_step(root, &visited));
            stack.push(Frame::new(graph, root));

            while let Some(frame) = stack.last_mut() {
                let Some(&(edge, neighbor)) = frame.neighbors.get(frame.cursor) else {
                    stack.pop();
                    continue;
                };
                frame.cursor += 1;
                let node = frame.node;

                steps.push(edge_step(node, edge, neighbor, &visited));
                if visited.insert(neighbor) {
                    steps.push(visit_step(neighbor, &visited));
                    stack.push(Frame::new(graph, neighbor));
                }
            }
        }

        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_graph() -> Graph {
        Graph::from_edges([(1, 2), (2, 3)], false)
    }

    fn first_step_containing(steps: &[Step], node: usize) -> Option<usize> {
        steps
            .iter()
            .position(|s| s.visited_nodes.contains(&NodeId(node)))
    }

    #[test]
    fn test_bfs_visits_start_first() {
        let steps = BreadthFirstSearch.steps(&path_graph(), &TraceParams::with_start(NodeId(1)));

        assert_eq!(steps[0].current_node, Some(NodeId(1)));
        assert_eq!(steps[0].visited_nodes, BTreeSet::from([NodeId(1)]));

        let one = first_step_containing(&steps, 1).unwrap();
        let two = first_step_containing(&steps, 2).unwrap();
        let three = first_step_containing(&steps, 3).unwrap();
        assert!(one < two && one < three);
    }

    #[test]
    fn test_bfs_emits_dequeue_and_relaxation_steps() {
        let steps = BreadthFirstSearch.steps(&path_graph(), &TraceParams::default());
        // 3 dequeues, and each undirected edge relaxed from both ends
        let dequeues = steps.iter().filter(|s| s.active_edge.is_none()).count();
        let relaxations = steps.iter().filter(|s| s.active_edge.is_some()).count();
        assert_eq!(dequeues, 3);
        assert_eq!(relaxations, 4);
        assert_eq!(steps[1].active_edge, Some(EdgeId(0)));
    }

    #[test]
    fn test_bfs_is_level_ordered() {
        let graph = Graph::from_edges([(1, 2), (1, 3), (2, 4), (3, 5)], false);
        let steps = BreadthFirstSearch.steps(&graph, &TraceParams::default());
        let order: Vec<NodeId> = steps
            .iter()
            .filter(|s| s.active_edge.is_none())
            .filter_map(|s| s.current_node)
            .collect();
        assert_eq!(order, vec![NodeId(1), NodeId(2), NodeId(3), NodeId(4), NodeId(5)]);
    }

    #[test]
    fn test_dfs_goes_deep_first() {
        let graph = Graph::from_edges([(1, 2), (1, 3), (2, 4), (3, 5)], false);
        let steps = DepthFirstSearch.steps(&graph, &TraceParams::default());
        let order: Vec<NodeId> = steps
            .iter()
            .filter(|s| s.active_edge.is_none())
            .filter_map(|s| s.current_node)
            .collect();
        assert_eq!(order, vec![NodeId(1), NodeId(2), NodeId(4), NodeId(3), NodeId(5)]);
    }

    #[test]
    fn test_traversal_covers_disconnected_components() {
        let graph = Graph::from_edges([(1, 2), (7, 8)], false);
        for steps in [
            BreadthFirstSearch.steps(&graph, &TraceParams::with_start(NodeId(7))),
            DepthFirstSearch.steps(&graph, &TraceParams::with_start(NodeId(7))),
        ] {
            assert_eq!(steps[0].current_node, Some(NodeId(7)));
            assert_eq!(steps.last().unwrap().visited_nodes.len(), 4);
        }
    }

    #[test]
    fn test_unknown_start_falls_back_to_smallest_node() {
        let steps = DepthFirstSearch.steps(&path_graph(), &TraceParams::with_start(NodeId(99)));
        assert_eq!(steps[0].current_node, Some(NodeId(1)));
    }

    #[test]
    fn test_empty_graph_emits_nothing() {
        assert!(BreadthFirstSearch.steps(&Graph::new(), &TraceParams::default()).is_empty());
        assert!(DepthFirstSearch.steps(&Graph::new(), &TraceParams::default()).is_empty());
    }
}
