//! Algorithm input datasets
//!
//! A dataset is either a numeric sequence (sorting and searching) or a
//! graph (traversals). Datasets are replaced wholesale; parsing from user
//! text never fails and silently drops malformed tokens.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::algorithm::traits::AlgorithmKind;
use crate::data_structures::graph::{Graph, NodeId};

/// Raw algorithm input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Dataset {
    /// Ordered integers, duplicates allowed
    Numeric(Vec<i64>),
    /// Node set plus ordered edge list
    Graph(Graph),
}

impl Default for Dataset {
    fn default() -> Self {
        Dataset::Numeric(Vec::new())
    }
}

impl Dataset {
    /// Empty dataset of the shape expected by `kind`
    pub fn empty_for(kind: AlgorithmKind) -> Self {
        match kind {
            AlgorithmKind::Sorting | AlgorithmKind::Searching => Dataset::Numeric(Vec::new()),
            AlgorithmKind::Graph => Dataset::Graph(Graph::new()),
        }
    }

    /// Parses user text according to the shape `kind` expects
    pub fn parse(kind: AlgorithmKind, input: &str) -> Self {
        match kind {
            AlgorithmKind::Sorting | AlgorithmKind::Searching => Self::parse_numeric(input),
            AlgorithmKind::Graph => Self::parse_edges(input, false),
        }
    }

    /// Parses a comma separated list of integers.
    ///
    /// Tokens are trimmed; anything that is not a whole integer is dropped.
    pub fn parse_numeric(input: &str) -> Self {
        let values: Vec<i64> = input
            .split(',')
            .filter_map(|token| token.trim().parse::<i64>().ok())
            .collect();
        debug!("parsed numeric dataset with {} values", values.len());
        Dataset::Numeric(values)
    }

    /// Parses a comma separated list of `a-b` edge pairs.
    ///
    /// A pair is kept only when it has exactly two integer endpoints.
    pub fn parse_edges(input: &str, directed: bool) -> Self {
        let mut graph = Graph::with_direction(directed);
        for pair in input.split(',') {
            if let Some((source, target)) = parse_edge(pair) {
                graph.add_edge(NodeId(source), NodeId(target));
            }
        }
        debug!(
            "parsed graph dataset with {} nodes and {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        Dataset::Graph(graph)
    }

    /// Uniform random sequence of `len` values in `0..max`
    pub fn random_sequence<R: Rng + ?Sized>(rng: &mut R, len: usize, max: i64) -> Self {
        let upper = max.max(1);
        Dataset::Numeric((0..len).map(|_| rng.gen_range(0..upper)).collect())
    }

    /// Random connected graph on nodes `1..=nodes`.
    ///
    /// Every node after the first is attached to a random earlier node,
    /// then `extra_edges` additional random edges are appended.
    pub fn random_graph<R: Rng + ?Sized>(rng: &mut R, nodes: usize, extra_edges: usize) -> Self {
        let mut graph = Graph::new();
        if nodes == 0 {
            return Dataset::Graph(graph);
        }
        graph.add_node(NodeId(1));
        for node in 2..=nodes {
            let parent = rng.gen_range(1..node);
            graph.add_edge(NodeId(parent), NodeId(node));
        }
        if nodes > 1 {
            for _ in 0..extra_edges {
                let a = rng.gen_range(1..=nodes);
                let b = rng.gen_range(1..=nodes);
                if a != b {
                    graph.add_edge(NodeId(a.min(b)), NodeId(a.max(b)));
                }
            }
        }
        Dataset::Graph(graph)
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Dataset::Numeric(values) => values.is_empty(),
            Dataset::Graph(graph) => graph.is_empty(),
        }
    }

    /// Number of elements (values or nodes)
    pub fn len(&self) -> usize {
        match self {
            Dataset::Numeric(values) => values.len(),
            Dataset::Graph(graph) => graph.node_count(),
        }
    }

    pub fn as_numeric(&self) -> Option<&[i64]> {
        match self {
            Dataset::Numeric(values) => Some(values),
            Dataset::Graph(_) => None,
        }
    }

    pub fn as_graph(&self) -> Option<&Graph> {
        match self {
            Dataset::Graph(graph) => Some(graph),
            Dataset::Numeric(_) => None,
        }
    }

    /// Whether this dataset has the shape `kind` operates on
    pub fn fits(&self, kind: AlgorithmKind) -> bool {
        matches!(
            (kind, self),
            (AlgorithmKind::Sorting | AlgorithmKind::Searching, Dataset::Numeric(_))
                | (AlgorithmKind::Graph, Dataset::Graph(_))
        )
    }
}

fn parse_edge(pair: &str) -> Option<(usize, usize)> {
    let mut parts = pair.split('-');
    let source = parts.next()?.trim().parse::<usize>().ok()?;
    let target = parts.next()?.trim().parse::<usize>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((source, target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_numeric_parsing_drops_malformed_tokens() {
        assert_eq!(Dataset::parse_numeric("a,,3,xx"), Dataset::Numeric(vec![3]));
        assert_eq!(
            Dataset::parse_numeric(" 64, 34 ,-25,12"),
            Dataset::Numeric(vec![64, 34, -25, 12])
        );
    }

    #[test]
    fn test_empty_input_yields_empty_dataset() {
        assert!(Dataset::parse_numeric("").is_empty());
        assert!(Dataset::parse_numeric("x, y").is_empty());
        assert!(Dataset::parse_edges("", false).is_empty());
        assert!(Dataset::parse_edges("1-,a-b,3", false).is_empty());
    }

    #[test]
    fn test_edge_parsing_builds_canonical_node_set() {
        let dataset = Dataset::parse(AlgorithmKind::Graph, "1-2,2-3");
        let graph = dataset.as_graph().expect("graph dataset");
        let nodes: Vec<_> = graph.nodes().collect();
        assert_eq!(nodes, vec![NodeId(1), NodeId(2), NodeId(3)]);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_edge_parsing_drops_malformed_pairs() {
        let dataset = Dataset::parse_edges("1-2, 3 - 4,5-6-7,x-1,8", false);
        let graph = dataset.as_graph().expect("graph dataset");
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.node_count(), 4);
    }

    #[test]
    fn test_shape_fit() {
        let numbers = Dataset::Numeric(vec![1, 2]);
        assert!(numbers.fits(AlgorithmKind::Sorting));
        assert!(numbers.fits(AlgorithmKind::Searching));
        assert!(!numbers.fits(AlgorithmKind::Graph));
        assert!(Dataset::empty_for(AlgorithmKind::Graph).fits(AlgorithmKind::Graph));
    }

    #[test]
    fn test_random_sequence_respects_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let dataset = Dataset::random_sequence(&mut rng, 15, 100);
        let values = dataset.as_numeric().expect("numeric dataset");
        assert_eq!(values.len(), 15);
        assert!(values.iter().all(|v| (0..100).contains(v)));
    }

    #[test]
    fn test_random_graph_is_connected_tree_plus_extras() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let dataset = Dataset::random_graph(&mut rng, 6, 2);
        let graph = dataset.as_graph().expect("graph dataset");
        assert_eq!(graph.node_count(), 6);
        assert!(graph.edge_count() >= 5);
        for node in 2..=6 {
            assert!(!graph.neighbors(NodeId(node)).is_empty());
        }
    }

    #[test]
    fn test_random_generation_is_seed_stable() {
        let a = Dataset::random_sequence(&mut ChaCha8Rng::seed_from_u64(3), 10, 50);
        let b = Dataset::random_sequence(&mut ChaCha8Rng::seed_from_u64(3), 10, 50);
        assert_eq!(a, b);
    }
}
