//! Edge-list graph used by the traversal algorithms
//!
//! The graph keeps its edges in insertion order so that every traversal,
//! and therefore every trace derived from it, is reproducible. Node
//! identifiers live in an ordered set; the canonical node order used by
//! the layout and by traversal start selection is ascending.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Node identifier ensuring type safety and preventing mixing with other numeric types
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct NodeId(pub usize);

impl NodeId {
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position of an edge in the graph's ordered edge list
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct EdgeId(pub usize);

impl EdgeId {
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0
    }
}

/// A single edge pair as entered by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
}

impl Edge {
    #[inline]
    pub fn new(source: NodeId, target: NodeId) -> Self {
        Self { source, target }
    }

    /// Returns the endpoint opposite to `node`, if `node` touches this edge
    pub fn opposite(&self, node: NodeId) -> Option<NodeId> {
        if self.source == node {
            Some(self.target)
        } else if self.target == node {
            Some(self.source)
        } else {
            None
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.source, self.target)
    }
}

/// Graph made of a canonical node set and an ordered edge list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    nodes: BTreeSet<NodeId>,
    edges: Vec<Edge>,
    /// Directed graphs only follow edges from source to target
    #[serde(default)]
    directed: bool,
}

impl Graph {
    /// Creates an empty undirected graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with explicit directedness
    pub fn with_direction(directed: bool) -> Self {
        Self {
            directed,
            ..Self::default()
        }
    }

    /// Builds a graph from edge pairs; the node set is the union of endpoints
    pub fn from_edges<I>(edges: I, directed: bool) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Self::with_direction(directed);
        for (source, target) in edges {
            graph.add_edge(NodeId(source), NodeId(target));
        }
        graph
    }

    /// Adds an isolated node (no-op if already present)
    pub fn add_node(&mut self, node: NodeId) {
        self.nodes.insert(node);
    }

    /// Appends an edge and registers both endpoints
    pub fn add_edge(&mut self, source: NodeId, target: NodeId) -> EdgeId {
        self.nodes.insert(source);
        self.nodes.insert(target);
        self.edges.push(Edge::new(source, target));
        EdgeId(self.edges.len() - 1)
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Nodes in ascending identifier order
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    pub fn contains_node(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }

    /// Edges with their identifiers, in insertion order
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> + '_ {
        self.edges.iter().enumerate().map(|(i, e)| (EdgeId(i), e))
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.0)
    }

    /// Position of `node` in the canonical (ascending) node order
    pub fn node_index(&self, node: NodeId) -> Option<usize> {
        if !self.nodes.contains(&node) {
            return None;
        }
        Some(self.nodes.range(..node).count())
    }

    pub fn first_node(&self) -> Option<NodeId> {
        self.nodes.iter().next().copied()
    }

    /// Edges leaving `node`, paired with the neighbour they lead to.
    ///
    /// Undirected graphs report every incident edge; a self-loop is
    /// reported once. Order follows the edge list.
    pub fn neighbors(&self, node: NodeId) -> Vec<(EdgeId, NodeId)> {
        self.edges()
            .filter_map(|(id, edge)| {
                if edge.source == node {
                    Some((id, edge.target))
                } else if !self.directed && edge.target == node {
                    Some((id, edge.source))
                } else {
                    None
                }
            })
            .collect()
    }
}
