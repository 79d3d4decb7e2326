//! Immutable step snapshots
//!
//! A [`Step`] is a tagged overlay on the dataset at one instant of
//! execution. Every field is optional: an empty set or `None` means the
//! flag is absent. Sets are ordered so that traces compare structurally
//! and serialize identically across runs.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::data_structures::graph::{EdgeId, NodeId};

/// One annotated snapshot of algorithm state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Step {
    /// Sequence indices under comparison
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub comparing: BTreeSet<usize>,

    /// Sequence indices marked as sorted
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub sorted: BTreeSet<usize>,

    /// Sequence index under probe
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<usize>,

    /// Sequence index where the target was located
    #[serde(skip_serializing_if = "Option::is_none")]
    pub found: Option<usize>,

    /// Sequence indices removed from the active search range
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub eliminated: BTreeSet<usize>,

    /// Graph node being processed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_node: Option<NodeId>,

    /// Graph nodes visited so far
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub visited_nodes: BTreeSet<NodeId>,

    /// Graph edge currently traversed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_edge: Option<EdgeId>,

    /// Narration of this instant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Step {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn comparing<I: IntoIterator<Item = usize>>(mut self, indices: I) -> Self {
        self.comparing = indices.into_iter().collect();
        self
    }

    pub fn sorted<I: IntoIterator<Item = usize>>(mut self, indices: I) -> Self {
        self.sorted = indices.into_iter().collect();
        self
    }

    pub fn current(mut self, index: usize) -> Self {
        self.current = Some(index);
        self
    }

    pub fn found(mut self, index: usize) -> Self {
        self.found = Some(index);
        self
    }

    pub fn eliminated<I: IntoIterator<Item = usize>>(mut self, indices: I) -> Self {
        self.eliminated = indices.into_iter().collect();
        self
    }

    pub fn current_node(mut self, node: NodeId) -> Self {
        self.current_node = Some(node);
        self
    }

    pub fn visited<I: IntoIterator<Item = NodeId>>(mut self, nodes: I) -> Self {
        self.visited_nodes = nodes.into_iter().collect();
        self
    }

    pub fn active_edge(mut self, edge: EdgeId) -> Self {
        self.active_edge = Some(edge);
        self
    }

    pub fn message(mut self, text: impl Into<String>) -> Self {
        self.message = Some(text.into());
        self
    }

    /// Largest sequence index referenced by this step, if any
    pub fn max_index(&self) -> Option<usize> {
        [
            self.comparing.last().copied(),
            self.sorted.last().copied(),
            self.eliminated.last().copied(),
            self.current,
            self.found,
        ]
        .into_iter()
        .flatten()
        .max()
    }

    /// Nodes referenced by this step
    pub fn referenced_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.visited_nodes.iter().copied().chain(self.current_node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_flags() {
        let step = Step::new()
            .comparing([1, 0])
            .sorted([3, 2])
            .message("Comparing 5 and 3");

        assert_eq!(step.comparing.iter().copied().collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(step.sorted.len(), 2);
        assert_eq!(step.message.as_deref(), Some("Comparing 5 and 3"));
        assert_eq!(step.max_index(), Some(3));
    }

    #[test]
    fn test_empty_step_references_nothing() {
        let step = Step::new();
        assert_eq!(step.max_index(), None);
        assert_eq!(step.referenced_nodes().count(), 0);
    }

    #[test]
    fn test_serialization_omits_absent_flags() {
        let step = Step::new().current(2).eliminated([0, 1]);
        let json = serde_json::to_string(&step).unwrap();
        assert_eq!(json, r#"{"current":2,"eliminated":[0,1]}"#);

        let back: Step = serde_json::from_str(&json).unwrap();
        assert_eq!(back, step);
    }
}
