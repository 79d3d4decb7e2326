//! Execution traces and the trace generator
//!
//! [`generate`] is the single entry point that turns an algorithm
//! selection and a dataset into a [`Trace`]. Dispatch is an exhaustive
//! match over the closed algorithm enumerations; combinations that do not
//! make sense (a graph variant under the sorting kind, a numeric dataset
//! for a traversal) produce an empty trace rather than an error.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::algorithm::graph::{BreadthFirstSearch, DepthFirstSearch};
use crate::algorithm::searching::{BinarySearch, LinearSearch};
use crate::algorithm::sorting::{BubbleSort, InsertionSort, MergeSort, QuickSort, SelectionSort};
use crate::algorithm::state::Step;
use crate::algorithm::traits::{AlgorithmKind, StepGenerator, TraceParams, Variant};
use crate::data_structures::dataset::Dataset;

/// Ordered steps recorded by one generator run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    /// Family the trace was generated for
    pub kind: AlgorithmKind,
    /// Concrete algorithm
    pub variant: Variant,
    /// Run parameters
    #[serde(default)]
    pub params: TraceParams,
    steps: Vec<Step>,
}

impl Trace {
    /// Empty trace for the given selection
    pub fn empty(kind: AlgorithmKind, variant: Variant, params: TraceParams) -> Self {
        Self {
            kind,
            variant,
            params,
            steps: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Index of the final step; `None` for an empty trace
    pub fn last_index(&self) -> Option<usize> {
        self.steps.len().checked_sub(1)
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// Checks that every step only references elements of `dataset`
    pub fn references_valid(&self, dataset: &Dataset) -> bool {
        match dataset {
            Dataset::Numeric(values) => self
                .steps
                .iter()
                .all(|step| step.max_index().map_or(true, |i| i < values.len())),
            Dataset::Graph(graph) => self.steps.iter().all(|step| {
                step.referenced_nodes().all(|node| graph.contains_node(node))
                    && step.active_edge.map_or(true, |edge| graph.edge(edge).is_some())
            }),
        }
    }

    /// Serializes the trace as pretty JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Runs `variant` over `dataset` and records its trace.
///
/// Pure: the dataset is only read, and identical arguments always produce
/// identical traces. Mismatched selections and empty datasets yield an
/// empty trace.
pub fn generate(
    kind: AlgorithmKind,
    variant: Variant,
    dataset: &Dataset,
    params: &TraceParams,
) -> Trace {
    if variant.kind() != kind {
        warn!("variant {} does not belong to {} algorithms", variant, kind);
        return Trace::empty(kind, variant, *params);
    }

    let steps = match (variant, dataset) {
        (Variant::Bubble, Dataset::Numeric(values)) => BubbleSort.steps(values, params),
        (Variant::Quick, Dataset::Numeric(values)) => QuickSort.steps(values, params),
        (Variant::Merge, Dataset::Numeric(values)) => MergeSort.steps(values, params),
        (Variant::Insertion, Dataset::Numeric(values)) => InsertionSort.steps(values, params),
        (Variant::Selection, Dataset::Numeric(values)) => SelectionSort.steps(values, params),
        (Variant::Binary, Dataset::Numeric(values)) => BinarySearch.steps(values, params),
        (Variant::Linear, Dataset::Numeric(values)) => LinearSearch.steps(values, params),
        (Variant::Bfs, Dataset::Graph(graph)) => BreadthFirstSearch.steps(graph, params),
        (Variant::Dfs, Dataset::Graph(graph)) => DepthFirstSearch.steps(graph, params),
        (
            Variant::Bubble
            | Variant::Quick
            | Variant::Merge
            | Variant::Insertion
            | Variant::Selection
            | Variant::Binary
            | Variant::Linear,
            Dataset::Graph(_),
        )
        | (Variant::Bfs | Variant::Dfs, Dataset::Numeric(_)) => {
            warn!("{} cannot run on this dataset shape", variant);
            Vec::new()
        }
    };

    debug!(
        "generated {} steps for {} over {} elements",
        steps.len(),
        variant,
        dataset.len()
    );

    Trace {
        kind,
        variant,
        params: *params,
        steps,
    }
}
