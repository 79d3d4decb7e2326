//! Core algorithm trait definitions for Algoscope
//!
//! Algorithms are selected through a closed set of enumerations rather than
//! string keys: an [`AlgorithmKind`] names the family (and with it the
//! dataset shape), a [`Variant`] names the concrete algorithm. Each variant
//! is implemented by a [`StepGenerator`] and reached through an exhaustive
//! match in [`crate::algorithm::generate`].
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::algorithm::state::Step;
use crate::data_structures::graph::NodeId;

/// Algorithm family; determines the dataset shape
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmKind {
    Sorting,
    Searching,
    Graph,
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 3] = [
        AlgorithmKind::Sorting,
        AlgorithmKind::Searching,
        AlgorithmKind::Graph,
    ];

    /// Variants advertised for this family
    pub fn variants(self) -> &'static [Variant] {
        match self {
            AlgorithmKind::Sorting => &[
                Variant::Bubble,
                Variant::Quick,
                Variant::Merge,
                Variant::Insertion,
                Variant::Selection,
            ],
            AlgorithmKind::Searching => &[Variant::Binary, Variant::Linear],
            AlgorithmKind::Graph => &[Variant::Bfs, Variant::Dfs],
        }
    }

    /// Variant selected when switching to this family
    pub fn default_variant(self) -> Variant {
        self.variants()[0]
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AlgorithmKind::Sorting => "sorting",
            AlgorithmKind::Searching => "searching",
            AlgorithmKind::Graph => "graph",
        };
        f.write_str(name)
    }
}

impl FromStr for AlgorithmKind {
    type Err = AlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sorting" => Ok(AlgorithmKind::Sorting),
            "searching" => Ok(AlgorithmKind::Searching),
            "graph" => Ok(AlgorithmKind::Graph),
            other => Err(AlgorithmError::UnknownKind(other.to_owned())),
        }
    }
}

/// Concrete algorithm
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    Bubble,
    Quick,
    Merge,
    Insertion,
    Selection,
    Binary,
    Linear,
    Bfs,
    Dfs,
}

impl Variant {
    pub const ALL: [Variant; 9] = [
        Variant::Bubble,
        Variant::Quick,
        Variant::Merge,
        Variant::Insertion,
        Variant::Selection,
        Variant::Binary,
        Variant::Linear,
        Variant::Bfs,
        Variant::Dfs,
    ];

    /// Family this variant belongs to
    pub fn kind(self) -> AlgorithmKind {
        match self {
            Variant::Bubble
            | Variant::Quick
            | Variant::Merge
            | Variant::Insertion
            | Variant::Selection => AlgorithmKind::Sorting,
            Variant::Binary | Variant::Linear => AlgorithmKind::Searching,
            Variant::Bfs | Variant::Dfs => AlgorithmKind::Graph,
        }
    }

    /// Short identifier used on the command line and in serialized traces
    pub fn key(self) -> &'static str {
        match self {
            Variant::Bubble => "bubble",
            Variant::Quick => "quick",
            Variant::Merge => "merge",
            Variant::Insertion => "insertion",
            Variant::Selection => "selection",
            Variant::Binary => "binary",
            Variant::Linear => "linear",
            Variant::Bfs => "bfs",
            Variant::Dfs => "dfs",
        }
    }

    /// Descriptive catalog entry for the description panel
    pub fn info(self) -> AlgorithmInfo {
        match self {
            Variant::Bubble => AlgorithmInfo {
                title: "Bubble Sort",
                category: AlgorithmKind::Sorting,
                complexity: "O(n²)",
                description: "Repeatedly steps through the list, compares adjacent elements and swaps them if they are in the wrong order.",
                key_steps: &[
                    "Compare adjacent elements",
                    "Swap if they are in wrong order",
                    "Repeat until no swaps needed",
                ],
            },
            Variant::Quick => AlgorithmInfo {
                title: "Quick Sort",
                category: AlgorithmKind::Sorting,
                complexity: "O(n log n)",
                description: "Uses a divide-and-conquer strategy by selecting a pivot element and partitioning the array around it.",
                key_steps: &[
                    "Choose a pivot element",
                    "Partition array around pivot",
                    "Recursively sort subarrays",
                ],
            },
            Variant::Merge => AlgorithmInfo {
                title: "Merge Sort",
                category: AlgorithmKind::Sorting,
                complexity: "O(n log n)",
                description: "A divide-and-conquer algorithm that recursively breaks down a list into smaller sublists until each sublist consists of a single element, then merges them back in order.",
                key_steps: &[
                    "Split the array in half",
                    "Sort each half recursively",
                    "Merge the sorted halves",
                ],
            },
            Variant::Insertion => AlgorithmInfo {
                title: "Insertion Sort",
                category: AlgorithmKind::Sorting,
                complexity: "O(n²)",
                description: "Builds the final sorted array one item at a time by repeatedly inserting a new element into the sorted portion of the array.",
                key_steps: &[
                    "Take the next unsorted element",
                    "Shift it left past larger elements",
                    "Repeat for every element",
                ],
            },
            Variant::Selection => AlgorithmInfo {
                title: "Selection Sort",
                category: AlgorithmKind::Sorting,
                complexity: "O(n²)",
                description: "Divides the input list into a sorted and an unsorted region, repeatedly selecting the smallest element from the unsorted region.",
                key_steps: &[
                    "Find the minimum of the unsorted region",
                    "Swap it to the front of the region",
                    "Grow the sorted region by one",
                ],
            },
            Variant::Binary => AlgorithmInfo {
                title: "Binary Search",
                category: AlgorithmKind::Searching,
                complexity: "O(log n)",
                description: "Efficiently finds items in a sorted array by repeatedly dividing the search interval in half.",
                key_steps: &[
                    "Compare with middle element",
                    "If target is greater, search right half",
                    "If target is smaller, search left half",
                ],
            },
            Variant::Linear => AlgorithmInfo {
                title: "Linear Search",
                category: AlgorithmKind::Searching,
                complexity: "O(n)",
                description: "A simple search algorithm that checks each element in the list until a match is found or the whole list has been searched.",
                key_steps: &[
                    "Start at the first element",
                    "Compare it with the target",
                    "Move to the next element until found",
                ],
            },
            Variant::Bfs => AlgorithmInfo {
                title: "Breadth-First Search",
                category: AlgorithmKind::Graph,
                complexity: "O(V + E)",
                description: "Explores a graph level by level, visiting all neighbors of a vertex before moving to the next level.",
                key_steps: &["Start from root node", "Visit all neighbors", "Move to next level"],
            },
            Variant::Dfs => AlgorithmInfo {
                title: "Depth-First Search",
                category: AlgorithmKind::Graph,
                complexity: "O(V + E)",
                description: "Explores a graph by going as deep as possible along each branch before backtracking to explore other branches.",
                key_steps: &[
                    "Start from root node",
                    "Follow an unvisited neighbor as deep as possible",
                    "Backtrack when no unvisited neighbor remains",
                ],
            },
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Variant {
    type Err = AlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Variant::ALL
            .into_iter()
            .find(|variant| variant.key() == key)
            .ok_or(AlgorithmError::UnknownVariant(key))
    }
}

/// Static catalog entry describing one variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlgorithmInfo {
    pub title: &'static str,
    pub category: AlgorithmKind,
    pub complexity: &'static str,
    pub description: &'static str,
    pub key_steps: &'static [&'static str],
}

/// Per-run inputs that are not part of the dataset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceParams {
    /// Value to look for; defaults to the value at the last index
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<i64>,
    /// Traversal start; defaults to the smallest node identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<NodeId>,
}

impl TraceParams {
    pub fn with_target(target: i64) -> Self {
        Self {
            target: Some(target),
            ..Self::default()
        }
    }

    pub fn with_start(start: NodeId) -> Self {
        Self {
            start: Some(start),
            ..Self::default()
        }
    }
}

/// Errors raised when resolving algorithms from user-facing names
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlgorithmError {
    #[error("Unknown algorithm kind: {0}")]
    UnknownKind(String),

    #[error("Unknown algorithm variant: {0}")]
    UnknownVariant(String),
}

/// A single algorithm that records its execution as a sequence of steps.
///
/// # Invariants
/// - Works on an internal copy of the input; the caller's data is untouched
/// - Deterministic: no clock, no randomness, no state kept between calls
/// - Every index or identifier in an emitted step is valid for `input`
pub trait StepGenerator {
    /// Input shape this algorithm runs on
    type Input: ?Sized;

    /// Variant implemented by this generator
    const VARIANT: Variant;

    /// Runs the algorithm and returns the recorded steps
    fn steps(&self, input: &Self::Input, params: &TraceParams) -> Vec<Step>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_names_round_trip() {
        for variant in Variant::ALL {
            assert_eq!(variant.key().parse::<Variant>(), Ok(variant));
        }
        assert_eq!(" BFS ".parse::<Variant>(), Ok(Variant::Bfs));
        assert!(matches!(
            "heap".parse::<Variant>(),
            Err(AlgorithmError::UnknownVariant(name)) if name == "heap"
        ));
    }

    #[test]
    fn test_every_variant_is_advertised_by_its_kind() {
        for variant in Variant::ALL {
            assert!(variant.kind().variants().contains(&variant));
            assert_eq!(variant.info().category, variant.kind());
        }
        let advertised: usize = AlgorithmKind::ALL.iter().map(|k| k.variants().len()).sum();
        assert_eq!(advertised, Variant::ALL.len());
    }

    #[test]
    fn test_default_variants() {
        assert_eq!(AlgorithmKind::Sorting.default_variant(), Variant::Bubble);
        assert_eq!(AlgorithmKind::Searching.default_variant(), Variant::Binary);
        assert_eq!(AlgorithmKind::Graph.default_variant(), Variant::Bfs);
        assert_eq!("graph".parse::<AlgorithmKind>(), Ok(AlgorithmKind::Graph));
    }
}
