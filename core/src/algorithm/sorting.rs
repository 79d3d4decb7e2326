//! Sorting algorithms with step recording
//!
//! Every generator sorts a private copy of the input and records one step
//! per comparison and one per element move. Values quoted in messages are
//! the values held by the copy at that instant.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::BTreeSet;

use crate::algorithm::state::Step;
use crate::algorithm::traits::{StepGenerator, TraceParams, Variant};

/// Adjacent compare-and-swap passes
#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSort;

/// Lomuto partitioning around the last element of each range
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickSort;

/// Top-down merge sort
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeSort;

/// Swap-based insertion sort
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionSort;

/// Minimum selection over the unsorted suffix
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionSort;

fn compare_message(a: i64, b: i64) -> String {
    format!("Comparing {} and {}", a, b)
}

fn swap_message(a: i64, b: i64) -> String {
    format!("Swapping {} and {}", a, b)
}

/// Final frame shared by the sorts that end with a completion step
fn completion_step(n: usize) -> Step {
    Step::new().sorted(0..n).message("Array sorted")
}

impl StepGenerator for BubbleSort {
    type Input = [i64];
    const VARIANT: Variant = Variant::Bubble;

    /// Emits one step per comparison plus one per swap, nothing else, so
    /// the step count stays within `[n(n-1)/2, n(n-1)]`.
    fn steps(&self, input: &[i64], _params: &TraceParams) -> Vec<Step> {
        let mut arr = input.to_vec();
        let n = arr.len();
        let mut steps = Vec::new();

        for i in 0..n.saturating_sub(1) {
            // n-i-1 indices counted down from n-1, recomputed every pass
            let sorted: BTreeSet<usize> = (0..n - i - 1).map(|idx| n - idx - 1).collect();

            for j in 0..n - i - 1 {
                steps.push(Step {
                    comparing: [j, j + 1].into(),
                    sorted: sorted.clone(),
                    message: Some(compare_message(arr[j], arr[j + 1])),
                    ..Step::default()
                });

                if arr[j] > arr[j + 1] {
                    arr.swap(j, j + 1);
                    steps.push(Step {
                        comparing: [j, j + 1].into(),
                        sorted: sorted.clone(),
                        message: Some(swap_message(arr[j], arr[j + 1])),
                        ..Step::default()
                    });
                }
            }
        }

        steps
    }
}

impl StepGenerator for InsertionSort {
    type Input = [i64];
    const VARIANT: Variant = Variant::Insertion;

    fn steps(&self, input: &[i64], _params: &TraceParams) -> Vec<Step> {
        let mut arr = input.to_vec();
        let n = arr.len();
        let mut steps = Vec::new();
        if n == 0 {
            return steps;
        }

        for i in 1..n {
            let mut j = i;
            while j > 0 {
                steps.push(
                    Step::new()
                        .comparing([j - 1, j])
                        .sorted(0..i)
                        .message(compare_message(arr[j - 1], arr[j])),
                );
                if arr[j - 1] <= arr[j] {
                    break;
                }
                arr.swap(j - 1, j);
                steps.push(
                    Step::new()
                        .comparing([j - 1, j])
                        .sorted(0..i)
                        .message(swap_message(arr[j - 1], arr[j])),
                );
                j -= 1;
            }
        }

        steps.push(completion_step(n));
        steps
    }
}

impl StepGenerator for SelectionSort {
    type Input = [i64];
    const VARIANT: Variant = Variant::Selection;

    fn steps(&self, input: &[i64], _params: &TraceParams) -> Vec<Step> {
        let mut arr = input.to_vec();
        let n = arr.len();
        let mut steps = Vec::new();
        if n == 0 {
            return steps;
        }

        for i in 0..n - 1 {
            let mut min = i;
            for j in i + 1..n {
                steps.push(
                    Step::new()
                        .comparing([min, j])
                        .sorted(0..i)
                        .message(compare_message(arr[min], arr[j])),
                );
                if arr[j] < arr[min] {
                    min = j;
                }
            }
            if min != i {
                arr.swap(i, min);
                steps.push(
                    Step::new()
                        .comparing([i, min])
                        .sorted(0..i)
                        .message(swap_message(arr[i], arr[min])),
                );
            }
        }

        steps.push(completion_step(n));
        steps
    }
}

impl StepGenerator for QuickSort {
    type Input = [i64];
    const VARIANT: Variant = Variant::Quick;

    fn steps(&self, input: &[i64], _params: &TraceParams) -> Vec<Step> {
        let mut arr = input.to_vec();
        let n = arr.len();
        let mut steps = Vec::new();
        if n == 0 {
            return steps;
        }

        let mut sorted = BTreeSet::new();
        // Inclusive ranges; the left half is processed first
        let mut ranges = vec![(0usize, n - 1)];

        while let Some((lo, hi)) = ranges.pop() {
            if lo == hi {
                sorted.insert(lo);
                continue;
            }

            let pivot = arr[hi];
            let mut store = lo;
            for j in lo..hi {
                steps.push(Step {
                    comparing: [j, hi].into(),
                    sorted: sorted.clone(),
                    message: Some(format!("Comparing {} with pivot {}", arr[j], pivot)),
                    ..Step::default()
                });
                if arr[j] < pivot {
                    if store != j {
                        arr.swap(store, j);
                        steps.push(Step {
                            comparing: [store, j].into(),
                            sorted: sorted.clone(),
                            message: Some(swap_message(arr[store], arr[j])),
                            ..Step::default()
                        });
                    }
                    store += 1;
                }
            }

            if store != hi {
                arr.swap(store, hi);
                steps.push(Step {
                    comparing: [store, hi].into(),
                    sorted: sorted.clone(),
                    message: Some(format!("Moving pivot {} to index {}", pivot, store)),
                    ..Step::default()
                });
            }
            sorted.insert(store);

            if store < hi {
                ranges.push((store + 1, hi));
            }
            if store > lo {
                ranges.push((lo, store - 1));
            }
        }

        steps.push(completion_step(n));
        steps
    }
}

impl StepGenerator for MergeSort {
    type Input = [i64];
    const VARIANT: Variant = Variant::Merge;

    fn steps(&self, input: &[i64], _params: &TraceParams) -> Vec<Step> {
        let mut arr = input.to_vec();
        let n = arr.len();
        let mut steps = Vec::new();
        if n == 0 {
            return steps;
        }

        merge_sort(&mut arr, 0, n - 1, &mut steps);
        steps.push(completion_step(n));
        steps
    }
}

fn merge_sort(arr: &mut [i64], lo: usize, hi: usize, steps: &mut Vec<Step>) {
    if lo >= hi {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    merge_sort(arr, lo, mid, steps);
    merge_sort(arr, mid + 1, hi, steps);
    merge(arr, lo, mid, hi, steps);
}

fn merge(arr: &mut [i64], lo: usize, mid: usize, hi: usize, steps: &mut Vec<Step>) {
    let left = arr[lo..=mid].to_vec();
    let right = arr[mid + 1..=hi].to_vec();
    let (mut i, mut j, mut k) = (0, 0, lo);

    while i < left.len() && j < right.len() {
        steps.push(
            Step::new()
                .comparing([lo + i, mid + 1 + j])
                .message(compare_message(left[i], right[j])),
        );
        if left[i] <= right[j] {
            arr[k] = left[i];
            i += 1;
        } else {
            arr[k] = right[j];
            j += 1;
        }
        steps.push(placement_step(arr[k], k));
        k += 1;
    }

    for &value in left[i..].iter().chain(right[j..].iter()) {
        arr[k] = value;
        steps.push(placement_step(value, k));
        k += 1;
    }
}

fn placement_step(value: i64, index: usize) -> Step {
    Step::new()
        .comparing([index])
        .message(format!("Placing {} at index {}", value, index))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(indices: &[usize]) -> BTreeSet<usize> {
        indices.iter().copied().collect()
    }

    fn run<G: StepGenerator<Input = [i64]>>(generator: G, input: &[i64]) -> Vec<Step> {
        generator.steps(input, &TraceParams::default())
    }

    #[test]
    fn test_bubble_first_step_compares_leading_pair() {
        let steps = run(BubbleSort, &[5, 3, 8, 1]);
        let first = &steps[0];
        assert_eq!(first.comparing, set(&[0, 1]));
        assert_eq!(first.sorted, set(&[1, 2, 3]));
        assert_eq!(first.message.as_deref(), Some("Comparing 5 and 3"));
        assert_eq!(steps[1].message.as_deref(), Some("Swapping 3 and 5"));
        assert!((6..=12).contains(&steps.len()));
    }

    #[test]
    fn test_bubble_sorted_set_matches_pass() {
        let steps = run(BubbleSort, &[1, 2, 3, 4]);
        // Already sorted: one step per comparison
        assert_eq!(steps.len(), 6);
        assert_eq!(steps[3].sorted, set(&[2, 3]));
        assert_eq!(steps[5].sorted, set(&[3]));
    }

    #[test]
    fn test_bubble_worst_case_hits_upper_bound() {
        let steps = run(BubbleSort, &[4, 3, 2, 1]);
        assert_eq!(steps.len(), 12);
    }

    #[test]
    fn test_bubble_trivial_inputs() {
        assert!(run(BubbleSort, &[]).is_empty());
        assert!(run(BubbleSort, &[42]).is_empty());
    }

    #[test]
    fn test_insertion_shifts_until_in_place() {
        let steps = run(InsertionSort, &[3, 1, 2]);
        assert_eq!(steps[0].comparing, set(&[0, 1]));
        assert_eq!(steps[1].message.as_deref(), Some("Swapping 1 and 3"));
        let last = steps.last().unwrap();
        assert_eq!(last.sorted, set(&[0, 1, 2]));
        assert_eq!(last.message.as_deref(), Some("Array sorted"));
    }

    #[test]
    fn test_selection_marks_prefix() {
        let steps = run(SelectionSort, &[2, 1]);
        assert_eq!(steps[0].comparing, set(&[0, 1]));
        assert!(steps[0].sorted.is_empty());
        assert_eq!(steps[1].message.as_deref(), Some("Swapping 1 and 2"));
        assert_eq!(steps.len(), 3);
    }

    #[test]
    fn test_quick_sort_records_pivots_as_sorted() {
        let steps = run(QuickSort, &[3, 6, 1, 5, 2]);
        let last = steps.last().unwrap();
        assert_eq!(last.sorted.len(), 5);
        // The first partition compares against the last element
        assert_eq!(steps[0].comparing, set(&[0, 4]));
        // Sorted set only grows between steps
        for pair in steps.windows(2) {
            assert!(pair[0].sorted.is_subset(&pair[1].sorted));
        }
    }

    #[test]
    fn test_merge_sort_places_every_element() {
        let input = [4, 1, 3, 2];
        let steps = run(MergeSort, &input);
        let placements = steps
            .iter()
            .filter(|s| s.message.as_deref().is_some_and(|m| m.starts_with("Placing")))
            .count();
        // Two levels of merging, each writing all four slots
        assert_eq!(placements, 8);
    }

    #[test]
    fn test_sorts_leave_input_untouched() {
        let input = vec![9, 7, 5, 3];
        let copy = input.clone();
        let _ = run(QuickSort, &input);
        let _ = run(MergeSort, &input);
        assert_eq!(input, copy);
    }

    #[test]
    fn test_indices_stay_in_bounds() {
        let input = [5, -2, 9, 9, 0, 13, -7];
        for steps in [
            run(BubbleSort, &input),
            run(QuickSort, &input),
            run(MergeSort, &input),
            run(InsertionSort, &input),
            run(SelectionSort, &input),
        ] {
            for step in &steps {
                assert!(step.max_index().map_or(true, |i| i < input.len()));
            }
        }
    }
}
