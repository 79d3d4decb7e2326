//! Searching algorithms with step recording
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use crate::algorithm::state::Step;
use crate::algorithm::traits::{StepGenerator, TraceParams, Variant};

/// Halving search over a sorted sequence
#[derive(Debug, Clone, Copy, Default)]
pub struct BinarySearch;

/// Left-to-right scan
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearSearch;

/// Target requested by the caller, or the value at the last index.
/// `None` for an empty sequence: there is nothing to search.
fn resolve_target(input: &[i64], params: &TraceParams) -> Option<i64> {
    if input.is_empty() {
        return None;
    }
    params.target.or_else(|| input.last().copied())
}

impl StepGenerator for BinarySearch {
    type Input = [i64];
    const VARIANT: Variant = Variant::Binary;

    /// Runs on the sequence as given. Unsorted input still terminates,
    /// it just may report the target as missing.
    fn steps(&self, input: &[i64], params: &TraceParams) -> Vec<Step> {
        let mut steps = Vec::new();
        let Some(target) = resolve_target(input, params) else {
            return steps;
        };
        let n = input.len();

        // Half-open bound [left, right) keeps the arithmetic unsigned
        let (mut left, mut right) = (0usize, n);
        while left < right {
            let mid = left + (right - 1 - left) / 2;
            let eliminated = (0..left).chain(right..n);
            let value = input[mid];

            steps.push(
                Step::new()
                    .current(mid)
                    .eliminated(eliminated.clone())
                    .message(format!("Checking middle element {} at index {}", value, mid)),
            );

            if value == target {
                steps.push(
                    Step::new()
                        .found(mid)
                        .eliminated(eliminated)
                        .message(format!("Found {} at index {}", target, mid)),
                );
                return steps;
            }

            if value < target {
                left = mid + 1;
            } else {
                right = mid;
            }
        }

        steps.push(
            Step::new()
                .eliminated(0..n)
                .message(format!("{} is not in the array", target)),
        );
        steps
    }
}

impl StepGenerator for LinearSearch {
    type Input = [i64];
    const VARIANT: Variant = Variant::Linear;

    fn steps(&self, input: &[i64], params: &TraceParams) -> Vec<Step> {
        let mut steps = Vec::new();
        let Some(target) = resolve_target(input, params) else {
            return steps;
        };

        for (index, &value) in input.iter().enumerate() {
            steps.push(
                Step::new()
                    .current(index)
                    .eliminated(0..index)
                    .message(format!("Checking {} at index {}", value, index)),
            );
            if value == target {
                steps.push(
                    Step::new()
                        .found(index)
                        .eliminated(0..index)
                        .message(format!("Found {} at index {}", target, index)),
                );
                return steps;
            }
        }

        steps.push(
            Step::new()
                .eliminated(0..input.len())
                .message(format!("{} is not in the array", target)),
        );
        steps
    }
}
