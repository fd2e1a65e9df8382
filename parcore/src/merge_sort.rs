// ============================================================================
// This code is part of ParBench.
// ----------------------------------------------------------------------------
// MIT License
//
// Copyright (c) 2023-present Javad Abdi, Mark C. Jeffrey
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.
// ============================================================================

use std::panic::{self, AssertUnwindSafe};

use rayon::prelude::*;

use crate::error::ParError;
use crate::merge::merge;
use crate::partition::partition;

/// canonical top-down merge sort: split at the midpoint, sort each half,
/// combine with `merge`. Serves as the base case of the parallel path and as
/// its correctness oracle, so no insertion-sort cutoff and no in-place
/// variant; recursion depth is bounded by log2 of the input length.
pub fn merge_sort<T>(inp: &[T]) -> Vec<T>
where
    T: Copy + Ord,
{
    if inp.len() <= 1 {
        return inp.to_vec();
    }
    let mid = inp.len() / 2;
    let left = merge_sort(&inp[..mid]);
    let right = merge_sort(&inp[mid..]);
    merge(&left, &right)
}

/// sorts `inp` by splitting it into `workers` privately owned chunks, sorting
/// each chunk on its own task, and reducing the sorted chunks with pairwise
/// merge rounds. The result is element-for-element equal to `merge_sort` for
/// every input, duplicates and degenerate sizes included.
pub fn par_merge_sort<T>(inp: &[T], workers: usize) -> Result<Vec<T>, ParError>
where
    T: Copy + Ord + Send,
{
    if workers < 1 {
        return Err(ParError::InvalidWorkerCount(workers));
    }

    // Shared-nothing dispatch: every task owns its chunk outright. The
    // collect is the barrier; it also keeps results in chunk-index order,
    // which the reduction relies on for deterministic tie-breaking.
    let sorted: Vec<Vec<T>> = partition(inp, workers)
        .into_par_iter()
        .map(|chunk| {
            panic::catch_unwind(AssertUnwindSafe(|| merge_sort(&chunk)))
                .map_err(|_| ParError::WorkerFailed)
        })
        .collect::<Result<_, _>>()?;

    Ok(reduce_sorted_runs(sorted))
}

/// one merge-tree round per iteration: adjacent runs are merged pairwise and
/// an odd run out passes through untouched. Only the current round's list is
/// kept alive.
fn reduce_sorted_runs<T>(mut runs: Vec<Vec<T>>) -> Vec<T>
where
    T: Copy + Ord,
{
    debug_assert!(!runs.is_empty());
    while runs.len() > 1 {
        let mut next = Vec::with_capacity((runs.len() + 1) / 2);
        let mut iter = runs.into_iter();
        while let Some(a) = iter.next() {
            match iter.next() {
                Some(b) => next.push(merge(&a, &b)),
                None => next.push(a),
            }
        }
        runs = next;
    }
    runs.pop().unwrap()
}
